/// # Health Status Response
///
/// Service liveness plus the startup state of the document store.
///
/// ## Example JSON
/// ```json
/// { "status": "healthy", "service": "Beat API", "mongodb": "disconnected" }
/// ```
pub mod health;

/// Static greeting payload.
pub mod message;

/// # Status Check Records
///
/// The request payload, the record returned to callers, and the conversion
/// to and from the stored document shape.
pub mod status;

pub use health::HealthResponse;
pub use message::RootMessage;
pub use status::{DocumentError, StatusCheck, StatusCheckCreate};
