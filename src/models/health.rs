use crate::store::StoreStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const SERVICE_NAME: &str = "Beat API";

/// # Health Status Response
///
/// Liveness payload. `mongodb` reports whether the store connection was
/// established at startup; it is not a live ping.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "healthy",
///   "service": "Beat API",
///   "mongodb": "connected"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub mongodb: StoreStatus,
}

impl HealthResponse {
    pub fn healthy(mongodb: StoreStatus) -> Self {
        Self {
            status: "healthy".to_string(),
            service: SERVICE_NAME.to_string(),
            mongodb,
        }
    }
}
