use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Greeting returned by `GET /api/`.
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct RootMessage {
    pub message: String,
}

impl RootMessage {
    pub fn hello() -> Self {
        Self {
            message: "Hello World".to_string(),
        }
    }
}
