use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use serde_path_to_error::Segment;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::models::DocumentError;

/// One field-level problem with a request payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// # API Errors
///
/// - `Validation` → **422**: `{"detail": [{"loc": [...], "msg": "...", "type": "..."}]}`
/// - `Internal` → **500**: `{"detail": "Internal Server Error"}`, cause logged only
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request validation failed")]
    Validation(Vec<FieldError>),
    #[error(transparent)]
    Internal(#[from] DocumentError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Validation(detail) => {
                HttpResponse::build(self.status_code()).json(json!({ "detail": detail }))
            }
            ApiError::Internal(cause) => {
                error!(error = %cause, "unexpected internal fault");
                HttpResponse::build(self.status_code())
                    .json(json!({ "detail": "Internal Server Error" }))
            }
        }
    }
}

/// Maps a request body deserialization failure to a field-level error.
///
/// `loc` is `["body", <path>...]`; for a missing field the field name is
/// appended to the path of the object that lacks it.
pub fn field_error(err: &serde_path_to_error::Error<serde_json::Error>) -> FieldError {
    let source = err.inner();
    let msg = source.to_string();
    let mut loc = vec!["body".to_string()];

    for segment in err.path().iter() {
        match segment {
            Segment::Map { key } => loc.push(key.clone()),
            Segment::Seq { index } => loc.push(index.to_string()),
            Segment::Enum { variant } => loc.push(variant.clone()),
            Segment::Unknown => {}
        }
    }

    let kind = if source.is_data() {
        if let Some(field) = backticked(&msg, "missing field `") {
            loc.push(field);
            "missing"
        } else {
            "type_error"
        }
    } else {
        "json_invalid"
    };

    FieldError {
        loc,
        msg,
        kind: kind.to_string(),
    }
}

/// Body that is not a single JSON document.
pub fn invalid_json(source: &serde_json::Error) -> FieldError {
    FieldError {
        loc: vec!["body".to_string()],
        msg: source.to_string(),
        kind: "json_invalid".to_string(),
    }
}

fn backticked(msg: &str, prefix: &str) -> Option<String> {
    let rest = &msg[msg.find(prefix)? + prefix.len()..];
    rest.find('`').map(|end| rest[..end].to_string())
}
