use chrono::{DateTime, NaiveDateTime, Utc};
use mongodb::bson::{Bson, Document, doc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

/// Failure to turn a stored document back into a [`StatusCheck`].
#[derive(Debug, Error, PartialEq)]
pub enum DocumentError {
    #[error("stored status check is missing field `{0}`")]
    MissingField(&'static str),
    #[error("stored status check field `{0}` has an unexpected type")]
    WrongType(&'static str),
    #[error("stored status check has an unparseable timestamp {0:?}")]
    InvalidTimestamp(String),
}

/// Request payload for `POST /api/status`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct StatusCheckCreate {
    pub client_name: String,
}

/// A client-submitted name paired with a server-generated id and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

impl StatusCheck {
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            client_name: client_name.into(),
            timestamp: Utc::now(),
        }
    }

    /// Stored shape: the timestamp is kept as an ISO-8601 string.
    pub fn to_document(&self) -> Document {
        doc! {
            "id": &self.id,
            "client_name": &self.client_name,
            "timestamp": self.timestamp.to_rfc3339(),
        }
    }

    /// Reads a stored document. Any `_id` field is ignored.
    pub fn from_document(document: &Document) -> Result<Self, DocumentError> {
        Ok(Self {
            id: string_field(document, "id")?,
            client_name: string_field(document, "client_name")?,
            timestamp: timestamp_field(document)?,
        })
    }
}

fn string_field(document: &Document, key: &'static str) -> Result<String, DocumentError> {
    match document.get(key) {
        Some(Bson::String(value)) => Ok(value.clone()),
        Some(_) => Err(DocumentError::WrongType(key)),
        None => Err(DocumentError::MissingField(key)),
    }
}

fn timestamp_field(document: &Document) -> Result<DateTime<Utc>, DocumentError> {
    match document.get("timestamp") {
        Some(Bson::String(raw)) => parse_timestamp(raw),
        Some(Bson::DateTime(value)) => DateTime::<Utc>::from_timestamp_millis(value.timestamp_millis())
            .ok_or_else(|| DocumentError::InvalidTimestamp(value.to_string())),
        Some(_) => Err(DocumentError::WrongType("timestamp")),
        None => Err(DocumentError::MissingField("timestamp")),
    }
}

/// Parses an ISO-8601 timestamp. Values without an offset are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, DocumentError> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    if let Ok(parsed) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Ok(parsed.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| DocumentError::InvalidTimestamp(raw.to_string()))
}
