use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, web};
use futures::future::LocalBoxFuture;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, field_error, invalid_json};

/// # JSON Body Extractor
///
/// Deserializes the request body as JSON whatever its `Content-Type`, and
/// reports failures as 422 validation errors located at the offending field.
/// Body size limits are those of `web::PayloadConfig`.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T> JsonBody<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for JsonBody<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let body = web::Bytes::from_request(req, payload);

        Box::pin(async move {
            let body = body.await?;
            let value = parse_body(&body)?;
            Ok(JsonBody(value))
        })
    }
}

/// Parses a complete JSON document; trailing content is rejected.
pub fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    let mut deserializer = serde_json::Deserializer::from_slice(body);
    let value = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|err| ApiError::Validation(vec![field_error(&err)]))?;
    deserializer
        .end()
        .map_err(|err| ApiError::Validation(vec![invalid_json(&err)]))?;
    Ok(value)
}
