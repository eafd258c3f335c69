//! Custom Axum extractors
//!
//! Both reject with `ApiError` so clients always get a JSON error body.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use super::error::ApiError;

/// JSON request body.
///
/// The content-type header is not checked; the body has to parse as a
/// JSON object.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(format!("Invalid JSON: {}", e.body_text())))?;

        decode_object(&bytes).map(Self)
    }
}

/// Decode a body that must be a JSON object.
///
/// Derived struct impls would also accept a positional array, so the
/// shape is checked on the untyped value first.
pub fn decode_object<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    let invalid = |e: serde_json::Error| ApiError::bad_request(format!("Invalid JSON: {}", e));

    let value: Value = serde_json::from_slice(bytes).map_err(invalid)?;
    if !value.is_object() {
        return Err(ApiError::bad_request(format!(
            "Invalid JSON: expected an object, found {}",
            json_kind(&value)
        )));
    }
    serde_json::from_value(value).map_err(invalid)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Query string parameters.
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::bad_request(e.body_text()))?;

        Ok(Self(value))
    }
}

/// `?id=` for single-entity routes
#[derive(Debug, Default, Deserialize)]
pub struct IdParams {
    pub id: Option<String>,
}

impl IdParams {
    pub fn require(self) -> Result<String, ApiError> {
        required(self.id, "ID")
    }
}

/// `?board_id=` for listing a board's lists
#[derive(Debug, Default, Deserialize)]
pub struct BoardIdParams {
    pub board_id: Option<String>,
}

/// `?list_id=` for listing a list's cards
#[derive(Debug, Default, Deserialize)]
pub struct ListIdParams {
    pub list_id: Option<String>,
}

/// An absent parameter and an empty one are treated the same.
pub fn required(value: Option<String>, name: &str) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::bad_request(format!("{} is required", name))),
    }
}

/// Parse an id taken from the query string.
///
/// A value that is not a UUID can never name a stored entity, so callers
/// treat `None` as "not found" rather than as a malformed request.
pub fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_param_is_missing() {
        let err = required(Some(String::new()), "board_id").unwrap_err();
        assert_eq!(err.to_string(), "board_id is required");
        assert!(required(None, "ID").is_err());
        assert_eq!(required(Some("x".into()), "ID").unwrap(), "x");
    }

    #[test]
    fn body_must_be_an_object() {
        use crate::models::NewBoard;

        for body in [r#"["Sprint", "desc"]"#, "[]", "null", r#""Sprint""#, "7"] {
            let err = decode_object::<NewBoard>(body.as_bytes()).unwrap_err();
            assert!(err.to_string().starts_with("Invalid JSON: expected an object"), "{body}");
        }

        let board: NewBoard = decode_object(br#"{"name": "Sprint"}"#).unwrap();
        assert_eq!(board.name, "Sprint");
    }

    #[test]
    fn malformed_body_is_invalid_json() {
        let err = decode_object::<crate::models::NewBoard>(b"{not json").unwrap_err();
        assert!(err.to_string().starts_with("Invalid JSON"));
    }

    #[test]
    fn parse_id_rejects_garbage() {
        assert!(parse_id("123").is_none());
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()), Some(id));
    }
}
