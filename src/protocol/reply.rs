use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::{Value, json};

use crate::protocol::error::ApiError;

/// JSON reply: a status code plus a JSON document
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: StatusCode,
    pub body: Value,
    /// The error this reply was built from, kept for logging
    pub error: Option<ApiError>,
}

impl Reply {
    /// Serialize `data` as the body of a reply with the given status
    pub fn json<T: Serialize>(status: StatusCode, data: &T) -> Result<Self, ApiError> {
        let body = serde_json::to_value(data).map_err(|e| ApiError::Internal(e.to_string()))?;
        Ok(Self {
            status,
            body,
            error: None,
        })
    }

    /// Create a `{"message": ...}` reply
    pub fn message(status: StatusCode, msg: impl Into<String>) -> Self {
        let msg: String = msg.into();
        Self {
            status,
            body: json!({ "message": msg }),
            error: None,
        }
    }

    /// Create an error response
    pub fn error(err: &ApiError) -> Self {
        Self {
            status: err.status(),
            body: json!({ "error": err.to_string() }),
            error: Some(err.clone()),
        }
    }

    /// Encode the body as newline-terminated JSON
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = self.body.to_string().into_bytes();
        buf.push(b'\n');
        buf
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        let encoded = self.encode();
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            encoded,
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_error() {
        let reply = Reply::error(&ApiError::InvalidId);
        assert_eq!(reply.status, StatusCode::BAD_REQUEST);
        assert_eq!(reply.encode(), b"{\"error\":\"invalid id\"}\n");
        assert_eq!(reply.error, Some(ApiError::InvalidId));
    }

    #[test]
    fn test_internal_error_keeps_cause() {
        let reply = Reply::error(&ApiError::Internal("lock poisoned".to_string()));
        assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(reply.body, json!({ "error": "internal error" }));
        assert_eq!(
            reply.error,
            Some(ApiError::Internal("lock poisoned".to_string()))
        );
    }

    #[test]
    fn test_encode_message() {
        let reply = Reply::message(StatusCode::OK, "item deleted");
        assert_eq!(reply.encode(), b"{\"message\":\"item deleted\"}\n");
    }

    #[test]
    fn test_into_response_sets_content_type() {
        let response = Reply::error(&ApiError::MethodNotAllowed).into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }
}
