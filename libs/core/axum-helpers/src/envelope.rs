//! The uniform response envelope.
//!
//! Every response carries `{status: "success"|"error"}` plus exactly one of
//! `payload` (data), `message` (confirmation text) or `error` (failure text).

use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_ERROR: &str = "error";

/// Success envelope carrying data
#[derive(Debug, Serialize)]
pub struct Payload<T> {
    pub status: String,
    pub payload: T,
}

/// Success envelope carrying a confirmation message
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Message {
    pub status: String,
    pub message: String,
}

/// Error envelope
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub status: String,
    pub error: String,
}

/// Wrap data in a success envelope
pub fn payload<T: Serialize>(payload: T) -> Json<Payload<T>> {
    Json(Payload {
        status: STATUS_SUCCESS.to_string(),
        payload,
    })
}

/// Wrap a confirmation message in a success envelope
pub fn message(message: impl Into<String>) -> Json<Message> {
    Json(Message {
        status: STATUS_SUCCESS.to_string(),
        message: message.into(),
    })
}

/// Build an error envelope body (status code is chosen by the caller)
pub fn error(error: impl Into<String>) -> Json<ErrorBody> {
    Json(ErrorBody {
        status: STATUS_ERROR.to_string(),
        error: error.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_envelope_shape() {
        let Json(body) = payload(vec![1, 2, 3]);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["payload"], serde_json::json!([1, 2, 3]));
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_message_envelope_shape() {
        let Json(body) = message("Pet adopted");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["message"], "Pet adopted");
    }

    #[test]
    fn test_error_envelope_shape() {
        let Json(body) = error("Pet not found");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["error"], "Pet not found");
        assert!(json.get("payload").is_none());
    }
}
