use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct MessageBody {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    // Only store failures attach the underlying cause.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn success_message(message: impl Into<String>) -> impl IntoResponse {
    let body = MessageBody {
        success: true,
        message: message.into(),
    };
    (StatusCode::OK, Json(body))
}

pub fn error(message: impl Into<String>, cause: Option<String>, status: StatusCode) -> Response {
    let body = ErrorBody {
        success: false,
        message: message.into(),
        error: cause,
    };

    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_body_shape() {
        let body = MessageBody {
            success: true,
            message: "Availability updated successfully.".to_string(),
        };
        let value = serde_json::to_value(body).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["message"], "Availability updated successfully.");
    }

    #[test]
    fn test_error_body_omits_cause_when_absent() {
        let body = ErrorBody {
            success: false,
            message: "Ticket not found".to_string(),
            error: None,
        };
        let value = serde_json::to_value(body).unwrap();
        assert_eq!(value["success"], false);
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_error_body_carries_cause() {
        let body = ErrorBody {
            success: false,
            message: "Failed to create ticket".to_string(),
            error: Some("connection refused".to_string()),
        };
        let value = serde_json::to_value(body).unwrap();
        assert_eq!(value["error"], "connection refused");
    }
}
