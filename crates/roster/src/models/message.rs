use axum::http::StatusCode;
use serde::Serialize;

/// Confirmation payload returned by mutating endpoints.
///
/// The status code is echoed in the body. Create confirmations carry only a
/// human-readable message; the assigned identifier is not included.
#[derive(Debug, Clone, Serialize)]
pub struct StatusMessage {
    pub status_code: u16,
    pub message: String,
}

impl StatusMessage {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_serialization() {
        let message = StatusMessage::new(StatusCode::CREATED, "Ada created successfully");
        let json = serde_json::to_value(&message).unwrap();

        assert_eq!(json["status_code"], 201);
        assert_eq!(json["message"], "Ada created successfully");
    }
}
