//! The `{message, data, meta}` envelope every response body is wrapped in.

use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct Meta {
    /// Number of items in a list response; `null` elsewhere.
    pub total: Option<u64>,
}

impl Meta {
    pub fn total(total: usize) -> Self {
        Self {
            total: Some(total as u64),
        }
    }

    pub fn empty() -> Self {
        Self { total: None }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
    pub meta: Option<Meta>,
}

/// `data` of a failed request.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorData {
    pub error: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T, meta: Option<Meta>) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            meta,
        }
    }
}

impl ApiResponse<ErrorData> {
    /// Failure envelope; the message is repeated as `data.error`.
    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            data: Some(ErrorData {
                error: message.clone(),
            }),
            message,
            meta: Some(Meta::empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_meta_carries_total() {
        let body = serde_json::to_value(ApiResponse::success(
            "Banners",
            vec![1, 2, 3],
            Some(Meta::total(3)),
        ))
        .unwrap();
        assert_eq!(body["data"], serde_json::json!([1, 2, 3]));
        assert_eq!(body["meta"]["total"], 3);
    }

    #[test]
    fn failure_repeats_message_as_error() {
        let body = serde_json::to_value(ApiResponse::failure("User not found")).unwrap();
        assert_eq!(body["message"], "User not found");
        assert_eq!(body["data"]["error"], "User not found");
        assert!(body["meta"]["total"].is_null());
    }
}
