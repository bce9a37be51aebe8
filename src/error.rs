use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::response::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Invalid email or password")]
    Unauthorized,

    /// Request body the `Json` extractor could not accept (malformed JSON,
    /// wrong content type, or a field that failed validation such as a rating).
    #[error("{message}")]
    InvalidBody { status: StatusCode, message: String },

    #[error("Upstream service error: {0}")]
    Upstream(String),

    #[error("ORM error")]
    OrmError(#[from] sea_orm::DbErr),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            // Duplicate unique fields are reported as 400, matching the registration contract.
            AppError::BadRequest(_) | AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::InvalidBody { status, .. } => *status,
            AppError::Upstream(_) | AppError::OrmError(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::OrmError(err) => tracing::error!(error = %err, "database error"),
            AppError::Internal(err) => tracing::error!(error = %err, "internal error"),
            _ => {}
        }

        (status, axum::Json(ApiResponse::failure(self.to_string()))).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_variants_to_status_codes() {
        assert_eq!(AppError::NotFound("Restaurant").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Conflict("User already exists".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::Upstream("quota exceeded".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn invalid_body_keeps_extractor_status() {
        let err = AppError::InvalidBody {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "rating must be between 1 and 5, got 6".into(),
        };
        assert_eq!(err.to_string(), "rating must be between 1 and 5, got 6");
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn upstream_error_keeps_detail() {
        let err = AppError::Upstream("quota exceeded".into());
        assert_eq!(err.to_string(), "Upstream service error: quota exceeded");
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
