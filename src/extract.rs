use axum::extract::FromRequest;

use crate::error::AppError;

/// `Json` body extractor whose rejections are rendered in the error envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
