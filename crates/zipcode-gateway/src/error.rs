use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use zipcode_core::DirectoryError;

pub type Result<T> = std::result::Result<T, AppError>;

/// Failure of a gateway handler, rendered as a plain-text body.
#[derive(Debug)]
pub struct AppError(DirectoryError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            DirectoryError::NotFound(_) => StatusCode::NOT_FOUND,
            DirectoryError::InvalidZipCode(_) => StatusCode::BAD_REQUEST,
            DirectoryError::Inconsistent(_) | DirectoryError::Persistence(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<DirectoryError> for AppError {
    fn from(error: DirectoryError) -> Self {
        Self(error)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), self.0.to_string()).into_response()
    }
}
