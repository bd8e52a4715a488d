use crate::helpers::{ErrorCode, JsonResponse};
use actix_web::{http::StatusCode, HttpResponse, ResponseError};

/// Infrastructure failures. "Not found" is never an error here, it is an
/// error envelope returned by the service.
#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl ResponseError for ReviewError {
    fn status_code(&self) -> StatusCode {
        ErrorCode::InternalServerError.status()
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(JsonResponse::<()>::with_error(ErrorCode::InternalServerError))
    }
}
