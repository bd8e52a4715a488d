use super::ErrorCode;
use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde_derive::Serialize;

/// Envelope returned by every review operation.
///
/// A success carries a message and an optional payload, an error carries an
/// [`ErrorCode`] and never a payload. `status` mirrors the HTTP status the
/// envelope is sent with.
#[derive(Debug, Serialize)]
pub struct JsonResponse<T> {
    pub status: u16,
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
}

impl<T> JsonResponse<T> {
    pub fn ok<M: Into<String>>(message: M) -> Self {
        Self {
            status: StatusCode::OK.as_u16(),
            success: true,
            message: message.into(),
            data: None,
            code: None,
        }
    }

    pub fn ok_with<M: Into<String>>(message: M, data: T) -> Self {
        Self {
            data: Some(data),
            ..Self::ok(message)
        }
    }

    pub fn with_error(code: ErrorCode) -> Self {
        Self {
            status: code.status().as_u16(),
            success: false,
            message: code.message().to_string(),
            data: None,
            code: Some(code),
        }
    }

    /// Replaces the default message, e.g. with validation details.
    pub fn with_message<M: Into<String>>(mut self, message: M) -> Self {
        self.message = message.into();
        self
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn into_result(self) -> Result<Option<T>, ErrorCode> {
        match self.code {
            Some(code) => Err(code),
            None => Ok(self.data),
        }
    }
}

impl<T> Responder for JsonResponse<T>
where
    T: serde::Serialize,
{
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        HttpResponse::build(status).json(self)
    }
}
