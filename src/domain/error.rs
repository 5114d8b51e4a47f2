use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use thiserror::Error;

/// Everything a handler can fail with. Each variant is recovered at the
/// handler boundary and rendered as a `{"message": ...}` JSON body with the
/// matching status code.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request must accept application/json data")]
    NotAcceptable,
    #[error("Request must contain application/json data")]
    UnsupportedMediaType,
    #[error("{0}")]
    Validation(String),
    #[error("Could not find post with id {0}")]
    PostNotFound(i64),
    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotAcceptable => StatusCode::NOT_ACCEPTABLE,
            ApiError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::PostNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Driver details stay in the logs, not in the body.
        let message = match self {
            ApiError::Internal(_) => "internal server error".to_string(),
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(ErrorBody { message: &message })
    }
}
