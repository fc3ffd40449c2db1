//! Mapping of failures to HTTP responses.
//!
//! Every failure ends the request with a status code and a short plain-text
//! body. Nothing is retried.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::booking::BookingError;

/// Error returned by API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body was not the JSON document the endpoint expects.
    #[error("malformed request body: {0}")]
    BadRequest(#[source] serde_json::Error),

    #[error(transparent)]
    Booking(#[from] BookingError),
}

impl ApiError {
    /// Status code and client-facing message.
    pub fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "Bad Request"),
            ApiError::Booking(err) => match err {
                BookingError::SeatNotFound(_) => (StatusCode::NOT_FOUND, "Seat not found"),
                BookingError::AlreadyBooked(_) => (StatusCode::CONFLICT, "Already Booked"),
                BookingError::CaptchaMissing => (StatusCode::BAD_REQUEST, "Captcha expired"),
                BookingError::CaptchaMismatch => (StatusCode::FORBIDDEN, "Incorrect Captcha"),
                BookingError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid Credentials"),
                BookingError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.parts();
        tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");
        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: impl Into<ApiError>) -> StatusCode {
        err.into().into_response().status()
    }

    #[test]
    fn booking_errors_map_to_statuses() {
        assert_eq!(status_of(BookingError::SeatNotFound("x".into())), StatusCode::NOT_FOUND);
        assert_eq!(status_of(BookingError::AlreadyBooked("x".into())), StatusCode::CONFLICT);
        assert_eq!(status_of(BookingError::CaptchaMissing), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(BookingError::CaptchaMismatch), StatusCode::FORBIDDEN);
        assert_eq!(status_of(BookingError::InvalidCredentials), StatusCode::UNAUTHORIZED);
        assert_eq!(status_of(BookingError::Unauthorized), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn malformed_json_is_bad_request() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ApiError::BadRequest(parse_err);
        assert_eq!(err.parts(), (StatusCode::BAD_REQUEST, "Bad Request"));
    }

    #[test]
    fn body_is_plain_text() {
        let response = ApiError::from(BookingError::CaptchaMismatch).into_response();
        let content_type = response.headers()[axum::http::header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/plain"));
    }
}
