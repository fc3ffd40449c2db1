//! Booking domain errors.

use thiserror::Error;

/// Errors produced by the seat, captcha and session components.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("seat {0} not found")]
    SeatNotFound(String),

    #[error("seat {0} is already booked")]
    AlreadyBooked(String),

    /// The booking request carried no captcha cookie.
    #[error("captcha cookie missing")]
    CaptchaMissing,

    /// No pending captcha for the id, or the submitted code differs.
    #[error("captcha mismatch")]
    CaptchaMismatch,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("missing or invalid session")]
    Unauthorized,
}

impl BookingError {
    /// Short stable name, used as a metrics label.
    pub fn label(&self) -> &'static str {
        match self {
            BookingError::SeatNotFound(_) => "seat_not_found",
            BookingError::AlreadyBooked(_) => "already_booked",
            BookingError::CaptchaMissing => "captcha_missing",
            BookingError::CaptchaMismatch => "captcha_mismatch",
            BookingError::InvalidCredentials => "invalid_credentials",
            BookingError::Unauthorized => "unauthorized",
        }
    }
}
