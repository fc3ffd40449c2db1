//! Configuration validation.
//!
//! Serde handles syntax; this module checks value ranges and cross-field
//! consistency. All violations are collected, not just the first one.

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ServerConfig;

/// Largest row or column count; keeps seat ids short and the scan trivial.
pub const MAX_SEAT_AXIS: u32 = 99;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: invalid socket address {value:?}")]
    InvalidAddress { field: &'static str, value: String },

    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },

    #[error("{field} must be between 1 and 99, got {value}")]
    SeatAxisOutOfRange { field: &'static str, value: u32 },

    #[error("venue.prebooked_ratio must be within [0, 1], got {0}")]
    RatioOutOfRange(String),

    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("session.token contains characters not allowed in a cookie value")]
    InvalidCookieValue,
}

/// Validate a configuration, returning every violation found.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_address(&mut errors, "listener.bind_address", &config.listener.bind_address);
    if config.observability.metrics_enabled {
        check_address(
            &mut errors,
            "observability.metrics_address",
            &config.observability.metrics_address,
        );
    }

    if config.listener.max_connections == 0 {
        errors.push(ValidationError::Zero { field: "listener.max_connections" });
    }
    if config.timeouts.header_read_secs == 0 {
        errors.push(ValidationError::Zero { field: "timeouts.header_read_secs" });
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::Zero { field: "timeouts.request_secs" });
    }
    if config.security.max_body_size == 0 {
        errors.push(ValidationError::Zero { field: "security.max_body_size" });
    }

    for (field, value) in [("venue.rows", config.venue.rows), ("venue.cols", config.venue.cols)] {
        if !(1..=MAX_SEAT_AXIS).contains(&value) {
            errors.push(ValidationError::SeatAxisOutOfRange { field, value });
        }
    }

    let ratio = config.venue.prebooked_ratio;
    if !(0.0..=1.0).contains(&ratio) {
        errors.push(ValidationError::RatioOutOfRange(ratio.to_string()));
    }

    for (field, value) in [
        ("session.username", &config.session.username),
        ("session.password", &config.session.password),
        ("session.token", &config.session.token),
        ("assets.index", &config.assets.index),
    ] {
        if value.is_empty() {
            errors.push(ValidationError::Empty { field });
        }
    }

    if !is_cookie_value(&config.session.token) {
        errors.push(ValidationError::InvalidCookieValue);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}

/// RFC 6265 cookie-octet check, minus the optional surrounding quotes.
fn is_cookie_value(value: &str) -> bool {
    value
        .bytes()
        .all(|b| b.is_ascii_graphic() && !matches!(b, b'"' | b',' | b';' | b'\\'))
}
