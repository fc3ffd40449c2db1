//! One-shot captcha challenges.
//!
//! Each issued captcha maps a random id (handed to the client as a cookie)
//! to a six-digit code rendered into an SVG image. Looking an id up removes
//! it, so every captcha backs at most one booking attempt.

use std::collections::HashMap;
use std::fmt::Write as _;

use rand::rngs::OsRng;
use rand::{Rng, RngCore};

use crate::booking::BookingError;

/// Random bytes behind a captcha id (hex-encoded on the wire).
const ID_BYTES: usize = 16;

/// Codes are drawn uniformly from `0..CODE_SPACE` and zero-padded.
const CODE_SPACE: u32 = 1_000_000;

/// A freshly issued challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedCaptcha {
    pub id: String,
    pub code: String,
}

/// Pending captcha codes keyed by captcha id.
#[derive(Debug, Default)]
pub struct CaptchaRegistry {
    pending: HashMap<String, String>,
}

impl CaptchaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate and remember a new challenge.
    pub fn issue(&mut self) -> IssuedCaptcha {
        let issued = IssuedCaptcha {
            id: random_id(),
            code: random_code(),
        };
        self.pending.insert(issued.id.clone(), issued.code.clone());
        issued
    }

    /// Remove and return the code for `id`.
    pub fn take(&mut self, id: &str) -> Option<String> {
        self.pending.remove(id)
    }

    /// Consume the captcha and compare it against the submitted code.
    pub fn verify(&mut self, id: &str, submitted: &str) -> Result<(), BookingError> {
        match self.take(id) {
            Some(expected) if expected == submitted => Ok(()),
            _ => Err(BookingError::CaptchaMismatch),
        }
    }

    /// Number of captchas issued but not yet consumed.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

fn random_code() -> String {
    format!("{:06}", OsRng.gen_range(0..CODE_SPACE))
}

fn random_id() -> String {
    let mut bytes = [0u8; ID_BYTES];
    OsRng.fill_bytes(&mut bytes);
    bytes.iter().fold(String::with_capacity(ID_BYTES * 2), |mut out, b| {
        let _ = write!(out, "{b:02x}");
        out
    })
}

/// Render a code as an SVG image with a strike line across it.
pub fn render_svg(code: &str) -> String {
    format!(
        r##"<svg width="200" height="80" xmlns="http://www.w3.org/2000/svg">
  <rect width="100%" height="100%" fill="#f0f0f0"/>
  <text x="50%" y="50%" font-size="30" font-family="Arial" font-weight="bold" fill="black" text-anchor="middle" dominant-baseline="middle" letter-spacing="5">{code}</text>
  <line x1="10" y1="10" x2="190" y2="70" stroke="gray" stroke-width="2"/>
</svg>"##
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_values_have_expected_shape() {
        let mut registry = CaptchaRegistry::new();
        let issued = registry.issue();

        assert_eq!(issued.code.len(), 6);
        assert!(issued.code.bytes().all(|b| b.is_ascii_digit()));
        assert_eq!(issued.id.len(), 32);
        assert!(issued.id.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()));
        assert_eq!(registry.pending(), 1);
    }

    #[test]
    fn ids_are_distinct() {
        let mut registry = CaptchaRegistry::new();
        let a = registry.issue();
        let b = registry.issue();
        assert_ne!(a.id, b.id);
        assert_eq!(registry.pending(), 2);
    }

    #[test]
    fn code_accepted_once() {
        let mut registry = CaptchaRegistry::new();
        let issued = registry.issue();

        assert_eq!(registry.verify(&issued.id, &issued.code), Ok(()));
        assert_eq!(
            registry.verify(&issued.id, &issued.code),
            Err(BookingError::CaptchaMismatch)
        );
        assert_eq!(registry.pending(), 0);
    }

    #[test]
    fn wrong_code_still_consumes() {
        let mut registry = CaptchaRegistry::new();
        let issued = registry.issue();
        let wrong = if issued.code == "000000" { "000001" } else { "000000" };

        assert_eq!(registry.verify(&issued.id, wrong), Err(BookingError::CaptchaMismatch));
        assert_eq!(
            registry.verify(&issued.id, &issued.code),
            Err(BookingError::CaptchaMismatch)
        );
    }

    #[test]
    fn unknown_id_is_rejected() {
        let mut registry = CaptchaRegistry::new();
        assert_eq!(registry.verify("nope", "123456"), Err(BookingError::CaptchaMismatch));
        assert_eq!(registry.take("nope"), None);
    }

    #[test]
    fn svg_embeds_code() {
        let svg = render_svg("042917");
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(">042917</text>"));
        assert!(svg.contains("<line"));
    }
}
