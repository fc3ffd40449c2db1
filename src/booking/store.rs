//! Shared seat and captcha state behind one lock.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::booking::captcha::{CaptchaRegistry, IssuedCaptcha};
use crate::booking::seats::{Seat, SeatRegistry};
use crate::booking::BookingError;

/// Everything the booking flow mutates.
#[derive(Debug)]
struct Ledger {
    seats: SeatRegistry,
    captchas: CaptchaRegistry,
}

/// Mutex-guarded ledger shared by all request handlers.
///
/// The lock is only held inside synchronous methods, never across an await.
#[derive(Debug)]
pub struct BookingStore {
    ledger: Mutex<Ledger>,
}

impl BookingStore {
    pub fn new(seats: SeatRegistry) -> Self {
        Self {
            ledger: Mutex::new(Ledger {
                seats,
                captchas: CaptchaRegistry::new(),
            }),
        }
    }

    // Every mutation is a single field write, so a poisoned ledger is still consistent.
    fn lock(&self) -> MutexGuard<'_, Ledger> {
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn seats(&self) -> Vec<Seat> {
        self.lock().seats.list()
    }

    /// Issue a captcha; returns it with the number of captchas now pending.
    pub fn issue_captcha(&self) -> (IssuedCaptcha, usize) {
        let mut ledger = self.lock();
        let issued = ledger.captchas.issue();
        (issued, ledger.captchas.pending())
    }

    /// Verify the captcha and book the seat in one critical section.
    ///
    /// A presented captcha is consumed before any other check. An unknown
    /// seat is reported ahead of every captcha problem.
    pub fn book(
        &self,
        captcha_id: Option<&str>,
        submitted_code: &str,
        seat_id: &str,
    ) -> Result<Seat, BookingError> {
        let mut ledger = self.lock();

        let expected = captcha_id.map(|id| ledger.captchas.take(id));

        if !ledger.seats.contains(seat_id) {
            return Err(BookingError::SeatNotFound(seat_id.to_string()));
        }

        match expected {
            None => return Err(BookingError::CaptchaMissing),
            Some(Some(code)) if code == submitted_code => {}
            Some(_) => return Err(BookingError::CaptchaMismatch),
        }

        ledger.seats.book(seat_id)
    }
}
