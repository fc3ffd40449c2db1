//! Booking domain.
//!
//! # Data Flow
//! ```text
//! POST /api/login   → session.rs (credential check → static token)
//! GET  /api/seats   → session.rs (token check) → store.rs → seats.rs (snapshot)
//! GET  /api/captcha → store.rs → captcha.rs (issue code + id)
//! POST /api/book    → store.rs (one lock):
//!                       captcha.rs (consume) → seats.rs (lookup, book)
//! ```
//!
//! # Design Decisions
//! - Seats and captchas share one mutex; the data set is tiny
//! - Seat set is fixed at startup; booking only flips free → booked
//! - Captchas are single-use, consumed on lookup whatever the outcome

pub mod captcha;
pub mod error;
pub mod seats;
pub mod session;
pub mod store;

pub use captcha::{render_svg, CaptchaRegistry, IssuedCaptcha};
pub use error::BookingError;
pub use seats::{Seat, SeatLayout, SeatRegistry};
pub use session::SessionGate;
pub use store::BookingStore;
