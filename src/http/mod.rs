//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection (net::Listener)
//!     → server.rs (hyper HTTP/1.1, header-read timeout, drain)
//!     → request.rs (request ID, tracing span)
//!     → handlers.rs (/api/*) | payment.rs (/payment) | assets.rs (everything else)
//!     → error.rs (failures → status + text body)
//!     → Send to client
//! ```

pub mod assets;
pub mod cookies;
pub mod error;
pub mod handlers;
pub mod payment;
pub mod request;
pub mod server;

pub use error::ApiError;
pub use request::X_REQUEST_ID;
pub use server::{app, AppState, HttpServer};
