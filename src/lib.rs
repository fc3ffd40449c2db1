//! Ticket Practice Server Library
//!
//! A small ticket-booking site for UI automation practice: login, date
//! listing, seat map, captcha-gated booking, and a mock payment popup, all
//! backed by in-memory state.

pub mod booking;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
