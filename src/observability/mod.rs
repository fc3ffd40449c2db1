//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and connection tasks produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → stdout (fmt subscriber)
//!     → Metrics endpoint (Prometheus scrape), when enabled
//! ```
//!
//! # Design Decisions
//! - Request ID flows into every request span
//! - Metrics are cheap (atomic increments) and off by default

pub mod logging;
pub mod metrics;
