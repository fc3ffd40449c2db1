//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the server.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the ticket practice server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (bind address, connection limit).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Login credentials and session cookie settings.
    pub session: SessionConfig,

    /// Seat map and date listing.
    pub venue: VenueConfig,

    /// Prebuilt UI bundle location.
    pub assets: AssetsConfig,

    /// Request limits.
    pub security: SecurityConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Maximum concurrent connections (backpressure).
    pub max_connections: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            max_connections: 1024,
        }
    }
}

/// Timeout configuration for various operations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Time allowed for a client to send the full request head, in seconds.
    pub header_read_secs: u64,

    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,

    /// How long shutdown waits for open connections to drain, in seconds.
    pub shutdown_grace_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            header_read_secs: 3,
            request_secs: 30,
            shutdown_grace_secs: 10,
        }
    }
}

/// The single practice account and its session cookie.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SessionConfig {
    pub username: String,
    pub password: String,

    /// Static token handed out on login and expected back in `session_token`.
    pub token: String,

    /// Lifetime of the session cookie in seconds.
    pub cookie_max_age_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            // Practice credentials, not a security boundary.
            username: "admin".to_string(),
            password: "1234".to_string(),
            token: "valid-session-xyz".to_string(),
            cookie_max_age_secs: 24 * 60 * 60,
        }
    }
}

/// Seat map and event dates.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct VenueConfig {
    /// Number of seat rows.
    pub rows: u32,

    /// Number of seats per row.
    pub cols: u32,

    /// Probability that a seat starts out already booked.
    pub prebooked_ratio: f64,

    /// Dates returned by `GET /api/dates`.
    pub dates: Vec<String>,

    /// Artificial latency before the date list is returned, in milliseconds.
    pub dates_delay_ms: u64,
}

impl Default for VenueConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            prebooked_ratio: 0.3,
            dates: vec![
                "2025-12-24".to_string(),
                "2025-12-25".to_string(),
                "2026-01-01".to_string(),
            ],
            dates_delay_ms: 1000,
        }
    }
}

/// Prebuilt single-page application bundle.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory holding the built UI.
    pub dir: String,

    /// Document served for paths that match no file.
    pub index: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: "frontend/dist".to_string(),
            index: "index.html".to_string(),
        }
    }
}

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Maximum body size in bytes.
    pub max_body_size: usize,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_body_size: 64 * 1024, // 64KB
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: ServerConfig = toml::from_str(
            r#"
            [venue]
            rows = 4
            dates_delay_ms = 0

            [session]
            password = "hunter2"
            "#,
        )
        .unwrap();

        assert_eq!(config.venue.rows, 4);
        assert_eq!(config.venue.cols, 10);
        assert_eq!(config.venue.dates.len(), 3);
        assert_eq!(config.session.username, "admin");
        assert_eq!(config.session.password, "hunter2");
        assert_eq!(config.timeouts.header_read_secs, 3);
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
    }

    #[test]
    fn empty_document_is_default() {
        let config: ServerConfig = toml::from_str("").unwrap();
        assert_eq!(config.session.token, "valid-session-xyz");
        assert_eq!(config.assets.index, "index.html");
        assert!(!config.observability.metrics_enabled);
    }
}
