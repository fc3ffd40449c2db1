//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Build the shared application state from configuration
//! - Create the Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeouts, body limit, metrics)
//! - Serve HTTP/1.1 connections with a header-read timeout
//! - Drain open connections on shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::{
    middleware,
    routing::{any, get, post},
    Router,
};
use hyper::{body::Incoming, server::conn::http1, service::service_fn, Request};
use hyper_util::rt::{TokioIo, TokioTimer};
use tokio::sync::broadcast;
use tower::Service;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::booking::{BookingStore, SeatLayout, SeatRegistry, SessionGate};
use crate::config::ServerConfig;
use crate::http::assets::{self, StaticAssets};
use crate::http::{handlers, payment, request};
use crate::net::{ConnectionTracker, Listener};
use crate::observability::metrics;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<BookingStore>,
    pub sessions: Arc<SessionGate>,
    pub session_max_age_secs: u64,
    pub dates: Arc<Vec<String>>,
    pub dates_delay: Duration,
    pub assets: StaticAssets,
}

impl AppState {
    /// Build state from configuration, seeding the seat map randomly.
    pub fn from_config(config: &ServerConfig) -> Self {
        let mut rng = fastrand::Rng::new();
        let layout = SeatLayout {
            rows: config.venue.rows,
            cols: config.venue.cols,
        };
        let seats = SeatRegistry::generate(layout, config.venue.prebooked_ratio, &mut rng);
        Self::with_seats(config, seats)
    }

    /// Build state around a given seat map.
    pub fn with_seats(config: &ServerConfig, seats: SeatRegistry) -> Self {
        tracing::info!(
            seats = seats.len(),
            prebooked = seats.booked_count(),
            "Seat map initialized"
        );

        Self {
            store: Arc::new(BookingStore::new(seats)),
            sessions: Arc::new(SessionGate::from_config(&config.session)),
            session_max_age_secs: config.session.cookie_max_age_secs,
            dates: Arc::new(config.venue.dates.clone()),
            dates_delay: Duration::from_millis(config.venue.dates_delay_ms),
            assets: assets::static_assets(&config.assets),
        }
    }
}

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
pub fn app(config: &ServerConfig, state: AppState) -> Router {
    Router::new()
        .route("/api/login", post(handlers::login))
        .route("/api/dates", get(handlers::dates))
        .route("/api/seats", get(handlers::seats))
        .route("/api/captcha", get(handlers::captcha))
        .route("/api/book", post(handlers::book))
        .route("/payment", any(payment::payment_page))
        .fallback(assets::static_fallback)
        .with_state(state)
        .layer(middleware::from_fn(metrics::track_requests))
        .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
        .layer(request::propagate_request_id_layer())
        .layer(TraceLayer::new_for_http().make_span_with(request::make_span))
        .layer(request::set_request_id_layer())
}

/// HTTP server for the ticket practice site.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server with a randomly seeded seat map.
    pub fn new(config: ServerConfig) -> Self {
        let state = AppState::from_config(&config);
        Self::with_state(config, state)
    }

    /// Create a server around prepared state.
    pub fn with_state(config: ServerConfig, state: AppState) -> Self {
        let router = app(&config, state);
        Self { router, config }
    }

    /// Clone of the fully layered router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Run the server until `shutdown` fires, then drain open connections.
    pub async fn run(
        self,
        listener: Listener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let tracker = ConnectionTracker::new();
        let header_read_timeout = Duration::from_secs(self.config.timeouts.header_read_secs);

        loop {
            tokio::select! {
                _ = shutdown.recv() => break,
                accepted = listener.accept() => {
                    let (stream, peer_addr, permit) = match accepted {
                        Ok(conn) => conn,
                        Err(e) => {
                            tracing::warn!(error = %e, "Accept failed");
                            continue;
                        }
                    };

                    let guard = tracker.track();
                    let mut drain = tracker.drain_signal();
                    let router = self.router.clone();

                    tokio::spawn(async move {
                        let _permit = permit;
                        let connection_id = guard.id();

                        let service = service_fn(move |request: Request<Incoming>| {
                            router.clone().call(request)
                        });

                        let mut builder = http1::Builder::new();
                        builder.timer(TokioTimer::new()).header_read_timeout(header_read_timeout);
                        let conn = builder.serve_connection(TokioIo::new(stream), service);
                        tokio::pin!(conn);

                        let result = tokio::select! {
                            result = conn.as_mut() => result,
                            _ = drain.changed() => {
                                conn.as_mut().graceful_shutdown();
                                conn.await
                            }
                        };

                        if let Err(e) = result {
                            tracing::debug!(
                                connection_id = %connection_id,
                                peer_addr = %peer_addr,
                                error = %e,
                                "Connection ended with error"
                            );
                        }
                        drop(guard);
                    });
                }
            }
        }

        drop(listener);
        tracing::info!(
            open_connections = tracker.active_count(),
            "HTTP server draining"
        );
        tracker.begin_drain();
        let grace = Duration::from_secs(self.config.timeouts.shutdown_grace_secs);
        let remaining = tracker.wait_for_drain(grace).await;
        if remaining > 0 {
            tracing::warn!(remaining, "Connections still open after grace period");
        }

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
