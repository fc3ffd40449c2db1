//! JSON API handlers under `/api`.

use axum::{
    body::Bytes,
    extract::State,
    http::{
        header::{CACHE_CONTROL, CONTENT_TYPE, SET_COOKIE},
        HeaderMap,
    },
    response::IntoResponse,
    Json,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::booking::{render_svg, Seat};
use crate::http::cookies;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::observability::metrics;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BookRequest {
    pub seat_id: String,
    pub captcha: String,
}

#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub status: &'static str,
    pub seat_id: String,
}

/// Bodies are decoded as JSON whatever the declared content type.
fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(ApiError::BadRequest)
}

/// `POST /api/login`
pub async fn login(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let request: LoginRequest = parse_json(&body)?;

    let token = state
        .sessions
        .login(&request.username, &request.password)
        .inspect_err(|_| tracing::info!(username = %request.username, "Login rejected"))?;

    tracing::info!(username = %request.username, "Login succeeded");
    let cookie = cookies::session(token, state.session_max_age_secs);

    Ok((
        [(SET_COOKIE, cookie)],
        Json(LoginResponse { message: "Login Success" }),
    ))
}

/// `GET /api/dates`
pub async fn dates(State(state): State<AppState>) -> Json<Vec<String>> {
    tokio::time::sleep(state.dates_delay).await;
    Json(state.dates.to_vec())
}

/// `GET /api/seats`
pub async fn seats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Seat>>, ApiError> {
    state
        .sessions
        .authorize(cookies::get(&headers, cookies::SESSION_COOKIE))?;
    Ok(Json(state.store.seats()))
}

/// `GET /api/captcha`
pub async fn captcha(State(state): State<AppState>) -> impl IntoResponse {
    let (issued, pending) = state.store.issue_captcha();
    metrics::record_captcha_issued();
    tracing::debug!(pending, "Captcha issued");

    (
        [
            (CONTENT_TYPE, "image/svg+xml"),
            (CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
        ],
        [(SET_COOKIE, cookies::captcha(&issued.id))],
        render_svg(&issued.code),
    )
}

/// `POST /api/book`
pub async fn book(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<BookResponse>, ApiError> {
    let request: BookRequest = parse_json(&body)?;
    let captcha_id = cookies::get(&headers, cookies::CAPTCHA_COOKIE);

    match state.store.book(captcha_id, &request.captcha, &request.seat_id) {
        Ok(seat) => {
            metrics::record_booking("booked");
            tracing::info!(seat_id = %seat.id, "Seat booked");
            Ok(Json(BookResponse {
                status: "success",
                seat_id: seat.id,
            }))
        }
        Err(err) => {
            metrics::record_booking(err.label());
            tracing::info!(seat_id = %request.seat_id, error = %err, "Booking rejected");
            Err(err.into())
        }
    }
}
