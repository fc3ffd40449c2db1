//! Cookie header parsing and `Set-Cookie` construction.

use axum::http::{header::COOKIE, HeaderMap};

/// Cookie carrying the login session token.
pub const SESSION_COOKIE: &str = "session_token";

/// Cookie carrying the id of the last issued captcha.
pub const CAPTCHA_COOKIE: &str = "captcha_id";

/// Value of the first cookie named `name` across all `Cookie` headers.
pub fn get<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim_matches('"'))
}

/// `Set-Cookie` value for the session token.
pub fn session(token: &str, max_age_secs: u64) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; Max-Age={max_age_secs}; HttpOnly")
}

/// `Set-Cookie` value for a captcha id; lives for the browser session.
pub fn captcha(id: &str) -> String {
    format!("{CAPTCHA_COOKIE}={id}; Path=/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(values: &[&'static str]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for v in values {
            map.append(COOKIE, HeaderValue::from_static(v));
        }
        map
    }

    #[test]
    fn finds_cookie_among_many() {
        let map = headers(&["theme=dark; session_token=abc; captcha_id=f00"]);
        assert_eq!(get(&map, SESSION_COOKIE), Some("abc"));
        assert_eq!(get(&map, CAPTCHA_COOKIE), Some("f00"));
        assert_eq!(get(&map, "missing"), None);
    }

    #[test]
    fn searches_every_cookie_header() {
        let map = headers(&["a=1", "captcha_id=xyz"]);
        assert_eq!(get(&map, CAPTCHA_COOKIE), Some("xyz"));
    }

    #[test]
    fn first_occurrence_wins_and_quotes_are_stripped() {
        let map = headers(&["session_token=\"one\"; session_token=two"]);
        assert_eq!(get(&map, SESSION_COOKIE), Some("one"));
    }

    #[test]
    fn name_must_match_exactly() {
        let map = headers(&["xsession_token=abc"]);
        assert_eq!(get(&map, SESSION_COOKIE), None);
    }

    #[test]
    fn set_cookie_values() {
        assert_eq!(
            session("tok", 86400),
            "session_token=tok; Path=/; Max-Age=86400; HttpOnly"
        );
        assert_eq!(captcha("beef"), "captcha_id=beef; Path=/");
    }
}
