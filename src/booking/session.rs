//! Single-account session gate.

use crate::booking::BookingError;
use crate::config::SessionConfig;

/// Compares credentials and session cookies against one configured account.
#[derive(Debug, Clone)]
pub struct SessionGate {
    username: String,
    password: String,
    token: String,
}

impl SessionGate {
    pub fn new(username: impl Into<String>, password: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            token: token.into(),
        }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(&config.username, &config.password, &config.token)
    }

    /// Exchange credentials for the session token.
    pub fn login(&self, username: &str, password: &str) -> Result<&str, BookingError> {
        if username == self.username && password == self.password {
            Ok(&self.token)
        } else {
            Err(BookingError::InvalidCredentials)
        }
    }

    /// Accept only the exact session token.
    pub fn authorize(&self, presented: Option<&str>) -> Result<(), BookingError> {
        match presented {
            Some(token) if token == self.token => Ok(()),
            _ => Err(BookingError::Unauthorized),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> SessionGate {
        SessionGate::from_config(&SessionConfig::default())
    }

    #[test]
    fn login_with_configured_pair() {
        assert_eq!(gate().login("admin", "1234"), Ok("valid-session-xyz"));
    }

    #[test]
    fn login_rejects_anything_else() {
        let gate = gate();
        assert_eq!(gate.login("admin", "12345"), Err(BookingError::InvalidCredentials));
        assert_eq!(gate.login("Admin", "1234"), Err(BookingError::InvalidCredentials));
        assert_eq!(gate.login("", ""), Err(BookingError::InvalidCredentials));
    }

    #[test]
    fn authorize_requires_exact_token() {
        let gate = gate();
        assert_eq!(gate.authorize(Some("valid-session-xyz")), Ok(()));
        assert_eq!(gate.authorize(None), Err(BookingError::Unauthorized));
        assert_eq!(gate.authorize(Some("valid-session-xy")), Err(BookingError::Unauthorized));
        assert_eq!(gate.authorize(Some("valid-session-xyz ")), Err(BookingError::Unauthorized));
    }
}
