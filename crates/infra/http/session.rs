use anyhow::{Context, Result};
use cookie::{Cookie, SameSite};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const AUTH_COOKIE_NAME: &str = "pb_auth";

/// Auth state for calls to the Rekan API, passed explicitly instead of living in a global store.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionContext {
    pub token: String,
    pub record: Option<Value>,
}

#[derive(Serialize, Deserialize)]
struct AuthCookiePayload {
    token: String,
    #[serde(default)]
    model: Option<Value>,
}

impl SessionContext {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            record: None,
        }
    }

    pub fn with_record(mut self, record: Value) -> Self {
        self.record = Some(record);
        self
    }

    pub fn to_cookie(&self) -> Result<Cookie<'static>> {
        let payload = serde_json::to_string(&AuthCookiePayload {
            token: self.token.clone(),
            model: self.record.clone(),
        })
        .context("failed to encode auth cookie")?;

        Ok(Cookie::build((AUTH_COOKIE_NAME, payload))
            .path("/")
            .http_only(true)
            .secure(true)
            .same_site(SameSite::Strict)
            .build())
    }

    /// `Set-Cookie` value with the JSON payload percent-encoded.
    pub fn to_set_cookie_header(&self) -> Result<String> {
        Ok(self.to_cookie()?.encoded().to_string())
    }

    /// Reads the auth cookie out of a `Cookie` request header. Malformed pairs are skipped.
    pub fn from_cookie_header(header: &str) -> Option<Self> {
        let cookie = Cookie::split_parse_encoded(header.to_string())
            .filter_map(|parsed| parsed.ok())
            .find(|cookie| cookie.name() == AUTH_COOKIE_NAME)?;

        let payload: AuthCookiePayload = serde_json::from_str(cookie.value()).ok()?;
        if payload.token.is_empty() {
            return None;
        }

        Some(Self {
            token: payload.token,
            record: payload.model,
        })
    }

    pub fn authorization_header(&self) -> &str {
        &self.token
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cookie_is_locked_down() {
        let session = SessionContext::new("abc.def");
        let cookie = session.to_cookie().unwrap();

        assert_eq!(cookie.name(), AUTH_COOKIE_NAME);
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
    }

    #[test]
    fn session_survives_a_cookie_header() {
        let session = SessionContext::new("abc.def").with_record(json!({"id": "u1"}));
        let set_cookie = session.to_set_cookie_header().unwrap();
        let pair = set_cookie.split(';').next().unwrap();

        let header = format!("theme=dark; {pair}; broken");
        let restored = SessionContext::from_cookie_header(&header).unwrap();
        assert_eq!(restored, session);
    }

    #[test]
    fn missing_or_garbled_cookie_yields_no_session() {
        assert!(SessionContext::from_cookie_header("theme=dark").is_none());
        assert!(SessionContext::from_cookie_header("pb_auth=not-json").is_none());
        assert!(SessionContext::from_cookie_header("pb_auth=%7B%22token%22%3A%22%22%7D").is_none());
    }
}
