//! `SessionID <token>` scheme.
//!
//! The token is taken verbatim. There is no session store behind it, so any
//! well-formed header authenticates.

use axum::http::{HeaderMap, HeaderValue};

use super::error::AuthError;
use super::header::{authorization_parts, expect_scheme};
use super::scheme::{AuthOutcome, AuthScheme, Principal};

pub const SESSION_SCHEME: &str = "SessionID";

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionIdScheme;

impl SessionIdScheme {
    pub fn new() -> Self {
        Self
    }

    /// Extract the session id from a parsed header.
    fn session_id<'a>(&self, scheme: &str, token: &'a str) -> Result<&'a str, AuthError> {
        expect_scheme(scheme, SESSION_SCHEME)?;
        Ok(token)
    }
}

impl AuthScheme for SessionIdScheme {
    fn name(&self) -> &'static str {
        SESSION_SCHEME
    }

    fn challenge(&self) -> HeaderValue {
        HeaderValue::from_static(SESSION_SCHEME)
    }

    fn try_authenticate(&self, headers: &HeaderMap) -> AuthOutcome {
        let (scheme, token) = authorization_parts(headers)?;
        let session_id = self.session_id(scheme, token)?;

        tracing::debug!(session_id_len = session_id.len(), "session id accepted");

        Ok(Principal::new(SESSION_SCHEME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;

    fn headers(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn accepts_any_session_token() {
        let outcome = SessionIdScheme::new().try_authenticate(&headers("SessionID abc123"));
        assert_eq!(outcome, Ok(Principal::new(SESSION_SCHEME)));
    }

    #[test]
    fn scheme_name_is_case_insensitive() {
        let scheme = SessionIdScheme::new();
        assert!(scheme.try_authenticate(&headers("sessionid abc")).is_ok());
        assert!(scheme.try_authenticate(&headers("SESSIONID abc")).is_ok());
    }

    #[test]
    fn tab_separated_header_is_accepted() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_bytes(b"SessionID\tabc").unwrap(),
        );
        let outcome = SessionIdScheme::new().try_authenticate(&headers);
        assert_eq!(outcome, Ok(Principal::new(SESSION_SCHEME)));
    }

    #[test]
    fn missing_header() {
        let outcome = SessionIdScheme::new().try_authenticate(&HeaderMap::new());
        assert_eq!(outcome, Err(AuthError::HeaderMissing));
    }

    #[test]
    fn bare_scheme_is_malformed() {
        let outcome = SessionIdScheme::new().try_authenticate(&headers("SessionID"));
        assert_eq!(outcome, Err(AuthError::MalformedHeader));
    }

    #[test]
    fn other_scheme_is_rejected() {
        let outcome = SessionIdScheme::new().try_authenticate(&headers("Basic YWxpY2U6c2VjcmV0"));
        assert_eq!(
            outcome,
            Err(AuthError::SchemeMismatch {
                expected: SESSION_SCHEME
            })
        );
    }

    #[test]
    fn challenge_names_the_scheme() {
        assert_eq!(SessionIdScheme::new().challenge(), "SessionID");
    }
}
