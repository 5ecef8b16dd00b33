//! HTTP Basic scheme (RFC 7617).
//!
//! Decodes `Basic <base64(user:password)>` into a username/password pair.
//! The pair is not checked against anything: a well-formed credential
//! authenticates.

use axum::http::{HeaderMap, HeaderValue, header::InvalidHeaderValue};
use base64::{Engine as _, engine::general_purpose::STANDARD};

use super::error::AuthError;
use super::header::{authorization_parts, expect_scheme};
use super::scheme::{AuthOutcome, AuthScheme, Principal};

pub const BASIC_SCHEME: &str = "Basic";
pub const DEFAULT_REALM: &str = "My realm";

/// How the decoded `user:password` string is split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BasicCredentialSplit {
    /// Split on the first `:` only; the password may contain `:`.
    #[default]
    FirstColon,
    /// Exactly one `:` allowed; a password containing `:` is rejected.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct BasicScheme {
    challenge: HeaderValue,
    split: BasicCredentialSplit,
}

impl BasicScheme {
    /// Realm must be a valid quoted-string body (validated by `Config`).
    pub fn new(realm: &str, split: BasicCredentialSplit) -> Result<Self, InvalidHeaderValue> {
        let challenge = HeaderValue::from_str(&format!("{BASIC_SCHEME} realm=\"{realm}\""))?;

        Ok(Self { challenge, split })
    }

    pub fn decode(&self, encoded: &str) -> Result<BasicCredentials, AuthError> {
        let bytes = STANDARD
            .decode(encoded)
            .map_err(|_| AuthError::MalformedCredential("credentials are not valid base64"))?;

        let decoded = String::from_utf8(bytes)
            .map_err(|_| AuthError::MalformedCredential("credentials are not valid UTF-8"))?;

        let (username, password) = match self.split {
            BasicCredentialSplit::FirstColon => decoded.split_once(':'),
            BasicCredentialSplit::Strict => {
                let mut fields = decoded.split(':');
                match (fields.next(), fields.next(), fields.next()) {
                    (Some(user), Some(pass), None) => Some((user, pass)),
                    _ => None,
                }
            }
        }
        .ok_or(AuthError::MalformedCredential(
            "expected 'username:password'",
        ))?;

        if username.is_empty() {
            return Err(AuthError::MalformedCredential("username is empty"));
        }

        Ok(BasicCredentials {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

impl Default for BasicScheme {
    fn default() -> Self {
        let split = BasicCredentialSplit::default();
        // DEFAULT_REALM is a valid header value; the bare scheme is the unreachable fallback.
        Self::new(DEFAULT_REALM, split).unwrap_or_else(|_| Self {
            challenge: HeaderValue::from_static(BASIC_SCHEME),
            split,
        })
    }
}

impl AuthScheme for BasicScheme {
    fn name(&self) -> &'static str {
        BASIC_SCHEME
    }

    fn challenge(&self) -> HeaderValue {
        self.challenge.clone()
    }

    fn try_authenticate(&self, headers: &HeaderMap) -> AuthOutcome {
        let (scheme, encoded) = authorization_parts(headers)?;
        expect_scheme(scheme, BASIC_SCHEME)?;

        let credentials = self.decode(encoded)?;

        tracing::debug!(username = %credentials.username, "basic credentials accepted");

        Ok(Principal::new(BASIC_SCHEME))
    }
}
