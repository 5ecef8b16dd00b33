/*
 * Responsibility
 * - The capability every authentication scheme implements (AuthScheme)
 * - The identity placeholder attached to authenticated requests (Principal)
 *
 * Notes
 * - Matchers only inspect headers. Writing the 401 response is the dispatcher's job;
 *   the matcher contributes its challenge through `challenge()`.
 */
use std::fmt;

use axum::http::{HeaderMap, HeaderValue};

use super::error::AuthError;

/// Result of running one scheme against one request.
pub type AuthOutcome = Result<Principal, AuthError>;

/// Authenticated identity.
///
/// Credentials are not verified, so the only thing this proves is
/// "authenticated under scheme X".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub scheme: &'static str,
}

impl Principal {
    pub fn new(scheme: &'static str) -> Self {
        Self { scheme }
    }
}

pub trait AuthScheme: Send + Sync {
    /// Registration name. Routes refer to the scheme by this name.
    fn name(&self) -> &'static str;

    /// `WWW-Authenticate` value sent when this scheme rejects a request.
    fn challenge(&self) -> HeaderValue;

    fn try_authenticate(&self, headers: &HeaderMap) -> AuthOutcome;
}

impl fmt::Debug for dyn AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthScheme")
            .field("name", &self.name())
            .finish()
    }
}
