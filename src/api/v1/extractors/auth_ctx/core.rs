use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::services::auth::Principal;

/// Handler-side access to the authenticated `Principal`.
/// Relies on `middleware::auth::require` having inserted it into request extensions.
/// Missing => 401 (the route was not wrapped by the auth middleware).
#[derive(Debug, Clone)]
pub struct Authenticated(pub Principal);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .map(Authenticated)
            .ok_or_else(|| {
                tracing::error!(path = %parts.uri.path(), "handler requires authentication but route has no auth layer");
                AppError::unauthorized(Vec::new(), "not authenticated")
            })
    }
}
