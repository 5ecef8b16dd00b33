//! Scheme dispatch: run the schemes a route declares -> Principal into extensions.
//!
//! - Schemes are resolved against the `SchemeRegistry` when the router is built,
//!   so a typo in a scheme name fails at startup, not per request.
//! - Declared schemes run in order; the first success wins.
//! - Registered schemes the route did not declare never run.
//! - If every declared scheme fails: 401 with one `WWW-Authenticate` per declared scheme.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request},
    middleware::{self, Next},
    response::Response,
};

use crate::error::AppError;
use crate::services::auth::{AuthScheme, Principal, RegistryError, SchemeRegistry};
use crate::state::AppState;

/// Schemes accepted by one route group.
#[derive(Clone, Debug)]
pub struct RouteAuth {
    schemes: Arc<[Arc<dyn AuthScheme>]>,
}

impl RouteAuth {
    pub fn resolve(registry: &SchemeRegistry, names: &[&str]) -> Result<Self, RegistryError> {
        let schemes = registry.resolve(names)?;
        Ok(Self {
            schemes: schemes.into(),
        })
    }

    pub fn authenticate(&self, headers: &HeaderMap) -> Result<Principal, AppError> {
        let mut failures = Vec::with_capacity(self.schemes.len());

        for scheme in self.schemes.iter() {
            match scheme.try_authenticate(headers) {
                Ok(principal) => {
                    tracing::debug!(scheme = principal.scheme, "request authenticated");
                    return Ok(principal);
                }
                Err(err) => {
                    tracing::warn!(scheme = scheme.name(), error = %err, "authentication failed");
                    failures.push((scheme.name(), err));
                }
            }
        }

        let reason = match failures.as_slice() {
            [(_, err)] => err.to_string(),
            _ => failures
                .iter()
                .map(|(name, err)| format!("{name}: {err}"))
                .collect::<Vec<_>>()
                .join("; "),
        };

        let challenges = self.schemes.iter().map(|s| s.challenge()).collect();

        Err(AppError::unauthorized(challenges, reason))
    }
}

/// Protect every route in `router` with the named schemes.
///
/// ```ignore
/// let items = Router::new().route("/session/items", get(list_items));
/// let items = middleware::auth::require(items, &state.schemes, &[SESSION_SCHEME])?;
/// ```
pub fn require(
    router: Router<AppState>,
    registry: &SchemeRegistry,
    names: &[&str],
) -> Result<Router<AppState>, RegistryError> {
    let route_auth = RouteAuth::resolve(registry, names)?;
    // route_layer: unmatched paths stay 404 instead of 401
    Ok(router.route_layer(middleware::from_fn_with_state(route_auth, dispatch)))
}

async fn dispatch(
    State(route_auth): State<RouteAuth>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let principal = route_auth.authenticate(req.headers())?;

    // middleware -> extractor
    req.extensions_mut().insert(principal);

    Ok(next.run(req).await)
}
