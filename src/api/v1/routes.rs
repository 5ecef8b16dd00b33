/*
 * Responsibility
 * - v1 URL layout
 * - Which authentication scheme(s) each route group accepts
 *   - /session/items -> SessionID
 *   - /basic/items   -> Basic
 *   - /items         -> SessionID or Basic
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::items::list_items;
use crate::middleware::auth;
use crate::services::auth::{BASIC_SCHEME, RegistryError, SESSION_SCHEME};
use crate::state::AppState;

pub fn routes(state: &AppState) -> Result<Router<AppState>, RegistryError> {
    let session = auth::require(
        Router::new().route("/session/items", get(list_items)),
        &state.schemes,
        &[SESSION_SCHEME],
    )?;

    let basic = auth::require(
        Router::new().route("/basic/items", get(list_items)),
        &state.schemes,
        &[BASIC_SCHEME],
    )?;

    let either = auth::require(
        Router::new().route("/items", get(list_items)),
        &state.schemes,
        &[SESSION_SCHEME, BASIC_SCHEME],
    )?;

    Ok(Router::new().merge(session).merge(basic).merge(either))
}
