/*
 * Responsibility
 * - Shared context attached to the Router (AppState)
 *   - schemes: registry of authentication schemes, built once in app::build_state
 * - Cheap to Clone (Arc inside)
 */
use std::sync::Arc;

use crate::services::auth::SchemeRegistry;

#[derive(Clone, Debug)]
pub struct AppState {
    pub schemes: Arc<SchemeRegistry>,
}

impl AppState {
    pub fn new(schemes: Arc<SchemeRegistry>) -> Self {
        Self { schemes }
    }
}
