/// Factory: build the `SchemeRegistry` from application `Config`.
use std::sync::Arc;

use anyhow::Context;

use crate::config::Config;
use crate::services::auth::{BasicScheme, SchemeRegistry, SessionIdScheme};

pub fn build_scheme_registry(config: &Config) -> anyhow::Result<Arc<SchemeRegistry>> {
    let basic = BasicScheme::new(&config.basic_auth_realm, config.basic_credential_split)
        .context("invalid BASIC_AUTH_REALM")?;

    let registry = SchemeRegistry::new()
        .with(Arc::new(SessionIdScheme::new()))?
        .with(Arc::new(basic))?;

    tracing::info!(schemes = ?registry.names(), "authentication schemes ready");

    Ok(Arc::new(registry))
}
