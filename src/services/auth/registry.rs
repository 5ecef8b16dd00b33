/*
 * Responsibility
 * - Name -> scheme mapping, built once at startup and shared through AppState
 * - Resolve the scheme names a route declares (unknown names fail at router build time)
 */
use std::{collections::HashMap, sync::Arc};

use super::scheme::AuthScheme;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("authentication scheme already registered: {0}")]
    Duplicate(&'static str),

    #[error("unknown authentication scheme: {0}")]
    Unknown(String),

    #[error("route declares no authentication scheme")]
    Empty,
}

#[derive(Debug, Default)]
pub struct SchemeRegistry {
    schemes: HashMap<&'static str, Arc<dyn AuthScheme>>,
}

impl SchemeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, scheme: Arc<dyn AuthScheme>) -> Result<(), RegistryError> {
        let name = scheme.name();
        if self.schemes.contains_key(name) {
            return Err(RegistryError::Duplicate(name));
        }

        tracing::debug!(scheme = name, "authentication scheme registered");
        self.schemes.insert(name, scheme);
        Ok(())
    }

    /// Builder-style `register`.
    pub fn with(mut self, scheme: Arc<dyn AuthScheme>) -> Result<Self, RegistryError> {
        self.register(scheme)?;
        Ok(self)
    }

    fn get(&self, name: &str) -> Option<Arc<dyn AuthScheme>> {
        self.schemes.get(name).cloned()
    }

    /// Resolve a route's declared schemes, preserving declaration order.
    pub fn resolve(&self, names: &[&str]) -> Result<Vec<Arc<dyn AuthScheme>>, RegistryError> {
        if names.is_empty() {
            return Err(RegistryError::Empty);
        }

        names
            .iter()
            .map(|name| {
                self.get(name)
                    .ok_or_else(|| RegistryError::Unknown((*name).to_string()))
            })
            .collect()
    }

    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.schemes.keys().copied().collect();
        names.sort_unstable();
        names
    }
}
