// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Name-indirected provider resolution.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{LintgateError, ProviderError, Result};

use super::builtin;
use super::module::ProviderModule;

/// A pluggable way to load a provider module by name.
///
/// `Ok(None)` means this source does not know the name and the next source
/// should be tried; `Err` aborts resolution for that name.
pub trait ProviderSource: Send + Sync {
    fn load(&self, name: &str) -> Result<Option<ProviderModule>>;
}

/// Process-wide provider registry.
///
/// Resolution consults already-registered modules first, then each source in
/// registration order. Resolved modules are cached, so repeated resolutions
/// of the same name return the same module without re-loading.
#[derive(Default)]
pub struct ProviderRegistry {
    sources: Vec<Box<dyn ProviderSource>>,
    cache: RwLock<HashMap<String, Arc<ProviderModule>>>,
}

impl ProviderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the builtin provider pre-registered.
    pub fn with_builtin() -> Self {
        let registry = Self::new();
        registry.register(builtin::SOURCE_NAME, builtin::module());
        registry
    }

    /// Register a provider module under a source name.
    pub fn register(&self, name: impl Into<String>, module: ProviderModule) {
        let name = name.into();
        tracing::debug!("Registering provider: {}", name);
        self.cache
            .write()
            .expect("provider cache lock poisoned")
            .insert(name, Arc::new(module));
    }

    /// Add a loader consulted for names that are not yet registered.
    pub fn add_source(&mut self, source: Box<dyn ProviderSource>) {
        self.sources.push(source);
    }

    /// Resolve a provider by source name.
    ///
    /// Load errors of any kind are reported as [`ProviderError::LoadFailed`]
    /// carrying the underlying error's message; an unknown name is
    /// [`ProviderError::NotFound`].
    pub fn resolve(&self, name: &str) -> Result<Arc<ProviderModule>> {
        if let Some(module) = self
            .cache
            .read()
            .expect("provider cache lock poisoned")
            .get(name)
        {
            return Ok(module.clone());
        }

        for source in &self.sources {
            match source.load(name) {
                Ok(Some(module)) => {
                    tracing::debug!("Loaded provider: {}", name);
                    let module = Arc::new(module);
                    self.cache
                        .write()
                        .expect("provider cache lock poisoned")
                        .insert(name.to_string(), module.clone());
                    return Ok(module);
                }
                Ok(None) => continue,
                Err(e) => {
                    return Err(LintgateError::Provider(ProviderError::LoadFailed {
                        name: name.to_string(),
                        message: e.to_string(),
                    }));
                }
            }
        }

        Err(LintgateError::Provider(ProviderError::NotFound {
            name: name.to_string(),
        }))
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cached: Vec<String> = self
            .cache
            .read()
            .expect("provider cache lock poisoned")
            .keys()
            .cloned()
            .collect();
        f.debug_struct("ProviderRegistry")
            .field("sources", &self.sources.len())
            .field("cached", &cached)
            .finish()
    }
}
