//! Service provider registry
//!
//! Interop definitions delegate creation to providers looked up by key.
//! Providers come from two places:
//!
//! - link-time registration into [`SERVICE_PROVIDERS`] via
//!   `#[linkme::distributed_slice(SERVICE_PROVIDERS)]`
//! - runtime registration with [`ProviderRegistry::with_provider`]
//!
//! Runtime providers shadow link-time ones with the same name.

use defres_domain::error::{Error, Result};
use defres_domain::ports::{Container, PreviousAccessor, ServiceRegistry};
use defres_domain::value::Value;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Provider function: entry name, container, optional previous accessor
pub type ServiceFactoryFn = fn(&str, &dyn Container, Option<PreviousAccessor>) -> Result<Value>;

type RuntimeProviderFn =
    dyn Fn(&str, &dyn Container, Option<PreviousAccessor>) -> Result<Value> + Send + Sync;

/// Registry entry for link-time service providers
pub struct ServiceProviderEntry {
    /// Unique provider key referenced by interop definitions
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Creates the requested entry
    pub create: ServiceFactoryFn,
}

#[linkme::distributed_slice]
pub static SERVICE_PROVIDERS: [ServiceProviderEntry] = [..];

struct RuntimeProvider {
    description: String,
    create: Arc<RuntimeProviderFn>,
}

/// [`ServiceRegistry`] over link-time and runtime providers
#[derive(Default)]
pub struct ProviderRegistry {
    providers: IndexMap<String, RuntimeProvider>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider at runtime
    pub fn with_provider<N, D, F>(mut self, name: N, description: D, create: F) -> Self
    where
        N: Into<String>,
        D: Into<String>,
        F: Fn(&str, &dyn Container, Option<PreviousAccessor>) -> Result<Value>
            + Send
            + Sync
            + 'static,
    {
        self.providers.insert(
            name.into(),
            RuntimeProvider {
                description: description.into(),
                create: Arc::new(create),
            },
        );
        self
    }

    /// Whether a provider is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(name) || SERVICE_PROVIDERS.iter().any(|e| e.name == name)
    }

    /// Names and descriptions of every provider this registry can use
    pub fn providers(&self) -> Vec<(String, String)> {
        let mut all: Vec<(String, String)> = self
            .providers
            .iter()
            .map(|(name, p)| (name.clone(), p.description.clone()))
            .collect();
        for entry in SERVICE_PROVIDERS {
            if !self.providers.contains_key(entry.name) {
                all.push((entry.name.to_string(), entry.description.to_string()));
            }
        }
        all
    }
}

impl ServiceRegistry for ProviderRegistry {
    fn create_service(
        &self,
        registry_key: &str,
        name: &str,
        container: &dyn Container,
        previous: Option<PreviousAccessor>,
    ) -> Result<Value> {
        if let Some(provider) = self.providers.get(registry_key) {
            debug!(registry_key, name, "Creating service with runtime provider");
            return (provider.create)(name, container, previous);
        }

        for entry in SERVICE_PROVIDERS {
            if entry.name == registry_key {
                debug!(registry_key, name, "Creating service with linked provider");
                return (entry.create)(name, container, previous);
            }
        }

        let available: Vec<String> = self.providers().into_iter().map(|(n, _)| n).collect();
        Err(Error::configuration(format!(
            "Unknown service provider '{}' for entry \"{}\". Available providers: {:?}",
            registry_key, name, available
        )))
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.providers.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// List all link-time service providers
///
/// Returns (name, description) tuples.
pub fn list_service_providers() -> Vec<(&'static str, &'static str)> {
    SERVICE_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
