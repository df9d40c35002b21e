//! Interop Strategy Tests

use crate::test_utils::{DefinitionContainer, dispatcher_over, no_params};
use defres_domain::definition::Definition;
use defres_domain::error::{Error, Result};
use defres_domain::ports::{Container, PreviousAccessor};
use defres_domain::value::Value;
use defres_infrastructure::adapters::InMemoryContainer;
use defres_infrastructure::di::{
    ProviderRegistry, ResolverDispatcher, SERVICE_PROVIDERS, ServiceProviderEntry,
    list_service_providers,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn linked_wrapper(
    name: &str,
    _container: &dyn Container,
    previous: Option<PreviousAccessor>,
) -> Result<Value> {
    let inner = match previous {
        Some(previous) => previous()?,
        None => Value::Null,
    };
    Ok(Value::List(vec![Value::from(name), inner]))
}

#[linkme::distributed_slice(SERVICE_PROVIDERS)]
static LINKED_WRAPPER: ServiceProviderEntry = ServiceProviderEntry {
    name: "test.wrapper",
    description: "Wraps the previous definition with the entry name",
    create: linked_wrapper,
};

fn registry_dispatcher(registry: ProviderRegistry) -> ResolverDispatcher {
    ResolverDispatcher::builder(Arc::new(InMemoryContainer::new().with_entry("region", "eu")))
        .with_registry(Arc::new(registry))
        .build()
}

#[test]
fn test_linked_provider_is_listed() {
    assert!(
        list_service_providers()
            .iter()
            .any(|(name, _)| *name == "test.wrapper")
    );
}

#[test]
fn test_linked_provider_creates_service() {
    let dispatcher = registry_dispatcher(ProviderRegistry::new());
    let definition = Definition::interop("cache", "test.wrapper")
        .with_previous(Definition::value("cache", "array"));

    assert_eq!(
        dispatcher.resolve(&definition, &no_params()).unwrap(),
        Value::List(vec![Value::from("cache"), Value::from("array")])
    );
}

#[test]
fn test_runtime_provider_receives_container() {
    let registry = ProviderRegistry::new().with_provider("regional", "", |name, container, _| {
        let region = container.get("region")?;
        Ok(Value::from(format!(
            "{}@{}",
            name,
            region.as_str().unwrap_or_default()
        )))
    });
    let dispatcher = registry_dispatcher(registry);
    let definition = Definition::interop("cache", "regional");

    assert!(dispatcher.is_resolvable(&definition, &no_params()));
    assert_eq!(
        dispatcher.resolve(&definition, &no_params()).unwrap(),
        Value::from("cache@eu")
    );
}

#[test]
fn test_previous_accessor_is_not_called_eagerly() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let registry = ProviderRegistry::new().with_provider("ignore", "", |_, _, previous| {
        Ok(Value::Bool(previous.is_some()))
    });
    let dispatcher = registry_dispatcher(registry);
    let definition = Definition::interop("cache", "ignore").with_previous(Definition::factory(
        "cache",
        move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Value::Null)
        },
    ));

    assert_eq!(
        dispatcher.resolve(&definition, &no_params()).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_no_previous_passes_no_accessor() {
    let registry = ProviderRegistry::new().with_provider("probe", "", |_, _, previous| {
        Ok(Value::Bool(previous.is_some()))
    });
    let dispatcher = registry_dispatcher(registry);

    assert_eq!(
        dispatcher
            .resolve(&Definition::interop("cache", "probe"), &no_params())
            .unwrap(),
        Value::Bool(false)
    );
}

#[test]
fn test_registry_errors_propagate() {
    let registry = ProviderRegistry::new().with_provider("broken", "", |name, _, _| {
        Err(Error::not_found(format!("{name}.backend")))
    });
    let dispatcher = registry_dispatcher(registry);

    let err = dispatcher
        .resolve(&Definition::interop("cache", "broken"), &no_params())
        .unwrap_err();
    assert!(matches!(err, Error::NotFound { ref name } if name == "cache.backend"));

    let err = dispatcher
        .resolve(&Definition::interop("cache", "unknown"), &no_params())
        .unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("test.wrapper"));
}

#[test]
fn test_previous_accessor_resolves_through_container_definitions() {
    let (container, dispatcher) = DefinitionContainer::build_with(
        [
            Definition::value("driver", "redis"),
            Definition::interop("cache", "test.wrapper")
                .with_previous(Definition::alias("cache", "driver")),
        ],
        |builder| builder.with_registry(Arc::new(ProviderRegistry::new())),
    );

    assert_eq!(
        dispatcher
            .resolve(container.definition("cache"), &no_params())
            .unwrap(),
        Value::List(vec![Value::from("cache"), Value::from("redis")])
    );
}

#[test]
fn test_interop_is_resolvable_only_with_registry() {
    let definition = Definition::interop("cache", "anything");

    assert!(!dispatcher_over(InMemoryContainer::new()).is_resolvable(&definition, &no_params()));
    assert!(registry_dispatcher(ProviderRegistry::new()).is_resolvable(&definition, &no_params()));
}
