//! Object Strategy Tests

use crate::test_utils::{
    DefinitionContainer, RecordingConstructor, Service, dispatcher_over, no_params,
};
use defres_domain::definition::{Definition, MethodInjection, ObjectDefinition, ParameterSpec};
use defres_domain::error::Error;
use defres_domain::value::{Parameters, Value};
use defres_infrastructure::adapters::InMemoryContainer;
use defres_infrastructure::config::ResolverConfig;
use defres_infrastructure::di::ResolverDispatcher;
use std::sync::Arc;

#[test]
fn test_constructor_arguments_resolved_in_order() {
    let constructor = RecordingConstructor::new("Mailer");
    let dispatcher = dispatcher_over(
        InMemoryContainer::new()
            .with_entry("smtp.host", "mail.local")
            .with_entry("Transport", Value::object(String::from("smtp"))),
    );
    let definition = Definition::object(
        "mailer",
        ObjectDefinition::new("Mailer", constructor.clone())
            .with_parameter(
                ParameterSpec::new("host").with_value(Definition::alias("host", "smtp.host")),
            )
            .with_parameter(ParameterSpec::new("transport").with_type_hint("Transport"))
            .with_parameter(ParameterSpec::new("port").with_default(25_i64))
            .with_parameter(ParameterSpec::new("logger").optional()),
    );

    let value = dispatcher.resolve(&definition, &no_params()).unwrap();
    let service = value.downcast::<Service>().unwrap();

    assert_eq!(constructor.constructed(), 1);
    assert_eq!(service.class_name, "Mailer");
    assert_eq!(service.arguments[0], Value::from("mail.local"));
    assert_eq!(
        service.arguments[1].downcast::<String>().unwrap().as_str(),
        "smtp"
    );
    assert_eq!(service.arguments[2], Value::Int(25));
    assert!(service.arguments[3].is_null());
}

#[test]
fn test_call_parameters_fill_unset_arguments() {
    let constructor = RecordingConstructor::new("Report");
    let dispatcher = dispatcher_over(InMemoryContainer::new());
    let definition = Definition::object(
        "report",
        ObjectDefinition::new("Report", constructor)
            .with_parameter(ParameterSpec::new("title").with_default("untitled")),
    );

    let mut parameters = Parameters::new();
    parameters.insert("title".to_string(), Value::from("Q3"));

    let value = dispatcher.resolve(&definition, &parameters).unwrap();
    assert_eq!(
        value.downcast::<Service>().unwrap().arguments,
        vec![Value::from("Q3")]
    );
}

#[test]
fn test_failed_argument_prevents_construction() {
    let constructor = RecordingConstructor::new("Mailer");
    let dispatcher = dispatcher_over(InMemoryContainer::new());
    let definition = Definition::object(
        "mailer",
        ObjectDefinition::new("Mailer", constructor.clone())
            .with_parameter(ParameterSpec::new("from").with_value("noreply@example.com"))
            .with_parameter(
                ParameterSpec::new("host").with_value(Definition::alias("host", "smtp.host")),
            ),
    );

    let err = dispatcher.resolve(&definition, &no_params()).unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(constructor.constructed(), 0);
}

#[test]
fn test_unguessable_parameter_is_configuration_error() {
    let constructor = RecordingConstructor::new("Mailer");
    let dispatcher = dispatcher_over(InMemoryContainer::new());
    let definition = Definition::object(
        "mailer",
        ObjectDefinition::new("Mailer", constructor.clone())
            .with_parameter(ParameterSpec::new("transport").with_type_hint("Transport")),
    );

    let err = dispatcher.resolve(&definition, &no_params()).unwrap_err();

    assert!(err.is_configuration());
    assert!(err.to_string().contains("Parameter $transport of Mailer::__construct()"));
    assert_eq!(constructor.constructed(), 0);
}

#[test]
fn test_abstract_class_is_not_instantiable() {
    let dispatcher = dispatcher_over(InMemoryContainer::new());
    let definition = Definition::object("repo", ObjectDefinition::abstract_class("Repository"));

    assert!(!dispatcher.is_resolvable(&definition, &no_params()));
    let err = dispatcher.resolve(&definition, &no_params()).unwrap_err();
    assert!(err.to_string().contains("the class Repository is not instantiable"));
}

#[test]
fn test_properties_and_methods_injected_in_order() {
    let constructor = RecordingConstructor::new("Logger");
    let dispatcher = dispatcher_over(InMemoryContainer::new().with_entry("log.level", "debug"));
    let definition = Definition::object(
        "logger",
        ObjectDefinition::new("Logger", constructor)
            .with_property("channel", "app")
            .with_property("level", Definition::alias("level", "log.level"))
            .with_method(
                MethodInjection::new("pushHandler")
                    .with_parameter(ParameterSpec::new("handler").with_value("stream")),
            )
            .with_method(MethodInjection::new("pushProcessor")),
    );

    let value = dispatcher.resolve(&definition, &no_params()).unwrap();
    let service = value.downcast::<Service>().unwrap();

    assert_eq!(service.property("channel"), Some(Value::from("app")));
    assert_eq!(service.property("level"), Some(Value::from("debug")));
    let calls = service.calls.lock().unwrap();
    assert_eq!(calls[0], ("pushHandler".to_string(), vec![Value::from("stream")]));
    assert_eq!(calls[1], ("pushProcessor".to_string(), vec![]));
}

#[test]
fn test_failed_property_injection_aborts_creation() {
    let constructor = RecordingConstructor::new("Logger");
    let dispatcher = dispatcher_over(InMemoryContainer::new());
    let definition = Definition::object(
        "logger",
        ObjectDefinition::new("Logger", constructor.clone())
            .with_property("fail", true)
            .with_method(MethodInjection::new("never")),
    );

    let err = dispatcher.resolve(&definition, &no_params()).unwrap_err();

    assert!(err.is_construction());
    assert!(err.to_string().contains("object definition 'logger'"));
    assert_eq!(constructor.constructed(), 1);
}

#[test]
fn test_failed_method_injection_is_construction_error() {
    let dispatcher = dispatcher_over(InMemoryContainer::new());
    let definition = Definition::object(
        "logger",
        ObjectDefinition::new("Logger", RecordingConstructor::new("Logger"))
            .with_method(MethodInjection::new("fail")),
    );

    let err = dispatcher.resolve(&definition, &no_params()).unwrap_err();
    match err {
        Error::Construction { name, kind, .. } => {
            assert_eq!(name, "logger");
            assert_eq!(kind, "object");
        }
        other => panic!("Expected Construction error, got {other:?}"),
    }
}

#[test]
fn test_type_hint_resolves_through_container_definitions() {
    let transport = RecordingConstructor::new("SmtpTransport");
    let (container, dispatcher) = DefinitionContainer::build([
        Definition::object("Transport", ObjectDefinition::new("SmtpTransport", transport.clone())),
        Definition::object(
            "mailer",
            ObjectDefinition::new("Mailer", RecordingConstructor::new("Mailer"))
                .with_parameter(ParameterSpec::new("transport").with_type_hint("Transport")),
        ),
    ]);

    let mailer = dispatcher
        .resolve(container.definition("mailer"), &no_params())
        .unwrap();
    let service = mailer.downcast::<Service>().unwrap();
    let injected = service.arguments[0].downcast::<Service>().unwrap();

    assert_eq!(injected.class_name, "SmtpTransport");
    assert_eq!(transport.constructed(), 1);
}

#[test]
fn test_lazy_objects_built_eagerly_when_deferral_disabled() {
    let constructor = RecordingConstructor::new("Mailer");
    let dispatcher = ResolverDispatcher::builder(Arc::new(InMemoryContainer::new()))
        .with_config(&ResolverConfig {
            deferred_objects: false,
        })
        .build();
    let definition = Definition::object(
        "mailer",
        ObjectDefinition::new("Mailer", constructor.clone()).lazy(),
    );

    let value = dispatcher.resolve(&definition, &no_params()).unwrap();

    assert!(value.as_deferred().is_none());
    assert_eq!(constructor.constructed(), 1);
}
