//! Resolver strategies
//!
//! One strategy per definition kind. Each implements [`KindResolver`] for the
//! payload of its kind and re-enters the dispatcher for any nested
//! definition, whatever its kind.
//!
//! ```text
//! ResolverDispatcher::resolve(definition)
//!        │  match definition.kind()
//!        ▼
//! KindResolver<Payload>::resolve(&Resolution, payload)
//!        │  nested entries / previous definitions
//!        └──────────────► ResolverDispatcher::resolve(..)
//! ```

mod alias;
mod array;
mod decorator;
mod dot_notation;
mod environment;
mod factory;
mod interop;
mod object;
mod string;
mod value;

pub use alias::AliasResolver;
pub use array::ArrayResolver;
pub use decorator::DecoratorResolver;
pub use dot_notation::DotNotationResolver;
pub use environment::EnvironmentVariableResolver;
pub use factory::FactoryResolver;
pub use interop::InteropResolver;
pub use object::ObjectResolver;
pub use string::StringResolver;
pub use value::{InstanceResolver, ValueResolver};

use crate::di::dispatcher::ResolverDispatcher;
use defres_domain::definition::{Definition, DefinitionTag, Entry};
use defres_domain::error::Result;
use defres_domain::value::{Parameters, Value};

/// Turns definitions into values
pub trait DefinitionResolver: Send + Sync {
    /// Resolve a definition to a value
    ///
    /// # Arguments
    /// * `definition` - Object that defines how the value should be obtained
    /// * `parameters` - Optional call-time parameters used to build the entry
    fn resolve(&self, definition: &Definition, parameters: &Parameters) -> Result<Value>;

    /// Check if a definition can be resolved
    ///
    /// `false` means [`DefinitionResolver::resolve`] fails before any side effect.
    fn is_resolvable(&self, definition: &Definition, parameters: &Parameters) -> bool;
}

/// Strategy for one definition kind, typed over that kind's payload
pub trait KindResolver<D>: Send + Sync {
    fn resolve(&self, resolution: &Resolution<'_>, definition: &D) -> Result<Value>;

    fn is_resolvable(&self, resolution: &Resolution<'_>, definition: &D) -> bool {
        let _ = (resolution, definition);
        true
    }
}

/// The definition currently being resolved, with a handle back to dispatch
pub struct Resolution<'a> {
    definition: &'a Definition,
    parameters: &'a Parameters,
    dispatcher: &'a ResolverDispatcher,
}

impl<'a> Resolution<'a> {
    pub(crate) fn new(
        definition: &'a Definition,
        parameters: &'a Parameters,
        dispatcher: &'a ResolverDispatcher,
    ) -> Self {
        Self {
            definition,
            parameters,
            dispatcher,
        }
    }

    pub fn definition(&self) -> &'a Definition {
        self.definition
    }

    pub fn name(&self) -> &'a str {
        self.definition.name()
    }

    pub fn tag(&self) -> DefinitionTag {
        self.definition.tag()
    }

    /// Call-time parameters of this resolution
    pub fn parameters(&self) -> &'a Parameters {
        self.parameters
    }

    pub fn dispatcher(&self) -> &'a ResolverDispatcher {
        self.dispatcher
    }

    /// Resolve a nested definition through the dispatcher
    pub fn resolve_nested(&self, definition: &Definition) -> Result<Value> {
        self.dispatcher.resolve(definition, &Parameters::new())
    }

    /// Literal entries pass through, definitions are dispatched
    pub fn resolve_entry(&self, entry: &Entry) -> Result<Value> {
        match entry {
            Entry::Literal(value) => Ok(value.clone()),
            Entry::Definition(definition) => self.resolve_nested(definition),
        }
    }
}
