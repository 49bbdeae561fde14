//! Transform factory builder

use super::hierarchy::Hierarchy;
use super::types::{Installed, Registration};
use super::TransformFactory;
use crate::model::{Model, TypeKey};
use crate::transform::{Transform, TransformInfo};
use std::sync::Arc;
use tracing::trace;

/// Builder for a [`TransformFactory`].
///
/// Installation order matters: transforms registered under the same model
/// type are tried in the order they were installed.
///
/// # Example
/// ```rust,ignore
/// let factory = TransformFactory::builder("java")
///     .extends::<Enum, Class>(|e| &e.class)
///     .implements::<TextValue, dyn Value>(|v| v)
///     .install::<Class, String, _>(ClassView)
///     .install_capability::<dyn Value, String, _>(ValueView)
///     .build();
/// ```
pub struct TransformFactoryBuilder {
    name: String,
    hierarchy: Hierarchy,
    registrations: Vec<Registration>,
}

impl TransformFactoryBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hierarchy: Hierarchy::default(),
            registrations: Vec::new(),
        }
    }

    /// Install a transform for the concrete model type `M`.
    ///
    /// It also applies to every type declared to extend `M`.
    #[must_use]
    pub fn install<M, B, T>(mut self, transform: T) -> Self
    where
        M: Model,
        B: 'static,
        T: Transform<M, B>,
    {
        self.hierarchy.declare::<M>();
        self.register::<M, B, T>(transform);
        self
    }

    /// Install a transform for the capability `C`, usually a trait object
    /// type such as `dyn Value`.
    ///
    /// It applies to every type declared to implement `C` with
    /// [`implements`](Self::implements), and to their subtypes.
    #[must_use]
    pub fn install_capability<C, B, T>(mut self, transform: T) -> Self
    where
        C: ?Sized + 'static,
        B: 'static,
        T: Transform<C, B>,
    {
        self.register::<C, B, T>(transform);
        self
    }

    /// Declare `P` as the superclass of `S`.
    ///
    /// A type has at most one superclass; declaring another replaces it.
    #[must_use]
    pub fn extends<S: Model, P: Model>(mut self, upcast: fn(&S) -> &P) -> Self {
        self.hierarchy.set_parent(upcast);
        self
    }

    /// Declare that `S` can be viewed as the capability `C`.
    #[must_use]
    pub fn implements<S: Model, C: ?Sized + 'static>(mut self, upcast: fn(&S) -> &C) -> Self {
        self.hierarchy.add_capability(upcast);
        self
    }

    /// Declare `D` as a parent capability of `C`.
    ///
    /// Every type implementing `C` then also resolves transforms installed
    /// for `D`, after its own capabilities.
    #[must_use]
    pub fn extends_capability<C, D>(mut self, upcast: fn(&C) -> &D) -> Self
    where
        C: ?Sized + 'static,
        D: ?Sized + 'static,
    {
        self.hierarchy.add_capability_parent(upcast);
        self
    }

    /// Make `M` known without installing anything for it.
    ///
    /// Needed only for types that get all their transforms through a
    /// capability and are never mentioned by `extends` or `implements`.
    #[must_use]
    pub fn declare<M: Model>(mut self) -> Self {
        self.hierarchy.declare::<M>();
        self
    }

    /// Append everything installed and declared in `other` after this
    /// builder's own installations.
    #[must_use]
    pub fn merge(mut self, other: TransformFactoryBuilder) -> Self {
        self.hierarchy.merge(other.hierarchy);
        self.registrations.extend(other.registrations);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Compile the resolution tables.
    pub fn build(self) -> TransformFactory {
        TransformFactory::compile(self.name, self.hierarchy, self.registrations)
    }

    fn register<A, B, T>(&mut self, transform: T)
    where
        A: ?Sized + 'static,
        B: 'static,
        T: Transform<A, B>,
    {
        let registration = Registration {
            key: TypeKey::of::<A>(),
            result: TypeKey::of::<B>(),
            info: TransformInfo::of::<T>(),
            installed: Arc::new(Installed::<B>::new::<A, T>(transform)),
        };
        trace!(
            factory = %self.name,
            model = registration.key.short_name(),
            result = registration.result.short_name(),
            transform = registration.info.short_name(),
            "Installing transform"
        );
        self.registrations.push(registration);
    }
}
