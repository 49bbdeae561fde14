//! The transform capability.
//!
//! A [`Transform`] maps one model type `A` to at most one result of type
//! `B`. It receives the [`Generator`] driving the current render so it can
//! render its children, look at its ancestors on the render stack, and claim
//! names in the dependency manager.
//!
//! # Example
//!
//! ```rust,ignore
//! struct GreetingView;
//!
//! impl Transform<Greeting, String> for GreetingView {
//!     fn transform<'m>(
//!         &self,
//!         _generator: &Generator<'m>,
//!         _model: &'m Greeting,
//!     ) -> CodegenResult<Option<String>> {
//!         Ok(Some("HELLO".to_string()))
//!     }
//! }
//! ```

use crate::error::CodegenResult;
use crate::generator::Generator;
use crate::model::short_type_name;
use std::any::TypeId;
use std::fmt;
use std::marker::PhantomData;

/// Render a model of type `A` into a result of type `B`.
///
/// `A` is either a concrete model type or a capability such as
/// `dyn Value`. Returning `Ok(None)` means "not applicable to this model"
/// and lets the next candidate run. Transforms hold no per-render state:
/// one instance is shared by every render using the factory.
pub trait Transform<A: ?Sized, B>: Send + Sync + 'static {
    fn transform<'m>(&self, generator: &Generator<'m>, model: &'m A) -> CodegenResult<Option<B>>;
}

/// A [`Transform`] backed by a closure. Build one with [`from_fn`].
pub struct FnTransform<A: ?Sized, B, F> {
    f: F,
    _phantom: PhantomData<fn(&A) -> B>,
}

/// Wrap a closure as a [`Transform`].
///
/// ```rust,ignore
/// let view = from_fn(|_generator, model: &Greeting| Ok(Some(model.text.clone())));
/// ```
pub fn from_fn<A, B, F>(f: F) -> FnTransform<A, B, F>
where
    A: ?Sized + 'static,
    B: 'static,
    F: for<'m> Fn(&Generator<'m>, &'m A) -> CodegenResult<Option<B>> + Send + Sync + 'static,
{
    FnTransform {
        f,
        _phantom: PhantomData,
    }
}

impl<A, B, F> Transform<A, B> for FnTransform<A, B, F>
where
    A: ?Sized + 'static,
    B: 'static,
    F: for<'m> Fn(&Generator<'m>, &'m A) -> CodegenResult<Option<B>> + Send + Sync + 'static,
{
    fn transform<'m>(&self, generator: &Generator<'m>, model: &'m A) -> CodegenResult<Option<B>> {
        (self.f)(generator, model)
    }
}

/// Identity of an installed transform implementation.
///
/// Two installations of the same transform type share one identity, which
/// is what variant filtering in
/// [`Generator::render_with`](crate::Generator::render_with) matches on.
#[derive(Clone, Copy)]
pub struct TransformInfo {
    id: TypeId,
    name: &'static str,
}

impl TransformInfo {
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Returns true if this is an instance of transform type `T`.
    pub fn is<T: 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    pub fn type_id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn short_name(&self) -> &'static str {
        short_type_name(self.name)
    }
}

impl PartialEq for TransformInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TransformInfo {}

impl fmt::Debug for TransformInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TransformInfo").field(&self.name).finish()
    }
}

impl fmt::Display for TransformInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}
