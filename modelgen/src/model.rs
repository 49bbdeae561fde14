//! Model identity.
//!
//! The engine never looks inside a model. All it needs is the model's
//! runtime type, which [`Model`] exposes through the blanket [`Upcast`]
//! supertrait. Opt a type in with an empty impl:
//!
//! ```rust,ignore
//! #[derive(Debug)]
//! struct Greeting;
//!
//! impl Model for Greeting {}
//! ```

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A node in the tree being rendered.
///
/// Models are owned by the caller and only ever borrowed by the engine.
pub trait Model: Upcast + fmt::Debug + 'static {}

/// Dynamic views of a model, implemented for every sized [`Model`].
///
/// These methods dispatch through the vtable, so calling them on a
/// `&dyn Model` (or any trait object extending `Model`) reports the
/// concrete type behind it.
pub trait Upcast {
    /// The model as [`Any`], for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// The model as a [`Model`] trait object.
    fn as_model(&self) -> &dyn Model;

    /// The Rust type name of the concrete model.
    fn type_name(&self) -> &'static str;
}

impl<T: Model> Upcast for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_model(&self) -> &dyn Model {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

impl dyn Model {
    /// Returns true if the concrete model is a `T`.
    pub fn is<T: Model>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Returns the concrete model if it is a `T`.
    pub fn downcast_ref<T: Model>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// The key of the concrete model type.
    pub fn type_key(&self) -> TypeKey {
        TypeKey {
            id: self.as_any().type_id(),
            name: self.type_name(),
        }
    }
}

/// A type tag: the [`TypeId`] of a model or capability type plus its name.
///
/// Equality and hashing only consider the id.
#[derive(Debug, Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// The key of `T`, which may be a trait object type such as `dyn Value`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The type name without its module path.
    pub fn short_name(&self) -> &'static str {
        short_type_name(self.name)
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Strip the module path from a type name, keeping generic arguments intact.
pub(crate) fn short_type_name(name: &'static str) -> &'static str {
    let head = name.find('<').map_or(name, |i| &name[..i]);
    match head.rfind("::") {
        Some(i) => &name[i + 2..],
        None => name,
    }
}

/// A model argument that may be absent.
///
/// Implemented for `&M` and `Option<&M>`, so
/// [`Generator::render_one`](crate::Generator::render_one) accepts both and
/// an absent model short-circuits to an absent result.
pub trait MaybeModel<'m> {
    type Model: Model + ?Sized;

    fn into_model(self) -> Option<&'m Self::Model>;
}

impl<'m, M: Model + ?Sized> MaybeModel<'m> for &'m M {
    type Model = M;

    fn into_model(self) -> Option<&'m M> {
        Some(self)
    }
}

impl<'m, M: Model + ?Sized> MaybeModel<'m> for Option<&'m M> {
    type Model = M;

    fn into_model(self) -> Option<&'m M> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Greeting;

    impl Model for Greeting {}

    #[derive(Debug)]
    struct Farewell;

    impl Model for Farewell {}

    #[test]
    fn test_dyn_model_reports_concrete_type() {
        let greeting = Greeting;
        let model: &dyn Model = &greeting;

        assert!(model.is::<Greeting>());
        assert!(!model.is::<Farewell>());
        assert!(model.downcast_ref::<Greeting>().is_some());
        assert_eq!(model.type_key(), TypeKey::of::<Greeting>());
        assert!(model.type_name().ends_with("Greeting"));
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name("a::b::Field"), "Field");
        assert_eq!(short_type_name("Field"), "Field");
        assert_eq!(
            short_type_name("a::Wrapper<b::Inner>"),
            "Wrapper<b::Inner>"
        );
    }

    #[test]
    fn test_maybe_model() {
        let greeting = Greeting;
        assert!((&greeting).into_model().is_some());
        assert!(Some(&greeting).into_model().is_some());
        assert!(None::<&Greeting>.into_model().is_none());
    }
}
