//! Type-erased pieces shared by the factory builder and the compiled factory.
//!
//! A transform installed for `A` only understands `&A`. Resolution hands it
//! a model of some concrete type `S` that reaches `A` through the declared
//! hierarchy: zero or more superclass [`Step`]s, then one [`Caster`] from
//! the last class on the path to `A`. Everything crosses the registry as
//! `&dyn Any`, and each piece downcasts to the type it was built for.

use crate::error::{CodegenError, CodegenResult};
use crate::generator::Generator;
use crate::model::{Model, TypeKey};
use crate::transform::{Transform, TransformInfo};
use std::any::Any;
use std::sync::Arc;

/// Moves a model reference from a class to its declared superclass.
pub(crate) type Step = Arc<dyn Fn(&dyn Any) -> Option<&dyn Any> + Send + Sync>;

/// A type-erased [`Caster`] or [`Installed`].
pub(crate) type Erased = Arc<dyn Any + Send + Sync>;

/// Turns a caster to one capability into a caster to its parent capability.
pub(crate) type Lift = Arc<dyn Fn(&Erased) -> Option<Erased> + Send + Sync>;

type ApplyFn<B> = Box<
    dyn for<'m> Fn(&Generator<'m>, &'m dyn Any, &(dyn Any + Send + Sync)) -> CodegenResult<Option<B>>
        + Send
        + Sync,
>;

/// Views a concrete model, passed as `&dyn Any`, as an `A`.
pub(crate) struct Caster<A: ?Sized + 'static>(Box<dyn Fn(&dyn Any) -> Option<&A> + Send + Sync>);

impl<A: ?Sized + 'static> Caster<A> {
    fn new<F>(f: F) -> Self
    where
        F: Fn(&dyn Any) -> Option<&A> + Send + Sync + 'static,
    {
        Self(Box::new(f))
    }

    pub(crate) fn view<'a>(&self, model: &'a dyn Any) -> Option<&'a A> {
        (self.0)(model)
    }
}

/// The caster of a concrete type to itself.
pub(crate) fn identity<M: Model>() -> Erased {
    Arc::new(Caster::<M>::new(|model| model.downcast_ref::<M>()))
}

/// The caster of `S` to one of its capabilities.
pub(crate) fn capability<S: Model, C: ?Sized + 'static>(upcast: fn(&S) -> &C) -> Erased {
    Arc::new(Caster::<C>::new(move |model| {
        model.downcast_ref::<S>().map(upcast)
    }))
}

/// The lift from capability `C` to its parent capability `D`.
pub(crate) fn lift<C: ?Sized + 'static, D: ?Sized + 'static>(upcast: fn(&C) -> &D) -> Lift {
    Arc::new(move |caster: &Erased| {
        let inner = caster.clone().downcast::<Caster<C>>().ok()?;
        let lifted: Erased = Arc::new(Caster::<D>::new(move |model| {
            inner.view(model).map(upcast)
        }));
        Some(lifted)
    })
}

/// The step from `S` to its superclass `P`.
pub(crate) fn step<S: Model, P: Model>(upcast: fn(&S) -> &P) -> Step {
    erase_step(move |model| {
        model
            .downcast_ref::<S>()
            .map(|sub| upcast(sub) as &dyn Any)
    })
}

fn erase_step<F>(f: F) -> Step
where
    F: Fn(&dyn Any) -> Option<&dyn Any> + Send + Sync + 'static,
{
    Arc::new(f)
}

fn erase_apply<B, F>(f: F) -> ApplyFn<B>
where
    F: for<'m> Fn(&Generator<'m>, &'m dyn Any, &(dyn Any + Send + Sync)) -> CodegenResult<Option<B>>
        + Send
        + Sync
        + 'static,
{
    Box::new(f)
}

/// A transform with its model type erased, keeping its result type.
pub(crate) struct Installed<B> {
    apply: ApplyFn<B>,
}

impl<B: 'static> Installed<B> {
    pub(crate) fn new<A, T>(transform: T) -> Self
    where
        A: ?Sized + 'static,
        T: Transform<A, B>,
    {
        let target = TypeKey::of::<A>();
        let apply = erase_apply(move |generator, model, caster| {
            let caster = caster
                .downcast_ref::<Caster<A>>()
                .ok_or(CodegenError::Upcast {
                    from: "registered caster",
                    to: target.name(),
                })?;
            let model = caster.view(model).ok_or(CodegenError::Upcast {
                from: "resolved model",
                to: target.name(),
            })?;
            transform.transform(generator, model)
        });
        Self { apply }
    }
}

/// One installation, as recorded by the builder.
pub(crate) struct Registration {
    /// The model type or capability the transform was installed for.
    pub(crate) key: TypeKey,
    pub(crate) result: TypeKey,
    pub(crate) info: TransformInfo,
    pub(crate) installed: Erased,
}

/// A transform applicable to one concrete model type, with the route from
/// that type to the key it was installed under.
#[derive(Clone)]
pub(crate) struct Candidate {
    pub(crate) info: TransformInfo,
    pub(crate) via: TypeKey,
    pub(crate) model: TypeKey,
    pub(crate) steps: Arc<[Step]>,
    pub(crate) caster: Erased,
    pub(crate) installed: Erased,
}

impl Candidate {
    /// Run the transform on `model`, which must be of type `self.model`.
    pub(crate) fn invoke<'m, B: 'static>(
        &self,
        generator: &Generator<'m>,
        model: &'m dyn Any,
    ) -> CodegenResult<Option<B>> {
        let installed = self
            .installed
            .downcast_ref::<Installed<B>>()
            .ok_or_else(|| self.mismatch())?;

        let mut target = model;
        for step in self.steps.iter() {
            target = step(target).ok_or_else(|| self.mismatch())?;
        }

        (installed.apply)(generator, target, &*self.caster)
    }

    fn mismatch(&self) -> CodegenError {
        CodegenError::Upcast {
            from: self.model.name(),
            to: self.via.name(),
        }
    }
}
