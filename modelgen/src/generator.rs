//! The render entry point.
//!
//! A [`Generator`] pairs a shared, immutable [`TransformFactory`] with the
//! mutable state of one render: the [`RenderStack`] and the
//! [`DependencyManager`] of the unit being produced. Transforms receive the
//! generator and call back into it to render their children.
//!
//! # Example
//!
//! ```rust,ignore
//! let factory = Arc::new(
//!     TransformFactory::builder("greetings")
//!         .install::<Greeting, String, _>(GreetingView)
//!         .build(),
//! );
//!
//! let generator = Generator::new(factory);
//! assert_eq!(generator.render_one(&Greeting)?, Some("HELLO".to_string()));
//! ```
//!
//! # State scoping
//!
//! The render stack grows while descending into children and shrinks on
//! the way out, on every exit path. The dependency manager is reset from
//! the generator's template whenever a render starts on an empty stack, so
//! two top-level renders on the same generator never share claims. Claims
//! made by a transform that fails are rolled back.
//!
//! Transforms read the state through copies ([`Generator::render_stack`],
//! [`Generator::dependency_manager`]) and change it through
//! [`Generator::claim`], [`Generator::claim_type`] and
//! [`Generator::with_dependencies`], so no borrow outlives the call.
//!
//! A generator is not `Send`: create one per thread from a shared
//! `Arc<TransformFactory>`, or [`Clone`] an existing one.

use crate::dependency::{Claim, DependencyManager};
use crate::error::{CodegenError, CodegenResult};
use crate::factory::{Candidate, TransformFactory};
use crate::meta::Meta;
use crate::model::{MaybeModel, Model};
use crate::render_stack::RenderStack;
use crate::transform::{Transform, TransformInfo};
use std::any::TypeId;
use std::cell::RefCell;
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, trace};

/// Renders models through a [`TransformFactory`].
pub struct Generator<'m> {
    factory: Arc<TransformFactory>,
    /// Copied into `dependencies` at the start of each top-level render.
    template: DependencyManager,
    stack: RefCell<RenderStack<'m>>,
    dependencies: RefCell<DependencyManager>,
}

impl<'m> Generator<'m> {
    pub fn new(factory: Arc<TransformFactory>) -> Self {
        Self::with_dependency_manager(factory, DependencyManager::new())
    }

    /// Create a generator whose units start from `template`, typically a
    /// manager with ignored packages configured.
    pub fn with_dependency_manager(
        factory: Arc<TransformFactory>,
        template: DependencyManager,
    ) -> Self {
        Self {
            factory,
            dependencies: RefCell::new(template.clone()),
            template,
            stack: RefCell::new(RenderStack::new()),
        }
    }

    pub fn factory(&self) -> &Arc<TransformFactory> {
        &self.factory
    }

    /// A copy of the dependency manager of the unit being rendered.
    pub fn dependency_manager(&self) -> CodegenResult<DependencyManager> {
        self.dependencies
            .try_borrow()
            .map(|dependencies| dependencies.clone())
            .map_err(|_| CodegenError::DependenciesBusy)
    }

    /// Run `f` on the dependency manager of the unit being rendered.
    ///
    /// Rendering from inside `f` fails with
    /// [`CodegenError::DependenciesBusy`].
    pub fn with_dependencies<R>(
        &self,
        f: impl FnOnce(&mut DependencyManager) -> R,
    ) -> CodegenResult<R> {
        let mut dependencies = self
            .dependencies
            .try_borrow_mut()
            .map_err(|_| CodegenError::DependenciesBusy)?;
        Ok(f(&mut dependencies))
    }

    /// Claim `simple` for `qualified` in the current unit.
    pub fn claim(&self, simple: &str, qualified: &str) -> CodegenResult<Claim> {
        self.with_dependencies(|dependencies| dependencies.claim(simple, qualified))
    }

    /// Claim the last segment of `qualified` in the current unit.
    pub fn claim_type(&self, qualified: &str) -> CodegenResult<Claim> {
        self.with_dependencies(|dependencies| dependencies.claim_type(qualified))
    }

    /// A copy of the models currently being rendered, innermost on top.
    ///
    /// The copy stays valid while children are rendered.
    pub fn render_stack(&self) -> RenderStack<'m> {
        self.stack.borrow().clone()
    }

    /// Render `model` into every `B` that some applicable transform
    /// produces, most specific transform first.
    ///
    /// Transforms run lazily as the iterator advances. Transforms returning
    /// `None` are skipped. The iterator ends after the first error.
    pub fn render<B, M>(&self, model: &'m M) -> Render<'_, 'm, M, B>
    where
        B: 'static,
        M: Model + ?Sized,
    {
        Render::new(self, model, None)
    }

    /// Like [`render`](Self::render), restricted to transforms of type `T`.
    ///
    /// Empty if `T` is not installed for the model.
    pub fn render_with<B, T, M>(&self, model: &'m M) -> Render<'_, 'm, M, B>
    where
        B: 'static,
        T: 'static,
        M: Model + ?Sized,
    {
        Render::new(self, model, Some(TypeId::of::<T>()))
    }

    /// The first result of [`render`](Self::render), if any.
    pub fn render_first<B, M>(&self, model: &'m M) -> CodegenResult<Option<Meta<'_, 'm, M, B>>>
    where
        B: 'static,
        M: Model + ?Sized,
    {
        self.render(model).next().transpose()
    }

    /// Render every model of a collection, all candidates per model,
    /// flattened in input order.
    pub fn render_all<'g, B, M, I>(
        &'g self,
        models: I,
    ) -> impl Iterator<Item = CodegenResult<Meta<'g, 'm, M, B>>>
    where
        B: 'static,
        M: Model + ?Sized,
        I: IntoIterator<Item = &'m M>,
    {
        models
            .into_iter()
            .flat_map(move |model| self.render::<B, M>(model))
    }

    /// Render a possibly absent model to text with the first applicable
    /// transform.
    ///
    /// An absent model yields `Ok(None)` without running any transform.
    pub fn render_one<I: MaybeModel<'m>>(&self, model: I) -> CodegenResult<Option<String>> {
        let Some(model) = model.into_model() else {
            return Ok(None);
        };
        Ok(self
            .render_first::<String, I::Model>(model)?
            .map(Meta::into_result))
    }

    /// Render each model to text, in input order, skipping models nothing
    /// renders.
    ///
    /// Collecting into `CodegenResult<String>` concatenates the texts and
    /// stops at the first failure.
    pub fn render_each<I>(&self, models: I) -> impl Iterator<Item = CodegenResult<String>>
    where
        I: IntoIterator,
        I::Item: MaybeModel<'m>,
    {
        models
            .into_iter()
            .filter_map(move |model| self.render_one(model).transpose())
    }

    /// Apply one transform to `model` directly, bypassing the factory.
    ///
    /// The model is pushed on the render stack as for a registry render.
    pub fn apply<A, B, T>(
        &self,
        transform: &T,
        model: &'m A,
    ) -> CodegenResult<Option<Meta<'_, 'm, A, B>>>
    where
        A: Model + ?Sized,
        B: 'static,
        T: Transform<A, B>,
    {
        let info = TransformInfo::of::<T>();
        let _frame = self.enter(model.as_model())?;
        trace!(transform = info.short_name(), "Applying transform directly");

        let result = self
            .rolling_back(|| transform.transform(self, model))
            .map_err(|err| self.annotate(err, info))?;
        Ok(result.map(|result| Meta::new(model, info, result, self)))
    }

    fn invoke<B: 'static>(
        &self,
        model: &'m dyn Model,
        candidate: &Candidate,
    ) -> CodegenResult<Option<B>> {
        let _frame = self.enter(model)?;
        trace!(
            transform = candidate.info.short_name(),
            via = candidate.via.short_name(),
            "Invoking transform"
        );

        self.rolling_back(|| candidate.invoke::<B>(self, model.as_any()))
            .map_err(|err| self.annotate(err, candidate.info))
    }

    /// Run `f`, discarding the claims it made if it fails.
    fn rolling_back<R>(&self, f: impl FnOnce() -> CodegenResult<R>) -> CodegenResult<R> {
        let saved = self.dependency_manager()?;
        let result = f();
        if result.is_err() {
            if let Ok(mut dependencies) = self.dependencies.try_borrow_mut() {
                *dependencies = saved;
            }
        }
        result
    }

    fn enter(&self, model: &'m dyn Model) -> CodegenResult<Frame<'_, 'm>> {
        let mut stack = self.stack.borrow_mut();
        if stack.is_empty() {
            let mut dependencies = self
                .dependencies
                .try_borrow_mut()
                .map_err(|_| CodegenError::DependenciesBusy)?;
            *dependencies = self.template.clone();
        }
        stack.push(model);
        trace!(
            model = model.type_key().short_name(),
            depth = stack.len(),
            "Entering model"
        );
        Ok(Frame { stack: &self.stack })
    }

    /// Attach the current render path to a failure, unless an inner frame
    /// already did.
    fn annotate(&self, err: CodegenError, info: TransformInfo) -> CodegenError {
        if err.is_annotated() {
            return err;
        }
        let path = self.stack.borrow().path();
        debug!(
            transform = info.short_name(),
            path = %path,
            error = %err,
            "Transform failed"
        );
        CodegenError::Render {
            transform: info.name(),
            path,
            source: Box::new(err),
        }
    }
}

impl Clone for Generator<'_> {
    /// A generator over the same factory and template, with fresh state.
    fn clone(&self) -> Self {
        Self::with_dependency_manager(Arc::clone(&self.factory), self.template.clone())
    }
}

impl fmt::Debug for Generator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("factory", &self.factory.name())
            .field("depth", &self.stack.borrow().len())
            .finish_non_exhaustive()
    }
}

/// Pops the render stack when dropped.
struct Frame<'a, 'm> {
    stack: &'a RefCell<RenderStack<'m>>,
}

impl Drop for Frame<'_, '_> {
    fn drop(&mut self) {
        self.stack.borrow_mut().pop();
    }
}

/// Lazy results of [`Generator::render`].
pub struct Render<'g, 'm, M: ?Sized, B> {
    generator: &'g Generator<'m>,
    model: &'m M,
    candidates: std::slice::Iter<'g, Candidate>,
    variant: Option<TypeId>,
    done: bool,
    _result: PhantomData<fn() -> B>,
}

impl<'g, 'm, M: Model + ?Sized, B: 'static> Render<'g, 'm, M, B> {
    fn new(generator: &'g Generator<'m>, model: &'m M, variant: Option<TypeId>) -> Self {
        let key = model.as_model().type_key();
        let candidates = generator.factory.candidates(key.id(), TypeId::of::<B>());
        trace!(
            model = key.short_name(),
            candidates = candidates.len(),
            "Resolved transforms"
        );

        Self {
            generator,
            model,
            candidates: candidates.iter(),
            variant,
            done: false,
            _result: PhantomData,
        }
    }
}

impl<'g, 'm, M: Model + ?Sized, B: 'static> Iterator for Render<'g, 'm, M, B> {
    type Item = CodegenResult<Meta<'g, 'm, M, B>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        for candidate in self.candidates.by_ref() {
            if self
                .variant
                .is_some_and(|variant| variant != candidate.info.type_id())
            {
                continue;
            }

            match self.generator.invoke::<B>(self.model.as_model(), candidate) {
                Ok(Some(result)) => {
                    return Some(Ok(Meta::new(
                        self.model,
                        candidate.info,
                        result,
                        self.generator,
                    )));
                }
                Ok(None) => continue,
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }

        self.done = true;
        None
    }
}

impl<M: Model + ?Sized, B: 'static> FusedIterator for Render<'_, '_, M, B> {}

impl<M: Model + ?Sized, B> fmt::Debug for Render<'_, '_, M, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Render")
            .field("model", &self.model)
            .field("remaining", &self.candidates.len())
            .finish_non_exhaustive()
    }
}
