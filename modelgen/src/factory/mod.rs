//! Transform factory: which transforms apply to which model types.
//!
//! A factory is assembled once with a [`TransformFactoryBuilder`] and is
//! immutable afterwards, so one `Arc<TransformFactory>` can back any number
//! of generators on any number of threads.
//!
//! Resolution for a concrete model type walks its linearization, most
//! specific first:
//!
//! 1. the type itself,
//! 2. its superclasses, nearest first,
//! 3. the capabilities of the type, then of each superclass in chain order,
//! 4. parent capabilities declared with
//!    [`extends_capability`](TransformFactoryBuilder::extends_capability),
//!    breadth-first.
//!
//! A type reachable twice keeps its first position. Within one type,
//! transforms come in installation order. The whole table is computed in
//! [`TransformFactoryBuilder::build`]; rendering only does a hash lookup.

mod builder;
mod hierarchy;
mod types;

pub use builder::TransformFactoryBuilder;
pub(crate) use types::Candidate;

use crate::model::{Model, TypeKey};
use crate::transform::TransformInfo;
use hierarchy::Hierarchy;
use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use types::Registration;
use tracing::debug;

/// A transform chosen for a model type, as reported by
/// [`TransformFactory::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub transform: TransformInfo,
    /// The model type or capability the transform was installed for.
    pub via: TypeKey,
}

/// One installation, kept for introspection.
#[derive(Debug, Clone, Copy)]
struct Installation {
    key: TypeKey,
    result: TypeKey,
    info: TransformInfo,
}

/// Compiled registry of transforms.
pub struct TransformFactory {
    name: String,
    /// (concrete model type, result type) -> candidates, most specific first.
    candidates: HashMap<(TypeId, TypeId), Vec<Candidate>>,
    model_types: Vec<TypeKey>,
    installations: Vec<Installation>,
}

impl TransformFactory {
    pub fn builder(name: impl Into<String>) -> TransformFactoryBuilder {
        TransformFactoryBuilder::new(name)
    }

    /// A factory with nothing installed. Every render through it is empty.
    pub fn empty(name: impl Into<String>) -> Self {
        Self::builder(name).build()
    }

    pub(crate) fn compile(
        name: String,
        hierarchy: Hierarchy,
        registrations: Vec<Registration>,
    ) -> Self {
        let mut by_key: HashMap<(TypeId, TypeId), Vec<&Registration>> = HashMap::new();
        let mut results: Vec<TypeKey> = Vec::new();
        for registration in &registrations {
            by_key
                .entry((registration.key.id(), registration.result.id()))
                .or_default()
                .push(registration);
            if !results.contains(&registration.result) {
                results.push(registration.result);
            }
        }

        let mut candidates = HashMap::new();
        for model in hierarchy.types() {
            let ancestors = hierarchy.linearize(model.id());
            for result in &results {
                let list: Vec<Candidate> = ancestors
                    .iter()
                    .flat_map(|ancestor| {
                        by_key
                            .get(&(ancestor.key.id(), result.id()))
                            .into_iter()
                            .flatten()
                            .map(move |registration| Candidate {
                                info: registration.info,
                                via: ancestor.key,
                                model: *model,
                                steps: ancestor.steps.clone().into(),
                                caster: ancestor.caster.clone(),
                                installed: registration.installed.clone(),
                            })
                    })
                    .collect();

                if !list.is_empty() {
                    candidates.insert((model.id(), result.id()), list);
                }
            }
        }

        debug!(
            factory = %name,
            model_types = hierarchy.types().len(),
            transforms = registrations.len(),
            "Compiled transform factory"
        );

        Self {
            name,
            candidates,
            model_types: hierarchy.types().to_vec(),
            installations: registrations
                .iter()
                .map(|r| Installation {
                    key: r.key,
                    result: r.result,
                    info: r.info,
                })
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of installed transforms.
    pub fn len(&self) -> usize {
        self.installations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.installations.is_empty()
    }

    /// Concrete model types the factory knows about, in declaration order.
    pub fn model_types(&self) -> impl Iterator<Item = TypeKey> + '_ {
        self.model_types.iter().copied()
    }

    /// Transforms that render a `model` into a `B`, in the order they are
    /// tried. Empty if nothing applies.
    pub fn resolve<B: 'static>(&self, model: TypeKey) -> Vec<Resolved> {
        self.candidates(model.id(), TypeId::of::<B>())
            .iter()
            .map(|candidate| Resolved {
                transform: candidate.info,
                via: candidate.via,
            })
            .collect()
    }

    /// Like [`resolve`](Self::resolve) with the model type as a parameter.
    pub fn resolve_for<M: Model, B: 'static>(&self) -> Vec<Resolved> {
        self.resolve::<B>(TypeKey::of::<M>())
    }

    /// Returns true if transform `T` was installed for `A` producing `B`.
    pub fn contains<A: ?Sized + 'static, B: 'static, T: 'static>(&self) -> bool {
        let key = TypeKey::of::<A>();
        let result = TypeKey::of::<B>();
        self.installations
            .iter()
            .any(|i| i.key == key && i.result == result && i.info.is::<T>())
    }

    pub(crate) fn candidates(&self, model: TypeId, result: TypeId) -> &[Candidate] {
        self.candidates
            .get(&(model, result))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl fmt::Debug for TransformFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformFactory")
            .field("name", &self.name)
            .field("model_types", &self.model_types.len())
            .field("transforms", &self.installations.len())
            .finish()
    }
}
