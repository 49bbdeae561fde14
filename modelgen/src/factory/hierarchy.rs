//! Declared model hierarchy and its linearization.

use super::types::{self, Erased, Lift, Step};
use crate::model::{Model, TypeKey};
use std::any::TypeId;
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// One declared model type.
struct Node {
    key: TypeKey,
    /// Superclass and the step that reaches it.
    parent: Option<(TypeKey, Step)>,
    /// Capabilities in declaration order.
    capabilities: Vec<TypeKey>,
    /// Casters from this type, keyed by target. Always holds the identity.
    casters: HashMap<TypeId, Erased>,
}

/// A type a concrete model can be viewed as, with the route to it.
pub(crate) struct Ancestor {
    pub(crate) key: TypeKey,
    pub(crate) steps: Vec<Step>,
    pub(crate) caster: Erased,
}

#[derive(Default)]
pub(crate) struct Hierarchy {
    nodes: HashMap<TypeId, Node>,
    /// Declaration order, for stable iteration.
    order: Vec<TypeKey>,
    /// Capability -> parent capabilities, in declaration order.
    capability_parents: HashMap<TypeId, Vec<(TypeKey, Lift)>>,
}

impl Hierarchy {
    /// Make `M` known as a concrete model type.
    pub(crate) fn declare<M: Model>(&mut self) -> &mut Self {
        let key = TypeKey::of::<M>();
        if !self.nodes.contains_key(&key.id()) {
            let mut casters = HashMap::new();
            casters.insert(key.id(), types::identity::<M>());
            self.nodes.insert(
                key.id(),
                Node {
                    key,
                    parent: None,
                    capabilities: Vec::new(),
                    casters,
                },
            );
            self.order.push(key);
        }
        self
    }

    pub(crate) fn set_parent<S: Model, P: Model>(&mut self, upcast: fn(&S) -> &P) {
        self.declare::<P>();
        let parent = TypeKey::of::<P>();
        let Some(node) = self.declare::<S>().nodes.get_mut(&TypeId::of::<S>()) else {
            return;
        };

        if let Some((previous, _)) = &node.parent {
            if *previous != parent {
                warn!(
                    model = node.key.name(),
                    previous = previous.name(),
                    parent = parent.name(),
                    "Replacing declared superclass"
                );
            }
        }
        node.parent = Some((parent, types::step(upcast)));
    }

    pub(crate) fn add_capability<S: Model, C: ?Sized + 'static>(&mut self, upcast: fn(&S) -> &C) {
        let capability = TypeKey::of::<C>();
        let Some(node) = self.declare::<S>().nodes.get_mut(&TypeId::of::<S>()) else {
            return;
        };

        if !node.capabilities.contains(&capability) {
            node.capabilities.push(capability);
        }
        node.casters
            .insert(capability.id(), types::capability(upcast));
    }

    /// Declare `D` as a parent capability of `C`: anything viewable as `C`
    /// is also viewable as `D`.
    pub(crate) fn add_capability_parent<C: ?Sized + 'static, D: ?Sized + 'static>(
        &mut self,
        upcast: fn(&C) -> &D,
    ) {
        let parent = TypeKey::of::<D>();
        let lift = types::lift(upcast);
        let parents = self
            .capability_parents
            .entry(TypeId::of::<C>())
            .or_default();
        set_parent_capability(parents, parent, lift);
    }

    /// Fold `other` into this hierarchy. Where both declare a superclass
    /// for the same type, `other` wins.
    pub(crate) fn merge(&mut self, other: Hierarchy) {
        let Hierarchy {
            mut nodes,
            order,
            capability_parents,
        } = other;
        for (capability, incoming) in capability_parents {
            let parents = self.capability_parents.entry(capability).or_default();
            for (parent, lift) in incoming {
                set_parent_capability(parents, parent, lift);
            }
        }
        for key in order {
            let Some(incoming) = nodes.remove(&key.id()) else {
                continue;
            };
            let Some(node) = self.nodes.get_mut(&key.id()) else {
                self.nodes.insert(key.id(), incoming);
                self.order.push(key);
                continue;
            };

            if incoming.parent.is_some() {
                node.parent = incoming.parent;
            }
            for capability in incoming.capabilities {
                if !node.capabilities.contains(&capability) {
                    node.capabilities.push(capability);
                }
            }
            node.casters.extend(incoming.casters);
        }
    }

    /// Declared concrete types, in declaration order.
    pub(crate) fn types(&self) -> &[TypeKey] {
        &self.order
    }

    /// Every type `ty` can be viewed as, most specific first.
    ///
    /// The order is: `ty` itself, then its superclasses nearest first, then
    /// the capabilities of `ty` in declaration order, then those of each
    /// superclass in chain order, then parent capabilities breadth-first. A
    /// type reachable twice keeps its first position.
    pub(crate) fn linearize(&self, ty: TypeId) -> Vec<Ancestor> {
        let mut chain: Vec<(&Node, Vec<Step>)> = Vec::new();
        let mut visited = HashSet::new();
        let mut steps = Vec::new();
        let mut current = self.nodes.get(&ty);

        while let Some(node) = current {
            if !visited.insert(node.key.id()) {
                warn!(model = node.key.name(), "Superclass cycle, stopping chain");
                break;
            }
            chain.push((node, steps.clone()));
            current = node.parent.as_ref().and_then(|(parent, step)| {
                steps.push(step.clone());
                self.nodes.get(&parent.id())
            });
        }

        let mut seen = HashSet::new();
        let mut ancestors = Vec::new();

        for (node, steps) in &chain {
            if !seen.insert(node.key.id()) {
                continue;
            }
            if let Some(caster) = node.casters.get(&node.key.id()) {
                ancestors.push(Ancestor {
                    key: node.key,
                    steps: steps.clone(),
                    caster: caster.clone(),
                });
            }
        }

        let first_capability = ancestors.len();
        for (node, steps) in &chain {
            for capability in &node.capabilities {
                if !seen.insert(capability.id()) {
                    continue;
                }
                if let Some(caster) = node.casters.get(&capability.id()) {
                    ancestors.push(Ancestor {
                        key: *capability,
                        steps: steps.clone(),
                        caster: caster.clone(),
                    });
                }
            }
        }

        let mut next = first_capability;
        while next < ancestors.len() {
            let current = &ancestors[next];
            let parents = self
                .capability_parents
                .get(&current.key.id())
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            let mut lifted = Vec::new();
            for (parent, lift) in parents {
                if !seen.insert(parent.id()) {
                    continue;
                }
                if let Some(caster) = lift(&current.caster) {
                    lifted.push(Ancestor {
                        key: *parent,
                        steps: current.steps.clone(),
                        caster,
                    });
                }
            }
            ancestors.extend(lifted);
            next += 1;
        }

        ancestors
    }
}

/// Record `parent`, replacing the lift of an earlier declaration.
fn set_parent_capability(parents: &mut Vec<(TypeKey, Lift)>, parent: TypeKey, lift: Lift) {
    match parents.iter_mut().find(|(key, _)| *key == parent) {
        Some(existing) => existing.1 = lift,
        None => parents.push((parent, lift)),
    }
}
