//! Tests for transform resolution
//!
//! These tests pin down the resolution order: exact type, superclasses
//! nearest first, then capabilities, then parent capabilities, with
//! installation order as the tie-break within one type.

use super::fixtures::*;
use crate::{CodegenResult, Generator, Resolved, TransformFactory, TransformInfo, TypeKey, from_fn};
use std::sync::Arc;

fn hierarchy_factory() -> TransformFactory {
    TransformFactory::builder("hierarchy")
        .extends::<Leaf, Node>(|leaf| &leaf.node)
        .extends::<Branch, Node>(|branch| &branch.node)
        .install::<Node, String, _>(NodeView)
        .install::<Leaf, String, _>(LeafView)
        .build()
}

fn names(resolved: &[Resolved]) -> Vec<&'static str> {
    resolved.iter().map(|r| r.transform.short_name()).collect()
}

#[test]
fn test_subtype_transform_resolves_before_supertype() {
    let factory = hierarchy_factory();

    let resolved = factory.resolve_for::<Leaf, String>();
    assert_eq!(names(&resolved), vec!["LeafView", "NodeView"]);
    assert_eq!(resolved[0].via, TypeKey::of::<Leaf>());
    assert_eq!(resolved[1].via, TypeKey::of::<Node>());
}

#[test]
fn test_subtype_without_registration_falls_back_to_supertype() {
    let factory = hierarchy_factory();

    let resolved = factory.resolve_for::<Branch, String>();
    assert_eq!(names(&resolved), vec!["NodeView"]);

    let generator = Generator::new(Arc::new(factory));
    let branch = Branch::new("b");
    assert_eq!(
        generator.render_one(&branch).unwrap().as_deref(),
        Some("node:b")
    );
}

#[test]
fn test_render_yields_every_applicable_result_in_order() {
    let generator = Generator::new(Arc::new(hierarchy_factory()));
    let leaf = Leaf::new("x");

    let results: Vec<String> = generator
        .render::<String, _>(&leaf)
        .map(|meta| meta.map(|meta| meta.into_result()))
        .collect::<CodegenResult<_>>()
        .unwrap();

    assert_eq!(results, vec!["leaf:x", "node:x"]);
}

#[test]
fn test_meta_carries_model_and_transform() {
    let generator = Generator::new(Arc::new(hierarchy_factory()));
    let leaf = Leaf::new("meta");

    let meta = generator
        .render_first::<String, _>(&leaf)
        .unwrap()
        .expect("leaf renders");

    assert!(std::ptr::eq(meta.model(), &leaf));
    assert!(meta.transform().is::<LeafView>());
    assert_eq!(meta.result(), "leaf:meta");
    assert!(std::ptr::eq(meta.generator(), &generator));
}

#[test]
fn test_no_registration_resolves_to_nothing() {
    let factory = hierarchy_factory();

    assert!(factory.resolve_for::<Farewell, String>().is_empty());
    // Installed for Leaf, but for a different result type.
    assert!(factory.resolve_for::<Leaf, usize>().is_empty());

    let generator = Generator::new(Arc::new(factory));
    assert_eq!(generator.render::<String, _>(&Farewell).count(), 0);
    assert_eq!(generator.render::<usize, _>(&Leaf::new("x")).count(), 0);
}

#[test]
fn test_capabilities_come_after_superclasses() {
    let factory = TransformFactory::builder("capabilities")
        .extends::<Leaf, Node>(|leaf| &leaf.node)
        .implements::<Leaf, dyn Named>(|leaf| leaf)
        .install_capability::<dyn Named, String, _>(NamedView)
        .install::<Node, String, _>(NodeView)
        .build();

    let resolved = factory.resolve_for::<Leaf, String>();
    assert_eq!(names(&resolved), vec!["NodeView", "NamedView"]);
    assert_eq!(resolved[1].via, TypeKey::of::<dyn Named>());

    let generator = Generator::new(Arc::new(factory));
    let leaf = Leaf::new("cap");
    let results: Vec<String> = generator
        .render::<String, _>(&leaf)
        .map(|meta| meta.unwrap().into_result())
        .collect();
    assert_eq!(results, vec!["node:cap", "named:cap"]);
}

#[test]
fn test_capability_of_superclass_is_inherited() {
    let factory = TransformFactory::builder("inherited")
        .extends::<Branch, Node>(|branch| &branch.node)
        .implements::<Node, dyn Named>(|node| node)
        .install_capability::<dyn Named, String, _>(NamedView)
        .build();

    let resolved = factory.resolve_for::<Branch, String>();
    assert_eq!(names(&resolved), vec!["NamedView"]);

    let generator = Generator::new(Arc::new(factory));
    let branch = Branch::new("deep");
    assert_eq!(
        generator.render_one(&branch).unwrap().as_deref(),
        Some("named:deep")
    );
}

#[test]
fn test_unrelated_capabilities_follow_declaration_order() {
    let tagged_first = TransformFactory::builder("tagged-first")
        .implements::<Leaf, dyn Tagged>(|leaf| leaf)
        .implements::<Leaf, dyn Named>(|leaf| leaf)
        .install_capability::<dyn Named, String, _>(NamedView)
        .install_capability::<dyn Tagged, String, _>(TaggedView)
        .build();
    assert_eq!(
        names(&tagged_first.resolve_for::<Leaf, String>()),
        vec!["TaggedView", "NamedView"]
    );

    let named_first = TransformFactory::builder("named-first")
        .implements::<Leaf, dyn Named>(|leaf| leaf)
        .implements::<Leaf, dyn Tagged>(|leaf| leaf)
        .install_capability::<dyn Named, String, _>(NamedView)
        .install_capability::<dyn Tagged, String, _>(TaggedView)
        .build();
    assert_eq!(
        names(&named_first.resolve_for::<Leaf, String>()),
        vec!["NamedView", "TaggedView"]
    );
}

#[test]
fn test_parent_capability_resolves_after_direct_capabilities() {
    let factory = TransformFactory::builder("capability-parents")
        .implements::<Leaf, dyn Labelled>(|leaf| leaf)
        .implements::<Leaf, dyn Tagged>(|leaf| leaf)
        .extends_capability::<dyn Labelled, dyn Named>(|labelled| labelled.as_named())
        .install_capability::<dyn Named, String, _>(NamedView)
        .install_capability::<dyn Tagged, String, _>(TaggedView)
        .install_capability::<dyn Labelled, String, _>(LabelledView)
        .build();

    let resolved = factory.resolve_for::<Leaf, String>();
    assert_eq!(
        names(&resolved),
        vec!["LabelledView", "TaggedView", "NamedView"]
    );
    assert_eq!(resolved[2].via, TypeKey::of::<dyn Named>());

    let generator = Generator::new(Arc::new(factory));
    let leaf = Leaf::new("ada");
    let results: Vec<String> = generator
        .render::<String, _>(&leaf)
        .map(|meta| meta.unwrap().into_result())
        .collect();
    assert_eq!(results, vec!["labelled:ADA", "tagged:leaf", "named:ada"]);
}

#[test]
fn test_parent_capability_reached_through_superclass() {
    let factory = TransformFactory::builder("inherited-parents")
        .extends::<Branch, Node>(|branch| &branch.node)
        .implements::<Leaf, dyn Labelled>(|leaf| leaf)
        .extends::<Leaf, Node>(|leaf| &leaf.node)
        .extends_capability::<dyn Labelled, dyn Named>(|labelled| labelled.as_named())
        .install_capability::<dyn Named, String, _>(NamedView)
        .build();

    assert_eq!(names(&factory.resolve_for::<Leaf, String>()), vec!["NamedView"]);
    // Branch never implements Labelled, so the parent does not apply.
    assert!(factory.resolve_for::<Branch, String>().is_empty());
}

#[test]
fn test_directly_implemented_parent_keeps_its_position() {
    let factory = TransformFactory::builder("direct-parent")
        .implements::<Leaf, dyn Named>(|leaf| leaf)
        .implements::<Leaf, dyn Labelled>(|leaf| leaf)
        .extends_capability::<dyn Labelled, dyn Named>(|labelled| labelled.as_named())
        .install_capability::<dyn Named, String, _>(NamedView)
        .install_capability::<dyn Labelled, String, _>(LabelledView)
        .build();

    assert_eq!(
        names(&factory.resolve_for::<Leaf, String>()),
        vec!["NamedView", "LabelledView"]
    );
}

#[test]
fn test_merge_carries_parent_capabilities() {
    let parents = TransformFactory::builder("parents")
        .extends_capability::<dyn Labelled, dyn Named>(|labelled| labelled.as_named())
        .install_capability::<dyn Named, String, _>(NamedView);
    let factory = TransformFactory::builder("leaves")
        .implements::<Leaf, dyn Labelled>(|leaf| leaf)
        .merge(parents)
        .build();

    let generator = Generator::new(Arc::new(factory));
    let leaf = Leaf::new("merged");
    assert_eq!(
        generator.render_one(&leaf).unwrap().as_deref(),
        Some("named:merged")
    );
}

#[test]
fn test_installation_order_breaks_ties_within_one_type() {
    let factory = TransformFactory::builder("ties")
        .install::<Leaf, String, _>(DecliningView)
        .install::<Leaf, String, _>(LeafView)
        .build();

    assert_eq!(
        names(&factory.resolve_for::<Leaf, String>()),
        vec!["DecliningView", "LeafView"]
    );

    // The declining transform is skipped, not reported.
    let generator = Generator::new(Arc::new(factory));
    let leaf = Leaf::new("t");
    let results: Vec<_> = generator.render::<String, _>(&leaf).collect();
    assert_eq!(results.len(), 1);
    assert_eq!(
        results.into_iter().next().unwrap().unwrap().into_result(),
        "leaf:t"
    );
}

#[test]
fn test_render_with_filters_to_one_variant() {
    let generator = Generator::new(Arc::new(hierarchy_factory()));
    let leaf = Leaf::new("v");

    let node_only: Vec<String> = generator
        .render_with::<String, NodeView, _>(&leaf)
        .map(|meta| meta.unwrap().into_result())
        .collect();
    assert_eq!(node_only, vec!["node:v"]);

    assert_eq!(
        generator
            .render_with::<String, NamedView, _>(&leaf)
            .count(),
        0
    );
}

#[test]
fn test_redeclared_superclass_replaces_previous() {
    let factory = TransformFactory::builder("redeclare")
        .extends::<Leaf, Branch>(|_| unreachable!("replaced before build"))
        .extends::<Leaf, Node>(|leaf| &leaf.node)
        .install::<Branch, String, _>(from_fn(|_generator, _branch: &Branch| {
            Ok(Some("branch".to_string()))
        }))
        .install::<Node, String, _>(NodeView)
        .build();

    assert_eq!(
        names(&factory.resolve_for::<Leaf, String>()),
        vec!["NodeView"]
    );
}

#[test]
fn test_contains_and_introspection() {
    let factory = hierarchy_factory();

    assert_eq!(factory.name(), "hierarchy");
    assert_eq!(factory.len(), 2);
    assert!(!factory.is_empty());
    assert!(factory.contains::<Leaf, String, LeafView>());
    assert!(factory.contains::<Node, String, NodeView>());
    assert!(!factory.contains::<Leaf, String, NodeView>());
    assert!(!factory.contains::<Node, usize, NodeView>());

    let types: Vec<TypeKey> = factory.model_types().collect();
    assert!(types.contains(&TypeKey::of::<Leaf>()));
    assert!(types.contains(&TypeKey::of::<Branch>()));
    assert!(types.contains(&TypeKey::of::<Node>()));

    assert!(TransformFactory::empty("empty").is_empty());
}

#[test]
fn test_merge_appends_after_own_installations() {
    let base = TransformFactory::builder("base").install::<Leaf, String, _>(LeafView);
    let extra = TransformFactory::builder("extra")
        .extends::<Leaf, Node>(|leaf| &leaf.node)
        .install::<Leaf, String, _>(DecliningView)
        .install::<Node, String, _>(NodeView);

    let factory = base.merge(extra).build();

    assert_eq!(factory.name(), "base");
    assert_eq!(
        names(&factory.resolve_for::<Leaf, String>()),
        vec!["LeafView", "DecliningView", "NodeView"]
    );
}

#[test]
fn test_closure_transforms() {
    let factory = TransformFactory::builder("closures")
        .install::<Item, String, _>(from_fn(|_generator, item: &Item| {
            Ok(Some(item.name.to_uppercase()))
        }))
        .install::<Item, usize, _>(from_fn(|_generator, item: &Item| {
            Ok(Some(item.name.len()))
        }))
        .build();

    let generator = Generator::new(Arc::new(factory));
    let item = Item::new("abc");

    assert_eq!(generator.render_one(&item).unwrap().as_deref(), Some("ABC"));
    let len = generator
        .render_first::<usize, _>(&item)
        .unwrap()
        .map(|meta| meta.into_result());
    assert_eq!(len, Some(3));
}

#[test]
fn test_transform_info_identity() {
    let info = TransformInfo::of::<LeafView>();
    assert!(info.is::<LeafView>());
    assert!(!info.is::<NodeView>());
    assert_eq!(info.short_name(), "LeafView");
    assert_eq!(info.to_string(), "LeafView");
    assert_eq!(info, TransformInfo::of::<LeafView>());
}
