//! # modelgen
//!
//! A type-directed model-to-text generation engine.
//!
//! Callers build a tree of plain Rust values (the *models*), register
//! *transforms* that know how to render one model type, and ask a
//! [`Generator`] to render the root. Transforms render their children by
//! calling back into the generator, so a whole source file comes out of one
//! `render_one` call.
//!
//! ## Overview
//!
//! | Piece | Role |
//! |-------|------|
//! | [`Model`] | Marker for renderable values; exposes the runtime type |
//! | [`Transform`] | Renders one model type into zero or one result |
//! | [`TransformFactory`] | Immutable registry resolving transforms per model type |
//! | [`RenderStack`] | Ancestors of the model being rendered |
//! | [`DependencyManager`] | Simple-name ownership and imports of one output unit |
//! | [`Generator`] | Drives a render; the API transforms call back into |
//! | [`Meta`] | One result with the model and transform that produced it |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use modelgen::{CodegenResult, Generator, Model, Transform, TransformFactory};
//! use std::sync::Arc;
//!
//! #[derive(Debug)]
//! struct Greeting;
//! impl Model for Greeting {}
//!
//! struct GreetingView;
//!
//! impl Transform<Greeting, String> for GreetingView {
//!     fn transform<'m>(&self, _generator: &Generator<'m>, _model: &'m Greeting) -> CodegenResult<Option<String>> {
//!         Ok(Some("HELLO".to_string()))
//!     }
//! }
//!
//! let factory = TransformFactory::builder("greetings")
//!     .install::<Greeting, String, _>(GreetingView)
//!     .build();
//!
//! let generator = Generator::new(Arc::new(factory));
//! assert_eq!(generator.render_one(&Greeting)?.as_deref(), Some("HELLO"));
//! ```
//!
//! ## Resolution
//!
//! Rust has no runtime class hierarchy, so it is declared on the builder:
//! [`extends`](TransformFactoryBuilder::extends) names a type's single
//! superclass and [`implements`](TransformFactoryBuilder::implements) one of
//! its capabilities (usually a trait object type). A transform installed for
//! a supertype or capability applies to every type reaching it; more
//! specific transforms are tried first. See [`factory`] for the exact order.
//!
//! A model nothing applies to renders to nothing. That is never an error.

pub mod config;
pub mod dependency;
pub mod error;
pub mod factory;
pub mod generator;
pub mod meta;
pub mod model;
pub mod render_stack;
pub mod transform;

#[cfg(test)]
mod tests;

pub use config::{CodegenConfig, FormatConfig, ImportsConfig, IndentStyle, LineEnding};
pub use dependency::{Claim, DependencyManager};
pub use error::{CodegenError, CodegenResult};
pub use factory::{Resolved, TransformFactory, TransformFactoryBuilder};
pub use generator::{Generator, Render};
pub use meta::Meta;
pub use model::{MaybeModel, Model, TypeKey, Upcast};
pub use render_stack::{RenderPath, RenderStack};
pub use transform::{FnTransform, Transform, TransformInfo, from_fn};
