//! # modelgen-java
//!
//! Java source generation on top of the [`modelgen`] engine.
//!
//! The [`model`] module holds plain descriptions of Java files, classes,
//! enums, fields and values. The [`view`] module holds one transform per
//! model type, each rendering to `String`. [`transform_factory`] wires them
//! together with the type relations between the models:
//!
//! | Model | Rendered by |
//! |-------|-------------|
//! | [`File`](model::File) | [`FileView`](view::FileView) |
//! | [`Class`](model::Class) | [`ClassView`](view::ClassView) |
//! | [`Enum`](model::Enum) | [`EnumView`](view::EnumView) |
//! | [`Field`](model::Field), [`Constant`](model::Constant) | [`FieldView`](view::FieldView) |
//! | [`TypeRef`](model::TypeRef) | [`TypeRefView`](view::TypeRefView) |
//! | [`TextValue`](model::TextValue) | [`TextValueView`](view::TextValueView) |
//! | any other [`Value`](model::Value) | [`ValueView`](view::ValueView) |
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use modelgen::CodegenConfig;
//! use modelgen_java::model::{Class, Field, File, Modifier, TypeRef};
//!
//! let file = File::new("User").package("com.example").class(
//!     Class::new("User")
//!         .modifier(Modifier::Public)
//!         .field(Field::new("tags", TypeRef::new("java.util.List"))),
//! );
//!
//! let generator = modelgen_java::generator(&CodegenConfig::default());
//! let source = generator.render_one(&file)?;
//! ```

pub mod model;
pub mod view;

use model::{
    BooleanValue, Class, Constant, Enum, EnumConstant, Field, File, Javadoc, NullValue,
    NumberValue, ReferenceValue, TextValue, TypeRef, Value,
};
use modelgen::{CodegenConfig, FormatConfig, Generator, TransformFactory, TransformFactoryBuilder};
use std::sync::Arc;
use tracing::debug;
use view::{
    ClassView, EnumConstantView, EnumView, FieldView, FileView, JavadocView, TextValueView,
    TypeRefView, ValueView,
};

/// Package whose types are always in scope.
pub const IMPLICIT_PACKAGE: &str = "java.lang";

/// The Java views and type relations, ready to be merged or built.
pub fn builder(format: &FormatConfig) -> TransformFactoryBuilder {
    TransformFactory::builder("java")
        .extends::<Enum, Class>(|declaration| &declaration.class)
        .extends::<Constant, Field>(|constant| &constant.field)
        .implements::<TextValue, dyn Value>(|value| value)
        .implements::<NumberValue, dyn Value>(|value| value)
        .implements::<BooleanValue, dyn Value>(|value| value)
        .implements::<NullValue, dyn Value>(|value| value)
        .implements::<ReferenceValue, dyn Value>(|value| value)
        .install::<File, String, _>(FileView::new(*format))
        .install::<Class, String, _>(ClassView::new(*format))
        .install::<Enum, String, _>(EnumView::new(*format))
        .install::<EnumConstant, String, _>(EnumConstantView)
        .install::<Field, String, _>(FieldView::new(*format))
        .install::<TypeRef, String, _>(TypeRefView)
        .install::<Javadoc, String, _>(JavadocView::new(*format))
        .install::<TextValue, String, _>(TextValueView)
        .install_capability::<dyn Value, String, _>(ValueView)
}

pub fn transform_factory(format: &FormatConfig) -> TransformFactory {
    builder(format).build()
}

/// A generator rendering Java with `config`.
///
/// Types in [`IMPLICIT_PACKAGE`] and the configured ignored packages are
/// never imported.
pub fn generator<'m>(config: &CodegenConfig) -> Generator<'m> {
    let factory = Arc::new(transform_factory(&config.format));
    let mut dependencies = config.dependency_manager();
    dependencies.ignore_package(IMPLICIT_PACKAGE);
    debug!(
        transforms = factory.len(),
        ignored = config.imports.ignored_packages.len(),
        "Created Java generator"
    );
    Generator::with_dependency_manager(factory, dependencies)
}
