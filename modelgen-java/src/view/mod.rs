//! Views rendering the Java models to source text.

mod class;
mod field;
mod file;
mod javadoc;
mod type_ref;
mod value;

pub use class::{ClassView, EnumConstantView, EnumView};
pub use field::FieldView;
pub use file::FileView;
pub use javadoc::JavadocView;
pub use type_ref::TypeRefView;
pub use value::{TextValueView, ValueView};

use crate::model::Modifiers;
use modelgen::{CodegenError, CodegenResult, Generator, Model};

/// Render a model that must produce text.
fn required<'m, M: Model + ?Sized>(generator: &Generator<'m>, model: &'m M) -> CodegenResult<String> {
    generator.render_one(model)?.ok_or_else(|| {
        CodegenError::failed(format!(
            "no view renders `{}`",
            model.as_model().type_key().short_name()
        ))
    })
}

/// Modifiers followed by a space, or nothing.
fn modifier_prefix(modifiers: &Modifiers) -> String {
    modifiers
        .iter()
        .map(|modifier| format!("{modifier} "))
        .collect()
}
