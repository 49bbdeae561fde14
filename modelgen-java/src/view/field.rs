use super::{modifier_prefix, required};
use crate::model::Field;
use modelgen::{CodegenResult, FormatConfig, Generator, Transform};
use std::fmt::Write;

pub struct FieldView {
    format: FormatConfig,
}

impl FieldView {
    pub fn new(format: FormatConfig) -> Self {
        Self { format }
    }
}

impl Transform<Field, String> for FieldView {
    fn transform<'m>(
        &self,
        generator: &Generator<'m>,
        model: &'m Field,
    ) -> CodegenResult<Option<String>> {
        let mut out = String::new();
        if let Some(javadoc) = generator.render_one(model.javadoc.as_ref())? {
            out.push_str(&javadoc);
            out.push_str(self.format.line_ending.as_str());
        }

        let ty = required(generator, &model.ty)?;
        write!(out, "{}{ty} {}", modifier_prefix(&model.modifiers), model.name)?;
        if let Some(value) = generator.render_one(model.value.as_deref())? {
            write!(out, " = {value}")?;
        }
        out.push(';');
        Ok(Some(out))
    }
}
