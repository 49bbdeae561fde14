use crate::model::TypeRef;
use modelgen::{CodegenResult, Generator, Transform};
use std::fmt::Write;

/// Writes the simple name when the unit can claim it, the qualified name
/// otherwise.
pub struct TypeRefView;

impl Transform<TypeRef, String> for TypeRefView {
    fn transform<'m>(
        &self,
        generator: &Generator<'m>,
        model: &'m TypeRef,
    ) -> CodegenResult<Option<String>> {
        let claim = generator.claim_type(&model.qualified)?;
        let mut out = claim
            .select(model.simple_name(), &model.qualified)
            .to_string();

        if !model.generics.is_empty() {
            let arguments = generator
                .render_each(&model.generics)
                .collect::<CodegenResult<Vec<_>>>()?;
            write!(out, "<{}>", arguments.join(", "))?;
        }
        Ok(Some(out))
    }
}
