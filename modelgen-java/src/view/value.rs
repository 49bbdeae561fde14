use crate::model::{TextValue, Value};
use modelgen::{CodegenResult, Generator, Transform};

/// Writes text as a quoted, escaped string literal.
pub struct TextValueView;

impl Transform<TextValue, String> for TextValueView {
    fn transform<'m>(
        &self,
        _generator: &Generator<'m>,
        model: &'m TextValue,
    ) -> CodegenResult<Option<String>> {
        let mut out = String::with_capacity(model.0.len() + 2);
        out.push('"');
        for c in model.0.chars() {
            match c {
                '"' => out.push_str("\\\""),
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                c => out.push(c),
            }
        }
        out.push('"');
        Ok(Some(out))
    }
}

/// Fallback for every [`Value`]: its literal form.
pub struct ValueView;

impl Transform<dyn Value, String> for ValueView {
    fn transform<'m>(
        &self,
        _generator: &Generator<'m>,
        model: &'m dyn Value,
    ) -> CodegenResult<Option<String>> {
        Ok(Some(model.to_string()))
    }
}
