use super::{modifier_prefix, required};
use crate::model::{Class, Enum, EnumConstant, Modifier};
use modelgen::{CodegenResult, FormatConfig, Generator, Transform};
use std::fmt::Write;

/// Renders a class. A class whose parent on the render stack is a type
/// declaration is written as a static nested class.
pub struct ClassView {
    format: FormatConfig,
}

impl ClassView {
    pub fn new(format: FormatConfig) -> Self {
        Self { format }
    }
}

impl Transform<Class, String> for ClassView {
    fn transform<'m>(
        &self,
        generator: &Generator<'m>,
        model: &'m Class,
    ) -> CodegenResult<Option<String>> {
        declaration(generator, &self.format, "class", model, None).map(Some)
    }
}

pub struct EnumView {
    format: FormatConfig,
}

impl EnumView {
    pub fn new(format: FormatConfig) -> Self {
        Self { format }
    }
}

impl Transform<Enum, String> for EnumView {
    fn transform<'m>(
        &self,
        generator: &Generator<'m>,
        model: &'m Enum,
    ) -> CodegenResult<Option<String>> {
        let constants = generator
            .render_each(&model.constants)
            .collect::<CodegenResult<Vec<_>>>()?;
        let leading = if constants.is_empty() {
            None
        } else {
            let separator = format!(",{}", self.format.line_ending.as_str());
            Some(format!("{};", constants.join(&separator)))
        };

        declaration(generator, &self.format, "enum", &model.class, leading).map(Some)
    }
}

pub struct EnumConstantView;

impl Transform<EnumConstant, String> for EnumConstantView {
    fn transform<'m>(
        &self,
        generator: &Generator<'m>,
        model: &'m EnumConstant,
    ) -> CodegenResult<Option<String>> {
        if model.arguments.is_empty() {
            return Ok(Some(model.name.clone()));
        }
        let arguments = generator
            .render_each(model.arguments.iter().map(|value| &**value))
            .collect::<CodegenResult<Vec<_>>>()?;
        Ok(Some(format!("{}({})", model.name, arguments.join(", "))))
    }
}

fn is_nested(generator: &Generator<'_>) -> bool {
    let stack = generator.render_stack();
    stack.peek_as::<Class>(1).is_some() || stack.peek_as::<Enum>(1).is_some()
}

/// Header, then the body sections separated by blank lines: the leading
/// block, the members, each nested class.
fn declaration<'m>(
    generator: &Generator<'m>,
    format: &FormatConfig,
    keyword: &str,
    class: &'m Class,
    leading: Option<String>,
) -> CodegenResult<String> {
    let newline = format.line_ending.as_str();
    let mut out = String::new();

    if let Some(javadoc) = generator.render_one(class.javadoc.as_ref())? {
        out.push_str(&javadoc);
        out.push_str(newline);
    }

    let mut modifiers = class.modifiers.clone();
    if is_nested(generator) {
        modifiers.insert(Modifier::Static);
    }
    write!(out, "{}{keyword} {}", modifier_prefix(&modifiers), class.name)?;
    if let Some(parent) = &class.extends {
        write!(out, " extends {}", required(generator, parent)?)?;
    }
    out.push_str(" {");
    out.push_str(newline);

    let mut sections: Vec<String> = leading.into_iter().collect();
    let members = generator
        .render_each(&class.constants)
        .chain(generator.render_each(&class.fields))
        .collect::<CodegenResult<Vec<_>>>()?;
    if !members.is_empty() {
        sections.push(members.join(newline));
    }
    for nested in generator.render_each(&class.classes) {
        sections.push(nested?);
    }

    if !sections.is_empty() {
        let blank = format!("{newline}{newline}");
        out.push_str(&format.indent_block(&sections.join(&blank)));
        out.push_str(newline);
    }
    out.push('}');
    Ok(out)
}
