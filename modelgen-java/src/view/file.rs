use crate::model::File;
use modelgen::dependency::simple_name;
use modelgen::{CodegenResult, FormatConfig, Generator, Transform};
use std::fmt::Write;

/// Renders a compilation unit.
///
/// The declarations are rendered before the header so that every type they
/// reference has been claimed by the time the import lines are written.
pub struct FileView {
    format: FormatConfig,
}

impl FileView {
    pub fn new(format: FormatConfig) -> Self {
        Self { format }
    }
}

impl Transform<File, String> for FileView {
    fn transform<'m>(
        &self,
        generator: &Generator<'m>,
        model: &'m File,
    ) -> CodegenResult<Option<String>> {
        generator.with_dependencies(|dependencies| {
            dependencies.clear();
            match &model.package {
                Some(package) => dependencies.set_current_package(package.as_str()),
                None => dependencies.unset_current_package(),
            }
            // Own names, nested ones included, shadow anything imported.
            for qualified in model.declarations() {
                dependencies.reserve(simple_name(&qualified), &qualified);
            }
        })?;

        let declarations = generator
            .render_each(&model.classes)
            .chain(generator.render_each(&model.enums))
            .collect::<CodegenResult<Vec<_>>>()?;

        let newline = self.format.line_ending.as_str();
        let mut out = String::new();
        if let Some(javadoc) = generator.render_one(model.javadoc.as_ref())? {
            out.push_str(&javadoc);
            out.push_str(newline);
        }
        if let Some(package) = &model.package {
            write!(out, "package {package};{newline}{newline}")?;
        }

        let imports = generator.with_dependencies(|dependencies| {
            dependencies
                .registered_imports()
                .map(|qualified| format!("import {qualified};"))
                .collect::<Vec<_>>()
        })?;
        if !imports.is_empty() {
            out.push_str(&self.format.lines(&imports));
            out.push_str(newline);
        }

        out.push_str(&declarations.join(&format!("{newline}{newline}")));
        out.push_str(newline);
        Ok(Some(out))
    }
}
