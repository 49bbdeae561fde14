use crate::model::{Javadoc, JavadocTag};
use modelgen::{CodegenResult, FormatConfig, Generator, Transform};

pub struct JavadocView {
    format: FormatConfig,
}

impl JavadocView {
    pub fn new(format: FormatConfig) -> Self {
        Self { format }
    }
}

impl Transform<Javadoc, String> for JavadocView {
    fn transform<'m>(
        &self,
        _generator: &Generator<'m>,
        model: &'m Javadoc,
    ) -> CodegenResult<Option<String>> {
        let mut lines = vec!["/**".to_string()];
        lines.extend(model.text.lines().map(comment_line));

        if !model.tags.is_empty() {
            if !model.text.is_empty() {
                lines.push(" *".to_string());
            }
            lines.extend(model.tags.iter().map(tag_line));
        }

        lines.push(" */".to_string());
        Ok(Some(lines.join(self.format.line_ending.as_str())))
    }
}

fn comment_line(text: &str) -> String {
    if text.is_empty() {
        " *".to_string()
    } else {
        format!(" * {text}")
    }
}

fn tag_line(tag: &JavadocTag) -> String {
    let mut line = format!(" * @{}", tag.kind.as_str());
    for part in [&tag.value, &tag.text].into_iter().flatten() {
        line.push(' ');
        line.push_str(part);
    }
    line
}
