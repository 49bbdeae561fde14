use modelgen::Model;

/// Standard block tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JavadocTagKind {
    Param,
    Return,
    Throws,
    Author,
    Since,
    See,
    Deprecated,
    Version,
}

impl JavadocTagKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            JavadocTagKind::Param => "param",
            JavadocTagKind::Return => "return",
            JavadocTagKind::Throws => "throws",
            JavadocTagKind::Author => "author",
            JavadocTagKind::Since => "since",
            JavadocTagKind::See => "see",
            JavadocTagKind::Deprecated => "deprecated",
            JavadocTagKind::Version => "version",
        }
    }
}

/// One block tag, such as `@param name the user name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavadocTag {
    pub kind: JavadocTagKind,
    /// The tag argument: parameter name, exception type.
    pub value: Option<String>,
    pub text: Option<String>,
}

impl JavadocTag {
    pub fn new(kind: JavadocTagKind) -> Self {
        Self {
            kind,
            value: None,
            text: None,
        }
    }

    pub fn param(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(JavadocTagKind::Param).value(name).text(text)
    }

    pub fn returns(text: impl Into<String>) -> Self {
        Self::new(JavadocTagKind::Return).text(text)
    }

    pub fn author(name: impl Into<String>) -> Self {
        Self::new(JavadocTagKind::Author).text(name)
    }

    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// A documentation comment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Javadoc {
    pub text: String,
    pub tags: Vec<JavadocTag>,
}

impl Model for Javadoc {}

impl Javadoc {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tags: Vec::new(),
        }
    }

    #[must_use]
    pub fn tag(mut self, tag: JavadocTag) -> Self {
        self.tags.push(tag);
        self
    }
}
