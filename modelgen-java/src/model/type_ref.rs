use modelgen::Model;

/// A reference to a type by fully-qualified name, with generic arguments.
///
/// Primitives and type variables have no package (`int`, `T`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    pub qualified: String,
    pub generics: Vec<TypeRef>,
}

impl Model for TypeRef {}

impl TypeRef {
    pub fn new(qualified: impl Into<String>) -> Self {
        Self {
            qualified: qualified.into(),
            generics: Vec::new(),
        }
    }

    #[must_use]
    pub fn generic(mut self, argument: TypeRef) -> Self {
        self.generics.push(argument);
        self
    }

    pub fn simple_name(&self) -> &str {
        modelgen::dependency::simple_name(&self.qualified)
    }
}
