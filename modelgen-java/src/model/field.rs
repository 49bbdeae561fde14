use super::{Javadoc, Modifier, Modifiers, TypeRef, Value};
use modelgen::Model;

/// A field declaration.
#[derive(Debug)]
pub struct Field {
    pub name: String,
    pub ty: TypeRef,
    pub modifiers: Modifiers,
    pub value: Option<Box<dyn Value>>,
    pub javadoc: Option<Javadoc>,
}

impl Model for Field {}

impl Field {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            modifiers: Modifiers::new(),
            value: None,
            javadoc: None,
        }
    }

    #[must_use]
    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    #[must_use]
    pub fn value(mut self, value: impl Value) -> Self {
        self.value = Some(Box::new(value));
        self
    }

    #[must_use]
    pub fn javadoc(mut self, javadoc: Javadoc) -> Self {
        self.javadoc = Some(javadoc);
        self
    }
}

/// A `public static final` field with an initializer.
///
/// Declared as a subtype of [`Field`], so it renders through the field view.
#[derive(Debug)]
pub struct Constant {
    pub field: Field,
}

impl Model for Constant {}

impl Constant {
    pub fn new(name: impl Into<String>, ty: TypeRef, value: impl Value) -> Self {
        Self {
            field: Field::new(name, ty)
                .modifier(Modifier::Public)
                .modifier(Modifier::Static)
                .modifier(Modifier::Final)
                .value(value),
        }
    }

    #[must_use]
    pub fn javadoc(mut self, javadoc: Javadoc) -> Self {
        self.field.javadoc = Some(javadoc);
        self
    }
}
