use super::{Constant, Field, Javadoc, Modifier, Modifiers, TypeRef, Value};
use modelgen::Model;

/// A class declaration. Classes nest: members of `classes` are rendered as
/// static nested classes.
#[derive(Debug)]
pub struct Class {
    pub name: String,
    pub modifiers: Modifiers,
    pub javadoc: Option<Javadoc>,
    pub extends: Option<TypeRef>,
    pub constants: Vec<Constant>,
    pub fields: Vec<Field>,
    pub classes: Vec<Class>,
}

impl Model for Class {}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: Modifiers::new(),
            javadoc: None,
            extends: None,
            constants: Vec::new(),
            fields: Vec::new(),
            classes: Vec::new(),
        }
    }

    #[must_use]
    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    #[must_use]
    pub fn javadoc(mut self, javadoc: Javadoc) -> Self {
        self.javadoc = Some(javadoc);
        self
    }

    #[must_use]
    pub fn extends(mut self, ty: TypeRef) -> Self {
        self.extends = Some(ty);
        self
    }

    #[must_use]
    pub fn constant(mut self, constant: Constant) -> Self {
        self.constants.push(constant);
        self
    }

    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    #[must_use]
    pub fn class(mut self, class: Class) -> Self {
        self.classes.push(class);
        self
    }
}

/// An enum declaration: a class body preceded by its constants.
///
/// Declared as a subtype of [`Class`].
#[derive(Debug)]
pub struct Enum {
    pub class: Class,
    pub constants: Vec<EnumConstant>,
}

impl Model for Enum {}

impl Enum {
    pub fn new(class: Class) -> Self {
        Self {
            class,
            constants: Vec::new(),
        }
    }

    #[must_use]
    pub fn constant(mut self, constant: EnumConstant) -> Self {
        self.constants.push(constant);
        self
    }
}

/// One enum constant with its constructor arguments.
#[derive(Debug)]
pub struct EnumConstant {
    pub name: String,
    pub arguments: Vec<Box<dyn Value>>,
}

impl Model for EnumConstant {}

impl EnumConstant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    #[must_use]
    pub fn argument(mut self, value: impl Value) -> Self {
        self.arguments.push(Box::new(value));
        self
    }
}
