use super::{Class, Enum, Javadoc};
use modelgen::Model;

/// One `.java` compilation unit.
#[derive(Debug)]
pub struct File {
    pub name: String,
    pub package: Option<String>,
    pub javadoc: Option<Javadoc>,
    pub classes: Vec<Class>,
    pub enums: Vec<Enum>,
}

impl Model for File {}

impl File {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package: None,
            javadoc: None,
            classes: Vec::new(),
            enums: Vec::new(),
        }
    }

    #[must_use]
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    #[must_use]
    pub fn javadoc(mut self, javadoc: Javadoc) -> Self {
        self.javadoc = Some(javadoc);
        self
    }

    #[must_use]
    pub fn class(mut self, class: Class) -> Self {
        self.classes.push(class);
        self
    }

    #[must_use]
    pub fn enumeration(mut self, declaration: Enum) -> Self {
        self.enums.push(declaration);
        self
    }

    /// Path of the file relative to the source root.
    pub fn path(&self) -> String {
        match &self.package {
            Some(package) => format!("{}/{}.java", package.replace('.', "/"), self.name),
            None => format!("{}.java", self.name),
        }
    }

    /// The qualified name of a top-level type declared in this file.
    pub fn qualify(&self, name: &str) -> String {
        match &self.package {
            Some(package) => format!("{package}.{name}"),
            None => name.to_string(),
        }
    }

    /// Qualified names of every type declared in this file, nested types
    /// included, each before the types nested in it.
    pub fn declarations(&self) -> Vec<String> {
        let mut names = Vec::new();
        let top_level = self
            .classes
            .iter()
            .chain(self.enums.iter().map(|declaration| &declaration.class));
        for class in top_level {
            collect_declarations(self.qualify(&class.name), class, &mut names);
        }
        names
    }
}

fn collect_declarations(qualified: String, class: &Class, names: &mut Vec<String>) {
    for nested in &class.classes {
        collect_declarations(format!("{qualified}.{}", nested.name), nested, names);
    }
    names.push(qualified);
}
