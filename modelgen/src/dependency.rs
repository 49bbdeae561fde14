//! Short-name bookkeeping for one compilation unit.
//!
//! Generated source refers to types either by their simple name (which then
//! needs an import) or by their fully-qualified name. The
//! [`DependencyManager`] hands out simple names first come, first served:
//! the first fully-qualified name to claim a simple name owns it for the
//! rest of the unit, and every other type with that simple name must be
//! written out in full.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut deps = DependencyManager::new();
//! assert_eq!(deps.claim("Foo", "pkg1.Foo"), Claim::UseShort);
//! assert_eq!(deps.claim("Foo", "pkg2.Foo"), Claim::UseQualified);
//! assert_eq!(deps.claim("Foo", "pkg1.Foo"), Claim::UseShort);
//! assert_eq!(deps.registered_imports().collect::<Vec<_>>(), ["pkg1.Foo"]);
//! ```

use std::collections::{BTreeMap, BTreeSet};

/// Outcome of claiming a simple name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Claim {
    /// The simple name refers to the requested type.
    UseShort,
    /// The simple name belongs to another type; write the qualified name.
    UseQualified,
}

impl Claim {
    pub fn is_short(self) -> bool {
        matches!(self, Claim::UseShort)
    }

    /// Pick the form to write for this outcome.
    pub fn select<'a>(self, simple: &'a str, qualified: &'a str) -> &'a str {
        match self {
            Claim::UseShort => simple,
            Claim::UseQualified => qualified,
        }
    }
}

/// Per-unit resolver of simple-name collisions.
///
/// The configuration part (ignored packages) survives [`clear`](Self::clear);
/// the claims and the current package do not. A manager must never be
/// shared between units.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyManager {
    /// Packages whose types are visible without an import.
    ignored_packages: BTreeSet<String>,

    /// Package of the unit being rendered.
    current_package: Option<String>,

    /// Simple name -> fully-qualified name that owns it.
    owners: BTreeMap<String, String>,

    /// Fully-qualified names that need an import line.
    imports: BTreeSet<String>,
}

impl DependencyManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manager that never imports types from `packages`.
    pub fn with_ignored_packages<I, S>(packages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut manager = Self::new();
        for package in packages {
            manager.ignore_package(package);
        }
        manager
    }

    pub fn ignore_package(&mut self, package: impl Into<String>) {
        self.ignored_packages.insert(package.into());
    }

    pub fn ignored_packages(&self) -> impl Iterator<Item = &str> {
        self.ignored_packages.iter().map(String::as_str)
    }

    /// Set the package of the unit being rendered. Types in it need no import.
    pub fn set_current_package(&mut self, package: impl Into<String>) {
        self.current_package = Some(package.into());
    }

    pub fn unset_current_package(&mut self) {
        self.current_package = None;
    }

    pub fn current_package(&self) -> Option<&str> {
        self.current_package.as_deref()
    }

    /// Claim `simple` as the short form of `qualified`.
    ///
    /// The first claim of a simple name wins; claiming it again for the same
    /// qualified name keeps returning [`Claim::UseShort`]. An empty simple
    /// name can never be used.
    pub fn claim(&mut self, simple: &str, qualified: &str) -> Claim {
        if simple.is_empty() {
            return Claim::UseQualified;
        }

        if let Some(owner) = self.owners.get(simple) {
            return if owner == qualified {
                Claim::UseShort
            } else {
                Claim::UseQualified
            };
        }

        self.owners.insert(simple.to_string(), qualified.to_string());
        if package_of(qualified).is_some() && !self.is_ignored(qualified) {
            self.imports.insert(qualified.to_string());
        }
        Claim::UseShort
    }

    /// Claim `simple` for `qualified` without an import line, for types
    /// declared by the unit itself, such as nested classes.
    ///
    /// Returns [`Claim::UseQualified`] if another type already owns `simple`.
    pub fn reserve(&mut self, simple: &str, qualified: &str) -> Claim {
        if simple.is_empty() {
            return Claim::UseQualified;
        }
        match self.owners.get(simple) {
            Some(owner) if owner == qualified => Claim::UseShort,
            Some(_) => Claim::UseQualified,
            None => {
                self.owners.insert(simple.to_string(), qualified.to_string());
                Claim::UseShort
            }
        }
    }

    /// Claim the last segment of `qualified` as its simple name.
    pub fn claim_type(&mut self, qualified: &str) -> Claim {
        self.claim(simple_name(qualified), qualified)
    }

    /// The qualified name currently owning `simple`.
    pub fn owner_of(&self, simple: &str) -> Option<&str> {
        self.owners.get(simple).map(String::as_str)
    }

    /// Returns true if `qualified` owns its simple name in this unit.
    pub fn is_claimed(&self, qualified: &str) -> bool {
        self.owner_of(simple_name(qualified)) == Some(qualified)
    }

    /// Returns true if `qualified` can be used without an import: it lives
    /// in an ignored package or in the current package.
    pub fn is_ignored(&self, qualified: &str) -> bool {
        match package_of(qualified) {
            Some(package) => {
                self.ignored_packages.contains(package)
                    || self.current_package.as_deref() == Some(package)
            }
            None => true,
        }
    }

    /// Qualified names claimed in short form that need an import line,
    /// sorted and without duplicates.
    pub fn registered_imports(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().map(String::as_str)
    }

    pub fn has_imports(&self) -> bool {
        !self.imports.is_empty()
    }

    /// Forget all claims and the current package, keeping ignored packages.
    pub fn clear(&mut self) {
        self.owners.clear();
        self.imports.clear();
        self.current_package = None;
    }
}

/// The package part of a qualified name, if it has one.
pub fn package_of(qualified: &str) -> Option<&str> {
    qualified.rfind('.').map(|i| &qualified[..i])
}

/// The last segment of a qualified name.
pub fn simple_name(qualified: &str) -> &str {
    qualified.rfind('.').map_or(qualified, |i| &qualified[i + 1..])
}
