//! Java source models.
//!
//! Plain owned values built with chained constructors:
//!
//! ```rust,ignore
//! let file = File::new("User")
//!     .package("com.example")
//!     .class(
//!         Class::new("User")
//!             .modifier(Modifier::Public)
//!             .field(Field::new("name", TypeRef::new("java.lang.String"))),
//!     );
//! ```

mod class;
mod field;
mod file;
mod javadoc;
mod type_ref;
mod value;

pub use class::{Class, Enum, EnumConstant};
pub use field::{Constant, Field};
pub use file::File;
pub use javadoc::{Javadoc, JavadocTag, JavadocTagKind};
pub use type_ref::TypeRef;
pub use value::{BooleanValue, NullValue, NumberValue, ReferenceValue, TextValue, Value};

use std::collections::BTreeSet;
use std::fmt;

/// Java modifiers, ordered as they are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Static,
    Final,
}

impl Modifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::Abstract => "abstract",
            Modifier::Static => "static",
            Modifier::Final => "final",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Modifiers of a declaration, always iterated in written order.
pub type Modifiers = BTreeSet<Modifier>;
