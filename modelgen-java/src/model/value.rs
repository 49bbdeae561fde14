//! Initializer values.
//!
//! Every value is a [`Value`]. The `Display` output of a value is its Java
//! literal, except for [`TextValue`], which displays its raw content and
//! gets quoted by its own view.

use modelgen::Model;
use std::fmt;

pub trait Value: Model + fmt::Display {}

/// A string literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextValue(pub String);

impl Model for TextValue {}
impl Value for TextValue {}

impl TextValue {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl fmt::Display for TextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An integer or floating point literal, kept as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberValue(pub String);

impl Model for NumberValue {}
impl Value for NumberValue {}

impl From<i64> for NumberValue {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<f64> for NumberValue {
    fn from(value: f64) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for NumberValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BooleanValue(pub bool);

impl Model for BooleanValue {}
impl Value for BooleanValue {}

impl fmt::Display for BooleanValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NullValue;

impl Model for NullValue {}
impl Value for NullValue {}

impl fmt::Display for NullValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("null")
    }
}

/// Any expression written verbatim, such as `Color.RED`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceValue(pub String);

impl Model for ReferenceValue {}
impl Value for ReferenceValue {}

impl ReferenceValue {
    pub fn new(expression: impl Into<String>) -> Self {
        Self(expression.into())
    }
}

impl fmt::Display for ReferenceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
