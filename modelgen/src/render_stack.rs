//! The ancestor path of the model currently being rendered.
//!
//! The bottom of a [`RenderStack`] is the model handed to the generator by
//! its caller; the top is the model whose transform is running right now.
//! A transform that needs its parent peeks one below the top:
//!
//! ```rust,ignore
//! let nested = generator.render_stack().peek_as::<Class>(1).is_some();
//! ```

use crate::model::{Model, short_type_name};
use std::fmt;

/// Models entered by the generator and not yet finished, in nesting order.
#[derive(Clone, Default)]
pub struct RenderStack<'m> {
    frames: Vec<&'m dyn Model>,
}

impl<'m> RenderStack<'m> {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    pub fn push(&mut self, model: &'m dyn Model) {
        self.frames.push(model);
    }

    pub fn pop(&mut self) -> Option<&'m dyn Model> {
        self.frames.pop()
    }

    /// The model on top of the stack.
    pub fn peek(&self) -> Option<&'m dyn Model> {
        self.peek_at(0)
    }

    /// The model `depth` levels below the top. `peek_at(1)` is the parent
    /// of the model being rendered.
    pub fn peek_at(&self, depth: usize) -> Option<&'m dyn Model> {
        let index = self.frames.len().checked_sub(depth + 1)?;
        self.frames.get(index).copied()
    }

    /// The model `depth` levels below the top, if it is a `T`.
    pub fn peek_as<T: Model>(&self, depth: usize) -> Option<&'m T> {
        self.peek_at(depth)?.downcast_ref::<T>()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// All models, most recently entered first.
    pub fn from_top(&self) -> impl Iterator<Item = &'m dyn Model> + '_ {
        self.frames.iter().rev().copied()
    }

    /// All models, in the order they were entered.
    pub fn from_bottom(&self) -> impl Iterator<Item = &'m dyn Model> + '_ {
        self.frames.iter().copied()
    }

    /// Every `T` on the stack, nearest first.
    pub fn from_top_of<T: Model>(&self) -> impl Iterator<Item = &'m T> + '_ {
        self.from_top().filter_map(|model| model.downcast_ref::<T>())
    }

    /// Every `T` on the stack, outermost first.
    pub fn from_bottom_of<T: Model>(&self) -> impl Iterator<Item = &'m T> + '_ {
        self.from_bottom().filter_map(|model| model.downcast_ref::<T>())
    }

    /// The type names on the stack, root first.
    pub fn path(&self) -> RenderPath {
        RenderPath(self.frames.iter().map(|model| model.type_name()).collect())
    }
}

impl fmt::Debug for RenderStack<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.frames.iter()).finish()
    }
}

/// Snapshot of a render stack's type names, root first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderPath(Vec<&'static str>);

impl RenderPath {
    pub fn new(types: Vec<&'static str>) -> Self {
        Self(types)
    }

    pub fn types(&self) -> &[&'static str] {
        &self.0
    }

    /// The innermost model type, where the failure happened.
    pub fn leaf(&self) -> Option<&'static str> {
        self.0.last().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RenderPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<root>");
        }
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" > ")?;
            }
            f.write_str(short_type_name(name))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Outer;
    impl Model for Outer {}

    #[derive(Debug)]
    struct Inner(u32);
    impl Model for Inner {}

    #[test]
    fn test_peek_on_empty_stack() {
        let stack = RenderStack::new();
        assert!(stack.peek().is_none());
        assert!(stack.peek_at(3).is_none());
        assert!(stack.is_empty());
        assert_eq!(stack.path().to_string(), "<root>");
    }

    #[test]
    fn test_push_pop_order() {
        let outer = Outer;
        let first = Inner(1);
        let second = Inner(2);

        let mut stack = RenderStack::new();
        stack.push(&outer);
        stack.push(&first);
        stack.push(&second);

        assert_eq!(stack.len(), 3);
        assert_eq!(stack.peek_as::<Inner>(0).map(|m| m.0), Some(2));
        assert_eq!(stack.peek_as::<Inner>(1).map(|m| m.0), Some(1));
        assert!(stack.peek_as::<Outer>(2).is_some());
        assert!(stack.peek_at(3).is_none());

        let nearest: Vec<u32> = stack.from_top_of::<Inner>().map(|m| m.0).collect();
        assert_eq!(nearest, vec![2, 1]);
        let outermost: Vec<u32> = stack.from_bottom_of::<Inner>().map(|m| m.0).collect();
        assert_eq!(outermost, vec![1, 2]);

        assert_eq!(stack.path().to_string(), "Outer > Inner > Inner");

        assert!(stack.pop().is_some_and(|m| m.is::<Inner>()));
        assert!(stack.pop().is_some());
        assert!(stack.pop().is_some_and(|m| m.is::<Outer>()));
        assert!(stack.pop().is_none());
    }
}
