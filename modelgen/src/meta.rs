//! Render results with their provenance.

use crate::generator::Generator;
use crate::transform::TransformInfo;
use std::fmt;

/// One successful render: the result plus the model, transform and
/// generator that produced it.
///
/// Borrowing from both the generator and the model, a `Meta` cannot outlive
/// either.
pub struct Meta<'g, 'm, A: ?Sized, B> {
    model: &'m A,
    transform: TransformInfo,
    result: B,
    generator: &'g Generator<'m>,
}

impl<'g, 'm, A: ?Sized, B> Meta<'g, 'm, A, B> {
    pub(crate) fn new(
        model: &'m A,
        transform: TransformInfo,
        result: B,
        generator: &'g Generator<'m>,
    ) -> Self {
        Self {
            model,
            transform,
            result,
            generator,
        }
    }

    pub fn model(&self) -> &'m A {
        self.model
    }

    /// The transform that produced the result.
    pub fn transform(&self) -> TransformInfo {
        self.transform
    }

    pub fn result(&self) -> &B {
        &self.result
    }

    pub fn into_result(self) -> B {
        self.result
    }

    pub fn generator(&self) -> &'g Generator<'m> {
        self.generator
    }

    /// Transform the result, keeping the provenance.
    pub fn map<C>(self, f: impl FnOnce(B) -> C) -> Meta<'g, 'm, A, C> {
        Meta {
            model: self.model,
            transform: self.transform,
            result: f(self.result),
            generator: self.generator,
        }
    }
}

impl<A: ?Sized + fmt::Debug, B: fmt::Debug> fmt::Debug for Meta<'_, '_, A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Meta")
            .field("model", &self.model)
            .field("transform", &self.transform)
            .field("result", &self.result)
            .finish_non_exhaustive()
    }
}
