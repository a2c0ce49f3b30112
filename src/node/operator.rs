//! Operators which connect an [Expression] to its children.
//!
//! These don't appear in the tree themselves - each operator corresponds to one or more variants
//! of [Expression] - but they give the simplifier and renderer a way to handle every unary or
//! binary variant with the same code.

use alloc::boxed::Box;
use num_traits::Float;

use super::{expression::Expression, function::Function};

/// An operator applied to exactly one child expression.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum UnaryOperator {
    Negation,
    Inverse,
    Call(Function),
}

impl UnaryOperator {
    /// Computes the result of applying this operator to a constant.
    ///
    /// `Negation` has a fold too, but the simplifier never calls it; see
    /// [Expression::reduce](super::expression::Expression::reduce).
    pub fn fold(&self, operand: f64) -> f64 {
        match self {
            Self::Negation => -operand,
            Self::Inverse => 1.0 / operand,
            Self::Call(function) => function.evaluate(operand),
        }
    }

    /// Builds a new node applying this operator to `operand`.
    pub fn build(self, operand: Expression) -> Expression {
        let operand = Box::new(operand);
        match self {
            Self::Negation => Expression::Negation(operand),
            Self::Inverse => Expression::Inverse(operand),
            Self::Call(Function::Sine) => Expression::Sin(operand),
            Self::Call(Function::Cosine) => Expression::Cos(operand),
            Self::Call(Function::Tangent) => Expression::Tan(operand),
        }
    }
}

/// An operator applied to a left and right child expression.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum BinaryOperator {
    Product,
    Quotient,
    Sum,
    Difference,
    Exponential,
    /// The left child is the base and the right child is the argument.
    Logarithm,
    Power,
}

impl BinaryOperator {
    /// The character drawn between the two children, or `None` for operators which are rendered
    /// in function-call form.
    ///
    /// `Product` returns `*` here, but it is omitted entirely for some combinations of children.
    pub fn infix_glyph(&self) -> Option<char> {
        match self {
            Self::Product => Some('*'),
            Self::Quotient => Some('/'),
            Self::Sum => Some('+'),
            Self::Difference => Some('-'),
            Self::Exponential | Self::Power => Some('^'),
            Self::Logarithm => None,
        }
    }

    /// Computes the result of applying this operator to two constants. No degenerate inputs are
    /// rejected - division by zero and logarithms of non-positive numbers give infinities or NaN.
    pub fn fold(&self, left: f64, right: f64) -> f64 {
        match self {
            Self::Product => left * right,
            Self::Quotient => left / right,
            Self::Sum => left + right,
            Self::Difference => left - right,
            Self::Exponential | Self::Power => Float::powf(left, right),
            Self::Logarithm => Float::ln(right) / Float::ln(left),
        }
    }

    /// Builds a new node applying this operator to `left` and `right`.
    pub fn build(self, left: Expression, right: Expression) -> Expression {
        let (l, r) = (Box::new(left), Box::new(right));
        match self {
            Self::Product => Expression::Product(l, r),
            Self::Quotient => Expression::Quotient(l, r),
            Self::Sum => Expression::Sum(l, r),
            Self::Difference => Expression::Difference(l, r),
            Self::Exponential => Expression::Exponential(l, r),
            Self::Logarithm => Expression::Logarithm(l, r),
            Self::Power => Expression::Power(l, r),
        }
    }
}
