use core::cmp::max;

use alloc::boxed::Box;

use crate::error::NodeError;

use super::{function::Function, operator::{BinaryOperator, UnaryOperator}};

/// The deepest tree which the recursive algorithms in this crate are documented to handle.
///
/// Rendering, simplifying and dropping a tree all recurse once per level, so much deeper trees
/// risk exhausting the stack. Use [Expression::check_depth] on trees built from untrusted input.
pub const MAX_DEPTH: usize = 1024;

/// A node in an expression tree. Every child is exclusively owned by its parent.
#[derive(PartialEq, Debug, Clone)]
pub enum Expression {
    Constant(f64),
    Variable(char),

    Negation(Box<Expression>),
    Inverse(Box<Expression>),
    Sin(Box<Expression>),
    Cos(Box<Expression>),
    Tan(Box<Expression>),

    Product(Box<Expression>, Box<Expression>),
    Quotient(Box<Expression>, Box<Expression>),
    Sum(Box<Expression>, Box<Expression>),
    Difference(Box<Expression>, Box<Expression>),
    Exponential(Box<Expression>, Box<Expression>),
    /// The left child is the base, and the right child is the argument.
    Logarithm(Box<Expression>, Box<Expression>),
    Power(Box<Expression>, Box<Expression>),
}

/// The variant of an [Expression], without any of its payload.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
pub enum ExpressionKind {
    Constant,
    Variable,
    Negation,
    Inverse,
    Sin,
    Cos,
    Tan,
    Product,
    Quotient,
    Sum,
    Difference,
    Exponential,
    Logarithm,
    Power,
}

impl Expression {
    pub fn constant(value: f64) -> Expression {
        Expression::Constant(value)
    }

    /// Creates a variable. Names are a single ASCII character.
    ///
    /// # Panics
    ///
    /// In debug builds only, if `name` is not ASCII. Release builds store any `char` unchecked.
    pub fn variable(name: char) -> Expression {
        debug_assert!(name.is_ascii(), "variable names must be ASCII, got {:?}", name);
        Expression::Variable(name)
    }

    pub fn negation(operand: Expression) -> Expression {
        UnaryOperator::Negation.build(operand)
    }

    pub fn inverse(operand: Expression) -> Expression {
        UnaryOperator::Inverse.build(operand)
    }

    pub fn sin(operand: Expression) -> Expression {
        UnaryOperator::Call(Function::Sine).build(operand)
    }

    pub fn cos(operand: Expression) -> Expression {
        UnaryOperator::Call(Function::Cosine).build(operand)
    }

    pub fn tan(operand: Expression) -> Expression {
        UnaryOperator::Call(Function::Tangent).build(operand)
    }

    pub fn product(left: Expression, right: Expression) -> Expression {
        BinaryOperator::Product.build(left, right)
    }

    pub fn quotient(left: Expression, right: Expression) -> Expression {
        BinaryOperator::Quotient.build(left, right)
    }

    pub fn sum(left: Expression, right: Expression) -> Expression {
        BinaryOperator::Sum.build(left, right)
    }

    pub fn difference(left: Expression, right: Expression) -> Expression {
        BinaryOperator::Difference.build(left, right)
    }

    pub fn exponential(left: Expression, right: Expression) -> Expression {
        BinaryOperator::Exponential.build(left, right)
    }

    /// Creates a logarithm of `argument` to the given `base`.
    pub fn logarithm(base: Expression, argument: Expression) -> Expression {
        BinaryOperator::Logarithm.build(base, argument)
    }

    pub fn power(left: Expression, right: Expression) -> Expression {
        BinaryOperator::Power.build(left, right)
    }

    /// Returns the variant of this node.
    pub fn kind(&self) -> ExpressionKind {
        match self {
            Self::Constant(_) => ExpressionKind::Constant,
            Self::Variable(_) => ExpressionKind::Variable,
            Self::Negation(_) => ExpressionKind::Negation,
            Self::Inverse(_) => ExpressionKind::Inverse,
            Self::Sin(_) => ExpressionKind::Sin,
            Self::Cos(_) => ExpressionKind::Cos,
            Self::Tan(_) => ExpressionKind::Tan,
            Self::Product(_, _) => ExpressionKind::Product,
            Self::Quotient(_, _) => ExpressionKind::Quotient,
            Self::Sum(_, _) => ExpressionKind::Sum,
            Self::Difference(_, _) => ExpressionKind::Difference,
            Self::Exponential(_, _) => ExpressionKind::Exponential,
            Self::Logarithm(_, _) => ExpressionKind::Logarithm,
            Self::Power(_, _) => ExpressionKind::Power,
        }
    }

    /// Returns true if this node has exactly two children. Does not recurse.
    pub fn is_binary(&self) -> bool {
        self.binary_parts().is_some()
    }

    /// Returns true if this node is a `Constant`.
    pub fn is_constant(&self) -> bool {
        matches!(self, Self::Constant(_))
    }

    /// If this node is a `Constant`, returns its value.
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Self::Constant(value) => Some(*value),
            _ => None,
        }
    }

    /// If this node is a `Variable`, returns its name.
    pub fn as_variable(&self) -> Option<char> {
        match self {
            Self::Variable(name) => Some(*name),
            _ => None,
        }
    }

    /// If this node has one child, returns its operator and that child.
    pub fn unary_parts(&self) -> Option<(UnaryOperator, &Expression)> {
        Some(match self {
            Self::Negation(x) => (UnaryOperator::Negation, x.as_ref()),
            Self::Inverse(x) => (UnaryOperator::Inverse, x.as_ref()),
            Self::Sin(x) => (UnaryOperator::Call(Function::Sine), x.as_ref()),
            Self::Cos(x) => (UnaryOperator::Call(Function::Cosine), x.as_ref()),
            Self::Tan(x) => (UnaryOperator::Call(Function::Tangent), x.as_ref()),
            _ => return None,
        })
    }

    /// If this node has two children, returns its operator and the left and right children.
    pub fn binary_parts(&self) -> Option<(BinaryOperator, &Expression, &Expression)> {
        Some(match self {
            Self::Product(l, r) => (BinaryOperator::Product, l.as_ref(), r.as_ref()),
            Self::Quotient(l, r) => (BinaryOperator::Quotient, l.as_ref(), r.as_ref()),
            Self::Sum(l, r) => (BinaryOperator::Sum, l.as_ref(), r.as_ref()),
            Self::Difference(l, r) => (BinaryOperator::Difference, l.as_ref(), r.as_ref()),
            Self::Exponential(l, r) => (BinaryOperator::Exponential, l.as_ref(), r.as_ref()),
            Self::Logarithm(l, r) => (BinaryOperator::Logarithm, l.as_ref(), r.as_ref()),
            Self::Power(l, r) => (BinaryOperator::Power, l.as_ref(), r.as_ref()),
            _ => return None,
        })
    }

    /// Returns true if this node, or any node below it, has operands which are all constants and
    /// which the simplifier knows how to fold.
    ///
    /// A `Negation` of a constant is deliberately not reported as foldable, since the simplifier
    /// never folds negations.
    pub fn is_foldable(&self) -> bool {
        match self {
            Self::Constant(_) | Self::Variable(_) => false,

            // Never true for a constant operand
            Self::Negation(x) => x.is_foldable(),

            Self::Inverse(x) | Self::Sin(x) | Self::Cos(x) | Self::Tan(x)
                => x.is_constant() || x.is_foldable(),

            Self::Product(l, r) | Self::Quotient(l, r) | Self::Sum(l, r) | Self::Difference(l, r)
            | Self::Exponential(l, r) | Self::Logarithm(l, r) | Self::Power(l, r)
                => (l.is_constant() && r.is_constant()) || l.is_foldable() || r.is_foldable(),
        }
    }

    /// Returns the number of nodes on the longest path from this node to a leaf, including both
    /// ends. A leaf has a depth of 1.
    pub fn depth(&self) -> usize {
        if let Some((_, x)) = self.unary_parts() {
            1 + x.depth()
        } else if let Some((_, l, r)) = self.binary_parts() {
            1 + max(l.depth(), r.depth())
        } else {
            1
        }
    }

    /// Returns the total number of nodes in this tree.
    pub fn node_count(&self) -> usize {
        if let Some((_, x)) = self.unary_parts() {
            1 + x.node_count()
        } else if let Some((_, l, r)) = self.binary_parts() {
            1 + l.node_count() + r.node_count()
        } else {
            1
        }
    }

    /// Returns an error if this tree is deeper than `limit`.
    ///
    /// The check itself only recurses as far as `limit` levels, so it's safe to call on trees of
    /// any depth.
    pub fn check_depth(&self, limit: usize) -> Result<(), NodeError> {
        if self.exceeds_depth(limit) {
            Err(NodeError::too_deep(limit))
        } else {
            Ok(())
        }
    }

    fn exceeds_depth(&self, remaining: usize) -> bool {
        if remaining == 0 {
            return true
        }

        if let Some((_, x)) = self.unary_parts() {
            x.exceeds_depth(remaining - 1)
        } else if let Some((_, l, r)) = self.binary_parts() {
            l.exceeds_depth(remaining - 1) || r.exceeds_depth(remaining - 1)
        } else {
            false
        }
    }
}
