//! Symbolic arithmetic expressions: build them as trees, render them to a canonical string, and
//! fold their constant parts.
//!
//! ```
//! use exprfold::Expression;
//!
//! let mut tree = Expression::product(
//!     Expression::sum(Expression::constant(2.0), Expression::constant(3.0)),
//!     Expression::variable('x'),
//! );
//! assert_eq!(tree.to_string(), "(2+3)x");
//!
//! tree.simplify();
//! assert_eq!(tree.to_string(), "5x");
//! ```

#![cfg_attr(not(test), no_std)]
extern crate core;
extern crate alloc;

pub mod error;
pub mod node;
pub mod number;
pub mod render;
pub mod renderers;

#[cfg(test)]
pub mod tests;

pub use crate::{
    node::{
        expression::{Expression, ExpressionKind, MAX_DEPTH},
        function::Function,
        operator::{BinaryOperator, UnaryOperator},
        simplify::ReductionStatus,
    },
    render::{measure, render, serialize},
};

pub const VERSION: &'static str = env!("CARGO_PKG_VERSION");
