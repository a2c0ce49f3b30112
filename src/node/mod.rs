//! Expression trees and the operations which rewrite them.
//!
//! An [Expression](expression::Expression) is a plain owned tree: each node holds its children in
//! `Box`es, so no node can be shared between two parents or refer back up the tree. Trees are
//! built bottom-up with one constructor per kind of node, rendered with [crate::render], and
//! constant-folded in place with [simplify](expression::Expression::simplify).

pub mod expression;
pub mod operator;
pub mod function;
pub mod simplify;
