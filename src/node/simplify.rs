// Constant folding for expression trees.
//
// Reduction works top-down, then bottom-up: a node whose operands are already constants is folded
// straight away; otherwise its children are reduced first, and if that has left the node (or
// something beneath it) foldable, the node is reduced once more. Every extra pass is only taken
// when `is_foldable` is true, and every pass folds at least one node, so this always terminates.

use tracing::{debug, trace};

use super::{expression::Expression, operator::UnaryOperator};

#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum ReductionStatus {
    PerformedReduction,
    NoReduction,
}

impl ReductionStatus {
    /// Returns `PerformedReduction` if either of the two statuses is `PerformedReduction`.
    pub fn or(self, other: ReductionStatus) -> ReductionStatus {
        if self == Self::PerformedReduction || other == Self::PerformedReduction {
            Self::PerformedReduction
        } else {
            Self::NoReduction
        }
    }
}

impl Expression {
    /// Rewrites this tree in place into an equivalent tree where every fold-able constant
    /// subexpression has been replaced by its value.
    ///
    /// Variables are never substituted, so an expression containing them keeps its structure
    /// around them. `Negation` nodes are never folded, even when their operand is a constant;
    /// `-5` stays a negation of the constant 5.
    ///
    /// Simplifying an already-simplified tree leaves it unchanged.
    pub fn simplify(&mut self) {
        let status = self.reduce();
        debug!(?status, nodes = self.node_count(), "simplified expression");
    }

    /// Performs one reduction of this tree; see [simplify](Expression::simplify).
    ///
    /// Returns whether any node was folded.
    pub fn reduce(&mut self) -> ReductionStatus {
        use ReductionStatus::*;

        // If the operands are already constants, we can fold this node and stop here
        if let Some(value) = self.fold_constant_operands() {
            trace!(kind = ?self.kind(), value, "folded constant operands");
            *self = Expression::Constant(value);
            return PerformedReduction
        }

        // Otherwise reduce the children, left before right
        let status = match self {
            Self::Constant(_) | Self::Variable(_) => return NoReduction,

            Self::Negation(x) | Self::Inverse(x) | Self::Sin(x) | Self::Cos(x) | Self::Tan(x)
                => x.reduce(),

            Self::Product(l, r) | Self::Quotient(l, r) | Self::Sum(l, r) | Self::Difference(l, r)
            | Self::Exponential(l, r) | Self::Logarithm(l, r) | Self::Power(l, r) => {
                let left_status = l.reduce();
                left_status.or(r.reduce())
            }
        };

        // Reducing the children might have left constants directly under this node
        if self.is_foldable() {
            self.reduce();
            return PerformedReduction
        }

        status
    }

    /// If this node's operands are all constants, and this node is of a kind which the simplifier
    /// folds, returns the folded value.
    fn fold_constant_operands(&self) -> Option<f64> {
        if let Some((op, x)) = self.unary_parts() {
            if op == UnaryOperator::Negation {
                return None
            }
            x.as_constant().map(|x| op.fold(x))
        } else if let Some((op, l, r)) = self.binary_parts() {
            Some(op.fold(l.as_constant()?, r.as_constant()?))
        } else {
            None
        }
    }
}
