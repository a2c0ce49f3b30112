use core::f64::consts::{E, PI};
use pretty_assertions::assert_eq;

use crate::{Expression, ReductionStatus};
use super::util::{assert_close, compound_expression, render_checked};

/// Simplifies the tree and returns the value of the constant it folded to.
fn folded(tree: Expression) -> f64 {
    let tree = simplified!(tree);
    match tree.as_constant() {
        Some(value) => value,
        None => panic!("expected a constant, got {}", tree),
    }
}

#[test]
fn test_fold_binary_operators() {
    assert_eq!(simplified!(Expression::sum(c!(3), c!(2))), c!(5));
    assert_eq!(folded(Expression::difference(c!(7), c!(3))), 4.0);
    assert_eq!(folded(Expression::product(c!(4), c!(6))), 24.0);
    assert_eq!(folded(Expression::quotient(c!(15), c!(3))), 5.0);
    assert_eq!(folded(Expression::power(c!(2), c!(3))), 8.0);
    assert_close(folded(Expression::exponential(c!(9), c!(0.5))), 3.0);
    assert_close(folded(Expression::logarithm(c!(2), c!(8))), 3.0);
    assert_eq!(render_checked(&simplified!(Expression::logarithm(c!(2), c!(8)))), "3");
    assert_close(folded(Expression::logarithm(c!(10), c!(100))), 2.0);

    let tree = simplified!(Expression::exponential(c!(E), c!(2)));
    assert_close(tree.as_constant().unwrap(), E * E);
    assert_eq!(render_checked(&tree), "7.39");
}

#[test]
fn test_fold_unary_operators() {
    assert_eq!(folded(Expression::inverse(c!(4))), 0.25);
    assert_eq!(folded(Expression::sin(c!(0))), 0.0);
    assert_eq!(folded(Expression::cos(c!(0))), 1.0);
    assert_close(folded(Expression::sin(c!(PI / 2.0))), 1.0);
    assert_close(folded(Expression::cos(c!(PI))), -1.0);
    assert_eq!(render_checked(&simplified!(Expression::tan(c!(PI / 4.0)))), "1");

    // The trig node folds first, leaving the power to fold on the re-check
    let tree = simplified!(Expression::power(Expression::sin(c!(0)), c!(2)));
    assert_eq!(tree, c!(0));
    assert_eq!(render_checked(&tree), "0");
}

#[test]
fn test_identities() {
    assert_eq!(folded(Expression::quotient(c!(7), c!(1))), 7.0);
    assert_eq!(folded(Expression::product(c!(5), c!(0))), 0.0);
    assert_eq!(folded(Expression::power(c!(5), c!(0))), 1.0);
    assert_eq!(folded(Expression::power(c!(7), c!(1))), 7.0);
}

#[test]
fn test_fold_nested() {
    assert_eq!(folded(Expression::product(Expression::sum(c!(2), c!(3)), c!(4))), 20.0);
    assert_eq!(
        folded(Expression::sum(
            Expression::power(c!(2), c!(3)),
            Expression::power(c!(3), c!(2)),
        )),
        17.0,
    );
    assert_eq!(
        folded(Expression::product(
            Expression::sum(c!(1), c!(2)),
            Expression::difference(c!(5), c!(2)),
        )),
        9.0,
    );

    let sixth = || c!(PI / 6.0);
    let tree = simplified!(Expression::sum(
        Expression::power(Expression::sin(sixth()), c!(2)),
        Expression::power(Expression::cos(sixth()), c!(2)),
    ));
    assert_close(tree.as_constant().unwrap(), 1.0);
    assert_eq!(render_checked(&tree), "1");

    assert_close(
        folded(Expression::sum(
            Expression::product(Expression::sin(c!(PI / 2.0)), Expression::cos(c!(0))),
            Expression::power(c!(2), Expression::logarithm(c!(2), c!(8))),
        )),
        9.0,
    );

    // Both inverses collapse, not just the inner one
    assert_eq!(simplified!(Expression::inverse(Expression::inverse(c!(2)))), c!(2));

    // Natural logarithm of e^2
    assert_close(
        folded(Expression::logarithm(c!(E), Expression::power(c!(E), c!(2)))),
        2.0,
    );
}

#[test]
fn test_variables_are_kept() {
    let tree = simplified!(Expression::product(Expression::sum(c!(2), c!(3)), var!(x)));
    assert_eq!(tree, Expression::product(c!(5), var!(x)));
    assert_eq!(render_checked(&tree), "5x");

    let tree = simplified!(Expression::sum(Expression::product(c!(2), c!(3)), var!(x)));
    assert_eq!(render_checked(&tree), "6+x");

    // Identities involving variables are not applied
    let tree = simplified!(Expression::sum(var!(x), c!(0)));
    assert_eq!(render_checked(&tree), "x+0");
    let tree = simplified!(Expression::product(var!(x), c!(1)));
    assert_eq!(render_checked(&tree), "1x");

    let tree = simplified!(Expression::sin(var!(x)));
    assert_eq!(tree, Expression::sin(var!(x)));

    let tree = simplified!(compound_expression());
    assert_eq!(render_checked(&tree), "(p+11.2q)/0.125");
}

#[test]
fn test_negation_is_not_folded() {
    let tree = simplified!(Expression::negation(c!(5)));
    assert_eq!(tree, Expression::negation(c!(5)));
    assert_eq!(render_checked(&tree), "-5");

    let tree = simplified!(Expression::negation(Expression::negation(c!(3))));
    assert_eq!(render_checked(&tree), "-(-3)");

    // The operand is still folded
    let tree = simplified!(Expression::negation(Expression::sum(c!(1), c!(2))));
    assert_eq!(tree, Expression::negation(c!(3)));
    assert_eq!(render_checked(&tree), "-3");

    // ...and a negated constant blocks folding of the node above it
    let tree = simplified!(Expression::sum(var!(x), Expression::negation(c!(2))));
    assert_eq!(render_checked(&tree), "x+(-2)");
    let tree = simplified!(Expression::sum(c!(1), Expression::negation(c!(2))));
    assert_eq!(render_checked(&tree), "1+(-2)");
}

#[test]
fn test_degenerate_values() {
    assert!(folded(Expression::quotient(c!(0), c!(0))).is_nan());
    assert_eq!(folded(Expression::quotient(c!(1), c!(0))), f64::INFINITY);
    assert_eq!(render_checked(&simplified!(Expression::inverse(c!(0)))), "inf");
}

#[test]
fn test_reduction_status() {
    use ReductionStatus::*;

    assert_eq!(c!(1).reduce(), NoReduction);
    assert_eq!(var!(x).reduce(), NoReduction);
    assert_eq!(Expression::sum(var!(x), var!(y)).reduce(), NoReduction);
    assert_eq!(Expression::negation(c!(1)).reduce(), NoReduction);

    assert_eq!(Expression::sum(c!(1), c!(2)).reduce(), PerformedReduction);
    assert_eq!(Expression::sum(var!(x), Expression::sum(c!(1), c!(2))).reduce(), PerformedReduction);
    assert_eq!(Expression::sin(Expression::cos(c!(0))).reduce(), PerformedReduction);

    assert_eq!(NoReduction.or(NoReduction), NoReduction);
    assert_eq!(NoReduction.or(PerformedReduction), PerformedReduction);
    assert_eq!(PerformedReduction.or(NoReduction), PerformedReduction);
}

#[test]
fn test_simplify_is_idempotent() {
    let trees = [
        compound_expression(),
        Expression::negation(Expression::negation(Expression::sum(c!(1), var!(x)))),
        Expression::logarithm(Expression::product(c!(2), c!(5)), Expression::inverse(var!(y))),
        Expression::quotient(Expression::sin(c!(1)), Expression::power(var!(z), c!(2))),
    ];

    for tree in trees {
        let once = simplified!(tree);
        let mut twice = once.clone();
        assert_eq!(twice.reduce(), ReductionStatus::NoReduction);
        assert_eq!(twice, once);
        assert!(!once.is_foldable());
    }
}
