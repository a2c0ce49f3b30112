macro_rules! c {
    ($v:expr) => { crate::Expression::constant(($v) as f64) };
}

macro_rules! var {
    ($v:ident) => { crate::Expression::variable(stringify!($v).chars().nth(0).unwrap()) };
}

macro_rules! simplified {
    ($e:expr) => {
        {
            let mut tree = $e;
            tree.simplify();
            tree
        }
    };
}

/// Renders a tree through all three renderers, checks that they agree with each other, and returns
/// the rendered text.
pub fn render_checked(tree: &crate::Expression) -> alloc::string::String {
    let text = crate::serialize(tree);
    let size = crate::measure(tree);
    assert_eq!(size, text.len(), "measure disagrees with serialize for {:?}", tree);

    let mut buffer = alloc::vec![0u8; size];
    assert_eq!(crate::render(&mut buffer, tree), Ok(size));
    assert_eq!(&buffer[..], text.as_bytes());

    text
}

/// Asserts that `actual` is within a small tolerance of `expected`.
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-10,
        "expected {}, got {} (difference {:e})", expected, actual, (actual - expected).abs(),
    );
}

/// The compound expression `(p + q(sin(6) + ((5 + 3 * 2^-1) + 5))) / ((8^-1)^-1)^-1`.
pub fn compound_expression() -> crate::Expression {
    use crate::Expression;

    Expression::quotient(
        Expression::sum(
            var!(p),
            Expression::product(
                var!(q),
                Expression::sum(
                    Expression::sin(c!(6)),
                    Expression::sum(
                        Expression::sum(c!(5), Expression::product(c!(3), Expression::inverse(c!(2)))),
                        c!(5),
                    ),
                ),
            ),
        ),
        Expression::inverse(Expression::inverse(Expression::inverse(c!(8)))),
    )
}
