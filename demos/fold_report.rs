// This example builds a list of expressions, simplifies each one, and prints a coloured report
// comparing the results against what is expected. It exits with a non-zero status if any case
// fails, so it doubles as a smoke test of the whole library.
//
// Run with `cargo run --example fold_report --features examples`.

#[cfg(not(feature = "examples"))]
compile_error!("you must enable the `examples` feature to compile examples.");

use std::f64::consts::{E, PI};
use std::process::ExitCode;

use termion::{color, style};

use exprfold::{measure, render, Expression};

/// A single case in the report.
struct Case {
    name: &'static str,
    tree: Expression,
    /// The rendering expected after simplification, if it should be checked.
    expected_text: Option<&'static str>,
    /// The value expected if the tree simplifies to a constant.
    expected_value: Option<f64>,
}

impl Case {
    fn new(name: &'static str, tree: Expression, expected_text: Option<&'static str>, expected_value: Option<f64>) -> Self {
        Case { name, tree, expected_text, expected_value }
    }
}

fn c(value: f64) -> Expression { Expression::constant(value) }
fn v(name: char) -> Expression { Expression::variable(name) }

/// Renders through a buffer sized by `measure`, like a caller managing its own memory would.
fn render_to_string(tree: &Expression) -> Result<String, Box<dyn std::error::Error>> {
    let mut buffer = vec![0u8; measure(tree)];
    let written = render(&mut buffer, tree).map_err(|e| e.to_string())?;
    buffer.truncate(written);
    Ok(String::from_utf8(buffer)?)
}

fn sections() -> Vec<(&'static str, Vec<Case>)> {
    vec![
        ("Constants and variables", vec![
            Case::new("Constant 5", c(5.0), Some("5"), Some(5.0)),
            Case::new("Constant π", c(PI), None, Some(PI)),
            Case::new("Variable x", v('x'), Some("x"), None),
        ]),
        ("Arithmetic", vec![
            Case::new("Addition: 3 + 2", Expression::sum(c(3.0), c(2.0)), Some("5"), Some(5.0)),
            Case::new("Subtraction: 7 - 3", Expression::difference(c(7.0), c(3.0)), Some("4"), Some(4.0)),
            Case::new("Multiplication: 4 * 6", Expression::product(c(4.0), c(6.0)), Some("24"), Some(24.0)),
            Case::new("Division: 15 / 3", Expression::quotient(c(15.0), c(3.0)), Some("5"), Some(5.0)),
            Case::new("Power: 2^3", Expression::power(c(2.0), c(3.0)), Some("8"), Some(8.0)),
            Case::new("Power: 9^0.5", Expression::power(c(9.0), c(0.5)), Some("3"), Some(3.0)),
            Case::new("Exponential: e^2", Expression::exponential(c(E), c(2.0)), None, Some(2f64.exp())),
        ]),
        ("Logarithms and trigonometry", vec![
            Case::new("Natural log: ln(e^2)", Expression::logarithm(c(E), Expression::power(c(E), c(2.0))), Some("2"), Some(2.0)),
            Case::new("Log base 10: log(100)", Expression::logarithm(c(10.0), c(100.0)), Some("2"), Some(2.0)),
            Case::new("Log base 2: log(8)", Expression::logarithm(c(2.0), c(8.0)), Some("3"), Some(3.0)),
            Case::new("sin(0)", Expression::sin(c(0.0)), Some("0"), Some(0.0)),
            Case::new("cos(0)", Expression::cos(c(0.0)), Some("1"), Some(1.0)),
            Case::new("sin(π/2)", Expression::sin(c(PI / 2.0)), Some("1"), Some(1.0)),
            Case::new("cos(π)", Expression::cos(c(PI)), Some("-1"), Some(-1.0)),
            Case::new("tan(π/4)", Expression::tan(c(PI / 4.0)), Some("1"), Some(1.0)),
            Case::new("sin(0)^2", Expression::power(Expression::sin(c(0.0)), c(2.0)), Some("0"), Some(0.0)),
        ]),
        ("Negation and inverse", vec![
            Case::new("Negation: -5", Expression::negation(c(5.0)), Some("-5"), None),
            Case::new("Double negation: -(-3)", Expression::negation(Expression::negation(c(3.0))), Some("-(-3)"), None),
            Case::new("Inverse: 1/4", Expression::inverse(c(4.0)), Some("0.25"), Some(0.25)),
            Case::new("Inverse of inverse: 1/(1/2)", Expression::inverse(Expression::inverse(c(2.0))), Some("2"), Some(2.0)),
        ]),
        ("Compound expressions", vec![
            Case::new("(2 + 3) * 4", Expression::product(Expression::sum(c(2.0), c(3.0)), c(4.0)), Some("20"), Some(20.0)),
            Case::new(
                "2^3 + 3^2",
                Expression::sum(Expression::power(c(2.0), c(3.0)), Expression::power(c(3.0), c(2.0))),
                Some("17"), Some(17.0),
            ),
            Case::new(
                "sin²(π/6) + cos²(π/6)",
                Expression::sum(
                    Expression::power(Expression::sin(c(PI / 6.0)), c(2.0)),
                    Expression::power(Expression::cos(c(PI / 6.0)), c(2.0)),
                ),
                Some("1"), Some(1.0),
            ),
            Case::new(
                "sin(π/2) * cos(0) + 2^(log₂(8))",
                Expression::sum(
                    Expression::product(Expression::sin(c(PI / 2.0)), Expression::cos(c(0.0))),
                    Expression::power(c(2.0), Expression::logarithm(c(2.0), c(8.0))),
                ),
                Some("9"), Some(9.0),
            ),
        ]),
        ("Expressions with variables", vec![
            Case::new("x + 0", Expression::sum(v('x'), c(0.0)), Some("x+0"), None),
            Case::new("x * 1", Expression::product(v('x'), c(1.0)), Some("1x"), None),
            Case::new("x + y", Expression::sum(v('x'), v('y')), Some("x+y"), None),
            Case::new(
                "(p + q(sin(6) + ((5 + 3 * 2^-1) + 5))) / ((8^-1)^-1)^-1",
                Expression::quotient(
                    Expression::sum(
                        v('p'),
                        Expression::product(
                            v('q'),
                            Expression::sum(
                                Expression::sin(c(6.0)),
                                Expression::sum(
                                    Expression::sum(c(5.0), Expression::product(c(3.0), Expression::inverse(c(2.0)))),
                                    c(5.0),
                                ),
                            ),
                        ),
                    ),
                    Expression::inverse(Expression::inverse(Expression::inverse(c(8.0)))),
                ),
                Some("(p+11.2q)/0.125"), None,
            ),
        ]),
        ("Edge cases", vec![
            Case::new("Division by 1: 7/1", Expression::quotient(c(7.0), c(1.0)), Some("7"), Some(7.0)),
            Case::new("Multiplication by 0: 5*0", Expression::product(c(5.0), c(0.0)), Some("0"), Some(0.0)),
            Case::new("Power to 0: 5^0", Expression::power(c(5.0), c(0.0)), Some("1"), Some(1.0)),
            Case::new("Power to 1: 7^1", Expression::power(c(7.0), c(1.0)), Some("7"), Some(7.0)),
        ]),
    ]
}

/// Runs one case, printing its report, and returns whether it passed.
fn run_case(case: Case) -> Result<bool, Box<dyn std::error::Error>> {
    println!("=== Testing: {} ===", case.name);

    let mut tree = case.tree;
    println!("Original: {}", render_to_string(&tree)?);
    tree.simplify();
    let simplified = render_to_string(&tree)?;
    println!("Simplified: {}", simplified);

    let mut passed = true;

    if let Some(expected) = case.expected_text {
        if simplified == expected {
            println!("{}✓ Rendering matches expected: {}{}", color::Fg(color::Green), expected, color::Fg(color::Reset));
        } else {
            println!("{}✗ Expected: {}, got: {}{}", color::Fg(color::Red), expected, simplified, color::Fg(color::Reset));
            passed = false;
        }
    }

    if let Some(expected) = case.expected_value {
        match tree.as_constant() {
            Some(value) if (value - expected).abs() < 1e-10 => {
                println!("{}✓ Value matches expected: {:.6}{}", color::Fg(color::Green), expected, color::Fg(color::Reset));
            }
            Some(value) => {
                println!(
                    "{}✗ Expected value: {:.6}, got: {:.6} (difference {:e}){}",
                    color::Fg(color::Red), expected, value, (value - expected).abs(), color::Fg(color::Reset),
                );
                passed = false;
            }
            None => {
                println!("{}✗ Expected the constant {:.6}, but the tree did not fold{}", color::Fg(color::Red), expected, color::Fg(color::Reset));
                passed = false;
            }
        }
    }

    println!();
    Ok(passed)
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    println!("{}{}=== exprfold {} report ==={}\n", style::Bold, color::Fg(color::Blue), exprfold::VERSION, style::Reset);

    let mut total = 0;
    let mut passed = 0;
    for (title, cases) in sections() {
        println!("{}=== {} ==={}", color::Fg(color::Yellow), title, color::Fg(color::Reset));
        for case in cases {
            total += 1;
            if run_case(case)? {
                passed += 1;
            }
        }
    }

    let failed = total - passed;
    println!("{}{}=== Report complete ==={}", style::Bold, color::Fg(color::Blue), style::Reset);
    println!("Cases run: {}", total);
    println!("Passed: {}{}{}", color::Fg(color::Green), passed, color::Fg(color::Reset));
    if failed > 0 {
        println!("Failed: {}{}{}", color::Fg(color::Red), failed, color::Fg(color::Reset));
    } else {
        println!("Failed: {}{}{}", color::Fg(color::Green), failed, color::Fg(color::Reset));
    }

    if failed > 0 {
        println!("\n{}{}Some cases failed{}", style::Bold, color::Fg(color::Red), style::Reset);
        Ok(ExitCode::FAILURE)
    } else {
        println!("\n{}{}All cases passed{}", style::Bold, color::Fg(color::Green), style::Reset);
        Ok(ExitCode::SUCCESS)
    }
}
