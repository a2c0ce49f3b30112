//! Converts expression trees into their canonical textual form.
//!
//! Rendering is split into two parts. A single traversal, [draw_tree], walks the tree and decides
//! which [Glyph]s make up the text and in what order. Each glyph is then passed to a [Renderer],
//! which decides what to do with it - the renderers in [crate::renderers] count the bytes,
//! copy them into a fixed buffer, or collect them into a `String`.
//!
//! Because every renderer sees exactly the same sequence of glyphs, [measure] always returns the
//! number of bytes that [render] writes.
//!
//! # Parentheses
//!
//! Any node below the root is wrapped in parentheses, unless it is a `Constant`, `Variable`,
//! `Product`, `Logarithm`, `Sin`, `Cos` or `Tan`. The function-style nodes carry their own
//! delimiters, and products bind more tightly than anything else which is drawn inline.
//!
//! # Products
//!
//! Products are drawn without a `*` when one side is a sum, or when they multiply a constant by a
//! variable, and in some of these cases the two sides are swapped:
//!
//! | Tree             | Rendered  |
//! |------------------|-----------|
//! | `3 * x`          | `3x`      |
//! | `x * 3`          | `3x`      |
//! | `(x + 1) * y`    | `(x+1)y`  |
//! | `y * (x + 1)`    | `(x+1)y`  |
//! | `x * y`          | `x*y`     |

use core::fmt;

use alloc::string::String;
use tracing::warn;

use crate::error::RenderError;
use crate::node::{expression::{Expression, ExpressionKind}, operator::{BinaryOperator, UnaryOperator}};
use crate::number::{format_significant, SIGNIFICANT_DIGITS};
use crate::renderers::{BufferRenderer, MeasureRenderer, StringRenderer};

/// The suffix drawn after the operand of an `Inverse`, meaning "to the power -1".
pub const INVERSE_SUFFIX: &str = "⁻¹";

/// A piece of rendered text.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Glyph<'a> {
    /// A constant, already formatted to the correct number of significant digits.
    Number(&'a str),
    Variable(char),
    /// An infix operator, the prefix `-` of a negation, or the `,` between logarithm arguments.
    Operator(char),
    /// The name of a function, such as `sin` or `log`, without its parentheses.
    FunctionName(&'static str),
    LeftParenthesis,
    RightParenthesis,
    InverseSuffix,
}

impl Glyph<'_> {
    /// The number of bytes this glyph occupies when encoded as UTF-8.
    pub fn width(&self) -> usize {
        match self {
            Glyph::Number(text) => text.len(),
            Glyph::FunctionName(text) => text.len(),
            Glyph::Variable(c) | Glyph::Operator(c) => c.len_utf8(),
            Glyph::LeftParenthesis | Glyph::RightParenthesis => 1,
            Glyph::InverseSuffix => INVERSE_SUFFIX.len(),
        }
    }

    /// Calls `f` with the text of this glyph.
    pub fn with_text<T>(&self, f: impl FnOnce(&str) -> T) -> T {
        match self {
            Glyph::Number(text) => f(text),
            Glyph::FunctionName(text) => f(text),
            Glyph::Variable(c) | Glyph::Operator(c) => f(c.encode_utf8(&mut [0; 4])),
            Glyph::LeftParenthesis => f("("),
            Glyph::RightParenthesis => f(")"),
            Glyph::InverseSuffix => f(INVERSE_SUFFIX),
        }
    }
}

pub trait Renderer {
    /// Appends a glyph to the output.
    fn draw(&mut self, glyph: Glyph) -> Result<(), RenderError>;
}

/// Passes the glyphs which make up the canonical form of `tree`, in order, to `renderer`.
pub fn draw_tree(renderer: &mut impl Renderer, tree: &Expression) -> Result<(), RenderError> {
    draw_node(renderer, tree, 0)
}

/// Returns true if a node of this kind, drawn at the given depth, is wrapped in parentheses.
pub fn needs_parentheses(kind: ExpressionKind, depth: usize) -> bool {
    use ExpressionKind::*;

    depth > 0 && !matches!(kind, Constant | Variable | Product | Logarithm | Sin | Cos | Tan)
}

fn draw_node(renderer: &mut impl Renderer, node: &Expression, depth: usize) -> Result<(), RenderError> {
    let parens = needs_parentheses(node.kind(), depth);
    if parens {
        renderer.draw(Glyph::LeftParenthesis)?;
    }

    let child_depth = depth + 1;
    match node {
        Expression::Constant(value) => {
            let text = format_significant(*value, SIGNIFICANT_DIGITS);
            renderer.draw(Glyph::Number(&text))?;
        }
        Expression::Variable(name) => renderer.draw(Glyph::Variable(*name))?,

        Expression::Product(left, right) => {
            use ExpressionKind::*;

            match (left.kind(), right.kind()) {
                (Constant, Variable) | (Sum, _) => {
                    draw_node(renderer, left, child_depth)?;
                    draw_node(renderer, right, child_depth)?;
                }
                (Variable, Constant) | (_, Sum) => {
                    draw_node(renderer, right, child_depth)?;
                    draw_node(renderer, left, child_depth)?;
                }
                _ => {
                    draw_node(renderer, left, child_depth)?;
                    renderer.draw(Glyph::Operator('*'))?;
                    draw_node(renderer, right, child_depth)?;
                }
            }
        }

        _ => {
            if let Some((op, operand)) = node.unary_parts() {
                draw_unary(renderer, op, operand, child_depth)?;
            } else if let Some((op, left, right)) = node.binary_parts() {
                draw_binary(renderer, op, left, right, child_depth)?;
            } else {
                unreachable!("leaf nodes are handled above")
            }
        }
    }

    if parens {
        renderer.draw(Glyph::RightParenthesis)?;
    }
    Ok(())
}

fn draw_unary(renderer: &mut impl Renderer, op: UnaryOperator, operand: &Expression, depth: usize) -> Result<(), RenderError> {
    match op {
        UnaryOperator::Negation => {
            renderer.draw(Glyph::Operator('-'))?;
            draw_node(renderer, operand, depth)
        }
        UnaryOperator::Inverse => {
            draw_node(renderer, operand, depth)?;
            renderer.draw(Glyph::InverseSuffix)
        }
        UnaryOperator::Call(function) => {
            renderer.draw(Glyph::FunctionName(function.render_name()))?;
            renderer.draw(Glyph::LeftParenthesis)?;
            draw_node(renderer, operand, depth)?;
            renderer.draw(Glyph::RightParenthesis)
        }
    }
}

fn draw_binary(renderer: &mut impl Renderer, op: BinaryOperator, left: &Expression, right: &Expression, depth: usize) -> Result<(), RenderError> {
    match op.infix_glyph() {
        Some(glyph) => {
            draw_node(renderer, left, depth)?;
            renderer.draw(Glyph::Operator(glyph))?;
            draw_node(renderer, right, depth)
        }

        // Logarithm is the only operator drawn as a call
        None => {
            renderer.draw(Glyph::FunctionName("log"))?;
            renderer.draw(Glyph::LeftParenthesis)?;
            draw_node(renderer, left, depth)?;
            renderer.draw(Glyph::Operator(','))?;
            draw_node(renderer, right, depth)?;
            renderer.draw(Glyph::RightParenthesis)
        }
    }
}

/// Returns the number of bytes in the canonical form of `tree`.
pub fn measure(tree: &Expression) -> usize {
    let mut renderer = MeasureRenderer::default();
    match draw_tree(&mut renderer, tree) {
        Ok(()) => renderer.size,
        Err(_) => unreachable!("measuring never fails"),
    }
}

/// Writes the canonical form of `tree` into the start of `buffer`, and returns the number of bytes
/// written. This is always equal to [measure] for the same tree. No terminator is written.
///
/// Returns an error, leaving the contents of `buffer` unspecified, if the buffer is shorter than
/// the rendered text.
pub fn render(buffer: &mut [u8], tree: &Expression) -> Result<usize, RenderError> {
    let mut renderer = BufferRenderer::new(buffer);
    if let Err(e) = draw_tree(&mut renderer, tree) {
        warn!(capacity = renderer.capacity(), "render buffer too small");
        return Err(e)
    }
    Ok(renderer.written())
}

/// Returns the canonical form of `tree` as a `String`, allocated once at the exact size needed.
pub fn serialize(tree: &Expression) -> String {
    let mut renderer = StringRenderer::with_capacity(measure(tree));
    match draw_tree(&mut renderer, tree) {
        Ok(()) => renderer.output,
        Err(_) => unreachable!("rendering to a string never fails"),
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&serialize(self))
    }
}
