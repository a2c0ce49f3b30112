use num_traits::Float;

/// A trigonometric function which may be applied to a single expression.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Function {
    Sine,
    Cosine,
    Tangent,
}

impl Function {
    /// The text rendered before the parenthesised argument of this function.
    pub fn render_name(&self) -> &'static str {
        match self {
            Self::Sine => "sin",
            Self::Cosine => "cos",
            Self::Tangent => "tan",
        }
    }

    /// Evaluates this function, interpreting the argument as radians.
    ///
    /// Non-finite arguments are not rejected; they produce NaN like the underlying functions do.
    pub fn evaluate(&self, argument: f64) -> f64 {
        match self {
            Self::Sine => Float::sin(argument),
            Self::Cosine => Float::cos(argument),
            Self::Tangent => Float::tan(argument),
        }
    }
}
