//! This module defines [Weight] and computes weights from annotations
//! such as `&weight(2)`, `&log("0.5")` or `&problog("0.75")`.

use std::fmt::Display;

use crate::rule_model::components::term::{Symbol, Term};

use super::{annotation::WeightFormula, error::TranslationErrorKind};

/// Scaled weight of a soft rule
///
/// The value is kept exactly as computed
/// and only rounded when it is placed into a term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weight(f64);

impl Weight {
    /// Return the exact value of this weight.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Return the value of this weight rounded to the nearest integer.
    pub fn to_integer(&self) -> i64 {
        self.0.round() as i64
    }

    /// Return an integer term representing this weight.
    pub fn to_term(&self) -> Term {
        Term::number(self.to_integer())
    }
}

impl Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_integer())
    }
}

/// Multiply `raw` by `10^power_of_ten`.
///
/// Returns `None` if the result is not finite
/// or does not fit into a 64 bit integer after rounding.
pub fn scale_weight(raw: f64, power_of_ten: i32) -> Option<Weight> {
    let scaled = raw * 10f64.powi(power_of_ten);

    if scaled.is_finite() && scaled.round().abs() <= i64::MAX as f64 {
        Some(Weight(scaled))
    } else {
        None
    }
}

/// Parse an integer or decimal literal, as in `-2`, `0.25` or `1e-3`.
///
/// Anything else, including arithmetic expressions, `inf` or `NaN`, is rejected.
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();

    let allowed = text
        .chars()
        .all(|character| character.is_ascii_digit() || matches!(character, '+' | '-' | '.' | 'e' | 'E'));
    if !allowed || !text.chars().any(|character| character.is_ascii_digit()) {
        return None;
    }

    text.parse::<f64>().ok()
}

/// Compute the scaled weight of the annotation `&formula(argument)`.
///
/// The argument may be an integer or a string containing a number.
pub fn annotation_weight(
    formula: WeightFormula,
    argument: &Term,
    power_of_ten: i32,
) -> Result<Weight, TranslationErrorKind> {
    let value = match argument.symbol() {
        Some(Symbol::Number(number)) => *number as f64,
        Some(Symbol::String(text)) => parse_number(text)
            .ok_or_else(|| TranslationErrorKind::InvalidWeightExpression(text.clone()))?,
        None => {
            return Err(TranslationErrorKind::InvalidWeightExpression(
                argument.to_string(),
            ))
        }
    };

    let computation_error = || {
        TranslationErrorKind::WeightComputation(formula.name().to_string(), value.to_string())
    };

    let raw = formula.apply(value).ok_or_else(computation_error)?;
    scale_weight(raw, power_of_ten).ok_or_else(computation_error)
}
