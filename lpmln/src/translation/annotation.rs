//! This module defines the theory annotations understood by the translation,
//! [TheoryKind] and [WeightFormula].
#![allow(missing_docs)]

use enum_assoc::Assoc;

/// Annotations that select a special treatment of the whole rule
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn name(&self) -> &'static str)]
#[func(pub fn from_name(name: &str) -> Option<Self>)]
pub enum TheoryKind {
    /// Rule is kept for answering queries
    #[assoc(name = "query")]
    #[assoc(from_name = "query")]
    Query,
    /// Observed truth value of an atom
    #[assoc(name = "evidence")]
    #[assoc(from_name = "evidence")]
    Evidence,
    /// Random selection of exactly one value
    #[assoc(name = "random")]
    #[assoc(from_name = "random")]
    Random,
    /// Probability of a selected value
    #[assoc(name = "pr")]
    #[assoc(from_name = "pr")]
    Pr,
    /// Observation in the sense of P-log
    #[assoc(name = "obs")]
    #[assoc(from_name = "obs")]
    Obs,
    /// Intervention in the sense of P-log
    #[assoc(name = "do")]
    #[assoc(from_name = "do")]
    Do,
}

/// Annotations that attach a weight to a rule
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn name(&self) -> &'static str)]
#[func(pub fn from_name(name: &str) -> Option<Self>)]
pub enum WeightFormula {
    /// `&weight(w)` uses `w` directly
    #[assoc(name = "weight")]
    #[assoc(from_name = "weight")]
    Weight,
    /// `&log(p)` uses `ln(p)`
    #[assoc(name = "log")]
    #[assoc(from_name = "log")]
    Log,
    /// `&problog(p)` uses the log-odds `ln(p / (1 - p))`
    #[assoc(name = "problog")]
    #[assoc(from_name = "problog")]
    Problog,
}

impl WeightFormula {
    /// Apply this formula to `value`.
    ///
    /// Returns `None` if `value` lies outside of the domain of the formula.
    pub fn apply(&self, value: f64) -> Option<f64> {
        match self {
            WeightFormula::Weight => Some(value),
            WeightFormula::Log => (value > 0.0).then(|| value.ln()),
            WeightFormula::Problog => {
                (value > 0.0 && value < 1.0).then(|| (value / (1.0 - value)).ln())
            }
        }
    }
}

#[cfg(test)]
mod test {
    use test_log::test;

    use super::{TheoryKind, WeightFormula};

    #[test]
    fn theory_kind_names() {
        for kind in [
            TheoryKind::Query,
            TheoryKind::Evidence,
            TheoryKind::Random,
            TheoryKind::Pr,
            TheoryKind::Obs,
            TheoryKind::Do,
        ] {
            assert_eq!(TheoryKind::from_name(kind.name()), Some(kind));
        }

        assert_eq!(TheoryKind::from_name("weight"), None);
    }

    #[test]
    fn weight_formula_names() {
        for formula in [WeightFormula::Weight, WeightFormula::Log, WeightFormula::Problog] {
            assert_eq!(WeightFormula::from_name(formula.name()), Some(formula));
        }

        assert_eq!(WeightFormula::from_name("query"), None);
        assert_eq!(WeightFormula::from_name("Weight"), None);
    }

    #[test]
    fn formula_domains() {
        assert_eq!(WeightFormula::Weight.apply(-2.0), Some(-2.0));
        assert_eq!(WeightFormula::Log.apply(0.0), None);
        assert_eq!(WeightFormula::Problog.apply(1.0), None);
        assert_eq!(WeightFormula::Problog.apply(0.5), Some(0.0));
    }
}
