//! This module defines [Aggregate].

use std::{fmt::Display, hash::Hash};

use crate::rule_model::origin::Origin;

use super::{
    atom::ComparisonOperator,
    literal::ConditionalLiteral,
    term::{Term, Variable},
    write_separated, IterableVariables, ProgramComponent, ProgramComponentKind,
};

/// Bound of an [Aggregate]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Guard {
    /// Relation between the bound and the aggregate
    pub operator: ComparisonOperator,
    /// Bound
    pub term: Term,
}

impl Guard {
    /// Create a new [Guard].
    pub fn new(operator: ComparisonOperator, term: Term) -> Self {
        Self { operator, term }
    }
}

/// Aggregate
///
/// Set of [ConditionalLiteral]s with optional lower and upper bounds,
/// as in `1 { a; b } 2`.
/// Without any bound this is an unconstrained choice.
#[derive(Debug, Clone, Eq)]
pub struct Aggregate {
    /// Origin of this component
    pub(crate) origin: Origin,

    /// Left bound
    pub(crate) left_guard: Option<Guard>,
    /// Elements
    pub(crate) elements: Vec<ConditionalLiteral>,
    /// Right bound
    pub(crate) right_guard: Option<Guard>,
}

impl Aggregate {
    /// Create a new [Aggregate].
    pub fn new(
        left_guard: Option<Guard>,
        elements: Vec<ConditionalLiteral>,
        right_guard: Option<Guard>,
    ) -> Self {
        Self {
            origin: Origin::Created,
            left_guard,
            elements,
            right_guard,
        }
    }

    /// Create an unbounded choice over the given elements.
    pub fn choice(elements: Vec<ConditionalLiteral>) -> Self {
        Self::new(None, elements, None)
    }

    /// Return the left bound of this aggregate.
    pub fn left_guard(&self) -> Option<&Guard> {
        self.left_guard.as_ref()
    }

    /// Return the right bound of this aggregate.
    pub fn right_guard(&self) -> Option<&Guard> {
        self.right_guard.as_ref()
    }

    /// Return the elements of this aggregate.
    pub fn elements(&self) -> &[ConditionalLiteral] {
        &self.elements
    }

    /// Return whether this aggregate is bounded on either side.
    pub fn is_guarded(&self) -> bool {
        self.left_guard.is_some() || self.right_guard.is_some()
    }
}

impl Display for Aggregate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(guard) = &self.left_guard {
            write!(f, "{} {} ", guard.term, guard.operator)?;
        }

        f.write_str("{ ")?;
        write_separated(f, &self.elements, "; ")?;
        f.write_str(" }")?;

        if let Some(guard) = &self.right_guard {
            write!(f, " {} {}", guard.operator, guard.term)?;
        }

        Ok(())
    }
}

impl PartialEq for Aggregate {
    fn eq(&self, other: &Self) -> bool {
        self.left_guard == other.left_guard
            && self.elements == other.elements
            && self.right_guard == other.right_guard
    }
}

impl Hash for Aggregate {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.left_guard.hash(state);
        self.elements.hash(state);
        self.right_guard.hash(state);
    }
}

impl ProgramComponent for Aggregate {
    fn kind(&self) -> ProgramComponentKind {
        ProgramComponentKind::Aggregate
    }

    fn origin(&self) -> &Origin {
        &self.origin
    }

    fn set_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }
}

impl IterableVariables for Aggregate {
    fn variables<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Variable> + 'a> {
        let guards = self
            .left_guard
            .iter()
            .chain(self.right_guard.iter())
            .flat_map(|guard| guard.term.variables());

        Box::new(
            guards.chain(
                self.elements
                    .iter()
                    .flat_map(|element| element.variables()),
            ),
        )
    }
}

#[cfg(test)]
mod test {
    use crate::rule_model::components::{
        atom::{Atom, ComparisonOperator},
        literal::{ConditionalLiteral, Literal},
        term::Term,
    };

    use super::{Aggregate, Guard};

    #[test]
    fn display_aggregate() {
        let elements = vec![
            ConditionalLiteral::new(Literal::positive(Atom::symbolic(Term::constant("a"))), vec![]),
            ConditionalLiteral::new(
                Literal::positive(Atom::symbolic(Term::constant("b"))),
                vec![Literal::positive(Atom::symbolic(Term::constant("c")))],
            ),
        ];

        let choice = Aggregate::choice(elements.clone());
        assert_eq!(choice.to_string(), "{ a; b: c }");
        assert!(!choice.is_guarded());

        let bounded = Aggregate::new(
            None,
            elements,
            Some(Guard::new(ComparisonOperator::Equal, Term::number(1))),
        );
        assert_eq!(bounded.to_string(), "{ a; b: c } = 1");
        assert!(bounded.is_guarded());
    }
}
