//! This module defines [Operation].

pub mod operation_kind;

use std::{fmt::Display, hash::Hash};

use operation_kind::OperationKind;

use crate::rule_model::{
    components::{IterableVariables, ProgramComponent, ProgramComponentKind},
    origin::Origin,
};

use super::{Term, Variable};

/// Operation
///
/// Arithmetic on [Term]s, an interval or the classical negation of an atom.
#[derive(Debug, Clone, Eq)]
pub struct Operation {
    /// Origin of this component
    pub(crate) origin: Origin,

    /// The kind of operation
    pub(crate) kind: OperationKind,
    /// The input arguments for the operation
    pub(crate) subterms: Vec<Term>,
}

impl Operation {
    /// Create a new [Operation].
    pub fn new(kind: OperationKind, subterms: Vec<Term>) -> Self {
        Self {
            origin: Origin::Created,
            kind,
            subterms,
        }
    }

    /// Create a new binary [Operation].
    pub fn binary(kind: OperationKind, left: Term, right: Term) -> Self {
        Self::new(kind, vec![left, right])
    }

    /// Create the negation of `term`.
    pub fn negation(term: Term) -> Self {
        Self::new(OperationKind::Negation, vec![term])
    }

    /// Return the arguments of this operation.
    pub fn arguments(&self) -> &[Term] {
        &self.subterms
    }

    /// Return the [OperationKind] of this operation.
    pub fn operation_kind(&self) -> OperationKind {
        self.kind
    }
}

// Helper functions related to the display implementation
impl Operation {
    /// Puts braces around `term` if it binds weaker than `self` at this position.
    fn format_braces_priority(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        term: &Term,
        right_operand: bool,
    ) -> std::fmt::Result {
        let need_braces = if let Term::Operation(other) = term {
            let (outer, inner) = (self.kind.precedence(), other.kind.precedence());
            inner < outer || (inner == outer && right_operand != self.kind.is_right_associative())
        } else {
            false
        };

        if need_braces {
            write!(f, "({term})")
        } else {
            write!(f, "{term}")
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.subterms.as_slice() {
            [argument] if self.kind.is_unary() => {
                f.write_str(self.kind.symbol())?;
                if matches!(argument, Term::Operation(other) if !other.kind.is_unary()) {
                    write!(f, "({argument})")
                } else {
                    write!(f, "{argument}")
                }
            }
            [left, right] => {
                self.format_braces_priority(f, left, false)?;
                f.write_str(self.kind.symbol())?;
                self.format_braces_priority(f, right, true)
            }
            arguments => {
                write!(f, "{}(", self.kind)?;
                for (index, argument) in arguments.iter().enumerate() {
                    if index > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{argument}")?;
                }
                f.write_str(")")
            }
        }
    }
}

impl PartialEq for Operation {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.subterms == other.subterms
    }
}

impl Hash for Operation {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.subterms.hash(state);
    }
}

impl ProgramComponent for Operation {
    fn kind(&self) -> ProgramComponentKind {
        ProgramComponentKind::Operation
    }

    fn origin(&self) -> &Origin {
        &self.origin
    }

    fn set_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }
}

impl IterableVariables for Operation {
    fn variables<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Variable> + 'a> {
        Box::new(self.subterms.iter().flat_map(|term| term.variables()))
    }
}

#[cfg(test)]
mod test {
    use crate::rule_model::components::term::Term;

    use super::{operation_kind::OperationKind, Operation};

    fn binary(kind: OperationKind, left: Term, right: Term) -> Term {
        Term::Operation(Operation::binary(kind, left, right))
    }

    #[test]
    fn display_operations() {
        let x = Term::variable("X");

        assert_eq!(
            binary(OperationKind::Sum, x.clone(), Term::number(1)).to_string(),
            "X+1"
        );
        assert_eq!(
            binary(OperationKind::Interval, Term::number(1), Term::number(3)).to_string(),
            "1..3"
        );
        assert_eq!(
            Term::Operation(Operation::negation(Term::function("fly", vec![x.clone()])))
                .to_string(),
            "-fly(X)"
        );
    }

    #[test]
    fn display_inserts_braces() {
        let x = Term::variable("X");
        let y = Term::variable("Y");
        let sum = binary(OperationKind::Sum, x.clone(), y.clone());
        let difference = binary(OperationKind::Subtraction, x.clone(), y.clone());
        let power = binary(OperationKind::Power, x.clone(), y.clone());

        assert_eq!(
            binary(OperationKind::Product, sum.clone(), Term::number(2)).to_string(),
            "(X+Y)*2"
        );
        assert_eq!(
            binary(OperationKind::Sum, sum.clone(), Term::number(2)).to_string(),
            "X+Y+2"
        );
        assert_eq!(
            binary(OperationKind::Subtraction, Term::number(2), difference).to_string(),
            "2-(X-Y)"
        );
        assert_eq!(
            binary(OperationKind::Power, x.clone(), power.clone()).to_string(),
            "X**X**Y"
        );
        assert_eq!(
            binary(OperationKind::Power, power, y).to_string(),
            "(X**Y)**Y"
        );
        assert_eq!(
            Term::Operation(Operation::negation(sum)).to_string(),
            "-(X+Y)"
        );
    }
}
