//! This module defines [TheoryAtom].

use std::{fmt::Display, hash::Hash};

use crate::rule_model::origin::Origin;

use super::{
    atom::ComparisonOperator, literal::Literal, term::Term, write_separated, ProgramComponent,
    ProgramComponentKind,
};

/// Element of a [TheoryAtom]
///
/// A tuple of terms with an optional condition, as in `a(X), b : c(X)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TheoryElement {
    /// Terms of the element
    pub terms: Vec<Term>,
    /// Condition
    pub condition: Vec<Literal>,
}

impl TheoryElement {
    /// Create a new [TheoryElement].
    pub fn new(terms: Vec<Term>, condition: Vec<Literal>) -> Self {
        Self { terms, condition }
    }
}

impl Display for TheoryElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_separated(f, &self.terms, ",")?;

        if !self.condition.is_empty() {
            f.write_str(": ")?;
            write_separated(f, &self.condition, ", ")?;
        }

        Ok(())
    }
}

/// Guard of a [TheoryAtom], as in `&pr { a } = "0.3"`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TheoryGuard {
    /// Relation
    pub operator: ComparisonOperator,
    /// Guarding term
    pub term: Term,
}

/// Theory atom
///
/// Annotation of the form `&name(arguments) { elements } op term`
/// carrying information that is not part of plain answer set programs,
/// such as weights, evidence or P-log statements.
#[derive(Debug, Clone, Eq)]
pub struct TheoryAtom {
    /// Origin of this component
    pub(crate) origin: Origin,

    /// Name of the annotation
    pub(crate) name: String,
    /// Arguments
    pub(crate) arguments: Vec<Term>,
    /// Elements
    pub(crate) elements: Vec<TheoryElement>,
    /// Guard
    pub(crate) guard: Option<TheoryGuard>,
}

impl TheoryAtom {
    /// Create a new [TheoryAtom].
    pub fn new(
        name: &str,
        arguments: Vec<Term>,
        elements: Vec<TheoryElement>,
        guard: Option<TheoryGuard>,
    ) -> Self {
        Self {
            origin: Origin::Created,
            name: name.to_string(),
            arguments,
            elements,
            guard,
        }
    }

    /// Return the name of this annotation.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the arguments of this annotation.
    pub fn arguments(&self) -> &[Term] {
        &self.arguments
    }

    /// Return the elements of this annotation.
    pub fn elements(&self) -> &[TheoryElement] {
        &self.elements
    }

    /// Return the guard of this annotation.
    pub fn guard(&self) -> Option<&TheoryGuard> {
        self.guard.as_ref()
    }
}

impl Display for TheoryAtom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "&{}", self.name)?;

        if !self.arguments.is_empty() {
            f.write_str("(")?;
            write_separated(f, &self.arguments, ",")?;
            f.write_str(")")?;
        }

        if !self.elements.is_empty() {
            f.write_str(" { ")?;
            write_separated(f, &self.elements, "; ")?;
            f.write_str(" }")?;
        }

        if let Some(guard) = &self.guard {
            write!(f, " {} {}", guard.operator, guard.term)?;
        }

        Ok(())
    }
}

impl PartialEq for TheoryAtom {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.arguments == other.arguments
            && self.elements == other.elements
            && self.guard == other.guard
    }
}

impl Hash for TheoryAtom {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.arguments.hash(state);
        self.elements.hash(state);
        self.guard.hash(state);
    }
}

impl ProgramComponent for TheoryAtom {
    fn kind(&self) -> ProgramComponentKind {
        ProgramComponentKind::TheoryAtom
    }

    fn origin(&self) -> &Origin {
        &self.origin
    }

    fn set_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }
}
