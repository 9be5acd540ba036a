//! This module defines [Minimize].

use std::{fmt::Display, hash::Hash};

use crate::rule_model::origin::Origin;

use super::{
    rule::{write_body, BodyLiteral},
    term::Term,
    ProgramComponent, ProgramComponentKind,
};

/// Weak constraint
///
/// Statement of the form `:~ body. [weight@priority, terms]`,
/// which adds `weight` to the cost at level `priority`
/// for every distinct tuple `terms` for which `body` holds.
#[derive(Debug, Clone, Eq)]
pub struct Minimize {
    /// Origin of this component
    pub(crate) origin: Origin,

    /// Weight
    pub(crate) weight: Term,
    /// Priority level
    pub(crate) priority: Term,
    /// Terms distinguishing different violations
    pub(crate) terms: Vec<Term>,
    /// Condition
    pub(crate) body: Vec<BodyLiteral>,
}

impl Minimize {
    /// Create a new [Minimize].
    pub fn new(weight: Term, priority: Term, terms: Vec<Term>, body: Vec<BodyLiteral>) -> Self {
        Self {
            origin: Origin::Created,
            weight,
            priority,
            terms,
            body,
        }
    }

    /// Return the weight of this constraint.
    pub fn weight(&self) -> &Term {
        &self.weight
    }

    /// Return the priority of this constraint.
    pub fn priority(&self) -> &Term {
        &self.priority
    }

    /// Return the terms of this constraint.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Return the body of this constraint.
    pub fn body(&self) -> &[BodyLiteral] {
        &self.body
    }
}

impl Display for Minimize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(":~ ")?;
        if self.body.is_empty() {
            f.write_str("#true")?;
        } else {
            write_body(f, &self.body)?;
        }

        write!(f, ". [{}@{}", self.weight, self.priority)?;
        for term in &self.terms {
            write!(f, ",{term}")?;
        }
        f.write_str("]")
    }
}

impl PartialEq for Minimize {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight
            && self.priority == other.priority
            && self.terms == other.terms
            && self.body == other.body
    }
}

impl Hash for Minimize {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.weight.hash(state);
        self.priority.hash(state);
        self.terms.hash(state);
        self.body.hash(state);
    }
}

impl ProgramComponent for Minimize {
    fn kind(&self) -> ProgramComponentKind {
        ProgramComponentKind::Minimize
    }

    fn origin(&self) -> &Origin {
        &self.origin
    }

    fn set_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }
}
