//! This module defines [Literal] and [ConditionalLiteral].

use std::{fmt::Display, hash::Hash};

use crate::rule_model::origin::Origin;

use super::{
    atom::Atom, term::Variable, write_separated, IterableVariables, ProgramComponent,
    ProgramComponentKind,
};

/// Default negation applied to an [Atom]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sign {
    /// Atom is not negated
    #[default]
    NoSign,
    /// `not`
    Negation,
    /// `not not`
    DoubleNegation,
}

impl Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sign::NoSign => Ok(()),
            Sign::Negation => f.write_str("not "),
            Sign::DoubleNegation => f.write_str("not not "),
        }
    }
}

/// Literal
///
/// An [Atom] together with a [Sign].
#[derive(Debug, Clone, Eq)]
pub struct Literal {
    /// Origin of this component
    pub(crate) origin: Origin,

    /// Sign of the literal
    pub(crate) sign: Sign,
    /// Atom of the literal
    pub(crate) atom: Atom,
}

impl Literal {
    /// Create a new [Literal].
    pub fn new(sign: Sign, atom: Atom) -> Self {
        Self {
            origin: Origin::Created,
            sign,
            atom,
        }
    }

    /// Create a literal without a sign.
    pub fn positive(atom: Atom) -> Self {
        Self::new(Sign::NoSign, atom)
    }

    /// Create a default negated literal.
    pub fn negative(atom: Atom) -> Self {
        Self::new(Sign::Negation, atom)
    }

    /// Create the literal `#true` or `#false`.
    pub fn boolean(value: bool) -> Self {
        Self::positive(Atom::boolean(value))
    }

    /// Return the sign of this literal.
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Return the atom of this literal.
    pub fn atom(&self) -> &Atom {
        &self.atom
    }

    /// Return the atom of this literal, consuming it.
    pub fn into_atom(self) -> Atom {
        self.atom
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.sign, self.atom)
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        self.sign == other.sign && self.atom == other.atom
    }
}

impl Hash for Literal {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.sign.hash(state);
        self.atom.hash(state);
    }
}

impl ProgramComponent for Literal {
    fn kind(&self) -> ProgramComponentKind {
        ProgramComponentKind::Literal
    }

    fn origin(&self) -> &Origin {
        &self.origin
    }

    fn set_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }
}

impl IterableVariables for Literal {
    fn variables<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Variable> + 'a> {
        self.atom.variables()
    }
}

/// Conditional literal
///
/// A [Literal] that is only considered if its condition holds,
/// as in `a(X) : b(X), c(X)`.
#[derive(Debug, Clone, Eq)]
pub struct ConditionalLiteral {
    /// Origin of this component
    pub(crate) origin: Origin,

    /// Conditioned literal
    pub(crate) literal: Literal,
    /// Condition
    pub(crate) condition: Vec<Literal>,
}

impl ConditionalLiteral {
    /// Create a new [ConditionalLiteral].
    pub fn new(literal: Literal, condition: Vec<Literal>) -> Self {
        Self {
            origin: Origin::Created,
            literal,
            condition,
        }
    }

    /// Return the conditioned literal.
    pub fn literal(&self) -> &Literal {
        &self.literal
    }

    /// Return the condition.
    pub fn condition(&self) -> &[Literal] {
        &self.condition
    }
}

impl Display for ConditionalLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.literal.fmt(f)?;

        if !self.condition.is_empty() {
            f.write_str(": ")?;
            write_separated(f, &self.condition, ", ")?;
        }

        Ok(())
    }
}

impl PartialEq for ConditionalLiteral {
    fn eq(&self, other: &Self) -> bool {
        self.literal == other.literal && self.condition == other.condition
    }
}

impl Hash for ConditionalLiteral {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.literal.hash(state);
        self.condition.hash(state);
    }
}

impl ProgramComponent for ConditionalLiteral {
    fn kind(&self) -> ProgramComponentKind {
        ProgramComponentKind::ConditionalLiteral
    }

    fn origin(&self) -> &Origin {
        &self.origin
    }

    fn set_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }
}

impl IterableVariables for ConditionalLiteral {
    fn variables<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Variable> + 'a> {
        Box::new(
            self.literal
                .variables()
                .chain(self.condition.iter().flat_map(|literal| literal.variables())),
        )
    }
}
