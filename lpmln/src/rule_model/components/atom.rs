//! This module defines [Atom] and its variants.

use std::{fmt::Display, hash::Hash};

use crate::rule_model::origin::Origin;

use super::{
    aggregate::Aggregate,
    body_aggregate::BodyAggregate,
    term::{Term, Variable},
    IterableVariables, ProgramComponent, ProgramComponentKind,
};

/// Symbolic atom
///
/// A predicate applied to a list of terms,
/// represented by the function term that carries both.
#[derive(Debug, Clone, Eq)]
pub struct SymbolicAtom {
    /// Origin of this component
    pub(crate) origin: Origin,

    /// Term representing this atom
    pub(crate) term: Term,
}

impl SymbolicAtom {
    /// Create a new [SymbolicAtom].
    pub fn new(term: Term) -> Self {
        Self {
            origin: Origin::Created,
            term,
        }
    }

    /// Return the term underlying this atom.
    pub fn term(&self) -> &Term {
        &self.term
    }
}

impl Display for SymbolicAtom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.term.fmt(f)
    }
}

impl PartialEq for SymbolicAtom {
    fn eq(&self, other: &Self) -> bool {
        self.term == other.term
    }
}

impl Hash for SymbolicAtom {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.term.hash(state);
    }
}

impl ProgramComponent for SymbolicAtom {
    fn kind(&self) -> ProgramComponentKind {
        ProgramComponentKind::Atom
    }

    fn origin(&self) -> &Origin {
        &self.origin
    }

    fn set_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }
}

/// Boolean constant
///
/// Either `#true` or `#false`.
#[derive(Debug, Clone, Copy, Eq)]
pub struct BooleanConstant {
    /// Origin of this component
    pub(crate) origin: Origin,

    /// Truth value
    pub(crate) value: bool,
}

impl BooleanConstant {
    /// Create a new [BooleanConstant].
    pub fn new(value: bool) -> Self {
        Self {
            origin: Origin::Created,
            value,
        }
    }

    /// Return the truth value of this constant.
    pub fn value(&self) -> bool {
        self.value
    }
}

impl Display for BooleanConstant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.value {
            f.write_str("#true")
        } else {
            f.write_str("#false")
        }
    }
}

impl PartialEq for BooleanConstant {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Hash for BooleanConstant {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl ProgramComponent for BooleanConstant {
    fn kind(&self) -> ProgramComponentKind {
        ProgramComponentKind::Boolean
    }

    fn origin(&self) -> &Origin {
        &self.origin
    }

    fn set_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }
}

/// Relation used in comparisons and aggregate guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    /// `=`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    LessThan,
    /// `<=`
    LessEqual,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterEqual,
}

impl ComparisonOperator {
    /// Return the textual representation of this operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            ComparisonOperator::Equal => "=",
            ComparisonOperator::NotEqual => "!=",
            ComparisonOperator::LessThan => "<",
            ComparisonOperator::LessEqual => "<=",
            ComparisonOperator::GreaterThan => ">",
            ComparisonOperator::GreaterEqual => ">=",
        }
    }
}

impl Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Comparison
///
/// Built-in relation between two terms.
#[derive(Debug, Clone, Eq)]
pub struct Comparison {
    /// Origin of this component
    pub(crate) origin: Origin,

    /// Left hand side
    pub(crate) left: Term,
    /// Relation
    pub(crate) operator: ComparisonOperator,
    /// Right hand side
    pub(crate) right: Term,
}

impl Comparison {
    /// Create a new [Comparison].
    pub fn new(left: Term, operator: ComparisonOperator, right: Term) -> Self {
        Self {
            origin: Origin::Created,
            left,
            operator,
            right,
        }
    }

    /// Return the relation of this comparison.
    pub fn operator(&self) -> ComparisonOperator {
        self.operator
    }
}

impl Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.left, self.operator, self.right)
    }
}

impl PartialEq for Comparison {
    fn eq(&self, other: &Self) -> bool {
        self.left == other.left && self.operator == other.operator && self.right == other.right
    }
}

impl Hash for Comparison {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.left.hash(state);
        self.operator.hash(state);
        self.right.hash(state);
    }
}

impl ProgramComponent for Comparison {
    fn kind(&self) -> ProgramComponentKind {
        ProgramComponentKind::Comparison
    }

    fn origin(&self) -> &Origin {
        &self.origin
    }

    fn set_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }
}

/// Atom
///
/// Anything that may occur under a sign in a [super::literal::Literal].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Atom {
    /// Predicate applied to terms
    Symbolic(SymbolicAtom),
    /// `#true` or `#false`
    Boolean(BooleanConstant),
    /// Built-in comparison
    Comparison(Comparison),
    /// Aggregate used as a body atom
    Aggregate(Aggregate),
    /// Aggregate function with bounds, as in `#count { X : p(X) } >= 2`
    BodyAggregate(BodyAggregate),
}

impl Atom {
    /// Create a [SymbolicAtom] from a term.
    pub fn symbolic(term: Term) -> Self {
        Self::Symbolic(SymbolicAtom::new(term))
    }

    /// Create a [BooleanConstant].
    pub fn boolean(value: bool) -> Self {
        Self::Boolean(BooleanConstant::new(value))
    }

    /// Return whether this atom is the constant `#false`.
    pub fn is_false(&self) -> bool {
        matches!(self, Atom::Boolean(constant) if !constant.value())
    }
}

impl Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Atom::Symbolic(atom) => atom.fmt(f),
            Atom::Boolean(atom) => atom.fmt(f),
            Atom::Comparison(atom) => atom.fmt(f),
            Atom::Aggregate(atom) => atom.fmt(f),
            Atom::BodyAggregate(atom) => atom.fmt(f),
        }
    }
}

impl ProgramComponent for Atom {
    fn kind(&self) -> ProgramComponentKind {
        match self {
            Atom::Symbolic(atom) => atom.kind(),
            Atom::Boolean(atom) => atom.kind(),
            Atom::Comparison(atom) => atom.kind(),
            Atom::Aggregate(atom) => atom.kind(),
            Atom::BodyAggregate(atom) => atom.kind(),
        }
    }

    fn origin(&self) -> &Origin {
        match self {
            Atom::Symbolic(atom) => atom.origin(),
            Atom::Boolean(atom) => atom.origin(),
            Atom::Comparison(atom) => atom.origin(),
            Atom::Aggregate(atom) => atom.origin(),
            Atom::BodyAggregate(atom) => atom.origin(),
        }
    }

    fn set_origin(self, origin: Origin) -> Self {
        match self {
            Atom::Symbolic(atom) => Atom::Symbolic(atom.set_origin(origin)),
            Atom::Boolean(atom) => Atom::Boolean(atom.set_origin(origin)),
            Atom::Comparison(atom) => Atom::Comparison(atom.set_origin(origin)),
            Atom::Aggregate(atom) => Atom::Aggregate(atom.set_origin(origin)),
            Atom::BodyAggregate(atom) => Atom::BodyAggregate(atom.set_origin(origin)),
        }
    }
}

impl IterableVariables for Atom {
    fn variables<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Variable> + 'a> {
        match self {
            Atom::Symbolic(atom) => atom.term.variables(),
            Atom::Boolean(_) => Box::new(std::iter::empty()),
            Atom::Comparison(atom) => Box::new(atom.left.variables().chain(atom.right.variables())),
            Atom::Aggregate(atom) => atom.variables(),
            Atom::BodyAggregate(atom) => atom.variables(),
        }
    }
}
