//! This module defines [Rule], [Head] and [BodyLiteral].

use std::{fmt::Display, hash::Hash};

use crate::rule_model::origin::Origin;

use super::{
    aggregate::Aggregate,
    literal::{ConditionalLiteral, Literal},
    term::Variable,
    theory::TheoryAtom,
    IterableVariables, ProgramComponent, ProgramComponentKind,
};

/// Head of a [Rule]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Head {
    /// Literal, including `#false` for integrity constraints
    Literal(Literal),
    /// Choice or cardinality constraint
    Aggregate(Aggregate),
    /// Annotation
    Theory(TheoryAtom),
}

impl Head {
    /// Return whether this head is `#false`, i.e. the rule is an integrity constraint.
    pub fn is_false(&self) -> bool {
        matches!(self, Head::Literal(literal) if literal.atom().is_false())
    }

    /// Return whether this head is an annotation.
    pub fn is_theory(&self) -> bool {
        matches!(self, Head::Theory(_))
    }
}

impl Display for Head {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Head::Literal(head) => head.fmt(f),
            Head::Aggregate(head) => head.fmt(f),
            Head::Theory(head) => head.fmt(f),
        }
    }
}

impl ProgramComponent for Head {
    fn kind(&self) -> ProgramComponentKind {
        match self {
            Head::Literal(head) => head.kind(),
            Head::Aggregate(head) => head.kind(),
            Head::Theory(head) => head.kind(),
        }
    }

    fn origin(&self) -> &Origin {
        match self {
            Head::Literal(head) => head.origin(),
            Head::Aggregate(head) => head.origin(),
            Head::Theory(head) => head.origin(),
        }
    }

    fn set_origin(self, origin: Origin) -> Self {
        match self {
            Head::Literal(head) => Head::Literal(head.set_origin(origin)),
            Head::Aggregate(head) => Head::Aggregate(head.set_origin(origin)),
            Head::Theory(head) => Head::Theory(head.set_origin(origin)),
        }
    }
}

impl From<Literal> for Head {
    fn from(value: Literal) -> Self {
        Self::Literal(value)
    }
}

impl From<Aggregate> for Head {
    fn from(value: Aggregate) -> Self {
        Self::Aggregate(value)
    }
}

/// Element of the body of a [Rule]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BodyLiteral {
    /// Literal
    Literal(Literal),
    /// Literal that must hold for every instance of its condition,
    /// as in `b(X) : c(X)`
    Conditional(ConditionalLiteral),
    /// Annotation
    Theory(TheoryAtom),
}

impl BodyLiteral {
    /// Return whether this element carries a condition,
    /// which requires `;` to separate it from the next element.
    fn has_condition(&self) -> bool {
        matches!(self, BodyLiteral::Conditional(literal) if !literal.condition().is_empty())
    }
}

impl Display for BodyLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BodyLiteral::Literal(literal) => literal.fmt(f),
            BodyLiteral::Conditional(literal) => literal.fmt(f),
            BodyLiteral::Theory(literal) => literal.fmt(f),
        }
    }
}

/// Write the elements of a rule body.
pub(crate) fn write_body(
    f: &mut std::fmt::Formatter<'_>,
    body: &[BodyLiteral],
) -> std::fmt::Result {
    for (index, literal) in body.iter().enumerate() {
        if index > 0 {
            if body[index - 1].has_condition() {
                f.write_str("; ")?;
            } else {
                f.write_str(", ")?;
            }
        }

        write!(f, "{literal}")?;
    }

    Ok(())
}

impl ProgramComponent for BodyLiteral {
    fn kind(&self) -> ProgramComponentKind {
        match self {
            BodyLiteral::Literal(literal) => literal.kind(),
            BodyLiteral::Conditional(literal) => literal.kind(),
            BodyLiteral::Theory(literal) => literal.kind(),
        }
    }

    fn origin(&self) -> &Origin {
        match self {
            BodyLiteral::Literal(literal) => literal.origin(),
            BodyLiteral::Conditional(literal) => literal.origin(),
            BodyLiteral::Theory(literal) => literal.origin(),
        }
    }

    fn set_origin(self, origin: Origin) -> Self {
        match self {
            BodyLiteral::Literal(literal) => BodyLiteral::Literal(literal.set_origin(origin)),
            BodyLiteral::Conditional(literal) => {
                BodyLiteral::Conditional(literal.set_origin(origin))
            }
            BodyLiteral::Theory(literal) => BodyLiteral::Theory(literal.set_origin(origin)),
        }
    }
}

impl IterableVariables for BodyLiteral {
    fn variables<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Variable> + 'a> {
        match self {
            BodyLiteral::Literal(literal) => literal.variables(),
            BodyLiteral::Conditional(literal) => literal.variables(),
            BodyLiteral::Theory(_) => Box::new(std::iter::empty()),
        }
    }
}

impl From<Literal> for BodyLiteral {
    fn from(value: Literal) -> Self {
        Self::Literal(value)
    }
}

/// Rule
///
/// A [Head] that must hold whenever every [BodyLiteral] holds.
/// Facts are rules with an empty body,
/// integrity constraints are rules with the head `#false`.
#[derive(Debug, Clone, Eq)]
pub struct Rule {
    /// Origin of this component
    pub(crate) origin: Origin,

    /// Head of the rule
    pub(crate) head: Head,
    /// Body of the rule
    pub(crate) body: Vec<BodyLiteral>,
}

impl Rule {
    /// Create a new [Rule].
    pub fn new(head: Head, body: Vec<BodyLiteral>) -> Self {
        Self {
            origin: Origin::Created,
            head,
            body,
        }
    }

    /// Create an integrity constraint.
    pub fn constraint(body: Vec<BodyLiteral>) -> Self {
        Self::new(Head::Literal(Literal::boolean(false)), body)
    }

    /// Return a reference to the head of the rule.
    pub fn head(&self) -> &Head {
        &self.head
    }

    /// Return a reference to the body of the rule.
    pub fn body(&self) -> &[BodyLiteral] {
        &self.body
    }

    /// Split the rule into its head and body.
    pub fn into_parts(self) -> (Head, Vec<BodyLiteral>) {
        (self.head, self.body)
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.body.is_empty() {
            return write!(f, "{}.", self.head);
        }

        if !self.head.is_false() {
            write!(f, "{} ", self.head)?;
        }

        f.write_str(":- ")?;
        write_body(f, &self.body)?;
        f.write_str(".")
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.head == other.head && self.body == other.body
    }
}

impl Hash for Rule {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.head.hash(state);
        self.body.hash(state);
    }
}

impl ProgramComponent for Rule {
    fn kind(&self) -> ProgramComponentKind {
        ProgramComponentKind::Rule
    }

    fn origin(&self) -> &Origin {
        &self.origin
    }

    fn set_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }
}

#[cfg(test)]
mod test {
    use crate::rule_model::components::{
        atom::Atom,
        literal::{ConditionalLiteral, Literal},
        rule::{BodyLiteral, Head},
        term::Term,
    };

    use super::Rule;

    #[test]
    fn display_rules() {
        let atom = |name: &str| Atom::symbolic(Term::constant(name));

        let fact = Rule::new(Head::Literal(Literal::positive(atom("a"))), vec![]);
        assert_eq!(fact.to_string(), "a.");

        let rule = Rule::new(
            Head::Literal(Literal::positive(atom("a"))),
            vec![
                BodyLiteral::Literal(Literal::positive(atom("b"))),
                BodyLiteral::Literal(Literal::negative(atom("c"))),
            ],
        );
        assert_eq!(rule.to_string(), "a :- b, not c.");

        let constraint = Rule::constraint(vec![BodyLiteral::Literal(Literal::positive(atom("b")))]);
        assert_eq!(constraint.to_string(), ":- b.");
        assert!(constraint.head().is_false());
    }

    #[test]
    fn conditional_body_literals_end_with_semicolon() {
        let atom = |name: &str| Atom::symbolic(Term::function(name, vec![Term::variable("X")]));

        let rule = Rule::new(
            Head::Literal(Literal::positive(Atom::symbolic(Term::constant("a")))),
            vec![
                BodyLiteral::Conditional(ConditionalLiteral::new(
                    Literal::positive(atom("b")),
                    vec![Literal::positive(atom("c")), Literal::positive(atom("d"))],
                )),
                BodyLiteral::Literal(Literal::boolean(true)),
            ],
        );
        assert_eq!(rule.to_string(), "a :- b(X): c(X), d(X); #true.");
    }
}
