//! This module defines [ProgramComponentKind].
#![allow(missing_docs)]

use enum_assoc::Assoc;

/// Types of [ProgramComponent](super::ProgramComponent)s
#[derive(Assoc, Debug, Copy, Clone, Eq, PartialEq)]
#[func(pub fn name(&self) -> &'static str)]
pub enum ProgramComponentKind {
    /// Variable
    #[assoc(name = "variable")]
    Variable,
    /// Integer or string symbol
    #[assoc(name = "symbol")]
    Symbol,
    /// Function term
    #[assoc(name = "function")]
    FunctionTerm,
    /// Arithmetic operation or interval
    #[assoc(name = "operation")]
    Operation,
    /// Symbolic atom
    #[assoc(name = "atom")]
    Atom,
    /// Boolean constant
    #[assoc(name = "boolean")]
    Boolean,
    /// Comparison
    #[assoc(name = "comparison")]
    Comparison,
    /// Literal
    #[assoc(name = "literal")]
    Literal,
    /// Conditional literal
    #[assoc(name = "conditional literal")]
    ConditionalLiteral,
    /// Aggregate
    #[assoc(name = "aggregate")]
    Aggregate,
    /// Aggregate with a function, such as `#count`
    #[assoc(name = "body aggregate")]
    BodyAggregate,
    /// Theory atom
    #[assoc(name = "theory atom")]
    TheoryAtom,
    /// Rule
    #[assoc(name = "rule")]
    Rule,
    /// Weak constraint
    #[assoc(name = "weak constraint")]
    Minimize,
    /// Directive
    #[assoc(name = "directive")]
    Directive,
}

#[cfg(test)]
mod test {
    use crate::rule_model::components::{
        atom::Atom, literal::Literal, term::Term, ProgramComponent,
    };

    #[test]
    fn component_names() {
        let negated = Term::negated(Term::constant("a"));

        assert_eq!(Term::variable("X").kind().name(), "variable");
        assert_eq!(negated.kind().name(), "operation");
        assert_eq!(Literal::positive(Atom::symbolic(negated)).kind().name(), "literal");
    }
}
