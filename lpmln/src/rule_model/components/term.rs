//! This module defines [Term] and its variants.

pub mod operation;

use std::{fmt::Display, hash::Hash};

use operation::{operation_kind::OperationKind, Operation};

use crate::rule_model::origin::Origin;

use super::{write_separated, IterableVariables, ProgramComponent, ProgramComponentKind};

/// Name of anonymous variables
pub const ANONYMOUS_VARIABLE: &str = "_";

/// Variable
///
/// Placeholder for a ground term.
/// Two variables are the same if they have the same name.
#[derive(Debug, Clone, Eq)]
pub struct Variable {
    /// Origin of this component
    pub(crate) origin: Origin,

    /// Name of the variable
    pub(crate) name: String,
}

impl Variable {
    /// Create a new [Variable].
    pub fn new(name: &str) -> Self {
        Self {
            origin: Origin::Created,
            name: name.to_string(),
        }
    }

    /// Return the name of this variable.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return whether this is an anonymous variable.
    pub fn is_anonymous(&self) -> bool {
        self.name == ANONYMOUS_VARIABLE
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Hash for Variable {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl ProgramComponent for Variable {
    fn kind(&self) -> ProgramComponentKind {
        ProgramComponentKind::Variable
    }

    fn origin(&self) -> &Origin {
        &self.origin
    }

    fn set_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }
}

/// Ground value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// Integer
    Number(i64),
    /// String
    String(String),
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Number(number) => write!(f, "{number}"),
            Symbol::String(string) => {
                f.write_str("\"")?;
                for character in string.chars() {
                    match character {
                        '"' => f.write_str("\\\"")?,
                        '\\' => f.write_str("\\\\")?,
                        '\n' => f.write_str("\\n")?,
                        '\t' => f.write_str("\\t")?,
                        _ => write!(f, "{character}")?,
                    }
                }
                f.write_str("\"")
            }
        }
    }
}

/// Symbolic term
///
/// An integer or a string.
#[derive(Debug, Clone, Eq)]
pub struct SymbolicTerm {
    /// Origin of this component
    pub(crate) origin: Origin,

    /// Value of this term
    pub(crate) symbol: Symbol,
}

impl SymbolicTerm {
    /// Create a new [SymbolicTerm].
    pub fn new(symbol: Symbol) -> Self {
        Self {
            origin: Origin::Created,
            symbol,
        }
    }

    /// Return the [Symbol] represented by this term.
    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }
}

impl Display for SymbolicTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.symbol.fmt(f)
    }
}

impl PartialEq for SymbolicTerm {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
    }
}

impl Hash for SymbolicTerm {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.symbol.hash(state);
    }
}

impl ProgramComponent for SymbolicTerm {
    fn kind(&self) -> ProgramComponentKind {
        ProgramComponentKind::Symbol
    }

    fn origin(&self) -> &Origin {
        &self.origin
    }

    fn set_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }
}

/// Function term
///
/// List of [Term]s with a name.
/// Constants are function terms without arguments
/// and tuples are function terms with an empty name.
#[derive(Debug, Clone, Eq)]
pub struct FunctionTerm {
    /// Origin of this component
    pub(crate) origin: Origin,

    /// Name of the function
    pub(crate) name: String,
    /// Subterms of the function
    pub(crate) terms: Vec<Term>,
}

impl FunctionTerm {
    /// Create a new [FunctionTerm].
    pub fn new<Terms: IntoIterator<Item = Term>>(name: &str, subterms: Terms) -> Self {
        Self {
            origin: Origin::Created,
            name: name.to_string(),
            terms: subterms.into_iter().collect(),
        }
    }

    /// Create a new tuple, i.e. a [FunctionTerm] without a name.
    pub fn tuple<Terms: IntoIterator<Item = Term>>(subterms: Terms) -> Self {
        Self::new("", subterms)
    }

    /// Return the name of this function.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the arguments of this function term.
    pub fn arguments(&self) -> &[Term] {
        &self.terms
    }

    /// Return the arguments of this function term, consuming it.
    pub fn into_arguments(self) -> Vec<Term> {
        self.terms
    }

    /// Return whether this term is a tuple.
    pub fn is_tuple(&self) -> bool {
        self.name.is_empty()
    }
}

impl Display for FunctionTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)?;

        if self.terms.is_empty() && !self.is_tuple() {
            return Ok(());
        }

        f.write_str("(")?;
        write_separated(f, &self.terms, ",")?;
        if self.is_tuple() && self.terms.len() == 1 {
            f.write_str(",")?;
        }
        f.write_str(")")
    }
}

impl PartialEq for FunctionTerm {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.terms == other.terms
    }
}

impl Hash for FunctionTerm {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.terms.hash(state);
    }
}

impl ProgramComponent for FunctionTerm {
    fn kind(&self) -> ProgramComponentKind {
        ProgramComponentKind::FunctionTerm
    }

    fn origin(&self) -> &Origin {
        &self.origin
    }

    fn set_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }
}

/// Term
///
/// Basic building block for atoms and annotations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// Variable
    Variable(Variable),
    /// Integer or string
    Symbolic(SymbolicTerm),
    /// Function term
    Function(FunctionTerm),
    /// Arithmetic operation, interval or classical negation
    Operation(Operation),
}

impl Term {
    /// Create a variable term.
    pub fn variable(name: &str) -> Self {
        Self::Variable(Variable::new(name))
    }

    /// Create an integer term.
    pub fn number(value: i64) -> Self {
        Self::Symbolic(SymbolicTerm::new(Symbol::Number(value)))
    }

    /// Create a string term.
    pub fn string(value: &str) -> Self {
        Self::Symbolic(SymbolicTerm::new(Symbol::String(value.to_string())))
    }

    /// Create a constant, i.e. a function term without arguments.
    pub fn constant(name: &str) -> Self {
        Self::Function(FunctionTerm::new(name, Vec::new()))
    }

    /// Create a function term.
    pub fn function<Terms: IntoIterator<Item = Term>>(name: &str, subterms: Terms) -> Self {
        Self::Function(FunctionTerm::new(name, subterms))
    }

    /// Create the classical negation of `term`.
    pub fn negated(term: Term) -> Self {
        Self::Operation(Operation::negation(term))
    }

    /// Return whether this term denotes an atom,
    /// i.e. whether it is a function term that is not a tuple,
    /// possibly under classical negation.
    pub fn is_atom(&self) -> bool {
        match self {
            Term::Function(function) => !function.is_tuple(),
            Term::Operation(operation) => match operation.arguments() {
                [argument] if operation.operation_kind() == OperationKind::Negation => {
                    matches!(argument, Term::Function(function) if !function.is_tuple())
                }
                _ => false,
            },
            _ => false,
        }
    }

    /// Return the [Symbol] if this is a symbolic term.
    pub fn symbol(&self) -> Option<&Symbol> {
        match self {
            Term::Symbolic(term) => Some(term.symbol()),
            _ => None,
        }
    }

    /// Return the name if this term is a constant.
    pub fn constant_name(&self) -> Option<&str> {
        match self {
            Term::Function(function) if function.arguments().is_empty() && !function.is_tuple() => {
                Some(function.name())
            }
            _ => None,
        }
    }
}

impl From<Variable> for Term {
    fn from(value: Variable) -> Self {
        Self::Variable(value)
    }
}

impl From<SymbolicTerm> for Term {
    fn from(value: SymbolicTerm) -> Self {
        Self::Symbolic(value)
    }
}

impl From<FunctionTerm> for Term {
    fn from(value: FunctionTerm) -> Self {
        Self::Function(value)
    }
}

impl From<Operation> for Term {
    fn from(value: Operation) -> Self {
        Self::Operation(value)
    }
}

impl From<i64> for Term {
    fn from(value: i64) -> Self {
        Self::number(value)
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Variable(term) => term.fmt(f),
            Term::Symbolic(term) => term.fmt(f),
            Term::Function(term) => term.fmt(f),
            Term::Operation(term) => term.fmt(f),
        }
    }
}

impl ProgramComponent for Term {
    fn kind(&self) -> ProgramComponentKind {
        match self {
            Term::Variable(term) => term.kind(),
            Term::Symbolic(term) => term.kind(),
            Term::Function(term) => term.kind(),
            Term::Operation(term) => term.kind(),
        }
    }

    fn origin(&self) -> &Origin {
        match self {
            Term::Variable(term) => term.origin(),
            Term::Symbolic(term) => term.origin(),
            Term::Function(term) => term.origin(),
            Term::Operation(term) => term.origin(),
        }
    }

    fn set_origin(self, origin: Origin) -> Self {
        match self {
            Term::Variable(term) => Term::Variable(term.set_origin(origin)),
            Term::Symbolic(term) => Term::Symbolic(term.set_origin(origin)),
            Term::Function(term) => Term::Function(term.set_origin(origin)),
            Term::Operation(term) => Term::Operation(term.set_origin(origin)),
        }
    }
}

impl IterableVariables for Term {
    fn variables<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Variable> + 'a> {
        match self {
            Term::Variable(variable) => Box::new(std::iter::once(variable)),
            Term::Symbolic(_) => Box::new(std::iter::empty()),
            Term::Function(function) => {
                Box::new(function.terms.iter().flat_map(|term| term.variables()))
            }
            Term::Operation(operation) => operation.variables(),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::rule_model::{components::ProgramComponent, origin::Origin};

    use super::{
        operation::{operation_kind::OperationKind, Operation},
        FunctionTerm, Term,
    };

    #[test]
    fn display_terms() {
        assert_eq!(Term::constant("a").to_string(), "a");
        assert_eq!(
            Term::function("f", vec![Term::variable("X"), Term::number(-3)]).to_string(),
            "f(X,-3)"
        );
        assert_eq!(Term::string("0.5").to_string(), "\"0.5\"");
        assert_eq!(
            Term::from(FunctionTerm::tuple(vec![Term::variable("X")])).to_string(),
            "(X,)"
        );
        assert_eq!(Term::from(FunctionTerm::tuple(Vec::new())).to_string(), "()");
    }

    #[test]
    fn atom_terms() {
        let fly = Term::function("fly", vec![Term::constant("tweety")]);

        assert!(fly.is_atom());
        assert!(Term::negated(fly).is_atom());
        assert!(!Term::from(FunctionTerm::tuple(vec![Term::number(1)])).is_atom());
        assert!(!Term::negated(Term::variable("X")).is_atom());
        assert!(!Term::from(Operation::binary(
            OperationKind::Sum,
            Term::variable("X"),
            Term::number(1)
        ))
        .is_atom());
    }

    #[test]
    fn variable_equality_ignores_origin() {
        let first = Term::variable("X");
        let second = Term::variable("X").set_origin(Origin::file(3, 4));

        assert_eq!(first, second);
        assert_ne!(first, Term::variable("Y"));
    }
}
