//! This module defines [Statement] and [Directive].

use std::{fmt::Display, hash::Hash};

use crate::rule_model::origin::Origin;

use super::{minimize::Minimize, rule::Rule, ProgramComponent, ProgramComponentKind};

/// Directive
///
/// Any statement starting with `#`, such as `#show` or `#const`,
/// kept verbatim without its terminating period.
#[derive(Debug, Clone, Eq)]
pub struct Directive {
    /// Origin of this component
    pub(crate) origin: Origin,

    /// Text of the directive
    pub(crate) text: String,
}

impl Directive {
    /// Create a new [Directive].
    pub fn new(text: &str) -> Self {
        Self {
            origin: Origin::Created,
            text: text.trim().to_string(),
        }
    }

    /// Return the text of this directive.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Display for Directive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.", self.text)
    }
}

impl PartialEq for Directive {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Hash for Directive {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl ProgramComponent for Directive {
    fn kind(&self) -> ProgramComponentKind {
        ProgramComponentKind::Directive
    }

    fn origin(&self) -> &Origin {
        &self.origin
    }

    fn set_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }
}

/// Top-level statement of a program
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Statement {
    /// Rule
    Rule(Rule),
    /// Weak constraint
    Minimize(Minimize),
    /// Directive
    Directive(Directive),
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Rule(statement) => statement.fmt(f),
            Statement::Minimize(statement) => statement.fmt(f),
            Statement::Directive(statement) => statement.fmt(f),
        }
    }
}

impl ProgramComponent for Statement {
    fn kind(&self) -> ProgramComponentKind {
        match self {
            Statement::Rule(statement) => statement.kind(),
            Statement::Minimize(statement) => statement.kind(),
            Statement::Directive(statement) => statement.kind(),
        }
    }

    fn origin(&self) -> &Origin {
        match self {
            Statement::Rule(statement) => statement.origin(),
            Statement::Minimize(statement) => statement.origin(),
            Statement::Directive(statement) => statement.origin(),
        }
    }

    fn set_origin(self, origin: Origin) -> Self {
        match self {
            Statement::Rule(statement) => Statement::Rule(statement.set_origin(origin)),
            Statement::Minimize(statement) => Statement::Minimize(statement.set_origin(origin)),
            Statement::Directive(statement) => Statement::Directive(statement.set_origin(origin)),
        }
    }
}

impl From<Rule> for Statement {
    fn from(value: Rule) -> Self {
        Self::Rule(value)
    }
}

impl From<Minimize> for Statement {
    fn from(value: Minimize) -> Self {
        Self::Minimize(value)
    }
}

impl From<Directive> for Statement {
    fn from(value: Directive) -> Self {
        Self::Directive(value)
    }
}
