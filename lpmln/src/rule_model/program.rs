//! This module defines [Program] and the [ProgramBuilder] sink.

use std::fmt::Display;

use super::components::{rule::Rule, statement::Statement};

/// Sink that receives finished statements one at a time
///
/// Statements must be kept in the order in which they were added.
pub trait ProgramBuilder {
    /// Add a [Statement].
    fn add(&mut self, statement: Statement);
}

/// Representation of an LP^MLN or answer set program
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Program {
    /// Statements in program order
    statements: Vec<Statement>,
}

impl Program {
    /// Create a new [Program].
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    /// Return the statements of this program.
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Return an iterator over all rules of this program.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.statements.iter().filter_map(|statement| match statement {
            Statement::Rule(rule) => Some(rule),
            _ => None,
        })
    }

    /// Return the number of statements.
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Return whether this program has no statements.
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Append the statements of another program.
    pub fn extend(&mut self, other: Program) {
        self.statements.extend(other.statements);
    }
}

impl ProgramBuilder for Program {
    fn add(&mut self, statement: Statement) {
        self.statements.push(statement);
    }
}

impl IntoIterator for Program {
    type Item = Statement;
    type IntoIter = std::vec::IntoIter<Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.into_iter()
    }
}

impl FromIterator<Statement> for Program {
    fn from_iter<T: IntoIterator<Item = Statement>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            writeln!(f, "{statement}")?;
        }

        Ok(())
    }
}
