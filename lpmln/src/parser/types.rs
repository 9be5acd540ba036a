//! This module defines the types used by the parser.

use std::num::ParseIntError;

use nom::{
    error::{ErrorKind, FromExternalError},
    IResult,
};
use nom_locate::LocatedSpan;
use thiserror::Error;

/// A [LocatedSpan] over the input.
pub(crate) type Span<'a> = LocatedSpan<&'a str>;

/// An intermediate parsing result
pub(crate) type IntermediateResult<'a, T> = IResult<Span<'a>, T, LocatedParseError>;

/// The result of a parse
pub type ParseResult<T> = Result<T, LocatedParseError>;

/// A [ParseError] at a certain location
#[derive(Debug, Error)]
#[error("Parse error on line {}, column {}: {}\nat {}{}", .line, .column, .source, .fragment, format_parse_error_context(.context))]
pub struct LocatedParseError {
    #[source]
    pub(crate) source: ParseError,
    pub(crate) offset: usize,
    pub(crate) line: u32,
    pub(crate) column: usize,
    pub(crate) fragment: String,
    pub(crate) context: Vec<LocatedParseError>,
}

impl LocatedParseError {
    /// Append another [LocatedParseError] as context to this error.
    pub fn append(&mut self, other: LocatedParseError) {
        self.context.push(other)
    }

    /// Return the kind of this error.
    pub fn kind(&self) -> &ParseError {
        &self.source
    }

    /// Return the byte offset into the input at which the error occurred.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Return the line on which the error occurred.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Return the column at which the error occurred.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Return the innermost error, which usually points closest to the problem.
    pub fn innermost(&self) -> &LocatedParseError {
        match self.context.last() {
            Some(context) => context.innermost(),
            None => self,
        }
    }
}

fn format_parse_error_context(context: &[LocatedParseError]) -> String {
    let mut fragments = Vec::new();

    for error in context {
        let error_string = format!("{error}");
        for line in error_string.split('\n') {
            fragments.push(format!("{}{line}", " ".repeat(2)));
        }
    }

    if fragments.is_empty() {
        String::new()
    } else {
        format!("\nContext:\n{}", fragments.join("\n"))
    }
}

/// Errors that can occur during parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A syntax error.
    #[error("Syntax error: {0}")]
    SyntaxError(String),
    /// More input needed.
    #[error("Expected further input: {0}")]
    MissingInput(String),
    /// Integer literal does not fit into 64 bits.
    #[error("Integer out of range: {0}")]
    IntegerOutOfRange(#[from] ParseIntError),
    /// Expected a specific token.
    #[error(r#"Expected "{0}""#)]
    ExpectedToken(String),
    /// Expected a statement.
    #[error("Expected a statement (i.e., a rule, a weak constraint or a directive)")]
    ExpectedStatement,
    /// Expected a rule.
    #[error("Expected a rule")]
    ExpectedRule,
    /// Expected a weak constraint.
    #[error("Expected a weak constraint")]
    ExpectedWeakConstraint,
    /// Expected a directive.
    #[error("Expected a directive")]
    ExpectedDirective,
    /// Expected a weight.
    #[error("Expected a weight")]
    ExpectedWeight,
    /// Expected a rule head.
    #[error("Expected a rule head (i.e., a literal, an aggregate or a theory atom)")]
    ExpectedHead,
    /// Expected a body literal.
    #[error("Expected a literal or a theory atom")]
    ExpectedBodyLiteral,
    /// Expected a literal.
    #[error("Expected a literal")]
    ExpectedLiteral,
    /// Expected an atom.
    #[error("Expected an atom")]
    ExpectedAtom,
    /// Expected an aggregate.
    #[error("Expected an aggregate")]
    ExpectedAggregate,
    /// Expected a theory atom.
    #[error("Expected a theory atom")]
    ExpectedTheoryAtom,
    /// Expected a comparison operator.
    #[error("Expected a comparison operator")]
    ExpectedComparisonOperator,
    /// Expected a term.
    #[error("Expected a term")]
    ExpectedTerm,
    /// Expected a variable.
    #[error("Expected a variable")]
    ExpectedVariable,
    /// Expected a string literal.
    #[error("Expected a string literal")]
    ExpectedStringLiteral,
}

impl ParseError {
    /// Locate this error by adding a position.
    pub(crate) fn at(self, position: Span) -> LocatedParseError {
        let column = position.naive_get_utf8_column();
        let fragment = if position.is_empty() {
            String::new()
        } else {
            let beginning = String::from_utf8_lossy(position.get_line_beginning());
            let line = beginning.lines().next().unwrap_or_default();
            format!("\"{line}\"\n{}^", "-".repeat(3 + column))
        };

        LocatedParseError {
            source: self,
            offset: position.location_offset(),
            line: position.location_line(),
            column,
            fragment,
            context: Vec::new(),
        }
    }
}

impl nom::error::ParseError<Span<'_>> for LocatedParseError {
    fn from_error_kind(input: Span, kind: ErrorKind) -> Self {
        ParseError::SyntaxError(kind.description().to_string()).at(input)
    }

    fn append(input: Span, kind: ErrorKind, other: Self) -> Self {
        let mut error = ParseError::SyntaxError(kind.description().to_string()).at(input);
        error.append(other);
        error
    }
}

impl FromExternalError<Span<'_>, ParseIntError> for LocatedParseError {
    fn from_external_error(input: Span, _kind: ErrorKind, e: ParseIntError) -> Self {
        ParseError::IntegerOutOfRange(e).at(input)
    }
}
