//! This module defines [TranslationError] and [TranslationErrorKind].
#![allow(missing_docs)]

use enum_assoc::Assoc;
use thiserror::Error;

use crate::rule_model::origin::Origin;

/// Types of errors that occur
/// while rewriting an LP^MLN program into an answer set program.
#[derive(Assoc, Error, Debug, Clone, PartialEq, Eq)]
#[func(pub fn note(&self) -> Option<&'static str>)]
#[func(pub fn code(&self) -> usize)]
pub enum TranslationErrorKind {
    /// Argument of a weight annotation is not a number
    #[error(r#"invalid weight expression: `{0}`"#)]
    #[assoc(note = "weights must be integer or decimal literals, such as 2, -0.5 or 1e-3")]
    #[assoc(code = 201)]
    InvalidWeightExpression(String),
    /// Weight formula is undefined for the given value
    #[error(r#"cannot compute weight of `&{0}` for value {1}"#)]
    #[assoc(note = "log requires a value greater than 0 and problog a value strictly between 0 and 1")]
    #[assoc(code = 202)]
    WeightComputation(String, String),
    /// Annotation with unknown name or shape
    #[error(r#"unsupported theory annotation: `&{0}`"#)]
    #[assoc(
        note = "supported annotations are query, evidence, random, pr, obs, do, weight/1, log/1 and problog/1"
    )]
    #[assoc(code = 203)]
    UnsupportedTheoryAnnotation(String),
    /// Rule carries more than one weight
    #[error(r#"rule carries more than one weight annotation"#)]
    #[assoc(note = "a rule may use at most one of weight, log and problog")]
    #[assoc(code = 204)]
    MultipleWeights,
    /// Evidence annotation with wrong arguments
    #[error(r#"malformed evidence: {0}"#)]
    #[assoc(note = "evidence is written as &evidence(atom) or &evidence(atom, false)")]
    #[assoc(code = 205)]
    MalformedEvidence(String),
    /// P-log annotation with wrong elements or probability
    #[error(r#"malformed P-log annotation: {0}"#)]
    #[assoc(code = 206)]
    MalformedPlog(String),
    /// Annotation that cannot be used as the head of a rule
    #[error(r#"`&{0}` used in rule head"#)]
    #[assoc(note = "weights are attached to the rule body")]
    #[assoc(code = 207)]
    UnexpectedTheoryHead(String),
}

/// Error that occurs while rewriting a program component
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{kind}")]
pub struct TranslationError {
    /// The type of error that occurred
    kind: TranslationErrorKind,
    /// Origin of the component that caused the error
    origin: Origin,
}

impl TranslationError {
    /// Create a new [TranslationError].
    pub fn new(kind: TranslationErrorKind, origin: Origin) -> Self {
        Self { kind, origin }
    }

    /// Return the kind of this error.
    pub fn kind(&self) -> &TranslationErrorKind {
        &self.kind
    }

    /// Return the [Origin] of the component that caused this error.
    pub fn origin(&self) -> &Origin {
        &self.origin
    }
}
