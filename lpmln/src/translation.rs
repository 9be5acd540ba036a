//! This module defines [RuleTransformer],
//! which rewrites the statements of an LP^MLN program one after the other.

pub mod annotation;
pub(crate) mod classify;
pub mod context;
pub(crate) mod encoding;
pub mod error;
pub mod mode;
pub mod plog;
pub mod weight;

use crate::rule_model::{
    components::{
        rule::{BodyLiteral, Head, Rule},
        statement::Statement,
        theory::TheoryAtom,
        ProgramComponent,
    },
    program::{Program, ProgramBuilder},
    transform::{walk_body, Transformer},
};

use self::{
    annotation::TheoryKind,
    classify::RuleClassifier,
    context::{RuleContext, RuleWeight},
    encoding::encode_rule,
    error::{TranslationError, TranslationErrorKind},
    mode::TranslationMode,
    plog::{PlogConverter, PlogTranslation},
};

/// Result of rewriting a single statement
///
/// `statement` takes the place of the input statement,
/// `preceding` has to be inserted in front of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleRewrite {
    /// Additional statements in the order in which they were produced
    pub preceding: Vec<Statement>,
    /// Statement that replaces the input statement
    pub statement: Statement,
}

impl RuleRewrite {
    /// Create a rewrite that keeps the statement as it is.
    pub fn unchanged(statement: Statement) -> Self {
        Self {
            preceding: Vec::new(),
            statement,
        }
    }

    /// Split a non-empty list of statements into a [RuleRewrite],
    /// where the last statement takes the place of the input.
    fn from_statements(mut statements: Vec<Statement>) -> Option<Self> {
        let statement = statements.pop()?;

        Some(Self {
            preceding: statements,
            statement,
        })
    }

    /// Return all statements of this rewrite in output order.
    pub fn into_statements(self) -> impl Iterator<Item = Statement> {
        self.preceding
            .into_iter()
            .chain(std::iter::once(self.statement))
    }
}

/// Translation session that rewrites LP^MLN rules in the penalty way
///
/// Every rule that is encoded or kept as a hard rule
/// receives the next index of this session,
/// which distinguishes the weak constraints of different rules.
#[derive(Debug)]
pub struct RuleTransformer<C: PlogConverter = PlogTranslation> {
    /// Configuration
    mode: TranslationMode,
    /// Index of the next rule
    rule_index: usize,
    /// Converter for P-log annotations
    converter: C,
}

impl RuleTransformer {
    /// Create a new [RuleTransformer] using the default [PlogTranslation].
    pub fn new(mode: TranslationMode) -> Self {
        Self::with_converter(mode, PlogTranslation::new(mode.power_of_ten()))
    }
}

impl<C: PlogConverter> RuleTransformer<C> {
    /// Create a new [RuleTransformer] using the given [PlogConverter].
    pub fn with_converter(mode: TranslationMode, converter: C) -> Self {
        Self {
            mode,
            rule_index: 0,
            converter,
        }
    }

    /// Return the index that will be assigned to the next rule.
    pub fn rule_index(&self) -> usize {
        self.rule_index
    }

    /// Return the configuration of this session.
    pub fn mode(&self) -> &TranslationMode {
        &self.mode
    }

    /// Rewrite a single [Statement].
    ///
    /// Weak constraints and directives are not changed.
    pub fn translate_statement(
        &mut self,
        statement: Statement,
    ) -> Result<RuleRewrite, TranslationError> {
        match statement {
            Statement::Rule(rule) => self.translate_rule(rule),
            statement => Ok(RuleRewrite::unchanged(statement)),
        }
    }

    /// Rewrite a single [Rule].
    pub fn translate_rule(&mut self, rule: Rule) -> Result<RuleRewrite, TranslationError> {
        if !rule.head().is_theory() && rule.body().is_empty() {
            return Ok(RuleRewrite::unchanged(rule.into()));
        }

        let original = rule.clone();
        let origin = *rule.origin();
        let (head, body) = rule.into_parts();

        let mut context = RuleContext::new(self.rule_index);
        let mut classifier = RuleClassifier::new(&mut context, self.mode.power_of_ten());
        let head = classifier.transform_head(head)?;
        let body = walk_body(&mut classifier, body)?;

        let statements = match context.theory_kind() {
            Some(TheoryKind::Query) => {
                log::debug!("keeping query rule");
                return Ok(RuleRewrite::unchanged(original.into()));
            }
            Some(TheoryKind::Evidence) => {
                let evidence = match (context.evidence.take(), head) {
                    (Some(evidence), _) => evidence,
                    (None, Head::Literal(literal)) => literal,
                    (None, head) => {
                        return Err(TranslationError::new(
                            TranslationErrorKind::MalformedEvidence(format!(
                                "cannot use `{head}` as evidence"
                            )),
                            *head.origin(),
                        ))
                    }
                };
                log::debug!("evidence {evidence} becomes an integrity constraint");

                let constraint =
                    Rule::constraint(vec![BodyLiteral::Literal(evidence)]).set_origin(origin);
                return Ok(RuleRewrite::unchanged(constraint.into()));
            }
            Some(kind @ (TheoryKind::Random | TheoryKind::Pr)) => {
                let annotation = plog_head(kind, &head)?;
                log::debug!("converting &{} rule", kind.name());

                if kind == TheoryKind::Random {
                    self.converter.convert_random(annotation, &body)?
                } else {
                    self.converter.convert_pr(annotation, &body)?
                }
            }
            Some(kind @ (TheoryKind::Obs | TheoryKind::Do)) => {
                let annotation = plog_head(kind, &head)?;
                if !body.is_empty() {
                    log::warn!("ignoring the body of the &{} rule {original}", kind.name());
                }

                self.converter.convert_obs_do(annotation)?
            }
            None if context.weight() == RuleWeight::Hard && !self.mode.translate_hard_rules() => {
                log::trace!("rule {}: keeping hard rule", self.rule_index);
                self.rule_index += 1;

                return Ok(RuleRewrite::unchanged(original.into()));
            }
            None => {
                let statements = encode_rule(&self.mode, &context, origin, head, body)?;
                self.rule_index += 1;

                statements
            }
        };

        RuleRewrite::from_statements(statements).ok_or_else(|| {
            TranslationError::new(
                TranslationErrorKind::MalformedPlog(format!(
                    "conversion of `{original}` produced no statements"
                )),
                origin,
            )
        })
    }

    /// Rewrite every statement of `program`
    /// and add the results to `builder` in program order.
    ///
    /// The translation stops at the first error.
    pub fn translate_program<B: ProgramBuilder>(
        &mut self,
        program: Program,
        builder: &mut B,
    ) -> Result<(), TranslationError> {
        for statement in program {
            for statement in self.translate_statement(statement)?.into_statements() {
                builder.add(statement);
            }
        }

        Ok(())
    }
}

/// Return the annotation heading a P-log rule.
fn plog_head(kind: TheoryKind, head: &Head) -> Result<&TheoryAtom, TranslationError> {
    match head {
        Head::Theory(atom) if atom.name() == kind.name() => Ok(atom),
        head => Err(TranslationError::new(
            TranslationErrorKind::MalformedPlog(format!(
                "`&{}` must be the head of its rule",
                kind.name()
            )),
            *head.origin(),
        )),
    }
}

#[cfg(test)]
mod test {
    use test_log::test;

    use crate::{
        parser::{parse_program, parse_single_statement},
        rule_model::program::Program,
        translation::{error::TranslationErrorKind, mode::TranslationMode},
    };

    use super::RuleTransformer;

    fn translate(input: &str, mode: TranslationMode) -> (String, usize) {
        let program = parse_program(input).unwrap();
        let mut transformer = RuleTransformer::new(mode);
        let mut output = Program::default();

        transformer.translate_program(program, &mut output).unwrap();

        (output.to_string(), transformer.rule_index())
    }

    #[test]
    fn facts_and_hard_rules_are_kept() {
        let (output, index) = translate("a.\nb :- a.\n", TranslationMode::default());

        assert_eq!(output, "a.\nb :- a.\n");
        assert_eq!(index, 1);
    }

    #[test]
    fn hard_rules_are_translated_on_request() {
        let mode = TranslationMode::default().with_translate_hard_rules(true);
        let (output, index) = translate("b :- a.\n", mode);

        assert_eq!(output, "{ b } :- a.\n:~ not b, a. [1@1,0,()]\n");
        assert_eq!(index, 1);
    }

    #[test]
    fn soft_rules_use_increasing_indices() {
        let mode = TranslationMode::default().with_power_of_ten(0);
        let (output, index) = translate("1 : a.\n2 : b(X) :- c(X).\n", mode);

        assert_eq!(
            output,
            "{ a } :- #true.\n\
             :~ not a, #true. [1@0,0,()]\n\
             { b(X) } :- c(X), #true.\n\
             :~ not b(X), c(X), #true. [2@0,1,(X,)]\n"
        );
        assert_eq!(index, 2);
    }

    #[test]
    fn query_and_evidence() {
        let (output, index) = translate(
            "&query(a) :- b.\n&evidence(a).\n&evidence(b, false) :- c.\n",
            TranslationMode::default(),
        );

        assert_eq!(output, "&query(a) :- b.\n:- not a.\n:- b.\n");
        assert_eq!(index, 0);
    }

    #[test]
    fn plog_rules() {
        let (output, index) = translate(
            "&random { a; b }.\n&obs { a }.\n&do { b }.\n",
            TranslationMode::default(),
        );

        assert_eq!(output, "{ a; b } = 1.\n:- not a.\nb.\n");
        assert_eq!(index, 0);
    }

    #[test]
    fn weak_constraints_and_directives_pass_through() {
        let (output, index) = translate(
            ":~ a. [1@2]\n#show a/0.\n",
            TranslationMode::default().with_translate_hard_rules(true),
        );

        assert_eq!(output, ":~ a. [1@2]\n#show a/0.\n");
        assert_eq!(index, 0);
    }

    #[test]
    fn rewrite_keeps_last_statement_in_place() {
        let mut transformer = RuleTransformer::new(TranslationMode::default().with_use_unsat(true));
        let rewrite = transformer
            .translate_statement(parse_single_statement("3 : a :- b.").unwrap())
            .unwrap();

        assert_eq!(rewrite.preceding.len(), 2);
        assert_eq!(
            rewrite.statement.to_string(),
            ":~ unsat(0,300000,()). [300000@0,0,()]"
        );
    }

    #[test]
    fn errors_abort_translation() {
        let program = parse_program("a :- b.\nc :- d, &color(red).\n").unwrap();
        let mut transformer = RuleTransformer::new(TranslationMode::default());
        let mut output = Program::default();

        let error = transformer
            .translate_program(program, &mut output)
            .unwrap_err();

        assert_eq!(
            error.kind(),
            &TranslationErrorKind::UnsupportedTheoryAnnotation("color/1".to_string())
        );
        assert_eq!(output.len(), 1);
    }

    #[test]
    fn plog_annotation_outside_of_head() {
        let program = parse_program("a :- &random { b }.\n").unwrap();
        let mut transformer = RuleTransformer::new(TranslationMode::default());

        let error = transformer
            .translate_program(program, &mut Program::default())
            .unwrap_err();
        assert!(matches!(error.kind(), TranslationErrorKind::MalformedPlog(_)));
    }
}
