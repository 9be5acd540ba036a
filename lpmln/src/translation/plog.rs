//! This module defines the [PlogConverter] seam
//! and its default implementation [PlogTranslation],
//! which rewrites the P-log annotations `&random`, `&pr`, `&obs` and `&do`.

use std::fmt::Debug;

use crate::rule_model::{
    components::{
        aggregate::{Aggregate, Guard},
        atom::{Atom, ComparisonOperator},
        literal::{ConditionalLiteral, Literal},
        minimize::Minimize,
        rule::{BodyLiteral, Head, Rule},
        statement::Statement,
        term::{FunctionTerm, Term, Variable},
        theory::{TheoryAtom, TheoryElement},
        IterableVariables, ProgramComponent,
    },
    origin::Origin,
};

use super::{
    error::{TranslationError, TranslationErrorKind},
    mode::DEFAULT_POWER_OF_TEN,
    annotation::WeightFormula,
    weight::annotation_weight,
};

/// Constant used as the first key of weak constraints created from `&pr`
pub const PR_KEY: &str = "pr";

/// Converter for rules whose head is a P-log annotation
pub trait PlogConverter: Debug {
    /// Convert `&random { ... } :- body.`
    fn convert_random(
        &self,
        head: &TheoryAtom,
        body: &[BodyLiteral],
    ) -> Result<Vec<Statement>, TranslationError>;

    /// Convert `&pr { ... } = p :- body.`
    fn convert_pr(
        &self,
        head: &TheoryAtom,
        body: &[BodyLiteral],
    ) -> Result<Vec<Statement>, TranslationError>;

    /// Convert `&obs { ... }.` or `&do { ... }.`
    fn convert_obs_do(&self, head: &TheoryAtom) -> Result<Vec<Statement>, TranslationError>;
}

/// Default [PlogConverter]
///
/// Probabilities of `&pr` are turned into weights `ln(p)`
/// which are scaled by `10^power_of_ten`.
#[derive(Debug, Clone, Copy)]
pub struct PlogTranslation {
    /// Exponent by which weights are scaled
    power_of_ten: i32,
}

impl Default for PlogTranslation {
    fn default() -> Self {
        Self::new(DEFAULT_POWER_OF_TEN)
    }
}

impl PlogTranslation {
    /// Create a new [PlogTranslation].
    pub fn new(power_of_ten: i32) -> Self {
        Self { power_of_ten }
    }
}

/// Create an error for a P-log annotation that cannot be converted.
fn malformed(atom: &TheoryAtom, message: String) -> TranslationError {
    TranslationError::new(TranslationErrorKind::MalformedPlog(message), *atom.origin())
}

/// Return the elements of `atom`, failing if there are none.
fn elements(atom: &TheoryAtom) -> Result<&[TheoryElement], TranslationError> {
    if atom.elements().is_empty() {
        return Err(malformed(
            atom,
            format!("`&{}` requires at least one element", atom.name()),
        ));
    }

    Ok(atom.elements())
}

/// Return the term of an element of a P-log annotation, which must denote an atom.
fn element_term<'a>(atom: &TheoryAtom, element: &'a TheoryElement) -> Result<&'a Term, TranslationError> {
    match element.terms.as_slice() {
        [term] if term.is_atom() => Ok(term),
        _ => Err(malformed(atom, format!("element `{element}` is not an atom"))),
    }
}

/// Interpret an element of a P-log annotation as a literal.
fn element_literal(atom: &TheoryAtom, element: &TheoryElement) -> Result<Literal, TranslationError> {
    let term = element_term(atom, element)?;
    Ok(Literal::positive(Atom::symbolic(term.clone())).set_origin(*atom.origin()))
}

/// Return the truth value stated by the guard of `&obs`, which defaults to true.
fn observed_value(atom: &TheoryAtom) -> Result<bool, TranslationError> {
    let Some(guard) = atom.guard() else {
        return Ok(true);
    };

    match (guard.operator, guard.term.constant_name()) {
        (ComparisonOperator::Equal, Some("true")) => Ok(true),
        (ComparisonOperator::Equal, Some("false")) => Ok(false),
        _ => Err(malformed(
            atom,
            format!(
                "expected `= true` or `= false`, found `{} {}`",
                guard.operator, guard.term
            ),
        )),
    }
}

/// Collect the distinct named variables of `body` in order of their first occurrence.
fn body_variables(body: &[BodyLiteral]) -> Vec<Variable> {
    let mut result: Vec<Variable> = Vec::new();

    for variable in body.iter().flat_map(|literal| literal.variables()) {
        if !variable.is_anonymous() && !result.contains(variable) {
            result.push(variable.clone());
        }
    }

    result
}

impl PlogConverter for PlogTranslation {
    fn convert_random(
        &self,
        head: &TheoryAtom,
        body: &[BodyLiteral],
    ) -> Result<Vec<Statement>, TranslationError> {
        let elements = elements(head)?
            .iter()
            .map(|element| {
                element_literal(head, element)
                    .map(|literal| ConditionalLiteral::new(literal, element.condition.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let choice = Aggregate::new(
            None,
            elements,
            Some(Guard::new(ComparisonOperator::Equal, Term::number(1))),
        )
        .set_origin(*head.origin());

        log::debug!("random selection over {} element(s)", choice.elements().len());

        Ok(vec![Rule::new(Head::Aggregate(choice), body.to_vec())
            .set_origin(*head.origin())
            .into()])
    }

    fn convert_pr(
        &self,
        head: &TheoryAtom,
        body: &[BodyLiteral],
    ) -> Result<Vec<Statement>, TranslationError> {
        let probability = match head.guard() {
            Some(guard) if guard.operator == ComparisonOperator::Equal => &guard.term,
            _ => {
                return Err(malformed(
                    head,
                    "expected a probability of the form `= p`".to_string(),
                ))
            }
        };

        let weight = annotation_weight(WeightFormula::Log, probability, self.power_of_ten)
            .map_err(|kind| malformed(head, format!("invalid probability, {kind}")))?;
        let globals: Term =
            FunctionTerm::tuple(body_variables(body).into_iter().map(Term::Variable)).into();

        elements(head)?
            .iter()
            .map(|element| {
                let key = element_term(head, element)?;
                let not_selected =
                    Literal::negative(Atom::symbolic(key.clone())).set_origin(*head.origin());

                let constraint_body = std::iter::once(not_selected)
                    .chain(element.condition.iter().cloned())
                    .map(BodyLiteral::Literal)
                    .chain(body.iter().cloned())
                    .collect();

                Ok(Minimize::new(
                    weight.to_term(),
                    Term::number(0),
                    vec![Term::constant(PR_KEY), key.clone(), globals.clone()],
                    constraint_body,
                )
                .set_origin(*head.origin())
                .into())
            })
            .collect()
    }

    fn convert_obs_do(&self, head: &TheoryAtom) -> Result<Vec<Statement>, TranslationError> {
        let origin: Origin = *head.origin();
        let is_observation = head.name() == "obs";
        let value = if is_observation {
            observed_value(head)?
        } else {
            true
        };

        elements(head)?
            .iter()
            .map(|element| {
                let literal = element_literal(head, element)?;
                let condition = element
                    .condition
                    .iter()
                    .cloned()
                    .map(BodyLiteral::Literal);

                let rule = if !is_observation {
                    Rule::new(Head::Literal(literal), condition.collect())
                } else if value {
                    let negated = Literal::negative(literal.into_atom()).set_origin(origin);
                    Rule::constraint(
                        std::iter::once(BodyLiteral::Literal(negated))
                            .chain(condition)
                            .collect(),
                    )
                } else {
                    Rule::constraint(
                        std::iter::once(BodyLiteral::Literal(literal))
                            .chain(condition)
                            .collect(),
                    )
                };

                Ok(rule.set_origin(origin).into())
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use test_log::test;

    use crate::{
        parser::parse_single_statement,
        rule_model::components::{
            rule::{BodyLiteral, Head},
            statement::Statement,
            theory::TheoryAtom,
        },
        translation::error::TranslationErrorKind,
    };

    use super::{PlogConverter, PlogTranslation};

    fn annotated(input: &str) -> (TheoryAtom, Vec<BodyLiteral>) {
        let Ok(Statement::Rule(rule)) = parse_single_statement(input) else {
            panic!("expected a rule");
        };

        match rule.into_parts() {
            (Head::Theory(atom), body) => (atom, body),
            _ => panic!("expected an annotation in the head"),
        }
    }

    fn strings(statements: Vec<Statement>) -> Vec<String> {
        statements.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn random_selects_one_value() {
        let (head, body) = annotated("&random { color(X,V) : hue(V) } :- ball(X).");
        let result = PlogTranslation::default()
            .convert_random(&head, &body)
            .unwrap();

        assert_eq!(
            strings(result),
            vec!["{ color(X,V): hue(V) } = 1 :- ball(X)."]
        );
    }

    #[test]
    fn pr_becomes_weak_constraint() {
        let (head, body) = annotated("&pr { color(X,red) } = \"0.5\" :- ball(X).");
        let result = PlogTranslation::new(2).convert_pr(&head, &body).unwrap();

        assert_eq!(
            strings(result),
            vec![":~ not color(X,red), ball(X). [-69@0,pr,color(X,red),(X,)]"]
        );
    }

    #[test]
    fn obs_and_do() {
        let converter = PlogTranslation::default();

        let (head, _) = annotated("&obs { a }.");
        assert_eq!(strings(converter.convert_obs_do(&head).unwrap()), vec![":- not a."]);

        let (head, _) = annotated("&obs { a; b } = false.");
        assert_eq!(
            strings(converter.convert_obs_do(&head).unwrap()),
            vec![":- a.", ":- b."]
        );

        let (head, _) = annotated("&do { a(1) }.");
        assert_eq!(strings(converter.convert_obs_do(&head).unwrap()), vec!["a(1)."]);

        let (head, _) = annotated("&obs { -fly(tweety) }.");
        assert_eq!(
            strings(converter.convert_obs_do(&head).unwrap()),
            vec![":- not -fly(tweety)."]
        );
    }

    #[test]
    fn malformed_annotations() {
        let converter = PlogTranslation::default();
        let kind = |result: Result<Vec<Statement>, crate::translation::error::TranslationError>| {
            result.map_err(|error| error.kind().clone())
        };

        let (head, body) = annotated("&random :- b.");
        assert!(matches!(
            kind(converter.convert_random(&head, &body)),
            Err(TranslationErrorKind::MalformedPlog(_))
        ));

        let (head, body) = annotated("&pr { a } :- b.");
        assert!(matches!(
            kind(converter.convert_pr(&head, &body)),
            Err(TranslationErrorKind::MalformedPlog(_))
        ));

        let (head, body) = annotated("&pr { a } = \"1.5x\" :- b.");
        assert!(matches!(
            kind(converter.convert_pr(&head, &body)),
            Err(TranslationErrorKind::MalformedPlog(_))
        ));

        let (head, _) = annotated("&obs { 1 }.");
        assert!(matches!(
            kind(converter.convert_obs_do(&head)),
            Err(TranslationErrorKind::MalformedPlog(_))
        ));

        let (head, _) = annotated("&obs { a } = maybe.");
        assert!(matches!(
            kind(converter.convert_obs_do(&head)),
            Err(TranslationErrorKind::MalformedPlog(_))
        ));
    }
}
