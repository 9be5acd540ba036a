//! This module defines [RuleClassifier],
//! which collects the weight, annotations and variables of a single rule.

use crate::rule_model::{
    components::{
        atom::Atom,
        body_aggregate::BodyAggregateElement,
        literal::{ConditionalLiteral, Literal, Sign},
        rule::{BodyLiteral, Head},
        term::{Term, Variable},
        theory::TheoryAtom,
        ProgramComponent,
    },
    transform::{
        walk_body_aggregate_element, walk_body_literal, walk_conditional_literal, walk_head,
        Transformer,
    },
};

use super::{
    annotation::{TheoryKind, WeightFormula},
    context::{RuleContext, RuleWeight},
    error::{TranslationError, TranslationErrorKind},
    weight::annotation_weight,
};

/// Result of classifying a [TheoryAtom]
#[derive(Debug)]
enum Annotation {
    /// Annotation stays in place and is handled by the rule-level translation
    Keep(TheoryAtom),
    /// Annotation was consumed and is replaced by the given literal
    Replace(Literal),
}

/// Visitor that fills a [RuleContext] while traversing the head and body of a rule
///
/// Variables are recorded in order of their first occurrence.
/// Variables inside of conditional literals and aggregate elements are local
/// and only recorded if they also occur outside of them.
/// Theory atoms are classified but not traversed,
/// so variables inside of annotations are not recorded.
#[derive(Debug)]
pub(crate) struct RuleClassifier<'c> {
    /// Context of the rule
    context: &'c mut RuleContext,
    /// Exponent by which weights are scaled
    power_of_ten: i32,
    /// Number of enclosing local scopes
    local_depth: usize,
}

impl<'c> RuleClassifier<'c> {
    /// Create a new [RuleClassifier].
    pub(crate) fn new(context: &'c mut RuleContext, power_of_ten: i32) -> Self {
        Self {
            context,
            power_of_ten,
            local_depth: 0,
        }
    }

    /// Run `visit` with variables treated as local.
    fn local<T>(
        &mut self,
        visit: impl FnOnce(&mut Self) -> Result<T, TranslationError>,
    ) -> Result<T, TranslationError> {
        self.local_depth += 1;
        let result = visit(self);
        self.local_depth -= 1;

        result
    }

    fn classify(&mut self, atom: TheoryAtom) -> Result<Annotation, TranslationError> {
        let origin = *atom.origin();

        if let Some(kind) = TheoryKind::from_name(atom.name()) {
            log::trace!("found annotation &{}", kind.name());
            self.context.theory_kind = Some(kind);

            if kind == TheoryKind::Evidence {
                let literal = evidence_literal(&atom)?;
                self.context.evidence = Some(literal.clone());

                return Ok(Annotation::Replace(literal));
            }

            return Ok(Annotation::Keep(atom));
        }

        let unsupported = || {
            TranslationError::new(
                TranslationErrorKind::UnsupportedTheoryAnnotation(format!(
                    "{}/{}",
                    atom.name(),
                    atom.arguments().len()
                )),
                origin,
            )
        };

        let formula = WeightFormula::from_name(atom.name()).ok_or_else(unsupported)?;
        let [argument] = atom.arguments() else {
            return Err(unsupported());
        };

        if matches!(self.context.weight, RuleWeight::Soft(_)) {
            return Err(TranslationError::new(
                TranslationErrorKind::MultipleWeights,
                origin,
            ));
        }

        let weight = annotation_weight(formula, argument, self.power_of_ten)
            .map_err(|kind| TranslationError::new(kind, origin))?;
        log::trace!("found weight {weight} in &{}", formula.name());
        self.context.weight = RuleWeight::Soft(weight);

        Ok(Annotation::Replace(
            Literal::boolean(true).set_origin(origin),
        ))
    }
}

/// Create the literal stated by `&evidence(atom)` or `&evidence(atom, false)`.
///
/// The literal is the one that must not hold,
/// i.e. `not atom` unless the evidence claims that `atom` is false.
fn evidence_literal(atom: &TheoryAtom) -> Result<Literal, TranslationError> {
    let malformed = |message: &str| {
        TranslationError::new(
            TranslationErrorKind::MalformedEvidence(message.to_string()),
            *atom.origin(),
        )
    };

    let (evidence, value) = match atom.arguments() {
        [evidence] => (evidence, None),
        [evidence, value] => (evidence, Some(value)),
        _ => return Err(malformed("expected one or two arguments")),
    };

    if !evidence.is_atom() {
        return Err(malformed("first argument must be an atom"));
    }

    let sign = match value.and_then(Term::constant_name) {
        Some("false") => Sign::NoSign,
        _ => Sign::Negation,
    };

    Ok(Literal::new(sign, Atom::symbolic(evidence.clone())).set_origin(*atom.origin()))
}

impl Transformer for RuleClassifier<'_> {
    type Error = TranslationError;

    fn transform_head(&mut self, head: Head) -> Result<Head, Self::Error> {
        match head {
            Head::Theory(atom) => {
                if WeightFormula::from_name(atom.name()).is_some() {
                    return Err(TranslationError::new(
                        TranslationErrorKind::UnexpectedTheoryHead(atom.name().to_string()),
                        *atom.origin(),
                    ));
                }

                Ok(match self.classify(atom)? {
                    Annotation::Keep(atom) => Head::Theory(atom),
                    Annotation::Replace(literal) => Head::Literal(literal),
                })
            }
            head => walk_head(self, head),
        }
    }

    fn transform_body_literal(&mut self, literal: BodyLiteral) -> Result<BodyLiteral, Self::Error> {
        match literal {
            BodyLiteral::Theory(atom) => Ok(match self.classify(atom)? {
                Annotation::Keep(atom) => BodyLiteral::Theory(atom),
                Annotation::Replace(literal) => BodyLiteral::Literal(literal),
            }),
            literal => walk_body_literal(self, literal),
        }
    }

    fn transform_conditional_literal(
        &mut self,
        literal: ConditionalLiteral,
    ) -> Result<ConditionalLiteral, Self::Error> {
        self.local(|classifier| walk_conditional_literal(classifier, literal))
    }

    fn transform_body_aggregate_element(
        &mut self,
        element: BodyAggregateElement,
    ) -> Result<BodyAggregateElement, Self::Error> {
        self.local(|classifier| walk_body_aggregate_element(classifier, element))
    }

    fn transform_variable(&mut self, variable: Variable) -> Result<Variable, Self::Error> {
        if self.local_depth == 0 {
            self.context.add_variable(&variable);
        }

        Ok(variable)
    }
}

#[cfg(test)]
mod test {
    use test_log::test;

    use crate::{
        parser::parse_single_statement,
        rule_model::{
            components::{rule::Rule, statement::Statement},
            transform::Transformer,
        },
        translation::{
            annotation::TheoryKind,
            context::{RuleContext, RuleWeight},
            error::TranslationErrorKind,
        },
    };

    use super::RuleClassifier;

    fn rule(input: &str) -> Rule {
        match parse_single_statement(input) {
            Ok(Statement::Rule(rule)) => rule,
            other => panic!("expected a rule, found {other:?}"),
        }
    }

    fn classify(input: &str) -> Result<(RuleContext, Rule), TranslationErrorKind> {
        let mut context = RuleContext::new(0);
        let result = RuleClassifier::new(&mut context, 0)
            .transform_rule(rule(input))
            .map_err(|error| error.kind().clone())?;

        Ok((context, result))
    }

    #[test]
    fn collect_variables_once() {
        let (context, _) = classify("2 : p(X) :- q(X,Y), r(Y,_), X < Z.").unwrap();

        let names = context
            .global_variables()
            .iter()
            .map(|variable| variable.name())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["X", "Y", "Z"]);
    }

    #[test]
    fn local_variables_are_not_collected() {
        let names = |input: &str| {
            let (context, _) = classify(input).unwrap();
            context
                .global_variables()
                .iter()
                .map(|variable| variable.name().to_string())
                .collect::<Vec<_>>()
        };

        assert_eq!(names("1 : a :- #count { X : p(X) } >= 2."), Vec::<String>::new());
        assert_eq!(names("1 : a(Y) :- b(Y), #sum { X,Y : p(X) } > N, n(N)."), vec!["Y", "N"]);
        assert_eq!(names("1 : a :- b(X) : c(X)."), Vec::<String>::new());
        assert_eq!(names("1 : { p(X) : q(X) } = 1 :- r(Z)."), vec!["Z"]);
        assert_eq!(names("1 : { p(X) } :- q(X)."), vec!["X"]);
    }

    #[test]
    fn weight_is_replaced_by_true() {
        let (context, result) = classify("-3 : a :- b.").unwrap();

        assert!(matches!(context.weight(), RuleWeight::Soft(weight) if weight.to_integer() == -3));
        assert_eq!(result.to_string(), "a :- b, #true.");
    }

    #[test]
    fn annotations_are_recorded() {
        let (context, result) = classify("&query(p(X)) :- q(X).").unwrap();
        assert_eq!(context.theory_kind(), Some(TheoryKind::Query));
        assert_eq!(result.to_string(), "&query(p(X)) :- q(X).");

        let (context, _) = classify("&random { h(X) } :- p(X).").unwrap();
        assert_eq!(context.theory_kind(), Some(TheoryKind::Random));
        assert_eq!(context.global_variables().len(), 1);
    }

    #[test]
    fn evidence_signs() {
        let (context, result) = classify("&evidence(p(a)).").unwrap();
        assert_eq!(context.theory_kind(), Some(TheoryKind::Evidence));
        assert_eq!(result.to_string(), "not p(a).");

        let (_, result) = classify("&evidence(p(a), false).").unwrap();
        assert_eq!(result.to_string(), "p(a).");

        let (_, result) = classify("&evidence(p(a), true).").unwrap();
        assert_eq!(result.to_string(), "not p(a).");

        let (_, result) = classify("&evidence(-fly(tweety)).").unwrap();
        assert_eq!(result.to_string(), "not -fly(tweety).");

        let (_, result) = classify("&evidence(-fly(tweety), false).").unwrap();
        assert_eq!(result.to_string(), "-fly(tweety).");

        assert!(matches!(
            classify("&evidence(1)."),
            Err(TranslationErrorKind::MalformedEvidence(_))
        ));
    }

    #[test]
    fn invalid_annotations() {
        assert_eq!(
            classify("a :- b, &weight(1), &log(\"0.5\")."),
            Err(TranslationErrorKind::MultipleWeights)
        );
        assert_eq!(
            classify("a :- b, &color(red)."),
            Err(TranslationErrorKind::UnsupportedTheoryAnnotation(
                "color/1".to_string()
            ))
        );
        assert_eq!(
            classify("a :- b, &weight(1, 2)."),
            Err(TranslationErrorKind::UnsupportedTheoryAnnotation(
                "weight/2".to_string()
            ))
        );
        assert_eq!(
            classify("&weight(1) :- b."),
            Err(TranslationErrorKind::UnexpectedTheoryHead("weight".to_string()))
        );
        assert!(matches!(
            classify("a :- &problog(\"1\")."),
            Err(TranslationErrorKind::WeightComputation(_, _))
        ));
    }
}
