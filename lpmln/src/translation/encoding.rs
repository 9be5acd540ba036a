//! This module implements the penalty encoding of weighted rules.
//!
//! A rule `w : H :- B` is either rewritten with an explicit violation atom
//!
//! ```text
//! unsat(i,w,(X1,...,Xn)) :- not H, B.
//! H :- not unsat(i,w,(X1,...,Xn)), B.
//! :~ unsat(i,w,(X1,...,Xn)). [w@0,i,(X1,...,Xn)]
//! ```
//!
//! or, by default, into a choice rule together with a weak constraint
//!
//! ```text
//! { H } :- B.
//! :~ not H, B. [w@0,i,(X1,...,Xn)]
//! ```
//!
//! where `i` is the index of the rule and `X1, ..., Xn` are its variables.
//! Hard rules are penalized with weight `1` at priority `1`.

use crate::rule_model::{
    components::{
        aggregate::Aggregate,
        atom::Atom,
        literal::{ConditionalLiteral, Literal},
        minimize::Minimize,
        rule::{BodyLiteral, Head, Rule},
        statement::Statement,
        term::{FunctionTerm, Term},
        ProgramComponent,
    },
    origin::Origin,
};

use super::{
    context::{RuleContext, RuleWeight},
    error::{TranslationError, TranslationErrorKind},
    mode::TranslationMode,
};

/// Name of the atom marking violated rules
pub const UNSAT_PREDICATE: &str = "unsat";
/// Name of the atom guarding soft constraints for two solver calls
pub const EXT_HELPER: &str = "ext_helper";
/// Weight argument of `unsat` atoms of hard rules
pub const HARD_WEIGHT: &str = "alpha";

/// Weight, priority and keys of the weak constraint of a rule
#[derive(Debug)]
struct ConstraintParameters {
    /// Index of the rule
    index: Term,
    /// Tuple of the variables of the rule
    globals: Term,
    /// Weight argument of the `unsat` atom
    weight: Term,
    /// Weight of the weak constraint
    constraint_weight: Term,
    /// Priority of the weak constraint
    priority: i64,
}

impl ConstraintParameters {
    fn new(context: &RuleContext) -> Self {
        let index = Term::number(context.rule_index() as i64);
        let globals = Term::Function(FunctionTerm::tuple(
            context.global_variables().iter().cloned().map(Term::Variable),
        ));

        match context.weight() {
            RuleWeight::Hard => Self {
                index,
                globals,
                weight: Term::string(HARD_WEIGHT),
                constraint_weight: Term::number(1),
                priority: 1,
            },
            RuleWeight::Soft(weight) => Self {
                index,
                globals,
                weight: weight.to_term(),
                constraint_weight: weight.to_term(),
                priority: 0,
            },
        }
    }

    fn weak_constraint(&self, body: Vec<BodyLiteral>, origin: Origin) -> Statement {
        Minimize::new(
            self.constraint_weight.clone(),
            Term::number(self.priority),
            vec![self.index.clone(), self.globals.clone()],
            body,
        )
        .set_origin(origin)
        .into()
    }
}

/// Encode the classified rule `head :- body` according to `mode`.
///
/// Returns between one and three statements that replace the rule.
pub(crate) fn encode_rule(
    mode: &TranslationMode,
    context: &RuleContext,
    origin: Origin,
    head: Head,
    mut body: Vec<BodyLiteral>,
) -> Result<Vec<Statement>, TranslationError> {
    let parameters = ConstraintParameters::new(context);
    let head_origin = *head.origin();

    let not_head = match &head {
        Head::Aggregate(aggregate) if !aggregate.is_guarded() => {
            log::debug!("rule {}: choice without bounds is kept", context.rule_index());
            return Ok(vec![Rule::new(head, body).set_origin(origin).into()]);
        }
        Head::Aggregate(aggregate) => {
            Literal::negative(Atom::Aggregate(aggregate.clone())).set_origin(head_origin)
        }
        Head::Literal(literal) => Literal::negative(literal.atom().clone()).set_origin(head_origin),
        Head::Theory(atom) => {
            return Err(TranslationError::new(
                TranslationErrorKind::UnexpectedTheoryHead(atom.name().to_string()),
                *atom.origin(),
            ))
        }
    };

    if mode.use_unsat() {
        log::debug!(
            "rule {}: encoding {} head with unsat atom",
            context.rule_index(),
            head.kind().name()
        );
        return Ok(encode_unsat(&parameters, origin, head, not_head, body));
    }

    let mut statements = Vec::new();

    let choice = match head {
        Head::Aggregate(aggregate) => {
            Some(Aggregate::choice(aggregate.elements).set_origin(aggregate.origin))
        }
        Head::Literal(literal) if literal.atom().is_false() => None,
        Head::Literal(literal) => Some(
            Aggregate::choice(vec![ConditionalLiteral::new(literal, vec![])])
                .set_origin(head_origin),
        ),
        Head::Theory(_) => None,
    };

    if let Some(choice) = choice {
        statements.push(Rule::new(Head::Aggregate(choice), body.clone()).set_origin(origin));
        body.insert(0, BodyLiteral::Literal(not_head));
    }

    if mode.two_solve_calls() && parameters.priority == 0 {
        let helper = Literal::positive(Atom::symbolic(Term::constant(EXT_HELPER)));
        body.insert(0, BodyLiteral::Literal(helper.set_origin(head_origin)));
    }

    log::debug!(
        "rule {}: encoding with {} choice rule(s) and a weak constraint",
        context.rule_index(),
        statements.len()
    );

    let mut result = statements
        .into_iter()
        .map(Statement::Rule)
        .collect::<Vec<_>>();
    result.push(parameters.weak_constraint(body, origin));

    Ok(result)
}

/// Encoding with an explicit `unsat` atom marking the violation of the rule
fn encode_unsat(
    parameters: &ConstraintParameters,
    origin: Origin,
    head: Head,
    not_head: Literal,
    body: Vec<BodyLiteral>,
) -> Vec<Statement> {
    let unsat = Atom::symbolic(Term::function(
        UNSAT_PREDICATE,
        vec![
            parameters.index.clone(),
            parameters.weight.clone(),
            parameters.globals.clone(),
        ],
    ));
    let unsat_head = Literal::positive(unsat.clone()).set_origin(*not_head.origin());
    let not_unsat = Literal::negative(unsat).set_origin(*not_head.origin());

    let violation_body = std::iter::once(BodyLiteral::Literal(not_head))
        .chain(body.iter().cloned())
        .collect();
    let violation = Rule::new(Head::Literal(unsat_head.clone()), violation_body).set_origin(origin);

    let satisfaction_body = std::iter::once(BodyLiteral::Literal(not_unsat))
        .chain(body)
        .collect();
    let satisfaction = Rule::new(head, satisfaction_body).set_origin(origin);

    let penalty = parameters.weak_constraint(vec![BodyLiteral::Literal(unsat_head)], origin);

    vec![violation.into(), satisfaction.into(), penalty]
}

#[cfg(test)]
mod test {
    use test_log::test;

    use crate::{
        parser::parse_single_statement,
        rule_model::{
            components::{rule::Rule, statement::Statement, ProgramComponent},
            transform::Transformer,
        },
        translation::{classify::RuleClassifier, context::RuleContext, mode::TranslationMode},
    };

    use super::encode_rule;

    fn encode(input: &str, mode: TranslationMode) -> Vec<String> {
        let Ok(Statement::Rule(rule)) = parse_single_statement(input) else {
            panic!("expected a rule");
        };

        let mut context = RuleContext::new(3);
        let rule: Rule = RuleClassifier::new(&mut context, mode.power_of_ten())
            .transform_rule(rule)
            .unwrap();
        let origin = *rule.origin();
        let (head, body) = rule.into_parts();

        encode_rule(&mode, &context, origin, head, body)
            .unwrap()
            .iter()
            .map(|statement| statement.to_string())
            .collect()
    }

    #[test]
    fn compact_soft_rule() {
        let result = encode("2 : p(X) :- q(X).", TranslationMode::default());

        assert_eq!(
            result,
            vec![
                "{ p(X) } :- q(X), #true.",
                ":~ not p(X), q(X), #true. [200000@0,3,(X,)]",
            ]
        );
    }

    #[test]
    fn compact_hard_rule() {
        let mode = TranslationMode::default().with_power_of_ten(0);
        let result = encode("a :- b.", mode);

        assert_eq!(result, vec!["{ a } :- b.", ":~ not a, b. [1@1,3,()]"]);
    }

    #[test]
    fn compact_constraint() {
        let mode = TranslationMode::default().with_power_of_ten(0);
        let result = encode("-1 : :- a(X), b(X).", mode);

        assert_eq!(result, vec![":~ a(X), b(X), #true. [-1@0,3,(X,)]"]);
    }

    #[test]
    fn compact_bounded_aggregate() {
        let mode = TranslationMode::default().with_power_of_ten(0);
        let result = encode("5 : 1 { a; b } 1 :- c.", mode);

        assert_eq!(
            result,
            vec![
                "{ a; b } :- c, #true.",
                ":~ not 1 <= { a; b } <= 1, c, #true. [5@0,3,()]",
            ]
        );
    }

    #[test]
    fn unbounded_choice_is_kept() {
        let result = encode("5 : { a; b } :- c.", TranslationMode::default());

        assert_eq!(result, vec!["{ a; b } :- c, #true."]);
    }

    #[test]
    fn unsat_encoding() {
        let mode = TranslationMode::default()
            .with_use_unsat(true)
            .with_power_of_ten(0);

        let soft = encode("2 : p(X) :- q(X).", mode);
        assert_eq!(
            soft,
            vec![
                "unsat(3,2,(X,)) :- not p(X), q(X), #true.",
                "p(X) :- not unsat(3,2,(X,)), q(X), #true.",
                ":~ unsat(3,2,(X,)). [2@0,3,(X,)]",
            ]
        );

        let hard = encode("a.", mode);
        assert_eq!(
            hard,
            vec![
                "unsat(3,\"alpha\",()) :- not a.",
                "a :- not unsat(3,\"alpha\",()).",
                ":~ unsat(3,\"alpha\",()). [1@1,3,()]",
            ]
        );
    }

    #[test]
    fn unsat_encoding_of_aggregate_heads() {
        let mode = TranslationMode::default()
            .with_use_unsat(true)
            .with_power_of_ten(0);

        assert_eq!(
            encode("3 : 1 { a; b } 2 :- c.", mode),
            vec![
                "unsat(3,3,()) :- not 1 <= { a; b } <= 2, c, #true.",
                "1 <= { a; b } <= 2 :- not unsat(3,3,()), c, #true.",
                ":~ unsat(3,3,()). [3@0,3,()]",
            ]
        );
        assert_eq!(
            encode("4 : { a; b } :- c.", mode),
            vec!["{ a; b } :- c, #true."]
        );
    }

    #[test]
    fn unsat_encoding_of_constraints() {
        let mode = TranslationMode::default()
            .with_use_unsat(true)
            .with_power_of_ten(0);

        assert_eq!(
            encode("5 : :- a, b.", mode),
            vec![
                "unsat(3,5,()) :- not #false, a, b, #true.",
                ":- not unsat(3,5,()), a, b, #true.",
                ":~ unsat(3,5,()). [5@0,3,()]",
            ]
        );
    }

    #[test]
    fn local_variables_are_not_keys() {
        let mode = TranslationMode::default().with_power_of_ten(0);

        assert_eq!(
            encode("1 : a :- #count { X : p(X) } >= 2.", mode),
            vec![
                "{ a } :- #count { X: p(X) } >= 2, #true.",
                ":~ not a, #count { X: p(X) } >= 2, #true. [1@0,3,()]",
            ]
        );
        assert_eq!(
            encode("1 : a(Y) :- b(X) : c(X,Y); d(Y).", mode),
            vec![
                "{ a(Y) } :- b(X): c(X,Y); d(Y), #true.",
                ":~ not a(Y), b(X): c(X,Y); d(Y), #true. [1@0,3,(Y,)]",
            ]
        );
    }

    #[test]
    fn classical_negation_and_arithmetic() {
        let mode = TranslationMode::default().with_power_of_ten(0);

        assert_eq!(
            encode("2 : -fly(X) :- penguin(X).", mode),
            vec![
                "{ -fly(X) } :- penguin(X), #true.",
                ":~ not -fly(X), penguin(X), #true. [2@0,3,(X,)]",
            ]
        );
        assert_eq!(
            encode("2 : p(X+1) :- p(X), X < 3.", mode),
            vec![
                "{ p(X+1) } :- p(X), X<3, #true.",
                ":~ not p(X+1), p(X), X<3, #true. [2@0,3,(X,)]",
            ]
        );
    }

    #[test]
    fn two_solve_calls_guard_soft_rules() {
        let mode = TranslationMode::default()
            .with_two_solve_calls(true)
            .with_power_of_ten(0);

        let soft = encode("2 : a :- b.", mode);
        assert_eq!(soft[1], ":~ ext_helper, not a, b, #true. [2@0,3,()]");

        let hard = encode("a :- b.", mode);
        assert_eq!(hard[1], ":~ not a, b. [1@1,3,()]");
    }
}
