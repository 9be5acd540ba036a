use lpmln::{
    api::{load_string, translate, translate_string},
    rule_model::{
        components::{statement::Statement, term::Term},
        program::Program,
    },
    translation::error::TranslationErrorKind,
    Error, RuleTransformer, TranslationMode,
};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use test_log::test;

/// Shapes of rules used to generate programs
#[derive(Debug, Clone, Copy)]
enum Shape {
    Atom,
    Constraint,
    BoundedChoice,
    UnboundedChoice,
    Hard,
}

impl Arbitrary for Shape {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[
            Shape::Atom,
            Shape::Constraint,
            Shape::BoundedChoice,
            Shape::UnboundedChoice,
            Shape::Hard,
        ])
        .unwrap()
    }
}

impl Shape {
    fn rule(&self, index: usize, weight: i8) -> String {
        match self {
            Shape::Atom => format!("{weight} : a{index}(X) :- b{index}(X)."),
            Shape::Constraint => format!("{weight} : :- b{index}(X), c(X)."),
            Shape::BoundedChoice => format!("{weight} : 1 {{ a{index}; c{index} }} 1 :- b{index}."),
            Shape::UnboundedChoice => format!("{weight} : {{ a{index} }} :- b{index}."),
            Shape::Hard => format!("a{index}(X) :- b{index}(X), not c(X)."),
        }
    }
}

fn program_text(rules: &[(Shape, i8)]) -> String {
    rules
        .iter()
        .enumerate()
        .map(|(index, (shape, weight))| shape.rule(index, *weight))
        .collect::<Vec<_>>()
        .join("\n")
}

fn translated(input: &str, mode: TranslationMode) -> String {
    translate_string(input, mode).unwrap().to_string()
}

fn translation_error(input: &str) -> TranslationErrorKind {
    match translate_string(input, TranslationMode::default()) {
        Err(Error::TranslationError(error)) => error.kind().clone(),
        other => panic!("expected a translation error, found {other:?}"),
    }
}

#[quickcheck]
fn indices_increase_by_one(rules: Vec<(Shape, i8)>, use_unsat: bool) -> bool {
    let mode = TranslationMode::default()
        .with_translate_hard_rules(true)
        .with_use_unsat(use_unsat)
        .with_power_of_ten(0);
    let program = load_string(&program_text(&rules)).unwrap();

    let mut transformer = RuleTransformer::new(mode);
    let mut output = Program::default();
    transformer.translate_program(program, &mut output).unwrap();

    let expected = rules
        .iter()
        .enumerate()
        .filter(|(_, (shape, _))| !matches!(shape, Shape::UnboundedChoice))
        .map(|(index, _)| Term::number(index as i64))
        .collect::<Vec<_>>();
    let found = output
        .statements()
        .iter()
        .filter_map(|statement| match statement {
            Statement::Minimize(minimize) => minimize.terms().first().cloned(),
            _ => None,
        })
        .collect::<Vec<_>>();

    transformer.rule_index() == rules.len() && found == expected
}

#[quickcheck]
fn hard_rules_are_unchanged(indices: Vec<u8>) -> bool {
    let input = indices
        .iter()
        .map(|index| Shape::Hard.rule(usize::from(*index), 0))
        .chain(["fact.".to_string(), "#show fact/0.".to_string()])
        .collect::<Vec<_>>()
        .join("\n");

    let program = load_string(&input).unwrap();
    let output = translate(program.clone(), TranslationMode::default()).unwrap();

    output == program && output.to_string() == program.to_string()
}

#[test]
fn unsat_encoding_of_weighted_rule() {
    let mode = TranslationMode::default()
        .with_use_unsat(true)
        .with_power_of_ten(0);

    assert_eq!(
        translated("b.\n2 : a :- b.\n", mode),
        "b.\n\
         unsat(0,2,()) :- not a, b, #true.\n\
         a :- not unsat(0,2,()), b, #true.\n\
         :~ unsat(0,2,()). [2@0,0,()]\n"
    );
}

#[test]
fn unsat_encoding_of_rule_shapes() {
    let mode = TranslationMode::default()
        .with_use_unsat(true)
        .with_power_of_ten(0);

    assert_eq!(
        translated(
            "3 : 1 { a; b } 2 :- c.\n\
             4 : { a; b } :- c.\n\
             5 : :- a, b.\n",
            mode
        ),
        "unsat(0,3,()) :- not 1 <= { a; b } <= 2, c, #true.\n\
         1 <= { a; b } <= 2 :- not unsat(0,3,()), c, #true.\n\
         :~ unsat(0,3,()). [3@0,0,()]\n\
         { a; b } :- c, #true.\n\
         unsat(2,5,()) :- not #false, a, b, #true.\n\
         :- not unsat(2,5,()), a, b, #true.\n\
         :~ unsat(2,5,()). [5@0,2,()]\n"
    );
}

#[test]
fn compact_encoding_of_rule_shapes() {
    let mode = TranslationMode::default().with_power_of_ten(0);

    assert_eq!(
        translated(
            "2 : p(X) :- q(X).\n\
             3 : 1 { a; b } 2 :- c.\n\
             4 : { a; b } :- c.\n\
             5 : :- a, b.\n",
            mode
        ),
        "{ p(X) } :- q(X), #true.\n\
         :~ not p(X), q(X), #true. [2@0,0,(X,)]\n\
         { a; b } :- c, #true.\n\
         :~ not 1 <= { a; b } <= 2, c, #true. [3@0,1,()]\n\
         { a; b } :- c, #true.\n\
         :~ a, b, #true. [5@0,3,()]\n"
    );
}

#[test]
fn evidence_sign_flip() {
    let mode = TranslationMode::default();

    assert_eq!(translated("&evidence(p).", mode), ":- not p.\n");
    assert_eq!(translated("&evidence(p, false).", mode), ":- p.\n");
}

#[test]
fn clingo_syntax_is_translated() {
    let mode = TranslationMode::default().with_power_of_ten(0);

    assert_eq!(
        translated("2 : -fly(X) :- penguin(X).", mode),
        "{ -fly(X) } :- penguin(X), #true.\n\
         :~ not -fly(X), penguin(X), #true. [2@0,0,(X,)]\n"
    );
    assert_eq!(
        translated("2 : p(X+1) :- p(X).", mode),
        "{ p(X+1) } :- p(X), #true.\n\
         :~ not p(X+1), p(X), #true. [2@0,0,(X,)]\n"
    );
    assert_eq!(translated("num(1..3).", mode), "num(1..3).\n");
    assert_eq!(
        translated("1 : a :- #count { X : p(X) } >= 2.", mode),
        "{ a } :- #count { X: p(X) } >= 2, #true.\n\
         :~ not a, #count { X: p(X) } >= 2, #true. [1@0,0,()]\n"
    );
    assert_eq!(
        translated("1 : a :- b(X) : c(X).", mode),
        "{ a } :- b(X): c(X); #true.\n\
         :~ not a, b(X): c(X); #true. [1@0,0,()]\n"
    );
    assert_eq!(
        translated("&evidence(-fly(tweety)).", mode),
        ":- not -fly(tweety).\n"
    );
}

#[test]
fn log_and_problog_weights() {
    let mode = TranslationMode::default().with_power_of_ten(4);

    assert_eq!(
        translated("a :- b, &log(\"0.5\").", mode),
        "{ a } :- b, #true.\n:~ not a, b, #true. [-6931@0,0,()]\n"
    );
    assert_eq!(
        translated("a :- b, &problog(\"0.75\").", mode),
        "{ a } :- b, #true.\n:~ not a, b, #true. [10986@0,0,()]\n"
    );
}

#[test]
fn global_variables_are_deduplicated() {
    let mode = TranslationMode::default().with_power_of_ten(0);

    assert_eq!(
        translated("1 : p(X,Y) :- q(X), r(Y,X), s(_).", mode),
        "{ p(X,Y) } :- q(X), r(Y,X), s(_), #true.\n\
         :~ not p(X,Y), q(X), r(Y,X), s(_), #true. [1@0,0,(X,Y)]\n"
    );
}

#[test]
fn two_solve_calls_mark_soft_rules() {
    let mode = TranslationMode::default()
        .with_two_solve_calls(true)
        .with_translate_hard_rules(true)
        .with_power_of_ten(0);

    assert_eq!(
        translated("1 : a :- b.\nc :- d.\n", mode),
        "{ a } :- b, #true.\n\
         :~ ext_helper, not a, b, #true. [1@0,0,()]\n\
         { c } :- d.\n\
         :~ not c, d. [1@1,1,()]\n"
    );
}

#[test]
fn plog_program() {
    let mode = TranslationMode::default().with_power_of_ten(0);

    assert_eq!(
        translated(
            "ball(1).\n\
             &random { color(X,red); color(X,blue) } :- ball(X).\n\
             &pr { color(X,red) } = \"0.5\" :- ball(X).\n\
             &obs { color(1,red) }.\n\
             &query(color(1,blue)).\n",
            mode
        ),
        "ball(1).\n\
         { color(X,red); color(X,blue) } = 1 :- ball(X).\n\
         :~ not color(X,red), ball(X). [-1@0,pr,color(X,red),(X,)]\n\
         :- not color(1,red).\n\
         &query(color(1,blue)).\n"
    );
}

#[test]
fn fatal_errors() {
    assert_eq!(
        translation_error("a :- b, &weight(1), &weight(2)."),
        TranslationErrorKind::MultipleWeights
    );
    assert_eq!(
        translation_error("a :- b, &weight(\"x+1\")."),
        TranslationErrorKind::InvalidWeightExpression("x+1".to_string())
    );
    assert!(matches!(
        translation_error("a :- b, &problog(\"1.0\")."),
        TranslationErrorKind::WeightComputation(_, _)
    ));
    assert!(matches!(
        translation_error("a :- b, &log(0)."),
        TranslationErrorKind::WeightComputation(_, _)
    ));
    assert!(matches!(
        translation_error("a :- b, &unknown(1)."),
        TranslationErrorKind::UnsupportedTheoryAnnotation(_)
    ));
}

#[test]
fn parse_errors_are_reported() {
    let error = translate_string("a :- .", TranslationMode::default()).unwrap_err();

    assert!(matches!(error, Error::ParseError(_)));
    assert!(error.report("input.lpmln", "a :- .").is_some());
}
