//! A parser for LP^MLN programs in clingo syntax.
//!
//! Weighted rules `W : rule` are desugared into `rule` with the additional
//! body annotation `&weight(W)`, which is how the translation expects weights.

pub(crate) mod types;

use std::fmt::Debug;

use nom::{
    branch::alt,
    bytes::complete::{is_not, tag, take, take_until},
    character::complete::{alpha1, char, digit1, multispace1, one_of, satisfy},
    combinator::{
        all_consuming, cut, map, map_opt, map_res, not, opt, recognize, success, value, verify,
    },
    multi::{many0, many0_count, many1, separated_list0, separated_list1},
    sequence::{delimited, pair, preceded, terminated, tuple},
    Err,
};

use crate::rule_model::{
    components::{
        aggregate::{Aggregate, Guard},
        atom::{Atom, Comparison, ComparisonOperator},
        body_aggregate::{AggregateFunction, BodyAggregate, BodyAggregateElement},
        literal::{ConditionalLiteral, Literal, Sign},
        minimize::Minimize,
        rule::{BodyLiteral, Head, Rule},
        statement::{Directive, Statement},
        term::{
            operation::{operation_kind::OperationKind, Operation},
            FunctionTerm, Term, Variable,
        },
        theory::{TheoryAtom, TheoryElement, TheoryGuard},
        ProgramComponent,
    },
    origin::Origin,
    program::Program,
};

use types::{IntermediateResult, Span};
pub use types::{LocatedParseError, ParseError, ParseResult};

/// Parse a program in the given `input`-String and return a [Program].
///
/// # Error
/// Returns a [LocatedParseError] pointing to the first statement that could not be parsed.
pub fn parse_program(input: &str) -> ParseResult<Program> {
    all_input_consumed(parse_statements)(input)
}

/// Parse a single [Statement], surrounded by optional whitespace and comments.
///
/// # Error
/// Returns a [LocatedParseError] if the input is not exactly one statement.
pub fn parse_single_statement(input: &str) -> ParseResult<Statement> {
    all_input_consumed(delimited(
        multispace_or_comment0,
        parse_statement,
        multispace_or_comment0,
    ))(input)
}

/// A combinator to add tracing to the parser.
/// [fun] is an identifier for the parser and [parser] is the actual parser.
#[inline(always)]
fn traced<'a, T, P>(
    fun: &'static str,
    mut parser: P,
) -> impl FnMut(Span<'a>) -> IntermediateResult<'a, T>
where
    T: Debug,
    P: FnMut(Span<'a>) -> IntermediateResult<'a, T>,
{
    move |input| {
        log::trace!(target: "parser", "{fun}({input:?})");
        let result = parser(input);
        log::trace!(target: "parser", "{fun}({input:?}) -> {result:?}");
        result
    }
}

/// A combinator that attaches the consumed input range as [Origin] to the parsed component.
fn located<'a, T, P>(mut parser: P) -> impl FnMut(Span<'a>) -> IntermediateResult<'a, T>
where
    T: ProgramComponent,
    P: FnMut(Span<'a>) -> IntermediateResult<'a, T>,
{
    move |input| {
        let (rest, component) = parser(input)?;
        let origin = Origin::file(input.location_offset(), rest.location_offset());
        Ok((rest, component.set_origin(origin)))
    }
}

/// A combinator that makes sure all input has been consumed.
fn all_input_consumed<'a, T: 'a>(
    parser: impl FnMut(Span<'a>) -> IntermediateResult<'a, T> + 'a,
) -> impl FnMut(&'a str) -> Result<T, LocatedParseError> + 'a {
    let mut p = all_consuming(parser);
    move |input| {
        let input = Span::new(input);
        p(input).map(|(_, result)| result).map_err(|e| match e {
            Err::Incomplete(e) => ParseError::MissingInput(match e {
                nom::Needed::Unknown => "expected an unknown amount of further input".to_string(),
                nom::Needed::Size(size) => format!("expected at least {size} more bytes"),
            })
            .at(input),
            Err::Error(e) | Err::Failure(e) => e,
        })
    }
}

/// A combinator that recognises a comment,
/// either a block comment between `%*` and `*%`
/// or a line comment starting at a `%` character and ending at the end of the line.
fn comment(input: Span) -> IntermediateResult<()> {
    alt((
        value((), tuple((tag("%*"), take_until("*%"), tag("*%")))),
        value((), pair(tag("%"), is_not("\n\r"))),
        // a comment that immediately precedes the end of the line
        value((), tag("%")),
    ))(input)
}

/// A combinator that recognises an arbitrary amount of whitespace and
/// comments.
fn multispace_or_comment0(input: Span) -> IntermediateResult<()> {
    value((), many0(alt((value((), multispace1), comment))))(input)
}

/// A combinator that recognises any non-empty amount of whitespace
/// and comments.
fn multispace_or_comment1(input: Span) -> IntermediateResult<()> {
    value((), many1(alt((value((), multispace1), comment))))(input)
}

/// A combinator that modifies the associated error.
fn map_error<'a, T: 'a>(
    mut parser: impl FnMut(Span<'a>) -> IntermediateResult<'a, T> + 'a,
    mut error: impl FnMut() -> ParseError + 'a,
) -> impl FnMut(Span<'a>) -> IntermediateResult<'a, T> + 'a {
    move |input| {
        parser(input).map_err(|e| match e {
            Err::Incomplete(_) => e,
            Err::Error(context) => {
                let mut err = error().at(input);
                err.append(context);
                Err::Error(err)
            }
            Err::Failure(context) => {
                let mut err = error().at(input);
                err.append(context);
                Err::Failure(err)
            }
        })
    }
}

/// A combinator that creates a parser for a specific token.
fn token<'a>(token: &'a str) -> impl FnMut(Span<'a>) -> IntermediateResult<'a, Span<'a>> {
    map_error(tag(token), || ParseError::ExpectedToken(token.to_string()))
}

/// A combinator that creates a parser for a specific token,
/// surrounded by whitespace or comments.
fn space_delimited_token<'a>(
    token: &'a str,
) -> impl FnMut(Span<'a>) -> IntermediateResult<'a, Span<'a>> {
    map_error(
        delimited(multispace_or_comment0, tag(token), multispace_or_comment0),
        || ParseError::ExpectedToken(token.to_string()),
    )
}

fn is_identifier_character(character: char) -> bool {
    character.is_ascii_alphanumeric() || character == '_' || character == '\''
}

/// Names of predicates, functions and constants
fn parse_lowercase_identifier(input: Span) -> IntermediateResult<Span> {
    recognize(pair(
        satisfy(|character| character.is_ascii_lowercase()),
        many0_count(satisfy(is_identifier_character)),
    ))(input)
}

fn parse_variable(input: Span) -> IntermediateResult<Variable> {
    traced(
        "parse_variable",
        located(map_error(
            map(
                recognize(pair(
                    satisfy(|character| character.is_ascii_uppercase() || character == '_'),
                    many0_count(satisfy(is_identifier_character)),
                )),
                |name: Span| Variable::new(name.fragment()),
            ),
            || ParseError::ExpectedVariable,
        )),
    )(input)
}

fn parse_integer(input: Span) -> IntermediateResult<i64> {
    traced(
        "parse_integer",
        map_res(recognize(pair(opt(char('-')), digit1)), |digits: Span| {
            digits.fragment().parse::<i64>()
        }),
    )(input)
}

fn parse_string(input: Span) -> IntermediateResult<String> {
    traced(
        "parse_string",
        map_error(
            delimited(
                char('"'),
                map(
                    many0(alt((
                        map(is_not("\\\""), |part: Span| part.fragment().to_string()),
                        map(preceded(char('\\'), one_of("\\\"nt")), |escaped| {
                            match escaped {
                                'n' => "\n".to_string(),
                                't' => "\t".to_string(),
                                other => other.to_string(),
                            }
                        }),
                    ))),
                    |parts| parts.concat(),
                ),
                char('"'),
            ),
            || ParseError::ExpectedStringLiteral,
        ),
    )(input)
}

/// Comma separated list of terms enclosed in parentheses
fn parse_arguments(input: Span) -> IntermediateResult<(Vec<Term>, bool)> {
    delimited(
        pair(char('('), multispace_or_comment0),
        pair(
            separated_list0(space_delimited_token(","), parse_term),
            map(
                opt(preceded(multispace_or_comment0, char(','))),
                |comma| comma.is_some(),
            ),
        ),
        pair(multispace_or_comment0, char(')')),
    )(input)
}

fn parse_function_term(input: Span) -> IntermediateResult<FunctionTerm> {
    traced(
        "parse_function_term",
        located(map(
            pair(parse_lowercase_identifier, opt(parse_arguments)),
            |(name, arguments)| {
                let arguments = arguments.map(|(terms, _)| terms).unwrap_or_default();
                FunctionTerm::new(name.fragment(), arguments)
            },
        )),
    )(input)
}

fn parse_tuple(input: Span) -> IntermediateResult<Term> {
    traced(
        "parse_tuple",
        map(parse_arguments, |(mut terms, trailing_comma)| {
            if terms.len() == 1 && !trailing_comma {
                terms.remove(0)
            } else {
                Term::Function(FunctionTerm::tuple(terms))
            }
        }),
    )(input)
}

/// Term that is not an operation, or an operation in parentheses
fn parse_primary_term(input: Span) -> IntermediateResult<Term> {
    traced(
        "parse_primary_term",
        located(alt((
            map(parse_variable, Term::Variable),
            map(parse_string, |string| Term::string(&string)),
            map(parse_function_term, Term::Function),
            parse_tuple,
        ))),
    )(input)
}

/// Integer or a term with any number of unary minus signs
fn parse_unary_term(input: Span) -> IntermediateResult<Term> {
    traced(
        "parse_unary_term",
        alt((
            located(map(parse_integer, Term::number)),
            located(map(
                preceded(pair(char('-'), multispace_or_comment0), parse_unary_term),
                Term::negated,
            )),
            parse_primary_term,
        )),
    )(input)
}

/// Binary operator between two terms
fn parse_infix_operator(input: Span) -> IntermediateResult<OperationKind> {
    preceded(
        multispace_or_comment0,
        map_opt(
            alt((
                tag(".."),
                tag("**"),
                tag("+"),
                tag("-"),
                tag("*"),
                tag("/"),
                tag("\\"),
            )),
            |symbol: Span| OperationKind::from_infix(symbol.fragment()),
        ),
    )(input)
}

/// Operations whose operators bind at least as strong as `min_precedence`
fn parse_operation<'a>(input: Span<'a>, min_precedence: usize) -> IntermediateResult<'a, Term> {
    let (mut rest, mut term) = parse_unary_term(input)?;

    while let Ok((after_operator, kind)) = parse_infix_operator(rest) {
        if kind.precedence() < min_precedence {
            break;
        }

        let next_precedence = if kind.is_right_associative() {
            kind.precedence()
        } else {
            kind.precedence() + 1
        };
        let (after_operand, right) = preceded(multispace_or_comment0, |input: Span<'a>| {
            parse_operation(input, next_precedence)
        })(after_operator)?;

        let origin = Origin::file(input.location_offset(), after_operand.location_offset());
        term = Term::Operation(Operation::binary(kind, term, right)).set_origin(origin);
        rest = after_operand;
    }

    Ok((rest, term))
}

fn parse_term(input: Span) -> IntermediateResult<Term> {
    traced(
        "parse_term",
        map_error(
            |input| parse_operation(input, 0),
            || ParseError::ExpectedTerm,
        ),
    )(input)
}

fn parse_comparison_operator(input: Span) -> IntermediateResult<ComparisonOperator> {
    traced(
        "parse_comparison_operator",
        map_error(
            alt((
                value(ComparisonOperator::Equal, tag("==")),
                value(ComparisonOperator::NotEqual, tag("!=")),
                value(ComparisonOperator::LessEqual, tag("<=")),
                value(ComparisonOperator::GreaterEqual, tag(">=")),
                value(ComparisonOperator::Equal, tag("=")),
                value(ComparisonOperator::LessThan, tag("<")),
                value(ComparisonOperator::GreaterThan, tag(">")),
            )),
            || ParseError::ExpectedComparisonOperator,
        ),
    )(input)
}

fn parse_boolean(input: Span) -> IntermediateResult<Atom> {
    traced(
        "parse_boolean",
        located(alt((
            value(Atom::boolean(true), tag("#true")),
            value(Atom::boolean(false), tag("#false")),
        ))),
    )(input)
}

fn parse_comparison(input: Span) -> IntermediateResult<Atom> {
    traced(
        "parse_comparison",
        located(map(
            tuple((
                parse_term,
                multispace_or_comment0,
                parse_comparison_operator,
                multispace_or_comment0,
                parse_term,
            )),
            |(left, _, operator, _, right)| Atom::Comparison(Comparison::new(left, operator, right)),
        )),
    )(input)
}

/// Predicate applied to terms, optionally classically negated by a leading `-`
fn parse_symbolic_atom(input: Span) -> IntermediateResult<Atom> {
    traced(
        "parse_symbolic_atom",
        located(map(
            pair(
                opt(terminated(char('-'), multispace_or_comment0)),
                parse_function_term,
            ),
            |(negation, function)| match negation {
                Some(_) => Atom::symbolic(Term::negated(Term::Function(function))),
                None => Atom::symbolic(Term::Function(function)),
            },
        )),
    )(input)
}

/// Bound written in front of an aggregate, defaults to `<=`
fn parse_left_guard(input: Span) -> IntermediateResult<Guard> {
    map(
        pair(
            parse_term,
            opt(preceded(multispace_or_comment0, parse_comparison_operator)),
        ),
        |(term, operator)| Guard::new(operator.unwrap_or(ComparisonOperator::LessEqual), term),
    )(input)
}

/// Bound written after an aggregate, defaults to `<=`
fn parse_right_guard(input: Span) -> IntermediateResult<Guard> {
    map(
        pair(
            opt(terminated(parse_comparison_operator, multispace_or_comment0)),
            parse_term,
        ),
        |(operator, term)| Guard::new(operator.unwrap_or(ComparisonOperator::LessEqual), term),
    )(input)
}

fn parse_conditional_literal(input: Span) -> IntermediateResult<ConditionalLiteral> {
    traced(
        "parse_conditional_literal",
        located(map(
            pair(
                parse_literal,
                opt(preceded(
                    space_delimited_token(":"),
                    separated_list1(space_delimited_token(","), parse_literal),
                )),
            ),
            |(literal, condition)| ConditionalLiteral::new(literal, condition.unwrap_or_default()),
        )),
    )(input)
}

fn parse_aggregate(input: Span) -> IntermediateResult<Aggregate> {
    traced(
        "parse_aggregate",
        located(map(
            tuple((
                opt(terminated(parse_left_guard, multispace_or_comment0)),
                delimited(
                    pair(char('{'), multispace_or_comment0),
                    separated_list0(space_delimited_token(";"), parse_conditional_literal),
                    pair(multispace_or_comment0, char('}')),
                ),
                opt(preceded(multispace_or_comment0, parse_right_guard)),
            )),
            |(left_guard, elements, right_guard)| Aggregate::new(left_guard, elements, right_guard),
        )),
    )(input)
}

/// Name of an aggregate function, such as `#count`
fn parse_aggregate_function(input: Span) -> IntermediateResult<AggregateFunction> {
    map_opt(
        recognize(tuple((char('#'), alpha1, opt(char('+'))))),
        |name: Span| AggregateFunction::from_name(name.fragment()),
    )(input)
}

fn parse_body_aggregate_element(input: Span) -> IntermediateResult<BodyAggregateElement> {
    traced(
        "parse_body_aggregate_element",
        map(
            pair(
                separated_list1(space_delimited_token(","), parse_term),
                opt(preceded(
                    space_delimited_token(":"),
                    separated_list1(space_delimited_token(","), parse_literal),
                )),
            ),
            |(terms, condition)| BodyAggregateElement::new(terms, condition.unwrap_or_default()),
        ),
    )(input)
}

fn parse_body_aggregate(input: Span) -> IntermediateResult<BodyAggregate> {
    traced(
        "parse_body_aggregate",
        located(map(
            tuple((
                opt(terminated(parse_left_guard, multispace_or_comment0)),
                parse_aggregate_function,
                preceded(
                    multispace_or_comment0,
                    delimited(
                        pair(char('{'), multispace_or_comment0),
                        separated_list0(space_delimited_token(";"), parse_body_aggregate_element),
                        pair(multispace_or_comment0, char('}')),
                    ),
                ),
                opt(preceded(multispace_or_comment0, parse_right_guard)),
            )),
            |(left_guard, function, elements, right_guard)| {
                BodyAggregate::new(function, left_guard, elements, right_guard)
            },
        )),
    )(input)
}

fn parse_atom(input: Span) -> IntermediateResult<Atom> {
    traced(
        "parse_atom",
        map_error(
            alt((
                parse_boolean,
                located(map(parse_aggregate, Atom::Aggregate)),
                located(map(parse_body_aggregate, Atom::BodyAggregate)),
                parse_comparison,
                parse_symbolic_atom,
            )),
            || ParseError::ExpectedAtom,
        ),
    )(input)
}

/// The keyword `not` followed by whitespace
fn parse_negation(input: Span) -> IntermediateResult<()> {
    value((), terminated(tag("not"), multispace_or_comment1))(input)
}

fn parse_sign(input: Span) -> IntermediateResult<Sign> {
    alt((
        value(Sign::DoubleNegation, pair(parse_negation, parse_negation)),
        value(Sign::Negation, parse_negation),
        success(Sign::NoSign),
    ))(input)
}

fn parse_literal(input: Span) -> IntermediateResult<Literal> {
    traced(
        "parse_literal",
        located(map_error(
            map(pair(parse_sign, parse_atom), |(sign, atom)| {
                Literal::new(sign, atom)
            }),
            || ParseError::ExpectedLiteral,
        )),
    )(input)
}

fn parse_theory_element(input: Span) -> IntermediateResult<TheoryElement> {
    traced(
        "parse_theory_element",
        map(
            pair(
                separated_list1(space_delimited_token(","), parse_term),
                opt(preceded(
                    space_delimited_token(":"),
                    separated_list1(space_delimited_token(","), parse_literal),
                )),
            ),
            |(terms, condition)| TheoryElement::new(terms, condition.unwrap_or_default()),
        ),
    )(input)
}

fn parse_theory_atom(input: Span) -> IntermediateResult<TheoryAtom> {
    traced(
        "parse_theory_atom",
        located(map_error(
            map(
                tuple((
                    preceded(char('&'), parse_lowercase_identifier),
                    opt(map(parse_arguments, |(terms, _)| terms)),
                    opt(preceded(
                        multispace_or_comment0,
                        delimited(
                            pair(char('{'), multispace_or_comment0),
                            separated_list0(space_delimited_token(";"), parse_theory_element),
                            pair(multispace_or_comment0, char('}')),
                        ),
                    )),
                    opt(preceded(
                        multispace_or_comment0,
                        map(
                            pair(
                                parse_comparison_operator,
                                preceded(multispace_or_comment0, parse_term),
                            ),
                            |(operator, term)| TheoryGuard { operator, term },
                        ),
                    )),
                )),
                |(name, arguments, elements, guard)| {
                    TheoryAtom::new(
                        name.fragment(),
                        arguments.unwrap_or_default(),
                        elements.unwrap_or_default(),
                        guard,
                    )
                },
            ),
            || ParseError::ExpectedTheoryAtom,
        )),
    )(input)
}

fn parse_head(input: Span) -> IntermediateResult<Head> {
    traced(
        "parse_head",
        map_error(
            alt((
                map(parse_theory_atom, Head::Theory),
                map(parse_aggregate, Head::Aggregate),
                map(parse_literal, Head::Literal),
            )),
            || ParseError::ExpectedHead,
        ),
    )(input)
}

fn parse_body_literal(input: Span) -> IntermediateResult<BodyLiteral> {
    traced(
        "parse_body_literal",
        map_error(
            alt((
                map(parse_theory_atom, BodyLiteral::Theory),
                map(parse_conditional_literal, |literal| {
                    if literal.condition.is_empty() {
                        BodyLiteral::Literal(literal.literal)
                    } else {
                        BodyLiteral::Conditional(literal)
                    }
                }),
            )),
            || ParseError::ExpectedBodyLiteral,
        ),
    )(input)
}

/// Body elements separated by `,` or `;`
fn parse_body(input: Span) -> IntermediateResult<Vec<BodyLiteral>> {
    separated_list1(
        alt((space_delimited_token(","), space_delimited_token(";"))),
        parse_body_literal,
    )(input)
}

/// Convert the textual weight of a rule into a term,
/// keeping everything but 64 bit integers as a string.
fn weight_term(weight: &str) -> Term {
    match weight.parse::<i64>() {
        Ok(number) => Term::number(number),
        Err(_) => Term::string(weight),
    }
}

/// Weight prefix `W :` of a weighted rule, desugared into `&weight(W)`
fn parse_weight(input: Span) -> IntermediateResult<TheoryAtom> {
    traced(
        "parse_weight",
        map_error(
            terminated(
                located(map(
                    recognize(tuple((
                        opt(char('-')),
                        digit1,
                        opt(pair(char('.'), digit1)),
                        opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
                    ))),
                    |weight: Span| {
                        TheoryAtom::new("weight", vec![weight_term(weight.fragment())], vec![], None)
                    },
                )),
                tuple((multispace_or_comment0, char(':'), not(one_of("-~")))),
            ),
            || ParseError::ExpectedWeight,
        ),
    )(input)
}

fn parse_rule(input: Span) -> IntermediateResult<Rule> {
    traced(
        "parse_rule",
        located(map_error(
            map(
                tuple((
                    opt(terminated(parse_weight, multispace_or_comment0)),
                    alt((
                        map(
                            preceded(
                                token(":-"),
                                preceded(multispace_or_comment0, cut(parse_body)),
                            ),
                            |body| (Head::Literal(Literal::boolean(false)), body),
                        ),
                        pair(
                            parse_head,
                            map(
                                opt(preceded(space_delimited_token(":-"), cut(parse_body))),
                                Option::unwrap_or_default,
                            ),
                        ),
                    )),
                    preceded(multispace_or_comment0, token(".")),
                )),
                |(weight, (head, mut body), _)| {
                    if let Some(weight) = weight {
                        body.push(BodyLiteral::Theory(weight));
                    }

                    Rule::new(head, body)
                },
            ),
            || ParseError::ExpectedRule,
        )),
    )(input)
}

fn parse_weak_constraint(input: Span) -> IntermediateResult<Minimize> {
    traced(
        "parse_weak_constraint",
        located(map_error(
            map(
                preceded(
                    pair(token(":~"), multispace_or_comment0),
                    cut(tuple((
                        parse_body,
                        space_delimited_token("."),
                        token("["),
                        multispace_or_comment0,
                        parse_term,
                        opt(preceded(space_delimited_token("@"), parse_term)),
                        many0(preceded(space_delimited_token(","), parse_term)),
                        multispace_or_comment0,
                        token("]"),
                    ))),
                ),
                |(body, _, _, _, weight, priority, terms, _, _)| {
                    Minimize::new(
                        weight,
                        priority.unwrap_or_else(|| Term::number(0)),
                        terms,
                        body,
                    )
                },
            ),
            || ParseError::ExpectedWeakConstraint,
        )),
    )(input)
}

/// Everything up to the period that ends a directive,
/// i.e. a period followed by whitespace, a comment or the end of the input
fn parse_directive_body(input: Span) -> IntermediateResult<Span> {
    let bytes = input.fragment().as_bytes();
    let end = (0..bytes.len()).find(|&index| {
        bytes[index] == b'.'
            && bytes
                .get(index + 1)
                .map_or(true, |next| next.is_ascii_whitespace() || *next == b'%')
    });

    match end {
        Some(end) => take(input.fragment()[..end].chars().count())(input),
        None => Err(Err::Error(
            ParseError::ExpectedToken(".".to_string()).at(input),
        )),
    }
}

fn parse_directive(input: Span) -> IntermediateResult<Directive> {
    traced(
        "parse_directive",
        located(map_error(
            map(
                terminated(
                    recognize(tuple((
                        char('#'),
                        verify(alpha1, |name: &Span| {
                            !matches!(*name.fragment(), "true" | "false")
                                && AggregateFunction::from_name(&format!("#{}", name.fragment()))
                                    .is_none()
                        }),
                        parse_directive_body,
                    ))),
                    token("."),
                ),
                |text: Span| Directive::new(text.fragment()),
            ),
            || ParseError::ExpectedDirective,
        )),
    )(input)
}

fn parse_statement(input: Span) -> IntermediateResult<Statement> {
    traced(
        "parse_statement",
        map_error(
            alt((
                map(parse_directive, Statement::Directive),
                map(parse_weak_constraint, Statement::Minimize),
                map(parse_rule, Statement::Rule),
            )),
            || ParseError::ExpectedStatement,
        ),
    )(input)
}

fn parse_statements(input: Span) -> IntermediateResult<Program> {
    let (mut input, _) = multispace_or_comment0(input)?;
    let mut statements = Vec::new();

    while !input.fragment().is_empty() {
        let (rest, statement) = cut(parse_statement)(input)?;
        let (rest, _) = multispace_or_comment0(rest)?;

        statements.push(statement);
        input = rest;
    }

    Ok((input, Program::new(statements)))
}
