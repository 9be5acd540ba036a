//! This module defines the [Transformer] trait,
//! which rebuilds program components bottom-up.
//!
//! Every `transform_*` method defaults to the matching `walk_*` function,
//! which visits all children of the component
//! and rebuilds it from the results, keeping its [Origin](super::origin::Origin).
//! Implementors override the methods for the components they are interested in
//! and may call the `walk_*` function to continue the traversal.

use super::components::{
    aggregate::{Aggregate, Guard},
    atom::{Atom, Comparison},
    body_aggregate::{BodyAggregate, BodyAggregateElement},
    literal::{ConditionalLiteral, Literal},
    minimize::Minimize,
    rule::{BodyLiteral, Head, Rule},
    statement::{Directive, Statement},
    term::{operation::Operation, FunctionTerm, Term, Variable},
    theory::{TheoryAtom, TheoryElement, TheoryGuard},
};

/// Visitor that rebuilds program components
pub trait Transformer {
    /// Error that aborts the traversal
    type Error;

    /// Transform a [Statement].
    fn transform_statement(&mut self, statement: Statement) -> Result<Statement, Self::Error> {
        walk_statement(self, statement)
    }

    /// Transform a [Rule].
    fn transform_rule(&mut self, rule: Rule) -> Result<Rule, Self::Error> {
        walk_rule(self, rule)
    }

    /// Transform a [Minimize].
    fn transform_minimize(&mut self, minimize: Minimize) -> Result<Minimize, Self::Error> {
        walk_minimize(self, minimize)
    }

    /// Transform a [Directive].
    fn transform_directive(&mut self, directive: Directive) -> Result<Directive, Self::Error> {
        Ok(directive)
    }

    /// Transform the [Head] of a rule.
    fn transform_head(&mut self, head: Head) -> Result<Head, Self::Error> {
        walk_head(self, head)
    }

    /// Transform an element of the body of a rule.
    fn transform_body_literal(&mut self, literal: BodyLiteral) -> Result<BodyLiteral, Self::Error> {
        walk_body_literal(self, literal)
    }

    /// Transform a [Literal].
    fn transform_literal(&mut self, literal: Literal) -> Result<Literal, Self::Error> {
        walk_literal(self, literal)
    }

    /// Transform a [ConditionalLiteral].
    fn transform_conditional_literal(
        &mut self,
        literal: ConditionalLiteral,
    ) -> Result<ConditionalLiteral, Self::Error> {
        walk_conditional_literal(self, literal)
    }

    /// Transform an [Atom].
    fn transform_atom(&mut self, atom: Atom) -> Result<Atom, Self::Error> {
        walk_atom(self, atom)
    }

    /// Transform an [Aggregate].
    fn transform_aggregate(&mut self, aggregate: Aggregate) -> Result<Aggregate, Self::Error> {
        walk_aggregate(self, aggregate)
    }

    /// Transform a [BodyAggregate].
    fn transform_body_aggregate(
        &mut self,
        aggregate: BodyAggregate,
    ) -> Result<BodyAggregate, Self::Error> {
        walk_body_aggregate(self, aggregate)
    }

    /// Transform a [BodyAggregateElement].
    fn transform_body_aggregate_element(
        &mut self,
        element: BodyAggregateElement,
    ) -> Result<BodyAggregateElement, Self::Error> {
        walk_body_aggregate_element(self, element)
    }

    /// Transform a [TheoryAtom].
    fn transform_theory_atom(&mut self, atom: TheoryAtom) -> Result<TheoryAtom, Self::Error> {
        walk_theory_atom(self, atom)
    }

    /// Transform a [Term].
    fn transform_term(&mut self, term: Term) -> Result<Term, Self::Error> {
        walk_term(self, term)
    }

    /// Transform a [Variable].
    fn transform_variable(&mut self, variable: Variable) -> Result<Variable, Self::Error> {
        Ok(variable)
    }
}

/// Visit the children of a [Statement].
pub fn walk_statement<T: Transformer + ?Sized>(
    transformer: &mut T,
    statement: Statement,
) -> Result<Statement, T::Error> {
    Ok(match statement {
        Statement::Rule(rule) => Statement::Rule(transformer.transform_rule(rule)?),
        Statement::Minimize(minimize) => {
            Statement::Minimize(transformer.transform_minimize(minimize)?)
        }
        Statement::Directive(directive) => {
            Statement::Directive(transformer.transform_directive(directive)?)
        }
    })
}

/// Visit the head and body of a [Rule].
pub fn walk_rule<T: Transformer + ?Sized>(
    transformer: &mut T,
    rule: Rule,
) -> Result<Rule, T::Error> {
    let head = transformer.transform_head(rule.head)?;
    let body = walk_body(transformer, rule.body)?;

    Ok(Rule {
        origin: rule.origin,
        head,
        body,
    })
}

/// Visit every element of a rule body in order.
pub fn walk_body<T: Transformer + ?Sized>(
    transformer: &mut T,
    body: Vec<BodyLiteral>,
) -> Result<Vec<BodyLiteral>, T::Error> {
    body.into_iter()
        .map(|literal| transformer.transform_body_literal(literal))
        .collect()
}

/// Visit the children of a [Minimize].
pub fn walk_minimize<T: Transformer + ?Sized>(
    transformer: &mut T,
    minimize: Minimize,
) -> Result<Minimize, T::Error> {
    let weight = transformer.transform_term(minimize.weight)?;
    let priority = transformer.transform_term(minimize.priority)?;
    let terms = walk_terms(transformer, minimize.terms)?;
    let body = walk_body(transformer, minimize.body)?;

    Ok(Minimize {
        origin: minimize.origin,
        weight,
        priority,
        terms,
        body,
    })
}

/// Visit the children of a [Head].
pub fn walk_head<T: Transformer + ?Sized>(
    transformer: &mut T,
    head: Head,
) -> Result<Head, T::Error> {
    Ok(match head {
        Head::Literal(literal) => Head::Literal(transformer.transform_literal(literal)?),
        Head::Aggregate(aggregate) => Head::Aggregate(transformer.transform_aggregate(aggregate)?),
        Head::Theory(atom) => Head::Theory(transformer.transform_theory_atom(atom)?),
    })
}

/// Visit the children of a [BodyLiteral].
pub fn walk_body_literal<T: Transformer + ?Sized>(
    transformer: &mut T,
    literal: BodyLiteral,
) -> Result<BodyLiteral, T::Error> {
    Ok(match literal {
        BodyLiteral::Literal(literal) => {
            BodyLiteral::Literal(transformer.transform_literal(literal)?)
        }
        BodyLiteral::Conditional(literal) => {
            BodyLiteral::Conditional(transformer.transform_conditional_literal(literal)?)
        }
        BodyLiteral::Theory(atom) => BodyLiteral::Theory(transformer.transform_theory_atom(atom)?),
    })
}

/// Visit the atom of a [Literal].
pub fn walk_literal<T: Transformer + ?Sized>(
    transformer: &mut T,
    literal: Literal,
) -> Result<Literal, T::Error> {
    Ok(Literal {
        origin: literal.origin,
        sign: literal.sign,
        atom: transformer.transform_atom(literal.atom)?,
    })
}

/// Visit the literal and condition of a [ConditionalLiteral].
pub fn walk_conditional_literal<T: Transformer + ?Sized>(
    transformer: &mut T,
    literal: ConditionalLiteral,
) -> Result<ConditionalLiteral, T::Error> {
    Ok(ConditionalLiteral {
        origin: literal.origin,
        literal: transformer.transform_literal(literal.literal)?,
        condition: walk_literals(transformer, literal.condition)?,
    })
}

/// Visit the children of an [Atom].
pub fn walk_atom<T: Transformer + ?Sized>(
    transformer: &mut T,
    atom: Atom,
) -> Result<Atom, T::Error> {
    Ok(match atom {
        Atom::Symbolic(mut symbolic) => {
            symbolic.term = transformer.transform_term(symbolic.term)?;
            Atom::Symbolic(symbolic)
        }
        Atom::Boolean(constant) => Atom::Boolean(constant),
        Atom::Comparison(comparison) => Atom::Comparison(Comparison {
            origin: comparison.origin,
            left: transformer.transform_term(comparison.left)?,
            operator: comparison.operator,
            right: transformer.transform_term(comparison.right)?,
        }),
        Atom::Aggregate(aggregate) => Atom::Aggregate(transformer.transform_aggregate(aggregate)?),
        Atom::BodyAggregate(aggregate) => {
            Atom::BodyAggregate(transformer.transform_body_aggregate(aggregate)?)
        }
    })
}

/// Visit the guards and elements of an [Aggregate].
pub fn walk_aggregate<T: Transformer + ?Sized>(
    transformer: &mut T,
    aggregate: Aggregate,
) -> Result<Aggregate, T::Error> {
    let left_guard = walk_guard(transformer, aggregate.left_guard)?;
    let elements = aggregate
        .elements
        .into_iter()
        .map(|element| transformer.transform_conditional_literal(element))
        .collect::<Result<Vec<_>, _>>()?;
    let right_guard = walk_guard(transformer, aggregate.right_guard)?;

    Ok(Aggregate {
        origin: aggregate.origin,
        left_guard,
        elements,
        right_guard,
    })
}

/// Visit the guards and elements of a [BodyAggregate].
pub fn walk_body_aggregate<T: Transformer + ?Sized>(
    transformer: &mut T,
    aggregate: BodyAggregate,
) -> Result<BodyAggregate, T::Error> {
    let left_guard = walk_guard(transformer, aggregate.left_guard)?;
    let elements = aggregate
        .elements
        .into_iter()
        .map(|element| transformer.transform_body_aggregate_element(element))
        .collect::<Result<Vec<_>, _>>()?;
    let right_guard = walk_guard(transformer, aggregate.right_guard)?;

    Ok(BodyAggregate {
        origin: aggregate.origin,
        function: aggregate.function,
        left_guard,
        elements,
        right_guard,
    })
}

/// Visit the terms and condition of a [BodyAggregateElement].
pub fn walk_body_aggregate_element<T: Transformer + ?Sized>(
    transformer: &mut T,
    element: BodyAggregateElement,
) -> Result<BodyAggregateElement, T::Error> {
    Ok(BodyAggregateElement {
        terms: walk_terms(transformer, element.terms)?,
        condition: walk_literals(transformer, element.condition)?,
    })
}

/// Visit the arguments, elements and guard of a [TheoryAtom].
pub fn walk_theory_atom<T: Transformer + ?Sized>(
    transformer: &mut T,
    atom: TheoryAtom,
) -> Result<TheoryAtom, T::Error> {
    let arguments = walk_terms(transformer, atom.arguments)?;
    let elements = atom
        .elements
        .into_iter()
        .map(|element| {
            Ok(TheoryElement {
                terms: walk_terms(transformer, element.terms)?,
                condition: walk_literals(transformer, element.condition)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let guard = match atom.guard {
        Some(guard) => Some(TheoryGuard {
            operator: guard.operator,
            term: transformer.transform_term(guard.term)?,
        }),
        None => None,
    };

    Ok(TheoryAtom {
        origin: atom.origin,
        name: atom.name,
        arguments,
        elements,
        guard,
    })
}

/// Visit the children of a [Term].
pub fn walk_term<T: Transformer + ?Sized>(
    transformer: &mut T,
    term: Term,
) -> Result<Term, T::Error> {
    Ok(match term {
        Term::Variable(variable) => Term::Variable(transformer.transform_variable(variable)?),
        Term::Symbolic(symbolic) => Term::Symbolic(symbolic),
        Term::Function(function) => Term::Function(FunctionTerm {
            origin: function.origin,
            name: function.name,
            terms: walk_terms(transformer, function.terms)?,
        }),
        Term::Operation(operation) => Term::Operation(Operation {
            origin: operation.origin,
            kind: operation.kind,
            subterms: walk_terms(transformer, operation.subterms)?,
        }),
    })
}

fn walk_terms<T: Transformer + ?Sized>(
    transformer: &mut T,
    terms: Vec<Term>,
) -> Result<Vec<Term>, T::Error> {
    terms
        .into_iter()
        .map(|term| transformer.transform_term(term))
        .collect()
}

fn walk_literals<T: Transformer + ?Sized>(
    transformer: &mut T,
    literals: Vec<Literal>,
) -> Result<Vec<Literal>, T::Error> {
    literals
        .into_iter()
        .map(|literal| transformer.transform_literal(literal))
        .collect()
}

fn walk_guard<T: Transformer + ?Sized>(
    transformer: &mut T,
    guard: Option<Guard>,
) -> Result<Option<Guard>, T::Error> {
    guard
        .map(|guard| {
            Ok(Guard {
                operator: guard.operator,
                term: transformer.transform_term(guard.term)?,
            })
        })
        .transpose()
}

#[cfg(test)]
mod test {
    use std::convert::Infallible;

    use crate::{
        parser::parse_single_statement,
        rule_model::{
            components::{
                atom::Atom,
                literal::Literal,
                rule::{BodyLiteral, Head, Rule},
                term::{Term, Variable},
                ProgramComponent,
            },
            origin::Origin,
        },
    };

    use super::Transformer;

    /// Renames every variable to lower case
    struct Lowercase;

    impl Transformer for Lowercase {
        type Error = Infallible;

        fn transform_variable(&mut self, variable: Variable) -> Result<Variable, Self::Error> {
            Ok(Variable::new(&variable.name().to_lowercase()).set_origin(*variable.origin()))
        }
    }

    #[test]
    fn default_walk_rebuilds_children() {
        let rule = Rule::new(
            Head::Literal(Literal::positive(Atom::symbolic(Term::function(
                "p",
                vec![Term::variable("X")],
            )))),
            vec![BodyLiteral::Literal(Literal::negative(Atom::symbolic(
                Term::function("q", vec![Term::variable("Y"), Term::number(1)]),
            )))],
        )
        .set_origin(Origin::file(0, 14));

        let result = Lowercase.transform_rule(rule).unwrap();

        assert_eq!(result.to_string(), "p(x) :- not q(y,1).");
        assert_eq!(result.origin(), &Origin::file(0, 14));
    }

    #[test]
    fn default_walk_visits_operations_and_aggregates() {
        let statement = parse_single_statement("a :- #sum { X+1,Y : p(X,Y) } > Z, b(Z) : c(-Z).")
            .unwrap();

        let result = Lowercase.transform_statement(statement).unwrap();

        assert_eq!(
            result.to_string(),
            "a :- #sum { x+1,y: p(x,y) } > z, b(z): c(-z)."
        );
    }
}
