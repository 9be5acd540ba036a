//! This module defines [BodyAggregate] and [AggregateFunction].
#![allow(missing_docs)]

use std::{fmt::Display, hash::Hash};

use enum_assoc::Assoc;

use crate::rule_model::origin::Origin;

use super::{
    aggregate::Guard, literal::Literal, term::Term, term::Variable, write_separated,
    IterableVariables, ProgramComponent, ProgramComponentKind,
};

/// Function computed by a [BodyAggregate]
#[derive(Assoc, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[func(pub fn name(&self) -> &'static str)]
#[func(pub fn from_name(name: &str) -> Option<Self>)]
pub enum AggregateFunction {
    /// Number of distinct tuples
    #[assoc(name = "#count")]
    #[assoc(from_name = "#count")]
    Count,
    /// Sum of the first elements of distinct tuples
    #[assoc(name = "#sum")]
    #[assoc(from_name = "#sum")]
    Sum,
    /// Sum restricted to positive weights
    #[assoc(name = "#sum+")]
    #[assoc(from_name = "#sum+")]
    SumPlus,
    /// Smallest first element
    #[assoc(name = "#min")]
    #[assoc(from_name = "#min")]
    Min,
    /// Largest first element
    #[assoc(name = "#max")]
    #[assoc(from_name = "#max")]
    Max,
}

impl Display for AggregateFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Element of a [BodyAggregate], as in `X,Y : p(X,Y)`
///
/// Variables that occur only here are local to the element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BodyAggregateElement {
    /// Tuple that is aggregated
    pub terms: Vec<Term>,
    /// Condition under which the tuple is included
    pub condition: Vec<Literal>,
}

impl BodyAggregateElement {
    /// Create a new [BodyAggregateElement].
    pub fn new(terms: Vec<Term>, condition: Vec<Literal>) -> Self {
        Self { terms, condition }
    }
}

impl Display for BodyAggregateElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_separated(f, &self.terms, ",")?;

        if !self.condition.is_empty() {
            f.write_str(": ")?;
            write_separated(f, &self.condition, ", ")?;
        }

        Ok(())
    }
}

impl IterableVariables for BodyAggregateElement {
    fn variables<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Variable> + 'a> {
        Box::new(
            self.terms
                .iter()
                .flat_map(|term| term.variables())
                .chain(self.condition.iter().flat_map(|literal| literal.variables())),
        )
    }
}

/// Body aggregate
///
/// Aggregate function applied to a set of tuples and compared against bounds,
/// as in `#count { X : p(X) } >= 2`.
#[derive(Debug, Clone, Eq)]
pub struct BodyAggregate {
    /// Origin of this component
    pub(crate) origin: Origin,

    /// Aggregate function
    pub(crate) function: AggregateFunction,
    /// Left bound
    pub(crate) left_guard: Option<Guard>,
    /// Elements
    pub(crate) elements: Vec<BodyAggregateElement>,
    /// Right bound
    pub(crate) right_guard: Option<Guard>,
}

impl BodyAggregate {
    /// Create a new [BodyAggregate].
    pub fn new(
        function: AggregateFunction,
        left_guard: Option<Guard>,
        elements: Vec<BodyAggregateElement>,
        right_guard: Option<Guard>,
    ) -> Self {
        Self {
            origin: Origin::Created,
            function,
            left_guard,
            elements,
            right_guard,
        }
    }

    /// Return the aggregate function.
    pub fn function(&self) -> AggregateFunction {
        self.function
    }

    /// Return the left bound of this aggregate.
    pub fn left_guard(&self) -> Option<&Guard> {
        self.left_guard.as_ref()
    }

    /// Return the right bound of this aggregate.
    pub fn right_guard(&self) -> Option<&Guard> {
        self.right_guard.as_ref()
    }

    /// Return the elements of this aggregate.
    pub fn elements(&self) -> &[BodyAggregateElement] {
        &self.elements
    }
}

impl Display for BodyAggregate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(guard) = &self.left_guard {
            write!(f, "{} {} ", guard.term, guard.operator)?;
        }

        write!(f, "{} {{ ", self.function)?;
        write_separated(f, &self.elements, "; ")?;
        f.write_str(" }")?;

        if let Some(guard) = &self.right_guard {
            write!(f, " {} {}", guard.operator, guard.term)?;
        }

        Ok(())
    }
}

impl PartialEq for BodyAggregate {
    fn eq(&self, other: &Self) -> bool {
        self.function == other.function
            && self.left_guard == other.left_guard
            && self.elements == other.elements
            && self.right_guard == other.right_guard
    }
}

impl Hash for BodyAggregate {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.function.hash(state);
        self.left_guard.hash(state);
        self.elements.hash(state);
        self.right_guard.hash(state);
    }
}

impl ProgramComponent for BodyAggregate {
    fn kind(&self) -> ProgramComponentKind {
        ProgramComponentKind::BodyAggregate
    }

    fn origin(&self) -> &Origin {
        &self.origin
    }

    fn set_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }
}

impl IterableVariables for BodyAggregate {
    fn variables<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Variable> + 'a> {
        let guards = self
            .left_guard
            .iter()
            .chain(self.right_guard.iter())
            .flat_map(|guard| guard.term.variables());

        Box::new(
            guards.chain(
                self.elements
                    .iter()
                    .flat_map(|element| element.variables()),
            ),
        )
    }
}
