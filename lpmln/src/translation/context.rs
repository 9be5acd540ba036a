//! This module defines [RuleContext], the information collected while visiting a single rule.

use crate::rule_model::components::{literal::Literal, term::Variable};

use super::{annotation::TheoryKind, weight::Weight};

/// Weight of a rule
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RuleWeight {
    /// Rule without explicit weight
    #[default]
    Hard,
    /// Rule with the given weight
    Soft(Weight),
}

/// Information about the rule that is currently translated
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RuleContext {
    /// Weight found in an annotation
    pub(crate) weight: RuleWeight,
    /// Special treatment requested by an annotation
    pub(crate) theory_kind: Option<TheoryKind>,
    /// Distinct variables of the rule in order of their first occurrence
    pub(crate) global_variables: Vec<Variable>,
    /// Literal produced from an evidence annotation
    pub(crate) evidence: Option<Literal>,
    /// Index of the rule within the translation session
    pub(crate) rule_index: usize,
}

impl RuleContext {
    /// Create a fresh [RuleContext] for the rule with the given index.
    pub fn new(rule_index: usize) -> Self {
        Self {
            rule_index,
            ..Default::default()
        }
    }

    /// Return the weight of the rule.
    pub fn weight(&self) -> RuleWeight {
        self.weight
    }

    /// Return the kind of special treatment requested for this rule, if any.
    pub fn theory_kind(&self) -> Option<TheoryKind> {
        self.theory_kind
    }

    /// Return the distinct variables of the rule.
    pub fn global_variables(&self) -> &[Variable] {
        &self.global_variables
    }

    /// Return the index of the rule.
    pub fn rule_index(&self) -> usize {
        self.rule_index
    }

    /// Record a variable unless it is anonymous or already known.
    pub fn add_variable(&mut self, variable: &Variable) {
        if !variable.is_anonymous() && !self.global_variables.contains(variable) {
            self.global_variables.push(variable.clone());
        }
    }
}
