//! This module defines [OperationKind].
#![allow(missing_docs)]

use std::fmt::Display;

use enum_assoc::Assoc;

/// Arithmetic operations and intervals
#[derive(Assoc, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[func(pub fn symbol(&self) -> &'static str)]
#[func(pub fn from_infix(symbol: &str) -> Option<Self>)]
#[func(pub fn precedence(&self) -> usize)]
#[func(pub fn is_unary(&self) -> bool)]
#[func(pub fn is_right_associative(&self) -> bool)]
pub enum OperationKind {
    /// Interval `l..u`
    #[assoc(symbol = "..")]
    #[assoc(from_infix = "..")]
    #[assoc(precedence = 0)]
    #[assoc(is_unary = false)]
    #[assoc(is_right_associative = false)]
    Interval,
    /// Sum of two integers
    #[assoc(symbol = "+")]
    #[assoc(from_infix = "+")]
    #[assoc(precedence = 1)]
    #[assoc(is_unary = false)]
    #[assoc(is_right_associative = false)]
    Sum,
    /// Difference of two integers
    #[assoc(symbol = "-")]
    #[assoc(from_infix = "-")]
    #[assoc(precedence = 1)]
    #[assoc(is_unary = false)]
    #[assoc(is_right_associative = false)]
    Subtraction,
    /// Product of two integers
    #[assoc(symbol = "*")]
    #[assoc(from_infix = "*")]
    #[assoc(precedence = 2)]
    #[assoc(is_unary = false)]
    #[assoc(is_right_associative = false)]
    Product,
    /// Integer division
    #[assoc(symbol = "/")]
    #[assoc(from_infix = "/")]
    #[assoc(precedence = 2)]
    #[assoc(is_unary = false)]
    #[assoc(is_right_associative = false)]
    Division,
    /// Remainder of an integer division
    #[assoc(symbol = "\\")]
    #[assoc(from_infix = "\\")]
    #[assoc(precedence = 2)]
    #[assoc(is_unary = false)]
    #[assoc(is_right_associative = false)]
    Modulo,
    /// Exponentiation
    #[assoc(symbol = "**")]
    #[assoc(from_infix = "**")]
    #[assoc(precedence = 3)]
    #[assoc(is_unary = false)]
    #[assoc(is_right_associative = true)]
    Power,
    /// Unary minus, which is classical negation when applied to an atom
    #[assoc(symbol = "-")]
    #[assoc(precedence = 4)]
    #[assoc(is_unary = true)]
    #[assoc(is_right_associative = false)]
    Negation,
}

impl Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
