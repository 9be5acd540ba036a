//! Translation of LP^MLN programs into answer set programs
//!
//! Weighted rules are rewritten in the "penalty way":
//! every soft rule is turned into ordinary rules together with a weak constraint
//! that charges the weight of the rule whenever it is violated.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts
)]
#![warn(
    missing_docs,
    unused_import_braces,
    unused_qualifications,
    unused_extern_crates,
    variant_size_differences
)]

pub mod api;
pub mod error;
pub mod parser;
pub mod rule_model;
pub mod translation;

pub use error::Error;
pub use translation::{mode::TranslationMode, RuleTransformer};
