//! API to parse LP^MLN programs and rewrite them into answer set programs
//!
//! # Examples
//! ```
//! use lpmln::{api::translate_string, TranslationMode};
//!
//! let mode = TranslationMode::default().with_power_of_ten(0);
//! let program = translate_string("2 : a :- b.", mode).unwrap();
//!
//! assert_eq!(
//!     program.to_string(),
//!     "{ a } :- b, #true.\n:~ not a, b, #true. [2@0,0,()]\n"
//! );
//! ```

use std::{fs::read_to_string, path::PathBuf};

use crate::{
    error::Error,
    parser::parse_program,
    rule_model::program::Program,
    translation::{mode::TranslationMode, RuleTransformer},
};

/// Load the given `file` and parse the program it contains.
///
/// For details see [load_string]
pub fn load(file: PathBuf) -> Result<Program, Error> {
    let input = read_to_string(file)?;
    load_string(&input)
}

/// Parse the LP^MLN program in the given `input`-string.
///
/// # Error
/// Returns [Error::ParseError] if the input is not a valid program.
pub fn load_string(input: &str) -> Result<Program, Error> {
    Ok(parse_program(input)?)
}

/// Rewrite `program` into an answer set program using the given [TranslationMode].
///
/// # Error
/// Returns [Error::TranslationError] for the first rule that cannot be rewritten.
pub fn translate(program: Program, mode: TranslationMode) -> Result<Program, Error> {
    let mut transformer = RuleTransformer::new(mode);
    let mut result = Program::default();

    transformer.translate_program(program, &mut result)?;
    log::info!(
        "translated program with {} indexed rules into {} statements",
        transformer.rule_index(),
        result.len()
    );

    Ok(result)
}

/// Parse the program in `input` and rewrite it.
///
/// For details see [load_string] and [translate]
pub fn translate_string(input: &str, mode: TranslationMode) -> Result<Program, Error> {
    translate(load_string(input)?, mode)
}
