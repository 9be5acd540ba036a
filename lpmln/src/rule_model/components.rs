//! This module defines the logical components that make up a program.

pub mod aggregate;
pub mod atom;
pub mod body_aggregate;
mod kind;
pub mod literal;
pub mod minimize;
pub mod rule;
pub mod statement;
pub mod term;
pub mod theory;

use std::fmt::{Debug, Display};

use term::Variable;

use super::origin::Origin;

pub use kind::ProgramComponentKind;

/// Trait implemented by objects that are part of the logical rule model of LP^MLN programs.
pub trait ProgramComponent: Debug + Display {
    /// Return the [ProgramComponentKind] of this component.
    fn kind(&self) -> ProgramComponentKind;

    /// Return the [Origin] of this component.
    fn origin(&self) -> &Origin;

    /// Set the [Origin] of this component.
    fn set_origin(self, origin: Origin) -> Self
    where
        Self: Sized;
}

/// Trait implemented by program components that allow iterating over [Variable]s
pub trait IterableVariables {
    /// Return an iterator over all [Variable]s contained within this program component.
    fn variables<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Variable> + 'a>;
}

/// Write the elements of `items` separated by `separator`.
pub(crate) fn write_separated<Item: Display>(
    f: &mut std::fmt::Formatter<'_>,
    items: &[Item],
    separator: &str,
) -> std::fmt::Result {
    for (index, item) in items.iter().enumerate() {
        write!(f, "{item}")?;

        if index < items.len() - 1 {
            f.write_str(separator)?;
        }
    }

    Ok(())
}
