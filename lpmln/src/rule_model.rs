//! This module defines the representation of LP^MLN programs

pub mod components;
pub mod origin;
pub mod program;
pub mod transform;
