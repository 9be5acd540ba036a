//! This module defines [Origin].

/// Origin of a [super::components::ProgramComponent]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Component has no special origin
    #[default]
    Created,
    /// Component was created by parsing a file
    File {
        /// Byte offset of the first character
        start: usize,
        /// Byte offset after the last character
        end: usize,
    },
}

impl Origin {
    /// Create an [Origin] pointing to a byte range of the input.
    pub fn file(start: usize, end: usize) -> Self {
        Self::File { start, end }
    }

    /// Return the byte range this origin points to, if any.
    pub fn range(&self) -> Option<std::ops::Range<usize>> {
        match self {
            Origin::Created => None,
            Origin::File { start, end } => Some(*start..*end),
        }
    }
}
