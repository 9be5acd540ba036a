//! Error-handling module for the crate

use std::ops::Range;

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::{parser::LocatedParseError, translation::error::TranslationError};

/// Error-Collection for all the possible Errors occurring in this crate
#[allow(variant_size_differences)]
#[derive(Error, Debug)]
pub enum Error {
    /// Parse errors
    #[error(transparent)]
    ParseError(#[from] LocatedParseError),
    /// Errors while rewriting the program
    #[error(transparent)]
    TranslationError(#[from] TranslationError),
    /// IO Error
    #[error(transparent)]
    IO(#[from] std::io::Error),
}

impl Error {
    /// Return the byte range of the input this error refers to, if known.
    pub fn range(&self) -> Option<Range<usize>> {
        match self {
            Error::ParseError(error) => {
                let offset = error.innermost().offset();
                Some(offset..offset + 1)
            }
            Error::TranslationError(error) => error.origin().range(),
            Error::IO(_) => None,
        }
    }

    /// Return the range of `input` this error refers to, counted in characters.
    pub fn character_range(&self, input: &str) -> Option<Range<usize>> {
        let range = self.range()?;
        let position = |offset: usize| {
            input
                .char_indices()
                .take_while(|(index, _)| *index < offset)
                .count()
        };

        Some(position(range.start)..position(range.end))
    }

    /// Build a [Report] pointing into `input` with the given label.
    ///
    /// Returns `None` if the error does not refer to a position of the input.
    pub fn report(
        &self,
        label: &str,
        input: &str,
    ) -> Option<Report<'static, (String, Range<usize>)>> {
        let range = self.character_range(input)?;

        let (message, note, code) = match self {
            Error::ParseError(error) => (error.innermost().kind().to_string(), None, None),
            Error::TranslationError(error) => (
                error.kind().to_string(),
                error.kind().note(),
                Some(error.kind().code()),
            ),
            Error::IO(_) => return None,
        };

        let mut report = Report::build(ReportKind::Error, label.to_string(), range.start)
            .with_message(&message)
            .with_label(
                Label::new((label.to_string(), range))
                    .with_message(message)
                    .with_color(Color::Red),
            );

        if let Some(note) = note {
            report = report.with_note(note);
        }
        if let Some(code) = code {
            report = report.with_code(code);
        }

        Some(report.finish())
    }

    /// Print this error to standard error.
    ///
    /// Errors that refer to a position of `input` are shown together with the source excerpt.
    pub fn eprint(&self, label: &str, input: &str) -> Result<(), std::io::Error> {
        match self.report(label, input) {
            Some(report) => report.eprint((label.to_string(), Source::from(input))),
            None => {
                eprintln!("{self}");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod test {
    use test_log::test;

    use crate::{
        parser::parse_program,
        rule_model::origin::Origin,
        translation::error::{TranslationError, TranslationErrorKind},
    };

    use super::Error;

    #[test]
    fn error_ranges() {
        let error: Error = TranslationError::new(
            TranslationErrorKind::MultipleWeights,
            Origin::file(3, 9),
        )
        .into();
        assert_eq!(error.range(), Some(3..9));
        assert!(error.report("input", "a :- b, &weight(1), &weight(2).").is_some());

        let error: Error = parse_program("a :- b\nc.").unwrap_err().into();
        assert!(error.range().is_some());

        let error: Error = TranslationError::new(
            TranslationErrorKind::MultipleWeights,
            Origin::Created,
        )
        .into();
        assert!(error.report("input", "a.").is_none());
    }

    #[test]
    fn character_ranges_skip_multibyte_characters() {
        let input = "% größe\na :- b, &weight(1), &weight(2).";
        let start = input.find("&weight(2)").unwrap();

        let error: Error = TranslationError::new(
            TranslationErrorKind::MultipleWeights,
            Origin::file(start, start + 10),
        )
        .into();

        assert_eq!(error.range(), Some(30..40));
        assert_eq!(error.character_range(input), Some(28..38));
        assert!(error.report("input", input).is_some());

        let input = "% ü\na :- .";
        let error: Error = parse_program(input).unwrap_err().into();
        let range = error.range().unwrap();
        assert!(range.start >= 5);
        assert_eq!(
            error.character_range(input),
            Some(range.start - 1..range.end - 1)
        );
    }
}
