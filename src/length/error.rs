use thiserror::Error;

/// Why a distance string was rejected. Every variant keeps the full input
/// so messages can quote it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid distance {input:?}")]
    InvalidSyntax { input: String },
    #[error("missing unit in distance {input:?}")]
    MissingUnit { input: String },
    #[error("unknown unit {unit:?} in distance {input:?}")]
    UnknownUnit { unit: String, input: String },
    #[error("distance {input:?} is out of range")]
    Overflow { input: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    InvalidSyntax,
    MissingUnit,
    UnknownUnit,
    Overflow,
}

impl ParseError {
    pub(crate) fn invalid(input: &str) -> Self {
        ParseError::InvalidSyntax {
            input: input.to_string(),
        }
    }

    pub(crate) fn missing_unit(input: &str) -> Self {
        ParseError::MissingUnit {
            input: input.to_string(),
        }
    }

    pub(crate) fn unknown_unit(unit: &str, input: &str) -> Self {
        ParseError::UnknownUnit {
            unit: unit.to_string(),
            input: input.to_string(),
        }
    }

    pub(crate) fn overflow(input: &str) -> Self {
        ParseError::Overflow {
            input: input.to_string(),
        }
    }

    pub fn kind(&self) -> ParseErrorKind {
        match self {
            ParseError::InvalidSyntax { .. } => ParseErrorKind::InvalidSyntax,
            ParseError::MissingUnit { .. } => ParseErrorKind::MissingUnit,
            ParseError::UnknownUnit { .. } => ParseErrorKind::UnknownUnit,
            ParseError::Overflow { .. } => ParseErrorKind::Overflow,
        }
    }

    /// The original string handed to the parser.
    pub fn input(&self) -> &str {
        match self {
            ParseError::InvalidSyntax { input }
            | ParseError::MissingUnit { input }
            | ParseError::UnknownUnit { input, .. }
            | ParseError::Overflow { input } => input,
        }
    }

    /// The offending unit suffix, or `""` for errors not tied to a unit.
    pub fn fragment(&self) -> &str {
        match self {
            ParseError::UnknownUnit { unit, .. } => unit,
            _ => "",
        }
    }
}
