//! Error taxonomy shared by the card, deck and vector modules.
//!
//! Each module owns its error enum; `ErrorKind` classifies them so callers can
//! react to the class of failure without matching every variant.

use std::fmt;

/// Broad classification of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// An operand of an unsupported type was supplied.
    Type,
    /// An integer index fell outside the valid range.
    Index,
    /// The operation is well-typed but undefined for the given value.
    Value,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::Type => "type error",
            ErrorKind::Index => "index error",
            ErrorKind::Value => "value error",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_class() {
        assert_eq!(ErrorKind::Type.to_string(), "type error");
        assert_eq!(ErrorKind::Index.to_string(), "index error");
        assert_eq!(ErrorKind::Value.to_string(), "value error");
    }
}
