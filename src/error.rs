use thiserror::Error;

use crate::diagnostic::Diagnostic;
use crate::span::Span;

/// Why a symbolic variable could not be built or used.
///
/// Every variant is a deterministic contract violation between the driver and
/// the encoder; none of them is worth retrying.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EncodingError {
    #[error("type `{0}` has no SMT sort")]
    UnsupportedType(String),
    #[error("{variant} variable `{name}` cannot model type `{ty}`")]
    CategoryMismatch {
        variant: &'static str,
        name: String,
        ty: String,
    },
    #[error("fixed bytes variable `{name}` cannot be {bytes} bytes wide")]
    InvalidByteWidth { name: String, bytes: u32 },
    #[error("string literal `{name}` has {len} bytes and does not fit in bytes{bytes}")]
    LiteralTooWide { name: String, len: usize, bytes: u8 },
    #[error("sort `{sort}` of `{name}` is not a function sort")]
    NotAFunctionSort { name: String, sort: String },
    #[error("`{name}` is a {found} variable, not a {expected} variable")]
    WrongVariant {
        name: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("`{name}` expects {expected} arguments, got {found}")]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
    },
    #[error("symbol `{0}` is already owned by another symbolic variable")]
    DuplicateName(String),
    #[error("symbol `{name}` was declared with sort {existing}, requested {requested}")]
    SortMismatch {
        name: String,
        existing: String,
        requested: String,
    },
}

impl EncodingError {
    /// Diagnostic for the driver, anchored at the declaration being encoded.
    pub fn to_diagnostic(&self, span: Span) -> Diagnostic {
        let diag = Diagnostic::error(self.to_string(), span);
        match self {
            EncodingError::UnsupportedType(_) => diag.with_note(
                "the SMT encoding does not model this type; the variable cannot be verified"
                    .to_string(),
            ),
            EncodingError::DuplicateName(_) | EncodingError::SortMismatch { .. } => diag
                .with_help(
                    "every symbolic variable in one encoding session needs a distinct base name"
                        .to_string(),
                ),
            EncodingError::InvalidByteWidth { .. } => {
                diag.with_help("fixed bytes types range from bytes1 to bytes32".to_string())
            }
            _ => diag,
        }
    }
}
