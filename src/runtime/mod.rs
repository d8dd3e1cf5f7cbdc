pub mod builtin;
pub mod builtin_registry;
pub mod builtins;
pub mod object;
pub mod value;

#[cfg(test)]
pub(crate) mod testing;

use miette::Diagnostic;
use std::fmt::Display;
use strum::{Display as StrumDisplay, IntoStaticStr};

pub use builtins::array::Array;
pub use object::{Callback, Object};
pub use value::Value;

pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// The failure classes a builtin can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// An index fell outside `0..length`.
    IndexOutOfRange,
    /// An attribute could not be resolved or its evaluation failed.
    Resolution,
    /// A value could not be forced into the requested primitive.
    Conversion,
    /// A native argument was well-typed but semantically invalid.
    InvalidArgument,
}

impl ErrorKind {
    fn help(self) -> &'static str {
        match self {
            ErrorKind::IndexOutOfRange => "valid indices run from 0 to length - 1",
            ErrorKind::Resolution => {
                "check that the object exposes the attribute with the expected number of arguments"
            }
            ErrorKind::Conversion => "the value was dataized to a different primitive type",
            ErrorKind::InvalidArgument => "check the argument values passed to the builtin",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeError {
    pub kind: ErrorKind,
    pub message: String,
}

impl RuntimeError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn index_out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IndexOutOfRange, message)
    }

    pub fn resolution(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Resolution, message)
    }

    pub fn conversion(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conversion, message)
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }
}

impl Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for RuntimeError {}

impl Diagnostic for RuntimeError {
    fn code<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        Some(Box::new(format!("eo::{}", self.kind)))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(miette::Severity::Error)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        Some(Box::new(self.kind.help()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_is_reported_as_diagnostic_code() {
        let error = RuntimeError::index_out_of_range("index 3 is out of bounds");
        let code = error.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("eo::index_out_of_range"));
        assert_eq!(error.to_string(), "index 3 is out of bounds");
        assert!(error.is(ErrorKind::IndexOutOfRange));
        assert!(!error.is(ErrorKind::Resolution));
    }

    #[test]
    fn test_error_kind_names() {
        let name: &'static str = ErrorKind::InvalidArgument.into();
        assert_eq!(name, "invalid_argument");
        assert_eq!(ErrorKind::Conversion.to_string(), "conversion");
    }

    #[test]
    fn test_every_error_carries_help() {
        let error = RuntimeError::resolution("attribute 'each' not found");
        assert!(error.help().is_some());
        assert_eq!(error.severity(), Some(miette::Severity::Error));
    }
}
