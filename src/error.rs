//! Error types for the solver.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SppError>;

/// Everything that can stop a solver run.
#[derive(Error, Debug)]
pub enum SppError {
    /// The instance is inconsistent with its declared dimensions.
    #[error("malformed instance: {0}")]
    MalformedInstance(String),

    /// An internal invariant was broken (a defect, never user input).
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),

    /// Search parameters out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Every candidate move is tabu or no swap exists.
    #[error("no move available in the current neighborhood")]
    NoMoveAvailable,

    /// I/O error on an instance or report path.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SppError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Io(_) => 2,
            Self::MalformedInstance(_) => 3,
            Self::PreconditionViolation(_) | Self::NoMoveAvailable => 4,
            Self::InvalidConfig(_) => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = SppError::MalformedInstance("element 7 out of range".into());
        assert_eq!(e.to_string(), "malformed instance: element 7 out of range");

        let e = SppError::NoMoveAvailable;
        assert!(e.to_string().contains("no move"));
    }

    #[test]
    fn test_io_conversion_and_exit_codes() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let e: SppError = io.into();
        assert!(matches!(e, SppError::Io(_)));
        assert_eq!(e.exit_code(), 2);
        assert_eq!(SppError::MalformedInstance(String::new()).exit_code(), 3);
        assert_eq!(SppError::PreconditionViolation(String::new()).exit_code(), 4);
        assert_eq!(SppError::InvalidConfig(String::new()).exit_code(), 5);
    }
}
