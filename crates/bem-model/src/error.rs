//! Error types for model document operations.

use bem_core::{BemError, Handle};
use thiserror::Error;

/// Errors that can occur when manipulating a model document.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Unknown {what} handle: {handle}")]
    UnknownHandle { what: &'static str, handle: Handle },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type ModelResult<T> = Result<T, ModelError>;

impl From<ModelError> for BemError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::UnknownHandle { what, handle } => BemError::UnknownHandle { what, handle },
            ModelError::InvalidArg { what } => BemError::InvalidArg { what },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_the_handle() {
        let handle = Handle::new();
        let err = ModelError::UnknownHandle {
            what: "schedule",
            handle,
        };
        assert!(err.to_string().contains(&handle.to_string()));
    }

    #[test]
    fn error_conversion() {
        let err = ModelError::InvalidArg { what: "test" };
        let core: BemError = err.into();
        assert!(matches!(core, BemError::InvalidArg { .. }));
    }
}
