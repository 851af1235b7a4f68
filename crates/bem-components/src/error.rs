//! Error types for component construction.

use bem_core::BemError;
use thiserror::Error;

/// Errors that can occur when building component objects.
#[derive(Error, Debug, Clone)]
pub enum ComponentError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type ComponentResult<T> = Result<T, ComponentError>;

impl From<ComponentError> for BemError {
    fn from(e: ComponentError) -> Self {
        match e {
            ComponentError::InvalidArg { what } => BemError::InvalidArg { what },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ComponentError::InvalidArg { what: "efficiency" };
        assert!(err.to_string().contains("efficiency"));
    }
}
