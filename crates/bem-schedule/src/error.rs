//! Error types for schedule-type lookups and assignment.

use bem_core::{BemError, Handle};
use thiserror::Error;

/// Errors that can occur when resolving schedule types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleTypeError {
    /// No entry registered for this (class, slot) pair.
    ///
    /// The pair space is fixed at compile time, so reaching this from
    /// component code indicates a registration bug rather than bad
    /// runtime data. Component setters avoid it entirely by using the
    /// const slot entries in [`crate::table`].
    #[error("No schedule type registered for class '{class_name}', slot '{display_name}'")]
    UnregisteredSlot {
        class_name: String,
        display_name: String,
    },

    /// The schedule handle is not in the given model.
    #[error("Unknown schedule handle: {0}")]
    UnknownSchedule(Handle),
}

pub type ScheduleTypeResult<T> = Result<T, ScheduleTypeError>;

impl From<ScheduleTypeError> for BemError {
    fn from(e: ScheduleTypeError) -> Self {
        match e {
            ScheduleTypeError::UnregisteredSlot { .. } => BemError::Invariant {
                what: "unregistered schedule type slot",
            },
            ScheduleTypeError::UnknownSchedule(handle) => BemError::UnknownHandle {
                what: "schedule",
                handle,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_the_pair() {
        let err = ScheduleTypeError::UnregisteredSlot {
            class_name: "Nonexistent".to_string(),
            display_name: "Slot".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Nonexistent"));
        assert!(msg.contains("Slot"));
    }
}
