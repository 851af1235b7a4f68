use core::fmt;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a model object.
///
/// Handles are drawn once when an object enters a model document and
/// never change afterwards, so handle equality is object identity even
/// across renames. Two independent documents never share handles.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Handle(Uuid);

impl Handle {
    /// Draw a fresh random handle.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying uuid.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for Handle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({})", self.0)
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for Handle {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_are_unique() {
        let a = Handle::new();
        let b = Handle::new();
        assert_ne!(a, b);
    }

    #[test]
    fn handle_round_trips_through_uuid() {
        let h = Handle::new();
        let u = *h.as_uuid();
        assert_eq!(Handle::from(u), h);
    }
}
