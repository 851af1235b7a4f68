//! Schedule-side model objects.

use bem_core::Handle;
use serde::{Deserialize, Serialize};

use crate::units::{NumericType, UnitType};

/// A model object declaring the legal value domain for schedules.
///
/// Every field other than the name is optional: an absent bound means
/// unbounded on that side, an absent numeric type accepts either
/// continuous or discrete values, and an absent unit type is read as
/// dimensionless.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleTypeLimits {
    pub(crate) handle: Handle,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeric_type: Option<NumericType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_type: Option<UnitType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower_limit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper_limit: Option<f64>,
}

impl ScheduleTypeLimits {
    /// Create a named limits object with every constraint left open.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            handle: Handle::new(),
            name: name.into(),
            numeric_type: None,
            unit_type: None,
            lower_limit: None,
            upper_limit: None,
        }
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }
}

/// A model object describing a time-varying value.
///
/// The schedule's value domain is declared by an assigned
/// [`ScheduleTypeLimits`]; assignment is mediated by the model so the
/// referenced limits object is known to exist in the same document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub(crate) handle: Handle,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) limits: Option<Handle>,
}

impl Schedule {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            handle: Handle::new(),
            name: name.into(),
            limits: None,
        }
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }

    /// Handle of the assigned limits object, if any.
    pub fn schedule_type_limits(&self) -> Option<Handle> {
        self.limits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_limits_are_unconstrained() {
        let limits = ScheduleTypeLimits::new("Fraction");
        assert_eq!(limits.name, "Fraction");
        assert!(limits.numeric_type.is_none());
        assert!(limits.unit_type.is_none());
        assert!(limits.lower_limit.is_none());
        assert!(limits.upper_limit.is_none());
    }

    #[test]
    fn fresh_schedule_has_no_limits() {
        let schedule = Schedule::new("Occupancy");
        assert!(schedule.schedule_type_limits().is_none());
    }
}
