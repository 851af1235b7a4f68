//! Compatibility between schedule types and limits objects.

use bem_model::{ScheduleTypeLimits, UnitType};

use crate::types::ScheduleType;

/// True iff `limits` can serve a slot declared as `schedule_type`.
///
/// The candidate must not be more restrictive than the slot requires:
///
/// - a candidate numeric type, when present, must match the slot's
///   continuous/discrete flag (absent accepts either);
/// - the candidate unit type must equal the slot's (absent is read as
///   dimensionless);
/// - where the slot defines a lower bound, the candidate's lower bound
///   must not exceed it; where the slot defines an upper bound, the
///   candidate's must not fall below it. An absent bound on either
///   side is always compatible on that side.
pub fn is_compatible(schedule_type: &ScheduleType, limits: &ScheduleTypeLimits) -> bool {
    if let Some(numeric_type) = limits.numeric_type {
        if numeric_type != schedule_type.numeric_type() {
            return false;
        }
    }

    let candidate_unit = limits.unit_type.unwrap_or(UnitType::Dimensionless);
    if candidate_unit != schedule_type.unit_type {
        return false;
    }

    if let (Some(required), Some(candidate)) = (schedule_type.lower_limit, limits.lower_limit) {
        if candidate > required {
            return false;
        }
    }
    if let (Some(required), Some(candidate)) = (schedule_type.upper_limit, limits.upper_limit) {
        if candidate < required {
            return false;
        }
    }

    true
}
