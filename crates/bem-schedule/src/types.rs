//! The schedule-type value struct.

use bem_model::{NumericType, UnitType};

/// The value domain a component class declares for one schedule slot.
///
/// Entries are const-constructible so the registration table can be
/// built at compile time; see [`crate::table`]. The
/// (class name, display name) pair is unique across the table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleType {
    /// Owning component class, e.g. "RefrigerationCase".
    pub class_name: &'static str,
    /// Human-readable slot name, e.g. "Case Defrost Drip-Down".
    pub display_name: &'static str,
    /// Field/relationship on the owner that points at the schedule.
    pub relationship_name: &'static str,
    /// True for real-valued schedules, false for integer/discrete.
    pub continuous: bool,
    pub unit_type: UnitType,
    /// Lower bound on schedule values; absent means unbounded below.
    pub lower_limit: Option<f64>,
    /// Upper bound on schedule values; absent means unbounded above.
    pub upper_limit: Option<f64>,
}

impl ScheduleType {
    pub fn numeric_type(&self) -> NumericType {
        if self.continuous {
            NumericType::Continuous
        } else {
            NumericType::Discrete
        }
    }

    /// True when both bounds are present.
    ///
    /// Partially-bounded and unbounded types never share limits
    /// objects; see [`crate::resolve::get_or_create_limits`].
    pub fn is_fully_bounded(&self) -> bool {
        self.lower_limit.is_some() && self.upper_limit.is_some()
    }
}
