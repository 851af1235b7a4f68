//! Refrigerated display case component.

use bem_core::Handle;
use bem_model::Model;
use bem_schedule::{check_or_assign_limits, table};

use crate::error::{ComponentError, ComponentResult};

/// A refrigerated display case.
///
/// Three schedule slots: availability (discrete 0/1), defrost drip-down
/// (fraction), and restocking (W/m of case, bounded below only — its
/// limits object is never shared with other slots).
#[derive(Clone, Debug)]
pub struct RefrigerationCase {
    /// Component name for debugging
    pub name: String,
    /// Rated cooling capacity per unit length of case (W/m)
    pub rated_total_cooling_capacity_per_unit_length: f64,
    /// Air temperature inside the case (C)
    pub case_operating_temperature: f64,
    availability_schedule: Option<Handle>,
    case_defrost_drip_down_schedule: Option<Handle>,
    restocking_schedule: Option<Handle>,
}

impl RefrigerationCase {
    /// # Errors
    /// Returns an error if the rated capacity is not positive.
    pub fn new(
        name: String,
        rated_total_cooling_capacity_per_unit_length: f64,
        case_operating_temperature: f64,
    ) -> ComponentResult<Self> {
        if rated_total_cooling_capacity_per_unit_length <= 0.0 {
            return Err(ComponentError::InvalidArg {
                what: "rated cooling capacity must be positive",
            });
        }

        Ok(Self {
            name,
            rated_total_cooling_capacity_per_unit_length,
            case_operating_temperature,
            availability_schedule: None,
            case_defrost_drip_down_schedule: None,
            restocking_schedule: None,
        })
    }

    pub fn availability_schedule(&self) -> Option<Handle> {
        self.availability_schedule
    }

    pub fn case_defrost_drip_down_schedule(&self) -> Option<Handle> {
        self.case_defrost_drip_down_schedule
    }

    pub fn restocking_schedule(&self) -> Option<Handle> {
        self.restocking_schedule
    }

    pub fn set_availability_schedule(&mut self, model: &mut Model, schedule: Handle) -> bool {
        let ok = check_or_assign_limits(&table::REFRIGERATION_CASE_AVAILABILITY, model, schedule)
            .unwrap_or(false);
        if ok {
            self.availability_schedule = Some(schedule);
        }
        ok
    }

    pub fn set_case_defrost_drip_down_schedule(
        &mut self,
        model: &mut Model,
        schedule: Handle,
    ) -> bool {
        let ok = check_or_assign_limits(
            &table::REFRIGERATION_CASE_DEFROST_DRIP_DOWN,
            model,
            schedule,
        )
        .unwrap_or(false);
        if ok {
            self.case_defrost_drip_down_schedule = Some(schedule);
        }
        ok
    }

    pub fn set_restocking_schedule(&mut self, model: &mut Model, schedule: Handle) -> bool {
        let ok = check_or_assign_limits(&table::REFRIGERATION_CASE_RESTOCKING, model, schedule)
            .unwrap_or(false);
        if ok {
            self.restocking_schedule = Some(schedule);
        }
        ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_validates_capacity() {
        assert!(RefrigerationCase::new("Case".to_string(), 0.0, 2.0).is_err());
        assert!(RefrigerationCase::new("Case".to_string(), 1900.0, 2.0).is_ok());
    }
}
