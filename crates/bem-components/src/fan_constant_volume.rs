//! Constant volume fan component.

use bem_core::Handle;
use bem_model::{AutosizableValue, Model};
use bem_schedule::{check_or_assign_limits, table};

use crate::error::{ComponentError, ComponentResult};

/// A fan delivering a fixed volumetric flow whenever available.
///
/// The availability slot takes a discrete 0/1 schedule; the maximum
/// flow rate is sizable and defaults to the autosize sentinel.
#[derive(Clone, Debug)]
pub struct FanConstantVolume {
    /// Component name for debugging
    pub name: String,
    /// Total efficiency (0 < eta <= 1), motor and impeller combined
    pub fan_total_efficiency: f64,
    /// Design pressure rise (Pa)
    pub pressure_rise_pa: f64,
    maximum_flow_rate_m3_per_s: AutosizableValue,
    availability_schedule: Option<Handle>,
}

impl FanConstantVolume {
    /// Create a new fan with the flow rate left to the sizing engine.
    ///
    /// # Errors
    /// Returns an error if parameters are out of physical bounds.
    pub fn new(
        name: String,
        fan_total_efficiency: f64,
        pressure_rise_pa: f64,
    ) -> ComponentResult<Self> {
        if fan_total_efficiency <= 0.0 || fan_total_efficiency > 1.0 {
            return Err(ComponentError::InvalidArg {
                what: "fan total efficiency must be in (0,1]",
            });
        }
        if pressure_rise_pa < 0.0 {
            return Err(ComponentError::InvalidArg {
                what: "pressure rise cannot be negative",
            });
        }

        Ok(Self {
            name,
            fan_total_efficiency,
            pressure_rise_pa,
            maximum_flow_rate_m3_per_s: AutosizableValue::Autosize,
            availability_schedule: None,
        })
    }

    pub fn availability_schedule(&self) -> Option<Handle> {
        self.availability_schedule
    }

    /// Accept an availability schedule after wiring compatible limits.
    ///
    /// Returns false (component and model unchanged) when the schedule
    /// already carries limits that cannot serve the availability slot.
    pub fn set_availability_schedule(&mut self, model: &mut Model, schedule: Handle) -> bool {
        let ok = check_or_assign_limits(&table::FAN_CONSTANT_VOLUME_AVAILABILITY, model, schedule)
            .unwrap_or(false);
        if ok {
            self.availability_schedule = Some(schedule);
        }
        ok
    }

    pub fn maximum_flow_rate(&self) -> Option<f64> {
        self.maximum_flow_rate_m3_per_s.value()
    }

    pub fn is_maximum_flow_rate_autosized(&self) -> bool {
        self.maximum_flow_rate_m3_per_s.is_autosized()
    }

    /// # Errors
    /// Returns an error for a non-positive flow rate.
    pub fn set_maximum_flow_rate(&mut self, flow_m3_per_s: f64) -> ComponentResult<()> {
        if flow_m3_per_s <= 0.0 {
            return Err(ComponentError::InvalidArg {
                what: "maximum flow rate must be positive",
            });
        }
        self.maximum_flow_rate_m3_per_s = AutosizableValue::Value(flow_m3_per_s);
        Ok(())
    }

    /// Hand the flow rate back to the sizing engine.
    pub fn autosize_maximum_flow_rate(&mut self) {
        self.maximum_flow_rate_m3_per_s = AutosizableValue::Autosize;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_validates_parameters() {
        assert!(FanConstantVolume::new("Fan".to_string(), 0.0, 500.0).is_err());
        assert!(FanConstantVolume::new("Fan".to_string(), 1.5, 500.0).is_err());
        assert!(FanConstantVolume::new("Fan".to_string(), 0.7, -1.0).is_err());
        assert!(FanConstantVolume::new("Fan".to_string(), 0.7, 500.0).is_ok());
    }

    #[test]
    fn flow_rate_starts_autosized() {
        let mut fan = FanConstantVolume::new("Fan".to_string(), 0.7, 500.0).unwrap();
        assert!(fan.is_maximum_flow_rate_autosized());
        assert_eq!(fan.maximum_flow_rate(), None);

        fan.set_maximum_flow_rate(1.2).unwrap();
        assert!(!fan.is_maximum_flow_rate_autosized());
        assert_eq!(fan.maximum_flow_rate(), Some(1.2));

        assert!(fan.set_maximum_flow_rate(-1.0).is_err());
        assert_eq!(fan.maximum_flow_rate(), Some(1.2));

        fan.autosize_maximum_flow_rate();
        assert!(fan.is_maximum_flow_rate_autosized());
    }
}
