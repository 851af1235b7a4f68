//! Electric heating coil component.

use bem_core::Handle;
use bem_model::{AutosizableValue, Model};
use bem_schedule::{check_or_assign_limits, table};

use crate::error::{ComponentError, ComponentResult};

/// An electric resistance heating coil.
#[derive(Clone, Debug)]
pub struct CoilHeatingElectric {
    /// Component name for debugging
    pub name: String,
    /// Conversion efficiency (0 < eta <= 1)
    pub efficiency: f64,
    nominal_capacity_w: AutosizableValue,
    availability_schedule: Option<Handle>,
}

impl CoilHeatingElectric {
    /// Create a new coil with the capacity left to the sizing engine.
    ///
    /// # Errors
    /// Returns an error if the efficiency is out of (0,1].
    pub fn new(name: String, efficiency: f64) -> ComponentResult<Self> {
        if efficiency <= 0.0 || efficiency > 1.0 {
            return Err(ComponentError::InvalidArg {
                what: "coil efficiency must be in (0,1]",
            });
        }

        Ok(Self {
            name,
            efficiency,
            nominal_capacity_w: AutosizableValue::Autosize,
            availability_schedule: None,
        })
    }

    pub fn availability_schedule(&self) -> Option<Handle> {
        self.availability_schedule
    }

    pub fn set_availability_schedule(&mut self, model: &mut Model, schedule: Handle) -> bool {
        let ok = check_or_assign_limits(&table::COIL_HEATING_ELECTRIC_AVAILABILITY, model, schedule)
            .unwrap_or(false);
        if ok {
            self.availability_schedule = Some(schedule);
        }
        ok
    }

    pub fn nominal_capacity(&self) -> Option<f64> {
        self.nominal_capacity_w.value()
    }

    pub fn is_nominal_capacity_autosized(&self) -> bool {
        self.nominal_capacity_w.is_autosized()
    }

    /// # Errors
    /// Returns an error for a non-positive capacity.
    pub fn set_nominal_capacity(&mut self, capacity_w: f64) -> ComponentResult<()> {
        if capacity_w <= 0.0 {
            return Err(ComponentError::InvalidArg {
                what: "nominal capacity must be positive",
            });
        }
        self.nominal_capacity_w = AutosizableValue::Value(capacity_w);
        Ok(())
    }

    /// Hand the capacity back to the sizing engine.
    pub fn autosize_nominal_capacity(&mut self) {
        self.nominal_capacity_w = AutosizableValue::Autosize;
    }
}
