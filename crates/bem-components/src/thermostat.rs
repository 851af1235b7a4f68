//! Dual setpoint thermostat component.

use bem_core::Handle;
use bem_model::Model;
use bem_schedule::{check_or_assign_limits, table};

/// A zone thermostat with separate heating and cooling setpoint
/// schedules.
///
/// Both slots declare unbounded temperature domains, so each resolved
/// schedule gets its own limits object rather than sharing one.
#[derive(Clone, Debug, Default)]
pub struct ThermostatSetpointDualSetpoint {
    /// Component name for debugging
    pub name: String,
    heating_setpoint_temperature_schedule: Option<Handle>,
    cooling_setpoint_temperature_schedule: Option<Handle>,
}

impl ThermostatSetpointDualSetpoint {
    pub fn new(name: String) -> Self {
        Self {
            name,
            heating_setpoint_temperature_schedule: None,
            cooling_setpoint_temperature_schedule: None,
        }
    }

    pub fn heating_setpoint_temperature_schedule(&self) -> Option<Handle> {
        self.heating_setpoint_temperature_schedule
    }

    pub fn cooling_setpoint_temperature_schedule(&self) -> Option<Handle> {
        self.cooling_setpoint_temperature_schedule
    }

    pub fn set_heating_setpoint_temperature_schedule(
        &mut self,
        model: &mut Model,
        schedule: Handle,
    ) -> bool {
        let ok = check_or_assign_limits(
            &table::THERMOSTAT_HEATING_SETPOINT_TEMPERATURE,
            model,
            schedule,
        )
        .unwrap_or(false);
        if ok {
            self.heating_setpoint_temperature_schedule = Some(schedule);
        }
        ok
    }

    pub fn set_cooling_setpoint_temperature_schedule(
        &mut self,
        model: &mut Model,
        schedule: Handle,
    ) -> bool {
        let ok = check_or_assign_limits(
            &table::THERMOSTAT_COOLING_SETPOINT_TEMPERATURE,
            model,
            schedule,
        )
        .unwrap_or(false);
        if ok {
            self.cooling_setpoint_temperature_schedule = Some(schedule);
        }
        ok
    }
}
