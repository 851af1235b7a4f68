//! Built-in registration table.
//!
//! One const entry per (component class, schedule slot) pair. Component
//! setters reference these entries directly, so a slot that compiles is
//! a slot that is registered; the string-keyed lookups on
//! [`crate::ScheduleTypeRegistry`] exist for UI and tooling code that
//! only has names.

use bem_model::UnitType;

use crate::types::ScheduleType;

pub const REFRIGERATION_CASE_AVAILABILITY: ScheduleType = ScheduleType {
    class_name: "RefrigerationCase",
    display_name: "Availability",
    relationship_name: "availabilitySchedule",
    continuous: false,
    unit_type: UnitType::Availability,
    lower_limit: Some(0.0),
    upper_limit: Some(1.0),
};

pub const REFRIGERATION_CASE_DEFROST_DRIP_DOWN: ScheduleType = ScheduleType {
    class_name: "RefrigerationCase",
    display_name: "Case Defrost Drip-Down",
    relationship_name: "caseDefrostDripDownSchedule",
    continuous: true,
    unit_type: UnitType::Dimensionless,
    lower_limit: Some(0.0),
    upper_limit: Some(1.0),
};

// Restocking is in W/m of case; no sensible upper bound, so this entry
// stays partially bounded and always gets its own limits object.
pub const REFRIGERATION_CASE_RESTOCKING: ScheduleType = ScheduleType {
    class_name: "RefrigerationCase",
    display_name: "Refrigerated Case Restocking",
    relationship_name: "refrigeratedCaseRestockingSchedule",
    continuous: true,
    unit_type: UnitType::Capacity,
    lower_limit: Some(0.0),
    upper_limit: None,
};

pub const FAN_CONSTANT_VOLUME_AVAILABILITY: ScheduleType = ScheduleType {
    class_name: "FanConstantVolume",
    display_name: "Availability",
    relationship_name: "availabilitySchedule",
    continuous: false,
    unit_type: UnitType::Availability,
    lower_limit: Some(0.0),
    upper_limit: Some(1.0),
};

pub const COIL_HEATING_ELECTRIC_AVAILABILITY: ScheduleType = ScheduleType {
    class_name: "CoilHeatingElectric",
    display_name: "Availability",
    relationship_name: "availabilitySchedule",
    continuous: false,
    unit_type: UnitType::Availability,
    lower_limit: Some(0.0),
    upper_limit: Some(1.0),
};

pub const THERMOSTAT_HEATING_SETPOINT_TEMPERATURE: ScheduleType = ScheduleType {
    class_name: "ThermostatSetpointDualSetpoint",
    display_name: "Heating Setpoint Temperature",
    relationship_name: "heatingSetpointTemperatureSchedule",
    continuous: true,
    unit_type: UnitType::Temperature,
    lower_limit: None,
    upper_limit: None,
};

pub const THERMOSTAT_COOLING_SETPOINT_TEMPERATURE: ScheduleType = ScheduleType {
    class_name: "ThermostatSetpointDualSetpoint",
    display_name: "Cooling Setpoint Temperature",
    relationship_name: "coolingSetpointTemperatureSchedule",
    continuous: true,
    unit_type: UnitType::Temperature,
    lower_limit: None,
    upper_limit: None,
};

/// All registered schedule types, in registration order.
pub const SCHEDULE_TYPES: &[ScheduleType] = &[
    // RefrigerationCase
    REFRIGERATION_CASE_AVAILABILITY,
    REFRIGERATION_CASE_DEFROST_DRIP_DOWN,
    REFRIGERATION_CASE_RESTOCKING,
    // FanConstantVolume
    FAN_CONSTANT_VOLUME_AVAILABILITY,
    // CoilHeatingElectric
    COIL_HEATING_ELECTRIC_AVAILABILITY,
    // ThermostatSetpointDualSetpoint
    THERMOSTAT_HEATING_SETPOINT_TEMPERATURE,
    THERMOSTAT_COOLING_SETPOINT_TEMPERATURE,
];
