//! String-keyed registry operations, as UI/tooling code calls them.

use bem_model::Model;
use bem_schedule::{ScheduleTypeError, ScheduleTypeRegistry};

#[test]
fn check_or_assign_by_name() {
    let registry = ScheduleTypeRegistry::builtin();
    let mut model = Model::new();
    let schedule = model.add_schedule("Fan Availability");

    let ok = registry
        .check_or_assign("FanConstantVolume", "Availability", &mut model, schedule)
        .unwrap();
    assert!(ok);
    assert!(
        model
            .schedule(schedule)
            .unwrap()
            .schedule_type_limits()
            .is_some()
    );
}

#[test]
fn check_or_assign_by_name_propagates_lookup_failure() {
    let registry = ScheduleTypeRegistry::builtin();
    let mut model = Model::new();
    let schedule = model.add_schedule("Fan Availability");

    let err = registry
        .check_or_assign("FanConstantVolume", "Nonexistent", &mut model, schedule)
        .unwrap_err();
    assert!(matches!(err, ScheduleTypeError::UnregisteredSlot { .. }));
    // Lookup failure leaves the model untouched.
    assert!(model.schedule_type_limits_objects().is_empty());
}

#[test]
fn compatible_queries_by_name() {
    let registry = ScheduleTypeRegistry::builtin();
    let mut model = Model::new();
    let schedule = model.add_schedule("Fan Availability");
    registry
        .check_or_assign("FanConstantVolume", "Availability", &mut model, schedule)
        .unwrap();

    // The coil's availability slot declares the identical domain, so
    // the fan's limits object shows up as a reuse candidate for it.
    let limits = registry
        .compatible_limits(&model, "CoilHeatingElectric", "Availability")
        .unwrap();
    assert_eq!(limits.len(), 1);

    let schedules = registry
        .compatible_schedules(&model, "CoilHeatingElectric", "Availability")
        .unwrap();
    assert_eq!(schedules.len(), 1);
    assert_eq!(schedules[0].handle(), schedule);

    // The restocking slot wants a capacity schedule; nothing matches.
    let limits = registry
        .compatible_limits(&model, "RefrigerationCase", "Refrigerated Case Restocking")
        .unwrap();
    assert!(limits.is_empty());
}

#[test]
fn is_compatible_slot_by_name() {
    let registry = ScheduleTypeRegistry::builtin();
    let mut model = Model::new();
    let schedule = model.add_schedule("Fan Availability");
    registry
        .check_or_assign("FanConstantVolume", "Availability", &mut model, schedule)
        .unwrap();

    let limits = &model.schedule_type_limits_objects()[0];
    assert!(
        registry
            .is_compatible_slot("CoilHeatingElectric", "Availability", limits)
            .unwrap()
    );
    assert!(
        !registry
            .is_compatible_slot(
                "ThermostatSetpointDualSetpoint",
                "Heating Setpoint Temperature",
                limits
            )
            .unwrap()
    );
    assert!(registry.is_compatible_slot("Nope", "Slot", limits).is_err());
}
