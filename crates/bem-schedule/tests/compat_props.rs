//! Property tests for the compatibility predicate.

use bem_model::{Model, UnitType};
use bem_schedule::{ScheduleType, get_or_create_limits, is_compatible};
use proptest::prelude::*;

fn unit_types() -> impl Strategy<Value = UnitType> {
    prop_oneof![
        Just(UnitType::Dimensionless),
        Just(UnitType::Temperature),
        Just(UnitType::DeltaTemperature),
        Just(UnitType::Availability),
        Just(UnitType::Capacity),
        Just(UnitType::ControlMode),
        Just(UnitType::Power),
    ]
}

fn bounds() -> impl Strategy<Value = (Option<f64>, Option<f64>)> {
    (
        proptest::option::of(-1000.0..1000.0f64),
        proptest::option::of(-1000.0..1000.0f64),
    )
        .prop_map(|(a, b)| match (a, b) {
            // Keep lower <= upper when both are present.
            (Some(x), Some(y)) if x > y => (Some(y), Some(x)),
            other => other,
        })
}

proptest! {
    /// A limits object freshly created for a type is always compatible
    /// with that type, whatever its bounds and unit.
    #[test]
    fn created_limits_are_compatible_with_their_type(
        continuous in any::<bool>(),
        unit_type in unit_types(),
        (lower_limit, upper_limit) in bounds(),
    ) {
        let schedule_type = ScheduleType {
            class_name: "Prop",
            display_name: "Slot",
            relationship_name: "slotSchedule",
            continuous,
            unit_type,
            lower_limit,
            upper_limit,
        };

        let mut model = Model::new();
        let handle = get_or_create_limits(&schedule_type, &mut model);
        let limits = model.schedule_type_limits(handle).unwrap();

        prop_assert!(is_compatible(&schedule_type, limits));
    }

    /// Resolving twice never yields more than two objects, and yields
    /// exactly one when the type is fully bounded.
    #[test]
    fn resolution_object_count(
        continuous in any::<bool>(),
        unit_type in unit_types(),
        (lower_limit, upper_limit) in bounds(),
    ) {
        let schedule_type = ScheduleType {
            class_name: "Prop",
            display_name: "Slot",
            relationship_name: "slotSchedule",
            continuous,
            unit_type,
            lower_limit,
            upper_limit,
        };

        let mut model = Model::new();
        let first = get_or_create_limits(&schedule_type, &mut model);
        let second = get_or_create_limits(&schedule_type, &mut model);

        if schedule_type.is_fully_bounded() {
            prop_assert_eq!(first, second);
            prop_assert_eq!(model.schedule_type_limits_objects().len(), 1);
        } else {
            prop_assert_ne!(first, second);
            prop_assert_eq!(model.schedule_type_limits_objects().len(), 2);
        }
    }
}
