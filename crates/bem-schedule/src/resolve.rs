//! Resolving limits objects for schedule slots.
//!
//! The read and mutate paths are deliberately separate:
//! [`find_compatible_limits`] is a pure query, [`create_limits`] is an
//! explicit command, and [`get_or_create_limits`] /
//! [`check_or_assign_limits`] are thin compositions of the two.

use bem_core::Handle;
use bem_model::{Model, Schedule, ScheduleTypeLimits};
use tracing::debug;

use crate::compat::is_compatible;
use crate::error::{ScheduleTypeError, ScheduleTypeResult};
use crate::types::ScheduleType;

/// First limits object in `model` (document order) compatible with
/// `schedule_type`, if any. Pure query; never mutates.
pub fn find_compatible_limits(schedule_type: &ScheduleType, model: &Model) -> Option<Handle> {
    model
        .schedule_type_limits_objects()
        .iter()
        .find(|l| is_compatible(schedule_type, l))
        .map(|l| l.handle())
}

/// Every limits object in `model` compatible with `schedule_type`.
///
/// Tooling uses this to offer reuse instead of proliferating limits
/// objects.
pub fn compatible_limits<'a>(
    schedule_type: &ScheduleType,
    model: &'a Model,
) -> impl Iterator<Item = &'a ScheduleTypeLimits> + use<'a> {
    let schedule_type = *schedule_type;
    model
        .schedule_type_limits_objects()
        .iter()
        .filter(move |l| is_compatible(&schedule_type, l))
}

/// Schedules in `model` that could legally serve the slot: those whose
/// assigned limits are compatible, plus those with no limits assigned
/// (assignment would succeed on those).
pub fn compatible_schedules<'a>(
    schedule_type: &ScheduleType,
    model: &'a Model,
) -> impl Iterator<Item = &'a Schedule> + use<'a> {
    let schedule_type = *schedule_type;
    model
        .schedules()
        .iter()
        .filter(move |s| match s.schedule_type_limits() {
            Some(handle) => model
                .schedule_type_limits(handle)
                .is_some_and(|l| is_compatible(&schedule_type, l)),
            None => true,
        })
}

/// Create a new limits object for `schedule_type` in `model`.
///
/// The new object takes the slot's display name (unique-suffixed when
/// taken) and copies the numeric type, unit type, and bounds from the
/// schedule type, so it is compatible with it from birth.
pub fn create_limits(schedule_type: &ScheduleType, model: &mut Model) -> Handle {
    let name = model.unique_limits_name(schedule_type.display_name);
    let mut limits = ScheduleTypeLimits::new(&name);
    limits.numeric_type = Some(schedule_type.numeric_type());
    limits.unit_type = Some(schedule_type.unit_type);
    limits.lower_limit = schedule_type.lower_limit;
    limits.upper_limit = schedule_type.upper_limit;
    let handle = model.add_schedule_type_limits(limits);
    debug!(
        class = schedule_type.class_name,
        slot = schedule_type.display_name,
        %handle,
        name = name.as_str(),
        "created schedule type limits"
    );
    handle
}

/// Find a reusable limits object or create one.
///
/// A type that is not fully bounded always gets a fresh object: a
/// partially-bounded domain is a soft constraint the user may want to
/// edit for one slot without silently changing another, so those are
/// never shared. Fully-bounded types reuse the first compatible object.
pub fn get_or_create_limits(schedule_type: &ScheduleType, model: &mut Model) -> Handle {
    if schedule_type.is_fully_bounded() {
        if let Some(existing) = find_compatible_limits(schedule_type, model) {
            return existing;
        }
    }
    create_limits(schedule_type, model)
}

/// The single entry point for component schedule setters.
///
/// If `schedule` already carries limits, returns whether those limits
/// are compatible, without mutating anything on either outcome.
/// Otherwise resolves a limits object via [`get_or_create_limits`],
/// assigns it, and returns `Ok(true)`.
///
/// Fails with [`ScheduleTypeError::UnknownSchedule`] when the handle is
/// not in `model`.
pub fn check_or_assign_limits(
    schedule_type: &ScheduleType,
    model: &mut Model,
    schedule: Handle,
) -> ScheduleTypeResult<bool> {
    let existing = model
        .schedule(schedule)
        .ok_or(ScheduleTypeError::UnknownSchedule(schedule))?
        .schedule_type_limits();

    if let Some(handle) = existing {
        let compatible = model
            .schedule_type_limits(handle)
            .is_some_and(|l| is_compatible(schedule_type, l));
        return Ok(compatible);
    }

    let limits = get_or_create_limits(schedule_type, model);
    model
        .set_schedule_limits(schedule, limits)
        .map_err(|_| ScheduleTypeError::UnknownSchedule(schedule))?;
    debug!(
        class = schedule_type.class_name,
        slot = schedule_type.display_name,
        schedule = %schedule,
        limits = %limits,
        "assigned schedule type limits"
    );
    Ok(true)
}
