//! The model document.

use bem_core::Handle;
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};
use crate::objects::{Schedule, ScheduleTypeLimits};

/// An independent mutable document holding schedule objects.
///
/// Objects are kept in insertion order and addressed by [`Handle`].
/// The document has no interior mutability; one `&mut Model` at a time
/// is the whole concurrency story.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    #[serde(default)]
    schedules: Vec<Schedule>,
    #[serde(default)]
    schedule_type_limits: Vec<ScheduleTypeLimits>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a schedule with no assigned limits. Returns its handle.
    pub fn add_schedule(&mut self, name: impl Into<String>) -> Handle {
        let schedule = Schedule::new(name);
        let handle = schedule.handle;
        self.schedules.push(schedule);
        handle
    }

    /// Add a limits object. The document stamps a fresh handle so the
    /// same `ScheduleTypeLimits` value can be added to several models.
    pub fn add_schedule_type_limits(&mut self, mut limits: ScheduleTypeLimits) -> Handle {
        limits.handle = Handle::new();
        let handle = limits.handle;
        self.schedule_type_limits.push(limits);
        handle
    }

    /// All schedules, in insertion order.
    pub fn schedules(&self) -> &[Schedule] {
        &self.schedules
    }

    /// All limits objects, in insertion order.
    pub fn schedule_type_limits_objects(&self) -> &[ScheduleTypeLimits] {
        &self.schedule_type_limits
    }

    pub fn schedule(&self, handle: Handle) -> Option<&Schedule> {
        self.schedules.iter().find(|s| s.handle == handle)
    }

    pub fn schedule_type_limits(&self, handle: Handle) -> Option<&ScheduleTypeLimits> {
        self.schedule_type_limits
            .iter()
            .find(|l| l.handle == handle)
    }

    /// Assign a limits object to a schedule.
    ///
    /// Both handles must belong to this document. This is a raw field
    /// write: compatibility with the slot the schedule will serve is
    /// the registry's concern, not the document's.
    pub fn set_schedule_limits(&mut self, schedule: Handle, limits: Handle) -> ModelResult<()> {
        if self.schedule_type_limits(limits).is_none() {
            return Err(ModelError::UnknownHandle {
                what: "schedule type limits",
                handle: limits,
            });
        }
        let schedule = self.schedule_mut(schedule)?;
        schedule.limits = Some(limits);
        Ok(())
    }

    /// Remove a schedule's limits assignment, if any.
    pub fn clear_schedule_limits(&mut self, schedule: Handle) -> ModelResult<()> {
        let schedule = self.schedule_mut(schedule)?;
        schedule.limits = None;
        Ok(())
    }

    /// Rename a schedule.
    pub fn set_schedule_name(&mut self, schedule: Handle, name: impl Into<String>) -> ModelResult<()> {
        let schedule = self.schedule_mut(schedule)?;
        schedule.name = name.into();
        Ok(())
    }

    /// True if any limits object already uses this exact name.
    pub fn is_limits_name_taken(&self, name: &str) -> bool {
        self.schedule_type_limits.iter().any(|l| l.name == name)
    }

    /// Produce `base`, or `base 1`, `base 2`, ... — the first spelling
    /// not yet used by a limits object in this document.
    pub fn unique_limits_name(&self, base: &str) -> String {
        if !self.is_limits_name_taken(base) {
            return base.to_string();
        }
        let mut suffix = 1u32;
        loop {
            let candidate = format!("{} {}", base, suffix);
            if !self.is_limits_name_taken(&candidate) {
                return candidate;
            }
            suffix += 1;
        }
    }

    fn schedule_mut(&mut self, handle: Handle) -> ModelResult<&mut Schedule> {
        self.schedules
            .iter_mut()
            .find(|s| s.handle == handle)
            .ok_or(ModelError::UnknownHandle {
                what: "schedule",
                handle,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_look_up_by_handle() {
        let mut model = Model::new();
        let s = model.add_schedule("Occupancy");
        let l = model.add_schedule_type_limits(ScheduleTypeLimits::new("Fraction"));

        assert_eq!(model.schedule(s).unwrap().name, "Occupancy");
        assert_eq!(model.schedule_type_limits(l).unwrap().name, "Fraction");
        assert!(model.schedule(l).is_none());
    }

    #[test]
    fn set_limits_requires_both_handles() {
        let mut model = Model::new();
        let s = model.add_schedule("Occupancy");
        let l = model.add_schedule_type_limits(ScheduleTypeLimits::new("Fraction"));

        let stray = Handle::new();
        assert!(model.set_schedule_limits(stray, l).is_err());
        assert!(model.set_schedule_limits(s, stray).is_err());
        assert!(model.schedule(s).unwrap().schedule_type_limits().is_none());

        model.set_schedule_limits(s, l).unwrap();
        assert_eq!(model.schedule(s).unwrap().schedule_type_limits(), Some(l));

        model.clear_schedule_limits(s).unwrap();
        assert!(model.schedule(s).unwrap().schedule_type_limits().is_none());
    }

    #[test]
    fn unique_name_suffixes_taken_names() {
        let mut model = Model::new();
        assert_eq!(model.unique_limits_name("Fraction"), "Fraction");

        model.add_schedule_type_limits(ScheduleTypeLimits::new("Fraction"));
        assert_eq!(model.unique_limits_name("Fraction"), "Fraction 1");

        model.add_schedule_type_limits(ScheduleTypeLimits::new("Fraction 1"));
        assert_eq!(model.unique_limits_name("Fraction"), "Fraction 2");
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut model = Model::new();
        for name in ["A", "B", "C"] {
            model.add_schedule_type_limits(ScheduleTypeLimits::new(name));
        }
        let names: Vec<_> = model
            .schedule_type_limits_objects()
            .iter()
            .map(|l| l.name.as_str())
            .collect();
        assert_eq!(names, ["A", "B", "C"]);
    }
}
