//! The schedule-type registry.

use std::sync::LazyLock;

use bem_core::Handle;
use bem_model::{Model, Schedule, ScheduleTypeLimits};

use crate::compat::is_compatible;
use crate::error::{ScheduleTypeError, ScheduleTypeResult};
use crate::resolve;
use crate::table::SCHEDULE_TYPES;
use crate::types::ScheduleType;

static BUILTIN: LazyLock<ScheduleTypeRegistry> =
    LazyLock::new(|| ScheduleTypeRegistry::new(SCHEDULE_TYPES.iter().copied()));

/// Immutable lookup table of registered schedule types.
///
/// Built once and read everywhere; it holds no per-model state, so a
/// shared reference can be handed to any code that needs lookups.
/// [`ScheduleTypeRegistry::builtin`] is the process-wide instance over
/// the compile-time table; `new` exists so tests and embedders can
/// build private tables.
#[derive(Debug, Clone)]
pub struct ScheduleTypeRegistry {
    entries: Vec<ScheduleType>,
}

impl ScheduleTypeRegistry {
    /// Build a registry from entries, preserving registration order.
    pub fn new(entries: impl IntoIterator<Item = ScheduleType>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// The process-wide registry over [`crate::table::SCHEDULE_TYPES`].
    ///
    /// Initialized exactly once, on first use.
    pub fn builtin() -> &'static ScheduleTypeRegistry {
        &BUILTIN
    }

    /// Class names with at least one registered entry, sorted and
    /// deduplicated.
    pub fn class_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.entries.iter().map(|st| st.class_name).collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// All entries for a class, in registration order. Empty for an
    /// unknown class; that is not an error.
    pub fn types_for_class<'a>(
        &'a self,
        class_name: &'a str,
    ) -> impl Iterator<Item = &'a ScheduleType> + 'a {
        self.entries
            .iter()
            .filter(move |st| st.class_name == class_name)
    }

    /// The unique entry for a (class, slot) pair.
    ///
    /// An unregistered pair is a registration bug, surfaced as
    /// [`ScheduleTypeError::UnregisteredSlot`] — never as a silently
    /// defaulted entry.
    pub fn find(&self, class_name: &str, display_name: &str) -> ScheduleTypeResult<&ScheduleType> {
        self.entries
            .iter()
            .find(|st| st.class_name == class_name && st.display_name == display_name)
            .ok_or_else(|| ScheduleTypeError::UnregisteredSlot {
                class_name: class_name.to_string(),
                display_name: display_name.to_string(),
            })
    }

    /// String-keyed compatibility check, for tooling that only has
    /// names. Fails like [`ScheduleTypeRegistry::find`].
    pub fn is_compatible_slot(
        &self,
        class_name: &str,
        display_name: &str,
        limits: &ScheduleTypeLimits,
    ) -> ScheduleTypeResult<bool> {
        let st = self.find(class_name, display_name)?;
        Ok(is_compatible(st, limits))
    }

    /// String-keyed [`resolve::check_or_assign_limits`].
    pub fn check_or_assign(
        &self,
        class_name: &str,
        display_name: &str,
        model: &mut Model,
        schedule: Handle,
    ) -> ScheduleTypeResult<bool> {
        let st = *self.find(class_name, display_name)?;
        resolve::check_or_assign_limits(&st, model, schedule)
    }

    /// Limits objects already in `model` that the slot could reuse.
    pub fn compatible_limits<'a>(
        &self,
        model: &'a Model,
        class_name: &str,
        display_name: &str,
    ) -> ScheduleTypeResult<Vec<&'a ScheduleTypeLimits>> {
        let st = self.find(class_name, display_name)?;
        Ok(resolve::compatible_limits(st, model).collect())
    }

    /// Schedules in `model` that could legally serve the slot.
    pub fn compatible_schedules<'a>(
        &self,
        model: &'a Model,
        class_name: &str,
        display_name: &str,
    ) -> ScheduleTypeResult<Vec<&'a Schedule>> {
        let st = self.find(class_name, display_name)?;
        Ok(resolve::compatible_schedules(st, model).collect())
    }
}
