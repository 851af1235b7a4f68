//! bem-schedule: the schedule-type registry.
//!
//! Provides:
//! - `ScheduleType`, the value domain a component class declares for
//!   one of its schedule slots
//! - the built-in registration table (`table`), populated at compile
//!   time by const slot entries
//! - `ScheduleTypeRegistry`, an immutable lookup table over entries
//! - the compatibility predicate and the find/create/get-or-create/
//!   check-or-assign operations against a `Model`
//!
//! # Example
//!
//! ```
//! use bem_model::Model;
//! use bem_schedule::{check_or_assign_limits, table};
//!
//! let mut model = Model::new();
//! let schedule = model.add_schedule("Fan Availability");
//!
//! // Wires a compatible limits object onto the schedule, creating one
//! // in the model because none exists yet.
//! let ok = check_or_assign_limits(
//!     &table::FAN_CONSTANT_VOLUME_AVAILABILITY,
//!     &mut model,
//!     schedule,
//! )
//! .unwrap();
//! assert!(ok);
//! assert_eq!(model.schedule_type_limits_objects().len(), 1);
//! ```

pub mod compat;
pub mod error;
pub mod registry;
pub mod resolve;
pub mod table;
pub mod types;

// Re-exports for ergonomics
pub use compat::is_compatible;
pub use error::{ScheduleTypeError, ScheduleTypeResult};
pub use registry::ScheduleTypeRegistry;
pub use resolve::{
    check_or_assign_limits, compatible_limits, compatible_schedules, create_limits,
    find_compatible_limits, get_or_create_limits,
};
pub use types::ScheduleType;
