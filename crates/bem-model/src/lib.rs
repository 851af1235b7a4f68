//! bem-model: the model document and schedule-side model objects.
//!
//! Provides:
//! - `Model`, an independent mutable document of schedule objects
//! - `Schedule` and `ScheduleTypeLimits` model objects
//! - `NumericType` / `UnitType` vocabularies for limits objects
//! - `AutosizableValue`, the autosize sentinel for sizable fields
//!
//! # Example
//!
//! ```
//! use bem_model::{Model, ScheduleTypeLimits};
//!
//! let mut model = Model::new();
//! let limits = model.add_schedule_type_limits(ScheduleTypeLimits::new("Fraction"));
//! let schedule = model.add_schedule("Office Occupancy");
//!
//! model.set_schedule_limits(schedule, limits).unwrap();
//! assert_eq!(
//!     model.schedule(schedule).unwrap().schedule_type_limits(),
//!     Some(limits)
//! );
//! ```

pub mod autosize;
pub mod error;
pub mod model;
pub mod objects;
pub mod units;

// Re-exports for ergonomics
pub use autosize::AutosizableValue;
pub use error::{ModelError, ModelResult};
pub use model::Model;
pub use objects::{Schedule, ScheduleTypeLimits};
pub use units::{NumericType, UnitType, UnknownKeyword};
