//! bem-components: representative component classes.
//!
//! Each component holds plain configuration fields plus schedule slot
//! handles. Schedule setters are the canonical registry consumers: each
//! calls `check_or_assign_limits` with its const slot entry from
//! `bem_schedule::table` before accepting a caller-supplied schedule,
//! and returns `false` (leaving both component and model unchanged)
//! when the schedule's existing limits are incompatible.
//!
//! # Example
//!
//! ```
//! use bem_components::FanConstantVolume;
//! use bem_model::Model;
//!
//! let mut model = Model::new();
//! let mut fan = FanConstantVolume::new("Supply Fan".to_string(), 0.7, 500.0).unwrap();
//!
//! let schedule = model.add_schedule("Fan Availability");
//! assert!(fan.set_availability_schedule(&mut model, schedule));
//! assert_eq!(fan.availability_schedule(), Some(schedule));
//! ```

pub mod coil_heating_electric;
pub mod error;
pub mod fan_constant_volume;
pub mod refrigeration_case;
pub mod thermostat;

// Re-exports
pub use coil_heating_electric::CoilHeatingElectric;
pub use error::{ComponentError, ComponentResult};
pub use fan_constant_volume::FanConstantVolume;
pub use refrigeration_case::RefrigerationCase;
pub use thermostat::ThermostatSetpointDualSetpoint;
