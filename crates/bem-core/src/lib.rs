//! bem-core: stable foundation for the bem model library.
//!
//! Contains:
//! - handles (uuid-backed identity for model objects)
//! - error (shared error types)

pub mod error;
pub mod handle;

// Re-exports: nice ergonomics for downstream crates
pub use error::{BemError, BemResult};
pub use handle::Handle;
