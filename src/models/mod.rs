//! Data models for the RMU API.
//!
//! - [`primitives`] - API versions and identifier newtypes (`Udid`, `Email`, ...)
//! - [`enums`] - Remote operation modes and registration types
//! - [`envelope`] - The JSON envelope wrapping every response
//! - [`registration`] - Registration failure shape

pub mod primitives;
pub mod enums;
pub mod envelope;
pub mod registration;

pub use primitives::*;
pub use enums::*;
pub use envelope::*;
pub use registration::*;
