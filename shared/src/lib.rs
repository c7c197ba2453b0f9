//! Shared types and lookups for the City Weather service
//!
//! This crate contains the I/O-free part of the system: response models,
//! the weather code table and activity suggestions. It is used by the
//! backend and by the WASM bindings for the frontend.

pub mod models;
pub mod types;
pub mod validation;
pub mod weather_codes;

pub use models::*;
pub use types::*;
pub use validation::*;
pub use weather_codes::*;
