//! Response models for the City Weather service

mod place;
mod weather;

pub use place::*;
pub use weather::*;
