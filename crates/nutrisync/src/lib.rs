//! Food compatibility scoring and profile-driven suggestions over a static
//! food catalog.

pub mod catalog;
pub mod compatibility;
pub mod config;
pub mod error;
pub mod nutrition;
pub mod telemetry;
