//! Shared library modules providing error types, filesystem probing, and telemetry initialization.

pub mod errors;
pub mod fs;
pub mod telemetry;
