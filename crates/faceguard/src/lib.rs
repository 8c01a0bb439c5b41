pub mod config;
pub mod error;
pub mod skincare;
pub mod telemetry;
