//! System orchestration, configuration, startup, and shutdown logic.

pub mod config;
pub mod erp_system;
pub mod telemetry;

pub use config::*;
pub use erp_system::*;
pub use telemetry::*;
