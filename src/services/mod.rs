//! Application service layer.
//!
//! Services orchestrate validation and the directory. They provide a clean
//! boundary between intake forms and the data access layer.

mod intake_service;

pub use intake_service::{IntakeService, IntakeServiceImpl};
