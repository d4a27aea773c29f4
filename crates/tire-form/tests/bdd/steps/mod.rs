//! BDD step definitions for the measurement form

pub mod dialog_steps;
pub mod field_steps;
