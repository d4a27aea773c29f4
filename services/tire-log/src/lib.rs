//! Tire Log - Tire maintenance measurements for the fleet dashboard
//!
//! Talks to the fleet backend's authentication endpoints and checks
//! measurement records with the same rules the entry form applies.

pub mod auth_client;
pub mod config;
pub mod error;
pub mod io;
pub mod measurement;

pub use auth_client::{AuthClient, AuthCredentials};
pub use config::{load_config, AuthConfig, Config};
pub use error::{Result, TireLogError};
pub use measurement::{check_measurement_file, MeasurementCheck};
