//! Measurement record and form defaults

use std::fmt;

use serde::{Deserialize, Serialize};

/// A validated set of tire-maintenance measurements.
///
/// Field names on the wire follow the fleet backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    #[serde(rename = "Odometro")]
    pub odometer_reading: f64,
    #[serde(rename = "Remanente")]
    pub tread_remaining: f64,
    #[serde(rename = "PresionAire")]
    pub air_pressure: f64,
    #[serde(rename = "TorqueAplicado")]
    pub applied_torque: f64,
    /// `YYYY-MM-DD`, or empty when no date was entered
    #[serde(rename = "FechaAsignacion", default)]
    pub assignment_date: String,
}

/// Values the form starts from each time it is opened
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormDefaults {
    #[serde(default)]
    pub odometer_reading: f64,
    #[serde(default)]
    pub tread_remaining: f64,
    #[serde(default)]
    pub air_pressure: f64,
    #[serde(default)]
    pub applied_torque: f64,
    /// Date the tire was registered; lower bound for the assignment date.
    /// Empty disables the lower bound.
    #[serde(default)]
    pub tire_registration_date: String,
}

impl FormDefaults {
    pub fn new(tire_registration_date: impl Into<String>) -> Self {
        Self {
            tire_registration_date: tire_registration_date.into(),
            ..Self::default()
        }
    }

    pub fn with_odometer(mut self, value: f64) -> Self {
        self.odometer_reading = value;
        self
    }

    pub fn with_tread(mut self, value: f64) -> Self {
        self.tread_remaining = value;
        self
    }

    pub fn with_air_pressure(mut self, value: f64) -> Self {
        self.air_pressure = value;
        self
    }

    pub fn with_applied_torque(mut self, value: f64) -> Self {
        self.applied_torque = value;
        self
    }
}

/// The five inputs of the measurement form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    OdometerReading,
    TreadRemaining,
    AirPressure,
    AppliedTorque,
    AssignmentDate,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::OdometerReading,
        Field::TreadRemaining,
        Field::AirPressure,
        Field::AppliedTorque,
        Field::AssignmentDate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::OdometerReading => "Odometer",
            Field::TreadRemaining => "Tread Remaining",
            Field::AirPressure => "Air Pressure",
            Field::AppliedTorque => "Torque",
            Field::AssignmentDate => "Assignment Date",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
