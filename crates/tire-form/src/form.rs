//! Headless state of the measurement entry form

use crate::clock::{Clock, SystemClock};
use crate::record::{Field, FormDefaults, MeasurementRecord};
use crate::validation::{
    self, parse_tread_input, FlagKind, ValidationContext, Violation, AIR_PRESSURE_RANGE,
    APPLIED_TORQUE_RANGE,
};

/// Per-field error flags shown next to the inputs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InvalidFlags {
    pub odometer_reading: bool,
    pub air_pressure: bool,
    pub applied_torque: bool,
    pub date_format: bool,
    pub date_range: bool,
}

impl InvalidFlags {
    /// Whether the given input should render in its error state
    pub fn is_flagged(&self, field: Field) -> bool {
        match field {
            Field::OdometerReading => self.odometer_reading,
            Field::TreadRemaining => false,
            Field::AirPressure => self.air_pressure,
            Field::AppliedTorque => self.applied_torque,
            Field::AssignmentDate => self.date_format || self.date_range,
        }
    }

    pub fn any(&self) -> bool {
        self.odometer_reading
            || self.air_pressure
            || self.applied_torque
            || self.date_format
            || self.date_range
    }

    fn refresh(&mut self, field: Field, violations: &[Violation]) {
        let has = |kind: FlagKind| {
            violations
                .iter()
                .any(|v| v.field() == field && v.flag() == kind)
        };
        match field {
            Field::OdometerReading => self.odometer_reading = has(FlagKind::Invalid),
            Field::TreadRemaining => {}
            Field::AirPressure => self.air_pressure = has(FlagKind::Invalid),
            Field::AppliedTorque => self.applied_torque = has(FlagKind::Invalid),
            Field::AssignmentDate => {
                self.date_format = has(FlagKind::DateFormat);
                self.date_range = has(FlagKind::DateRange);
            }
        }
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Submitted(MeasurementRecord),
    /// The first rule that failed; nothing was submitted
    Blocked(Violation),
}

/// Field values and error flags for one opening of the form
#[derive(Debug, Clone)]
pub struct MeasurementForm<C: Clock = SystemClock> {
    defaults: FormDefaults,
    values: MeasurementRecord,
    flags: InvalidFlags,
    clock: C,
}

impl MeasurementForm<SystemClock> {
    pub fn new(defaults: FormDefaults) -> Self {
        Self::with_clock(defaults, SystemClock)
    }
}

impl<C: Clock> MeasurementForm<C> {
    pub fn with_clock(defaults: FormDefaults, clock: C) -> Self {
        let values = initial_values(&defaults);
        Self {
            defaults,
            values,
            flags: InvalidFlags::default(),
            clock,
        }
    }

    /// Start over from `defaults`: values reset, date cleared, flags cleared
    pub fn reset(&mut self, defaults: FormDefaults) {
        tracing::debug!(
            "Resetting measurement form (initial odometer {}, registered {:?})",
            defaults.odometer_reading,
            defaults.tire_registration_date
        );
        self.values = initial_values(&defaults);
        self.defaults = defaults;
        self.flags = InvalidFlags::default();
    }

    pub fn defaults(&self) -> &FormDefaults {
        &self.defaults
    }

    pub fn values(&self) -> &MeasurementRecord {
        &self.values
    }

    pub fn flags(&self) -> &InvalidFlags {
        &self.flags
    }

    pub fn set_odometer(&mut self, value: f64) {
        self.values.odometer_reading = value;
        self.refresh(Field::OdometerReading);
    }

    /// Apply tread text; returns false (and keeps the old value) when rejected
    pub fn input_tread(&mut self, text: &str) -> bool {
        match parse_tread_input(text) {
            Some(value) => {
                self.values.tread_remaining = value;
                true
            }
            None => {
                tracing::debug!("Rejected tread input {:?}", text);
                false
            }
        }
    }

    pub fn set_air_pressure(&mut self, value: f64) {
        self.values.air_pressure = value;
        self.refresh(Field::AirPressure);
    }

    pub fn set_applied_torque(&mut self, value: f64) {
        self.values.applied_torque = value;
        self.refresh(Field::AppliedTorque);
    }

    pub fn set_assignment_date(&mut self, value: impl Into<String>) {
        self.values.assignment_date = value.into();
        self.refresh(Field::AssignmentDate);
    }

    /// Current violations, in submit order
    pub fn violations(&self) -> Vec<Violation> {
        let context = ValidationContext::new(&self.defaults, self.clock.today());
        validation::validate(&self.values, &context)
    }

    pub fn is_valid(&self) -> bool {
        self.violations().is_empty()
    }

    /// Validate everything; flags are refreshed for every field
    pub fn submit(&mut self) -> SubmitOutcome {
        let violations = self.violations();
        for field in Field::ALL {
            self.flags.refresh(field, &violations);
        }

        match violations.into_iter().next() {
            Some(violation) => {
                tracing::debug!("Submit blocked: {}", violation);
                SubmitOutcome::Blocked(violation)
            }
            None => SubmitOutcome::Submitted(self.values.clone()),
        }
    }

    /// Text for an input; numeric zero renders blank
    pub fn display(&self, field: Field) -> String {
        let number = match field {
            Field::OdometerReading => self.values.odometer_reading,
            Field::TreadRemaining => self.values.tread_remaining,
            Field::AirPressure => self.values.air_pressure,
            Field::AppliedTorque => self.values.applied_torque,
            Field::AssignmentDate => return self.values.assignment_date.clone(),
        };
        if number == 0.0 {
            String::new()
        } else {
            number.to_string()
        }
    }

    /// Error text when the field is flagged, otherwise its helper text
    pub fn hint(&self, field: Field) -> Option<String> {
        if self.flags.is_flagged(field) {
            if let Some(violation) = self.violations().into_iter().find(|v| v.field() == field) {
                return Some(violation.to_string());
            }
        }
        match field {
            Field::AirPressure => Some(format!(
                "Allowed range: {}-{} psi",
                AIR_PRESSURE_RANGE.start(),
                AIR_PRESSURE_RANGE.end()
            )),
            Field::AppliedTorque => Some(format!(
                "Recommended: {}-{} Nm",
                APPLIED_TORQUE_RANGE.start(),
                APPLIED_TORQUE_RANGE.end()
            )),
            _ => None,
        }
    }

    fn refresh(&mut self, field: Field) {
        let violations = self.violations();
        self.flags.refresh(field, &violations);
    }
}

fn initial_values(defaults: &FormDefaults) -> MeasurementRecord {
    MeasurementRecord {
        odometer_reading: defaults.odometer_reading,
        tread_remaining: defaults.tread_remaining,
        air_pressure: defaults.air_pressure,
        applied_torque: defaults.applied_torque,
        assignment_date: String::new(),
    }
}
