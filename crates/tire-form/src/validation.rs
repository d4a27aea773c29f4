//! Validation rules for measurement records
//!
//! [`validate`] is the single source of truth for the form: change handlers
//! use it for live hints and submit uses it as the gate.

use std::fmt;
use std::ops::RangeInclusive;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::record::{Field, FormDefaults, MeasurementRecord};

/// Allowed air pressure in psi
pub const AIR_PRESSURE_RANGE: RangeInclusive<f64> = 25.0..=50.0;

/// Allowed applied torque in Nm
pub const APPLIED_TORQUE_RANGE: RangeInclusive<f64> = 110.0..=150.0;

/// Decimal places allowed in a tread depth
pub const TREAD_DECIMALS: i32 = 2;

static DATE_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").unwrap());

static TREAD_INPUT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]*(\.?[0-9]{0,2})?$").unwrap());

/// Which invalid flag a violation raises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagKind {
    /// The numeric value breaks its rule
    Invalid,
    /// The date text is not `YYYY-MM-DD`
    DateFormat,
    /// The date falls outside registration date..=today
    DateRange,
}

/// A broken rule, in the order submit checks them
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    OdometerBelowInitial { value: f64, initial: f64 },
    TreadRemainingInvalid { value: f64 },
    AirPressureOutOfRange { value: f64 },
    AppliedTorqueOutOfRange { value: f64 },
    DateFormat { value: String },
    DateBeforeRegistration { value: String, registration: String },
    DateAfterToday { value: String, today: String },
}

impl Violation {
    pub fn field(&self) -> Field {
        match self {
            Violation::OdometerBelowInitial { .. } => Field::OdometerReading,
            Violation::TreadRemainingInvalid { .. } => Field::TreadRemaining,
            Violation::AirPressureOutOfRange { .. } => Field::AirPressure,
            Violation::AppliedTorqueOutOfRange { .. } => Field::AppliedTorque,
            Violation::DateFormat { .. }
            | Violation::DateBeforeRegistration { .. }
            | Violation::DateAfterToday { .. } => Field::AssignmentDate,
        }
    }

    pub fn flag(&self) -> FlagKind {
        match self {
            Violation::DateFormat { .. } => FlagKind::DateFormat,
            Violation::DateBeforeRegistration { .. } | Violation::DateAfterToday { .. } => {
                FlagKind::DateRange
            }
            _ => FlagKind::Invalid,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::OdometerBelowInitial { initial, .. } => {
                write!(f, "Odometer cannot be lower than the last reading ({})", initial)
            }
            Violation::TreadRemainingInvalid { .. } => write!(
                f,
                "Must be a non-negative number with at most {} decimals",
                TREAD_DECIMALS
            ),
            Violation::AirPressureOutOfRange { .. } => write!(
                f,
                "Must be between {} and {} psi",
                AIR_PRESSURE_RANGE.start(),
                AIR_PRESSURE_RANGE.end()
            ),
            Violation::AppliedTorqueOutOfRange { .. } => write!(
                f,
                "Must be between {} and {} Nm",
                APPLIED_TORQUE_RANGE.start(),
                APPLIED_TORQUE_RANGE.end()
            ),
            Violation::DateFormat { .. } => write!(
                f,
                "Invalid format. Year must have 4 digits, month and day 2 digits (YYYY-MM-DD)"
            ),
            Violation::DateBeforeRegistration { registration, .. } => write!(
                f,
                "Cannot be earlier than the tire registration date ({})",
                registration
            ),
            Violation::DateAfterToday { today, .. } => {
                write!(f, "Cannot be later than today ({})", today)
            }
        }
    }
}

/// Everything validation needs besides the field values
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationContext {
    /// Odometer value the form was opened with
    pub initial_odometer: f64,
    /// Empty disables the lower date bound
    pub registration_date: String,
    pub today: NaiveDate,
}

impl ValidationContext {
    pub fn new(defaults: &FormDefaults, today: NaiveDate) -> Self {
        Self {
            initial_odometer: defaults.odometer_reading,
            registration_date: defaults.tire_registration_date.clone(),
            today,
        }
    }
}

/// Check every rule and return the violations in submit order.
///
/// An empty list means the record may be submitted.
pub fn validate(record: &MeasurementRecord, context: &ValidationContext) -> Vec<Violation> {
    let mut violations = Vec::new();

    // NaN never compares greater or equal, so it is rejected here too
    if !(record.odometer_reading >= context.initial_odometer) {
        violations.push(Violation::OdometerBelowInitial {
            value: record.odometer_reading,
            initial: context.initial_odometer,
        });
    }

    if !is_tread_depth(record.tread_remaining) {
        violations.push(Violation::TreadRemainingInvalid {
            value: record.tread_remaining,
        });
    }

    if !AIR_PRESSURE_RANGE.contains(&record.air_pressure) {
        violations.push(Violation::AirPressureOutOfRange {
            value: record.air_pressure,
        });
    }

    if !APPLIED_TORQUE_RANGE.contains(&record.applied_torque) {
        violations.push(Violation::AppliedTorqueOutOfRange {
            value: record.applied_torque,
        });
    }

    let date = record.assignment_date.as_str();
    if date.is_empty() {
        return violations;
    }

    if !is_iso_date(date) {
        violations.push(Violation::DateFormat {
            value: date.to_string(),
        });
        return violations;
    }

    // Well-formed YYYY-MM-DD text sorts like the calendar
    let registration = context.registration_date.as_str();
    if !registration.is_empty() && date < registration {
        violations.push(Violation::DateBeforeRegistration {
            value: date.to_string(),
            registration: registration.to_string(),
        });
    }

    let today = format_iso_date(context.today);
    if date > today.as_str() {
        violations.push(Violation::DateAfterToday {
            value: date.to_string(),
            today,
        });
    }

    violations
}

/// True for a finite, non-negative depth with at most two decimals.
///
/// Records typed into the form always pass; the keystroke filter in
/// [`parse_tread_input`] already enforces the same shape.
pub fn is_tread_depth(value: f64) -> bool {
    if !value.is_finite() || value < 0.0 {
        return false;
    }
    let scale = 10f64.powi(TREAD_DECIMALS);
    (value * scale).round() / scale == value
}

/// True when `text` is exactly four, two and two digits separated by `-`
pub fn is_iso_date(text: &str) -> bool {
    DATE_FORMAT.is_match(text)
}

/// Render a calendar date as `YYYY-MM-DD`
pub fn format_iso_date(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Parse tread depth input.
///
/// Commas are accepted as the decimal separator. Returns `None` when the text
/// is not a plain non-negative number with at most two decimals; in that case
/// the keystroke must be rejected. Empty input (and a lone `.`) is 0.
pub fn parse_tread_input(text: &str) -> Option<f64> {
    let normalized = text.replace(',', ".");
    if !TREAD_INPUT.is_match(&normalized) {
        return None;
    }
    Some(normalized.parse::<f64>().unwrap_or(0.0))
}

/// Parse free numeric input; blank is 0 and garbage is NaN
pub fn parse_numeric_input(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}
