//! Checking stored measurement records against the form's rules

use std::path::Path;

use chrono::NaiveDate;
use tire_form::{validate, FormDefaults, MeasurementRecord, ValidationContext, Violation};

/// A record read from disk together with the rules it breaks
#[derive(Debug, Clone)]
pub struct MeasurementCheck {
    pub record: MeasurementRecord,
    pub violations: Vec<Violation>,
}

impl MeasurementCheck {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Fail with every violation listed when the record is not valid
    pub fn into_result(self) -> crate::Result<MeasurementRecord> {
        if self.is_valid() {
            return Ok(self.record);
        }
        let reasons: Vec<String> = self
            .violations
            .iter()
            .map(|v| format!("{}: {}", v.field(), v))
            .collect();
        Err(crate::TireLogError::InvalidRecord(reasons.join("; ")))
    }
}

/// Load a JSON measurement record and validate it as the form would
pub fn check_measurement_file(
    path: &Path,
    defaults: &FormDefaults,
    today: NaiveDate,
) -> crate::Result<MeasurementCheck> {
    let content = std::fs::read_to_string(path)?;
    let record: MeasurementRecord = serde_json::from_str(&content)?;
    let context = ValidationContext::new(defaults, today);
    let violations = validate(&record, &context);
    tracing::debug!(
        "Checked measurement {:?}: {} violation(s)",
        path,
        violations.len()
    );
    Ok(MeasurementCheck { record, violations })
}
