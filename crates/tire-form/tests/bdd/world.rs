//! BDD test world for the measurement form

use chrono::NaiveDate;
use cucumber::World;
use tire_form::{DialogHandler, FixedClock, MeasurementDialog, MeasurementRecord, SubmitOutcome};

/// Records every callback the dialog makes into the parent view
#[derive(Debug, Default)]
pub struct RecordingParent {
    pub submitted: Vec<MeasurementRecord>,
    pub events: Vec<&'static str>,
}

impl DialogHandler for RecordingParent {
    fn on_submit(&mut self, record: MeasurementRecord) {
        self.events.push("submit");
        self.submitted.push(record);
    }

    fn on_close(&mut self) {
        self.events.push("close");
    }
}

#[derive(Debug, Default, World)]
pub struct FormWorld {
    pub today: Option<NaiveDate>,
    pub registration_date: String,
    pub dialog: Option<MeasurementDialog<RecordingParent, FixedClock>>,
    pub last_outcome: Option<SubmitOutcome>,
    pub last_input_accepted: Option<bool>,
}

impl FormWorld {
    pub fn dialog(&mut self) -> &mut MeasurementDialog<RecordingParent, FixedClock> {
        self.dialog.as_mut().expect("dialog not created")
    }

    pub fn parent(&self) -> &RecordingParent {
        self.dialog.as_ref().expect("dialog not created").handler()
    }
}
