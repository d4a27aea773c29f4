//! Modal lifecycle around the measurement form
//!
//! The parent view owns the open state and supplies the callbacks. Each
//! closed-to-open transition starts a fresh form session.

use crate::clock::{Clock, SystemClock};
use crate::form::{MeasurementForm, SubmitOutcome};
use crate::record::{FormDefaults, MeasurementRecord};

/// Callbacks into the parent view
#[cfg_attr(test, mockall::automock)]
pub trait DialogHandler {
    /// Called exactly once per successful submission
    fn on_submit(&mut self, record: MeasurementRecord);

    /// Called when the dialog is dismissed, including after a submit
    fn on_close(&mut self);
}

/// [`DialogHandler`] built from two closures
pub struct Callbacks<S, K> {
    on_submit: S,
    on_close: K,
}

impl<S, K> std::fmt::Debug for Callbacks<S, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callbacks").finish_non_exhaustive()
    }
}

pub fn callbacks<S, K>(on_submit: S, on_close: K) -> Callbacks<S, K>
where
    S: FnMut(MeasurementRecord),
    K: FnMut(),
{
    Callbacks {
        on_submit,
        on_close,
    }
}

impl<S, K> DialogHandler for Callbacks<S, K>
where
    S: FnMut(MeasurementRecord),
    K: FnMut(),
{
    fn on_submit(&mut self, record: MeasurementRecord) {
        (self.on_submit)(record)
    }

    fn on_close(&mut self) {
        (self.on_close)()
    }
}

/// The measurement entry modal
pub struct MeasurementDialog<H: DialogHandler, C: Clock = SystemClock> {
    form: MeasurementForm<C>,
    open: bool,
    handler: H,
}

impl<H: DialogHandler, C: Clock> std::fmt::Debug for MeasurementDialog<H, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeasurementDialog")
            .field("open", &self.open)
            .field("values", self.form.values())
            .field("flags", self.form.flags())
            .finish()
    }
}

impl<H: DialogHandler> MeasurementDialog<H, SystemClock> {
    pub fn new(handler: H) -> Self {
        Self::with_clock(handler, SystemClock)
    }
}

impl<H: DialogHandler, C: Clock> MeasurementDialog<H, C> {
    /// A closed dialog
    pub fn with_clock(handler: H, clock: C) -> Self {
        Self {
            form: MeasurementForm::with_clock(FormDefaults::default(), clock),
            open: false,
            handler,
        }
    }

    /// Open with fresh values. Calling this while open re-applies `defaults`.
    pub fn open(&mut self, defaults: FormDefaults) {
        tracing::debug!("Opening measurement dialog");
        self.form.reset(defaults);
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn form(&self) -> &MeasurementForm<C> {
        &self.form
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn into_handler(self) -> H {
        self.handler
    }

    pub fn set_odometer(&mut self, value: f64) {
        if self.open {
            self.form.set_odometer(value);
        }
    }

    pub fn input_tread(&mut self, text: &str) -> bool {
        self.open && self.form.input_tread(text)
    }

    pub fn set_air_pressure(&mut self, value: f64) {
        if self.open {
            self.form.set_air_pressure(value);
        }
    }

    pub fn set_applied_torque(&mut self, value: f64) {
        if self.open {
            self.form.set_applied_torque(value);
        }
    }

    pub fn set_assignment_date(&mut self, value: impl Into<String>) {
        if self.open {
            self.form.set_assignment_date(value);
        }
    }

    /// Dismiss without saving
    pub fn cancel(&mut self) {
        if !self.open {
            return;
        }
        tracing::debug!("Measurement dialog cancelled");
        self.close();
    }

    /// Validate and, when everything passes, hand the record to the parent
    /// and close. Returns `None` while the dialog is closed.
    pub fn submit(&mut self) -> Option<SubmitOutcome> {
        if !self.open {
            return None;
        }

        let outcome = self.form.submit();
        if let SubmitOutcome::Submitted(record) = &outcome {
            tracing::debug!("Measurement submitted: {:?}", record);
            self.handler.on_submit(record.clone());
            self.close();
        }
        Some(outcome)
    }

    fn close(&mut self) {
        self.open = false;
        self.handler.on_close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::record::Field;
    use chrono::NaiveDate;
    use mockall::predicate::eq;

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
    }

    fn defaults() -> FormDefaults {
        FormDefaults::new("2024-01-01").with_odometer(1000.0)
    }

    #[test]
    fn starts_closed() {
        let dialog = MeasurementDialog::with_clock(MockDialogHandler::new(), clock());
        assert!(!dialog.is_open());
    }

    #[test]
    fn successful_submit_calls_submit_then_close() {
        let mut handler = MockDialogHandler::new();
        let mut seq = mockall::Sequence::new();
        handler
            .expect_on_submit()
            .with(eq(MeasurementRecord {
                odometer_reading: 1200.0,
                tread_remaining: 0.0,
                air_pressure: 30.0,
                applied_torque: 120.0,
                assignment_date: String::new(),
            }))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        handler
            .expect_on_close()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let mut dialog = MeasurementDialog::with_clock(handler, clock());
        dialog.open(defaults());
        dialog.set_odometer(1200.0);
        dialog.set_air_pressure(30.0);
        dialog.set_applied_torque(120.0);

        assert!(matches!(
            dialog.submit(),
            Some(SubmitOutcome::Submitted(_))
        ));
        assert!(!dialog.is_open());
    }

    #[test]
    fn blocked_submit_invokes_nothing() {
        let mut handler = MockDialogHandler::new();
        handler.expect_on_submit().never();
        handler.expect_on_close().never();

        let mut dialog = MeasurementDialog::with_clock(handler, clock());
        dialog.open(defaults());
        dialog.set_odometer(900.0);

        assert!(matches!(dialog.submit(), Some(SubmitOutcome::Blocked(_))));
        assert!(dialog.is_open());
        assert!(dialog.form().flags().is_flagged(Field::OdometerReading));
    }

    #[test]
    fn cancel_calls_close_only() {
        let mut handler = MockDialogHandler::new();
        handler.expect_on_submit().never();
        handler.expect_on_close().times(1).return_const(());

        let mut dialog = MeasurementDialog::with_clock(handler, clock());
        dialog.open(defaults());
        dialog.cancel();
        assert!(!dialog.is_open());

        // already closed
        dialog.cancel();
    }

    #[test]
    fn closed_dialog_ignores_input_and_submit() {
        let mut handler = MockDialogHandler::new();
        handler.expect_on_submit().never();
        handler.expect_on_close().never();

        let mut dialog = MeasurementDialog::with_clock(handler, clock());
        dialog.set_odometer(5.0);
        assert!(!dialog.input_tread("1.5"));
        assert_eq!(dialog.submit(), None);
        assert_eq!(dialog.form().values().odometer_reading, 0.0);
    }

    #[test]
    fn reopening_resets_values_and_flags() {
        let mut handler = MockDialogHandler::new();
        handler.expect_on_close().return_const(());

        let mut dialog = MeasurementDialog::with_clock(handler, clock());
        dialog.open(defaults());
        dialog.set_odometer(1.0);
        dialog.set_air_pressure(99.0);
        dialog.set_assignment_date("2030-01-01");
        dialog.submit();
        dialog.cancel();

        dialog.open(
            FormDefaults::new("2024-01-01")
                .with_odometer(500.0)
                .with_air_pressure(35.0),
        );
        assert!(!dialog.form().flags().any());
        assert_eq!(dialog.form().values().odometer_reading, 500.0);
        assert_eq!(dialog.form().values().air_pressure, 35.0);
        assert_eq!(dialog.form().values().assignment_date, "");
    }

    #[test]
    fn closure_callbacks_receive_record() {
        let mut submitted = Vec::new();
        let mut closed = 0;
        {
            let handler = callbacks(|r| submitted.push(r), || closed += 1);
            let mut dialog = MeasurementDialog::with_clock(handler, clock());
            dialog.open(defaults());
            dialog.set_odometer(1000.0);
            dialog.set_air_pressure(25.0);
            dialog.set_applied_torque(150.0);
            dialog.submit();
        }
        assert_eq!(submitted.len(), 1);
        assert_eq!(closed, 1);
    }
}
