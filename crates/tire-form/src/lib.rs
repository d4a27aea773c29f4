//! Tire Form - Measurement entry form for tire maintenance
//!
//! Holds the field values, validation rules and dialog lifecycle for
//! recording odometer, tread depth, air pressure, torque and assignment date.
//! Rendering is left to the UI layer.

pub mod clock;
pub mod dialog;
pub mod form;
pub mod record;
pub mod validation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use dialog::{callbacks, Callbacks, DialogHandler, MeasurementDialog};
pub use form::{InvalidFlags, MeasurementForm, SubmitOutcome};
pub use record::{Field, FormDefaults, MeasurementRecord};
pub use validation::{validate, FlagKind, ValidationContext, Violation};
