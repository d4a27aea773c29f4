//! BDD step definitions for dialog lifecycle and submission

use chrono::NaiveDate;
use cucumber::{given, then, when};
use tire_form::{
    FixedClock, FlagKind, FormDefaults, MeasurementDialog, MeasurementRecord, SubmitOutcome,
};

use crate::world::{FormWorld, RecordingParent};

fn parse_date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("invalid date in feature file")
}

fn open_with(world: &mut FormWorld, defaults: FormDefaults) {
    if world.dialog.is_none() {
        let today = world.today.expect("today not set");
        world.dialog = Some(MeasurementDialog::with_clock(
            RecordingParent::default(),
            FixedClock(today),
        ));
    }
    world.dialog().open(defaults);
}

#[given(expr = "today is {string}")]
fn today_is(world: &mut FormWorld, date: String) {
    world.today = Some(parse_date(&date));
}

#[given(expr = "a tire registered on {string}")]
fn tire_registered_on(world: &mut FormWorld, date: String) {
    world.registration_date = date;
}

#[given(expr = "the dialog is opened with initial odometer {int}")]
fn dialog_opened(world: &mut FormWorld, odometer: i64) {
    let defaults =
        FormDefaults::new(world.registration_date.clone()).with_odometer(odometer as f64);
    open_with(world, defaults);
}

#[when(expr = "the dialog is reopened with initial odometer {int}")]
fn dialog_reopened(world: &mut FormWorld, odometer: i64) {
    let defaults =
        FormDefaults::new(world.registration_date.clone()).with_odometer(odometer as f64);
    open_with(world, defaults);
}

#[when(
    expr = "the dialog is reopened with odometer {int}, tread {string}, pressure {int} and torque {int}"
)]
fn dialog_reopened_with_all(
    world: &mut FormWorld,
    odometer: i64,
    tread: String,
    pressure: i64,
    torque: i64,
) {
    let defaults = FormDefaults::new(world.registration_date.clone())
        .with_odometer(odometer as f64)
        .with_tread(tread.parse().expect("invalid tread in feature file"))
        .with_air_pressure(pressure as f64)
        .with_applied_torque(torque as f64);
    open_with(world, defaults);
}

#[when("the user submits")]
fn user_submits(world: &mut FormWorld) {
    world.last_outcome = world.dialog().submit();
}

#[when("the user cancels")]
fn user_cancels(world: &mut FormWorld) {
    world.dialog().cancel();
}

#[then("the submission is blocked")]
fn submission_blocked(world: &mut FormWorld) {
    match &world.last_outcome {
        Some(SubmitOutcome::Blocked(_)) => {}
        other => panic!("expected blocked submission, got {:?}", other),
    }
}

#[then(expr = "the submission is blocked by a {word} error")]
fn submission_blocked_by(world: &mut FormWorld, kind: String) {
    let expected = match kind.as_str() {
        "format" => FlagKind::DateFormat,
        "range" => FlagKind::DateRange,
        "value" => FlagKind::Invalid,
        other => panic!("unknown error kind: {}", other),
    };
    match &world.last_outcome {
        Some(SubmitOutcome::Blocked(violation)) => assert_eq!(violation.flag(), expected),
        other => panic!("expected blocked submission, got {:?}", other),
    }
}

#[then("the submission succeeds")]
fn submission_succeeds(world: &mut FormWorld) {
    match &world.last_outcome {
        Some(SubmitOutcome::Submitted(_)) => {}
        other => panic!("expected successful submission, got {:?}", other),
    }
}

#[then(expr = "the parent receives {string}")]
fn parent_receives(world: &mut FormWorld, json: String) {
    let expected: MeasurementRecord = serde_json::from_str(&json).expect("invalid record JSON");
    assert_eq!(world.parent().submitted, vec![expected]);
}

#[then("the parent has not been called")]
fn parent_not_called(world: &mut FormWorld) {
    assert!(
        world.parent().events.is_empty(),
        "unexpected callbacks: {:?}",
        world.parent().events
    );
}

#[then(expr = "the parent callbacks were {string}")]
fn parent_callbacks(world: &mut FormWorld, events: String) {
    let expected: Vec<&str> = events.split(", ").collect();
    assert_eq!(world.parent().events, expected);
}

#[then("the dialog is closed")]
fn dialog_closed(world: &mut FormWorld) {
    assert!(!world.dialog().is_open());
}

#[then("the dialog is open")]
fn dialog_open(world: &mut FormWorld) {
    assert!(world.dialog().is_open());
}

#[then("no field is flagged")]
fn no_field_flagged(world: &mut FormWorld) {
    let flags = *world.dialog().form().flags();
    assert!(!flags.any(), "unexpected flags: {:?}", flags);
}
