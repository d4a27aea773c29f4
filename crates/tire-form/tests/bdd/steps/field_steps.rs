//! BDD step definitions for field input and feedback

use cucumber::{then, when};
use tire_form::validation::parse_numeric_input;
use tire_form::Field;

use crate::world::FormWorld;

fn parse_field(name: &str) -> Field {
    match name {
        "odometer" => Field::OdometerReading,
        "tread" => Field::TreadRemaining,
        "pressure" => Field::AirPressure,
        "torque" => Field::AppliedTorque,
        "date" => Field::AssignmentDate,
        other => panic!("Unknown field: {}", other),
    }
}

#[when(expr = "the user types {string} into the {word} field")]
fn user_types(world: &mut FormWorld, text: String, field: String) {
    let dialog = world.dialog();
    let accepted = match parse_field(&field) {
        Field::OdometerReading => {
            dialog.set_odometer(parse_numeric_input(&text));
            true
        }
        Field::TreadRemaining => dialog.input_tread(&text),
        Field::AirPressure => {
            dialog.set_air_pressure(parse_numeric_input(&text));
            true
        }
        Field::AppliedTorque => {
            dialog.set_applied_torque(parse_numeric_input(&text));
            true
        }
        Field::AssignmentDate => {
            dialog.set_assignment_date(text);
            true
        }
    };
    world.last_input_accepted = Some(accepted);
}

#[then("the input is rejected")]
fn input_rejected(world: &mut FormWorld) {
    assert_eq!(world.last_input_accepted, Some(false));
}

#[then(expr = "the {word} field shows {string}")]
fn field_shows(world: &mut FormWorld, field: String, expected: String) {
    let field = parse_field(&field);
    assert_eq!(world.dialog().form().display(field), expected);
}

#[then(expr = "the {word} field is flagged")]
fn field_flagged(world: &mut FormWorld, field: String) {
    let field = parse_field(&field);
    assert!(world.dialog().form().flags().is_flagged(field));
}

#[then(expr = "the {word} field is not flagged")]
fn field_not_flagged(world: &mut FormWorld, field: String) {
    let field = parse_field(&field);
    assert!(!world.dialog().form().flags().is_flagged(field));
}

#[then(expr = "the {word} hint reads {string}")]
fn hint_reads(world: &mut FormWorld, field: String, expected: String) {
    let field = parse_field(&field);
    assert_eq!(
        world.dialog().form().hint(field).unwrap_or_default(),
        expected
    );
}
