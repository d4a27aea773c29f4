//! Measurement entry modal

use leptos::prelude::*;
use tire_form::validation::{format_iso_date, parse_numeric_input};
use tire_form::{
    Clock, DialogHandler, Field, FormDefaults, MeasurementDialog, MeasurementRecord, SystemClock,
};

use crate::components::field_hint::{input_style, FieldHint};

const OVERLAY_STYLE: &str = "position: fixed; inset: 0; background: rgba(0, 0, 0, 0.4); \
     display: flex; align-items: center; justify-content: center;";

const DIALOG_STYLE: &str = "background: #fff; border-radius: 0.5rem; padding: 1.5rem; \
     width: 100%; max-width: 420px; display: flex; flex-direction: column; gap: 1rem;";

const ROW_STYLE: &str = "display: flex; flex-wrap: wrap; gap: 1rem;";

const CELL_STYLE: &str = "flex: 1 1 160px;";

/// Forwards dialog events to the parent's callbacks
pub struct ModalHandler {
    on_submit: Callback<MeasurementRecord>,
    on_close: Callback<()>,
}

impl DialogHandler for ModalHandler {
    fn on_submit(&mut self, record: MeasurementRecord) {
        self.on_submit.run(record);
    }

    fn on_close(&mut self) {
        self.on_close.run(());
    }
}

pub type ModalDialog = MeasurementDialog<ModalHandler>;

/// Modal collecting odometer, tread, pressure, torque and assignment date.
///
/// Every time `open` turns true the form restarts from `defaults`.
/// `on_submit` receives the record only when every rule passes, followed by
/// `on_close`. Clicking the backdrop dismisses without saving.
#[component]
pub fn MeasurementModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] defaults: Signal<FormDefaults>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_submit: Callback<MeasurementRecord>,
) -> impl IntoView {
    let dialog: RwSignal<ModalDialog> = RwSignal::new(MeasurementDialog::new(ModalHandler {
        on_submit,
        on_close,
    }));

    Effect::new(move || {
        if open.get() {
            let defaults = defaults.get();
            dialog.update(|d| d.open(defaults));
        }
    });

    let flagged = move |field: Field| dialog.with(|d| d.form().flags().is_flagged(field));
    let shown = move |field: Field| dialog.with(|d| d.form().display(field));

    let save = move |_: leptos::ev::MouseEvent| {
        dialog.update(|d| {
            d.submit();
        });
    };

    view! {
        <Show when=move || open.get()>
            <div style=OVERLAY_STYLE on:click=move |_| dialog.update(|d| d.cancel())>
                <div style=DIALOG_STYLE on:click=|ev| ev.stop_propagation()>
                    <div style=ROW_STYLE>
                        <label style=CELL_STYLE>
                            "Tread Remaining"
                            <input
                                type="text"
                                inputmode="decimal"
                                style=input_style(false)
                                prop:value=move || shown(Field::TreadRemaining)
                                on:input=move |ev| {
                                    let text = event_target_value(&ev);
                                    // rejected keystrokes leave the stored value untouched
                                    dialog.update(|d| {
                                        d.input_tread(&text);
                                    });
                                }
                            />
                            <FieldHint dialog=dialog field=Field::TreadRemaining />
                        </label>
                        <label style=CELL_STYLE>
                            "Air Pressure"
                            <input
                                type="number"
                                min="25"
                                max="50"
                                style=move || input_style(flagged(Field::AirPressure))
                                prop:value=move || shown(Field::AirPressure)
                                on:input=move |ev| {
                                    let value = parse_numeric_input(&event_target_value(&ev));
                                    dialog.update(|d| d.set_air_pressure(value));
                                }
                            />
                            <FieldHint dialog=dialog field=Field::AirPressure />
                        </label>
                    </div>
                    <div style=ROW_STYLE>
                        <label style=CELL_STYLE>
                            "Torque"
                            <input
                                type="number"
                                min="110"
                                max="150"
                                style=move || input_style(flagged(Field::AppliedTorque))
                                prop:value=move || shown(Field::AppliedTorque)
                                on:input=move |ev| {
                                    let value = parse_numeric_input(&event_target_value(&ev));
                                    dialog.update(|d| d.set_applied_torque(value));
                                }
                            />
                            <FieldHint dialog=dialog field=Field::AppliedTorque />
                        </label>
                        <label style=CELL_STYLE>
                            "Assignment Date"
                            <input
                                type="date"
                                min=move || defaults.with(|d| d.tire_registration_date.clone())
                                max=move || format_iso_date(SystemClock.today())
                                style=move || input_style(flagged(Field::AssignmentDate))
                                prop:value=move || shown(Field::AssignmentDate)
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    dialog.update(|d| d.set_assignment_date(value));
                                }
                            />
                            <FieldHint dialog=dialog field=Field::AssignmentDate />
                        </label>
                    </div>
                    <label>
                        "Odometer"
                        <input
                            type="number"
                            style=move || input_style(flagged(Field::OdometerReading))
                            prop:value=move || shown(Field::OdometerReading)
                            on:input=move |ev| {
                                let value = parse_numeric_input(&event_target_value(&ev));
                                dialog.update(|d| d.set_odometer(value));
                            }
                        />
                        <FieldHint dialog=dialog field=Field::OdometerReading />
                    </label>
                    <button
                        style="padding: 0.6rem; border: none; border-radius: 0.25rem; \
                               background: #0d6efd; color: #fff; font-weight: 600;"
                        on:click=save
                    >
                        "Save"
                    </button>
                </div>
            </div>
        </Show>
    }
}
