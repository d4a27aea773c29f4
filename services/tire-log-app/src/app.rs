//! Main App component

use crate::components::measurement_modal::MeasurementModal;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use tire_form::{FormDefaults, MeasurementRecord};

const TIRE_REGISTRATION_DATE: &str = "2024-01-01";

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let (open, set_open) = signal(false);
    let (last_record, set_last_record) = signal(Option::<MeasurementRecord>::None);

    // The last saved reading seeds the next session, keeping the odometer monotonic
    let defaults = Signal::derive(move || {
        let defaults = FormDefaults::new(TIRE_REGISTRATION_DATE);
        match last_record.get() {
            Some(record) => defaults
                .with_odometer(record.odometer_reading)
                .with_tread(record.tread_remaining)
                .with_air_pressure(record.air_pressure)
                .with_applied_torque(record.applied_torque),
            None => defaults,
        }
    });

    view! {
        <Title text="Tire Log" />
        <main style="font-family: system-ui, sans-serif; max-width: 960px; margin: 0 auto; padding: 1rem;">
            <h1>"Tire Log"</h1>
            <p>"Registered " {TIRE_REGISTRATION_DATE}</p>
            <button on:click=move |_| set_open.set(true)>"Record measurement"</button>
            {move || {
                last_record.get().map(|record| {
                    let payload = serde_json::to_string_pretty(&record).unwrap_or_default();
                    view! {
                        <section>
                            <h2>"Last measurement"</h2>
                            <pre>{payload}</pre>
                        </section>
                    }
                })
            }}
            <MeasurementModal
                open=open
                defaults=defaults
                on_close=move |_| set_open.set(false)
                on_submit=move |record: MeasurementRecord| set_last_record.set(Some(record))
            />
        </main>
    }
}
