//! Helper/error text under a form input

use leptos::prelude::*;
use tire_form::Field;

use crate::components::measurement_modal::ModalDialog;

/// Red error text when the field is flagged, gray helper text otherwise
#[component]
pub fn FieldHint(dialog: RwSignal<ModalDialog>, field: Field) -> impl IntoView {
    let flagged = move || dialog.with(|d| d.form().flags().is_flagged(field));
    let text = move || dialog.with(|d| d.form().hint(field)).unwrap_or_default();

    let style = move || {
        let color = if flagged() { "#721c24" } else { "#6c757d" };
        format!(
            "display: block; min-height: 1.2em; font-size: 0.8em; color: {};",
            color
        )
    };

    view! {
        <small style=style>{text}</small>
    }
}

/// Input border for the field's current validity
pub fn input_style(flagged: bool) -> String {
    let border = if flagged { "#dc3545" } else { "#ced4da" };
    format!(
        "width: 100%; padding: 0.4rem; border: 1px solid {}; border-radius: 0.25rem;",
        border
    )
}
