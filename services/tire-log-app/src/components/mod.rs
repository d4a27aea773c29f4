pub mod field_hint;
pub mod measurement_modal;
