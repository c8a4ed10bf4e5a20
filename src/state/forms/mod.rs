//! Form domain layer
//!
//! Fields, steps, the phone mask and the per-step validator. Nothing in
//! here knows about rendering.

mod field;
mod form_state;
mod phone;
mod validation;

pub use field::{FieldKind, FieldValue, FormField};
pub use form_state::{
    Form, FormState, EMAIL, ENERGY_PROVIDER, ENERGY_TYPE, INSTALLATION_LOCATION,
    INSTALLATION_TYPE, LOCATION, MONTHLY_BILL, NAME, PHONE, PRIVACY_AGREEMENT,
};
pub use validation::validate_step;

#[cfg(test)]
pub use field::FieldOption;
