//! Site plan validation.

mod validate;

pub use validate::{quick_validate, validate_plan, ValidationResult};
