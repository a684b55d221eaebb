//! Validation and sanitization of untrusted input.
//!
//! Validators decide whether a value may be used at all; sanitizers produce a
//! cleaned copy for display or for use as a filename.

pub mod sanitize;
pub mod validation;

pub use sanitize::{sanitize_filename, sanitize_input};
pub use validation::{
    validate_alphanumeric, validate_email, validate_hostname, validate_input, MAX_INPUT_LENGTH,
};
