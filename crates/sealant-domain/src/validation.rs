//! Input validation helpers shared by the models and services

use sealant_types::{Error, Result};

/// Reject zero, negative, NaN and infinite values
pub fn ensure_positive(field_name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::invalid_input(field_name, value, "must be a finite number"));
    }
    if value <= 0.0 {
        return Err(Error::invalid_input(
            field_name,
            value,
            "must be greater than zero",
        ));
    }
    Ok(value)
}

/// Reject negative, NaN and infinite values; zero is allowed
pub fn ensure_non_negative(field_name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::invalid_input(field_name, value, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(Error::invalid_input(field_name, value, "must not be negative"));
    }
    Ok(value)
}

/// Require `min <= value <= max` for a finite value
pub fn ensure_range(field_name: &str, value: f64, min: f64, max: f64) -> Result<f64> {
    if !value.is_finite() || value < min || value > max {
        return Err(Error::invalid_input(
            field_name,
            value,
            format!("must be between {} and {}", min, max),
        ));
    }
    Ok(value)
}
