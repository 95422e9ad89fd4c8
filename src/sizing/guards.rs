use crate::errors::{DesignError, DesignResult};

// Checked arithmetic for the flow relations. Every undefined result is
// reported against the physical quantity being computed.

pub fn checked_sqrt(quantity: &'static str, radicand: f64) -> DesignResult<f64> {
    if radicand.is_nan() || radicand < 0.0 {
        return Err(DesignError::domain(
            quantity,
            format!("square root of negative value {}", radicand),
        ));
    }
    finite(quantity, radicand.sqrt())
}

pub fn checked_powf(quantity: &'static str, base: f64, exponent: f64) -> DesignResult<f64> {
    if base.is_nan() || (base < 0.0 && exponent.fract() != 0.0) {
        return Err(DesignError::domain(
            quantity,
            format!("{} raised to fractional power {}", base, exponent),
        ));
    }
    if base == 0.0 && exponent < 0.0 {
        return Err(DesignError::domain(
            quantity,
            format!("zero raised to negative power {}", exponent),
        ));
    }
    finite(quantity, base.powf(exponent))
}

pub fn checked_div(quantity: &'static str, numerator: f64, denominator: f64) -> DesignResult<f64> {
    if denominator.is_nan() || denominator <= 0.0 {
        return Err(DesignError::domain(
            quantity,
            format!("division by non-positive value {}", denominator),
        ));
    }
    finite(quantity, numerator / denominator)
}

pub fn finite(quantity: &'static str, value: f64) -> DesignResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DesignError::domain(
            quantity,
            format!("non-finite result {}", value),
        ))
    }
}
