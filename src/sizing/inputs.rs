use serde::{Deserialize, Serialize};

use crate::errors::{DesignError, DesignResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineInputs {
    pub mass_flow_rate: f64,   // kg/s
    pub of_ratio: f64,         // oxidizer:fuel mass ratio
    pub chamber_pressure: f64, // psia
    pub exit_pressure: f64,    // MPa
    pub l_star: f64,           // m
    pub cone_half_angle: f64,  // deg
}

impl EngineInputs {
    pub fn new(
        mass_flow_rate: f64,
        of_ratio: f64,
        chamber_pressure: f64,
        exit_pressure: f64,
        l_star: f64,
        cone_half_angle: f64,
    ) -> DesignResult<Self> {
        let inputs = EngineInputs {
            mass_flow_rate,
            of_ratio,
            chamber_pressure,
            exit_pressure,
            l_star,
            cone_half_angle,
        };
        inputs.validate()?;
        Ok(inputs)
    }

    // Checks every field against its physical range
    pub fn validate(&self) -> DesignResult<()> {
        require_positive("mass_flow_rate", self.mass_flow_rate)?;
        require_positive("of_ratio", self.of_ratio)?;
        require_positive("chamber_pressure", self.chamber_pressure)?;
        require_positive("exit_pressure", self.exit_pressure)?;
        require_positive("l_star", self.l_star)?;
        require_positive("cone_half_angle", self.cone_half_angle)?;
        if self.cone_half_angle >= 90.0 {
            return Err(DesignError::invalid_input(
                "cone_half_angle",
                format!("must be below 90 deg, got {}", self.cone_half_angle),
            ));
        }
        Ok(())
    }
}

pub(crate) fn require_positive(field: &'static str, value: f64) -> DesignResult<()> {
    if !value.is_finite() {
        return Err(DesignError::invalid_input(
            field,
            format!("must be a finite number, got {}", value),
        ));
    }
    if value <= 0.0 {
        return Err(DesignError::invalid_input(
            field,
            format!("must be positive, got {}", value),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_inputs() {
        let inputs = EngineInputs::new(1.0, 2.3, 300.0, 0.101325, 1.0, 15.0).unwrap();
        assert_eq!(inputs.mass_flow_rate, 1.0);
        assert_eq!(inputs.cone_half_angle, 15.0);
    }

    #[test]
    fn test_rejects_non_positive_flow() {
        let err = EngineInputs::new(0.0, 2.3, 300.0, 0.1, 1.0, 15.0).unwrap_err();
        assert!(matches!(
            err,
            DesignError::InvalidInput {
                field: "mass_flow_rate",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_nan() {
        let err = EngineInputs::new(1.0, f64::NAN, 300.0, 0.1, 1.0, 15.0).unwrap_err();
        assert!(matches!(
            err,
            DesignError::InvalidInput {
                field: "of_ratio",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_right_angle_cone() {
        let err = EngineInputs::new(1.0, 2.3, 300.0, 0.1, 1.0, 90.0).unwrap_err();
        assert!(matches!(
            err,
            DesignError::InvalidInput {
                field: "cone_half_angle",
                ..
            }
        ));
    }

    #[test]
    fn test_exit_pressure_above_chamber_passes_field_checks() {
        // 300 psia is about 2.07 MPa; ordering is the calculator's concern
        assert!(EngineInputs::new(1.0, 2.3, 300.0, 5.0, 1.0, 15.0).is_ok());
    }
}
