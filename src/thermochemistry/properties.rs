use serde::{Deserialize, Serialize};

use crate::errors::{DesignError, DesignResult};
use crate::sizing::inputs::require_positive;

// Chamber combustion products as reported by an equilibrium analysis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThermoProperties {
    pub stagnation_temp: f64, // K
    pub molar_mass: f64,      // kg/kmol
    pub gamma: f64,           // ratio of specific heats
}

impl ThermoProperties {
    pub fn new(stagnation_temp: f64, molar_mass: f64, gamma: f64) -> DesignResult<Self> {
        let properties = ThermoProperties {
            stagnation_temp,
            molar_mass,
            gamma,
        };
        properties.validate()?;
        Ok(properties)
    }

    pub fn validate(&self) -> DesignResult<()> {
        require_positive("stagnation_temp", self.stagnation_temp)?;
        require_positive("molar_mass", self.molar_mass)?;
        require_positive("gamma", self.gamma)?;
        if self.gamma <= 1.0 {
            return Err(DesignError::invalid_input(
                "gamma",
                format!("must exceed 1 for isentropic flow, got {}", self.gamma),
            ));
        }
        Ok(())
    }
}
