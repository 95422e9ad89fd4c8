use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FUEL, DEFAULT_OXIDIZER};
use crate::errors::DesignResult;
use crate::sizing::inputs::EngineInputs;
use crate::thermochemistry::properties::ThermoProperties;
use crate::thermochemistry::provider::{
    CeaReportFile, FixedThermochemistry, ThermoRequest, ThermochemistryProvider,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignConfig {
    #[serde(default)]
    pub propellants: Propellants,
    pub inputs: EngineInputs,
    pub thermochemistry: ThermoSource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Propellants {
    pub oxidizer: String,
    pub fuel: String,
}

impl Default for Propellants {
    fn default() -> Self {
        Propellants {
            oxidizer: DEFAULT_OXIDIZER.to_string(),
            fuel: DEFAULT_FUEL.to_string(),
        }
    }
}

// A saved CEA report or values entered directly, never both; each shape denies unknown keys
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThermoSource {
    Report(ReportSource),
    Fixed(ThermoProperties),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportSource {
    pub report: PathBuf,
}

impl DesignConfig {
    pub fn from_toml_str(text: &str) -> DesignResult<Self> {
        let config: DesignConfig = toml::from_str(text)?;
        config.inputs.validate()?;
        Ok(config)
    }

    // Loads a design file
    pub fn load(path: impl AsRef<Path>) -> DesignResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&text)?;
        if let ThermoSource::Report(ReportSource { report }) = &mut config.thermochemistry {
            if report.is_relative() {
                if let Some(dir) = path.parent() {
                    *report = dir.join(&*report);
                }
            }
        }
        Ok(config)
    }

    pub fn request(&self) -> ThermoRequest {
        ThermoRequest::new(
            self.propellants.oxidizer.clone(),
            self.propellants.fuel.clone(),
            self.inputs.chamber_pressure,
            self.inputs.of_ratio,
        )
    }

    pub fn provider(&self) -> Box<dyn ThermochemistryProvider> {
        match &self.thermochemistry {
            ThermoSource::Report(source) => Box::new(CeaReportFile::new(source.report.clone())),
            ThermoSource::Fixed(properties) => Box::new(FixedThermochemistry::new(*properties)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DesignError;

    const FIXED_CASE: &str = r#"
[inputs]
mass_flow_rate = 1.0
of_ratio = 2.3
chamber_pressure = 300.0
exit_pressure = 0.101325
l_star = 1.0
cone_half_angle = 15.0

[thermochemistry]
stagnation_temp = 3400.0
molar_mass = 21.0
gamma = 1.2
"#;

    #[test]
    fn test_fixed_thermochemistry_case() {
        let config = DesignConfig::from_toml_str(FIXED_CASE).unwrap();
        assert_eq!(config.propellants, Propellants::default());
        assert_eq!(config.inputs.chamber_pressure, 300.0);
        assert_eq!(
            config.thermochemistry,
            ThermoSource::Fixed(ThermoProperties {
                stagnation_temp: 3400.0,
                molar_mass: 21.0,
                gamma: 1.2,
            })
        );

        let thermo = config.provider().analyze(&config.request()).unwrap();
        assert_eq!(thermo.gamma, 1.2);
    }

    #[test]
    fn test_report_case_with_propellants() {
        let text = r#"
[propellants]
oxidizer = "O2(L)"
fuel = "CH4(L)"

[inputs]
mass_flow_rate = 2.0
of_ratio = 3.4
chamber_pressure = 500.0
exit_pressure = 0.08
l_star = 1.1
cone_half_angle = 12.0

[thermochemistry]
report = "/tmp/cea.txt"
"#;
        let config = DesignConfig::from_toml_str(text).unwrap();
        assert_eq!(config.request().fuel, "CH4(L)");
        assert_eq!(
            config.thermochemistry,
            ThermoSource::Report(ReportSource {
                report: PathBuf::from("/tmp/cea.txt")
            })
        );
    }

    #[test]
    fn test_missing_input_field_is_config_error() {
        let text = FIXED_CASE.replace("l_star = 1.0\n", "");
        assert!(matches!(
            DesignConfig::from_toml_str(&text),
            Err(DesignError::Config(_))
        ));
    }

    #[test]
    fn test_report_and_values_together_are_rejected() {
        let text = FIXED_CASE.to_string() + "report = \"/tmp/cea.txt\"\n";
        assert!(matches!(
            DesignConfig::from_toml_str(&text),
            Err(DesignError::Config(_))
        ));
    }

    #[test]
    fn test_partial_values_are_rejected() {
        let text = FIXED_CASE.replace("gamma = 1.2\n", "");
        assert!(matches!(
            DesignConfig::from_toml_str(&text),
            Err(DesignError::Config(_))
        ));
    }

    #[test]
    fn test_out_of_range_input_is_rejected() {
        let text = FIXED_CASE.replace("cone_half_angle = 15.0", "cone_half_angle = 95.0");
        assert!(matches!(
            DesignConfig::from_toml_str(&text),
            Err(DesignError::InvalidInput {
                field: "cone_half_angle",
                ..
            })
        ));
    }

    #[test]
    fn test_relative_report_path_resolves_next_to_config() {
        let dir = std::env::temp_dir().join(format!("nozzle_sizer_cfg_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let config_path = dir.join("design.toml");
        let text = FIXED_CASE
            .split("[thermochemistry]")
            .next()
            .unwrap()
            .to_string()
            + "[thermochemistry]\nreport = \"cea.txt\"\n";
        fs::write(&config_path, text).unwrap();

        let config = DesignConfig::load(&config_path).unwrap();
        fs::remove_dir_all(&dir).unwrap();

        assert_eq!(
            config.thermochemistry,
            ThermoSource::Report(ReportSource {
                report: dir.join("cea.txt")
            })
        );
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = DesignConfig::from_toml_str(FIXED_CASE).unwrap();
        let text = toml::to_string(&config).unwrap();
        let reloaded = DesignConfig::from_toml_str(&text).unwrap();
        assert_eq!(reloaded.inputs, config.inputs);
    }
}
