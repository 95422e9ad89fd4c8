use std::fs;
use std::path::PathBuf;

use log::info;

use crate::constants::{DEFAULT_FUEL, DEFAULT_OXIDIZER};
use crate::errors::{DesignError, DesignResult};
use crate::thermochemistry::cea_report::parse_cea_report;
use crate::thermochemistry::properties::ThermoProperties;

// Operating point for a combustion equilibrium analysis
#[derive(Debug, Clone, PartialEq)]
pub struct ThermoRequest {
    pub oxidizer: String,
    pub fuel: String,
    pub chamber_pressure_psia: f64,
    pub of_ratio: f64,
}

impl ThermoRequest {
    pub fn new(
        oxidizer: impl Into<String>,
        fuel: impl Into<String>,
        chamber_pressure_psia: f64,
        of_ratio: f64,
    ) -> Self {
        ThermoRequest {
            oxidizer: oxidizer.into(),
            fuel: fuel.into(),
            chamber_pressure_psia,
            of_ratio,
        }
    }

    pub fn lox_rp1(chamber_pressure_psia: f64, of_ratio: f64) -> Self {
        Self::new(
            DEFAULT_OXIDIZER,
            DEFAULT_FUEL,
            chamber_pressure_psia,
            of_ratio,
        )
    }
}

// Source of chamber thermochemistry for the sizing calculator
pub trait ThermochemistryProvider {
    fn analyze(&self, request: &ThermoRequest) -> DesignResult<ThermoProperties>;
}

#[derive(Debug, Clone, Copy)]
pub struct FixedThermochemistry {
    properties: ThermoProperties,
}

impl FixedThermochemistry {
    pub fn new(properties: ThermoProperties) -> Self {
        FixedThermochemistry { properties }
    }
}

impl ThermochemistryProvider for FixedThermochemistry {
    fn analyze(&self, request: &ThermoRequest) -> DesignResult<ThermoProperties> {
        self.properties.validate()?;
        info!(
            "Using fixed thermochemistry for {}/{}",
            request.oxidizer, request.fuel
        );
        Ok(self.properties)
    }
}

// A saved NASA CEA full-output report for the requested operating point
#[derive(Debug, Clone)]
pub struct CeaReportFile {
    pub path: PathBuf,
}

impl CeaReportFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CeaReportFile { path: path.into() }
    }
}

impl ThermochemistryProvider for CeaReportFile {
    fn analyze(&self, request: &ThermoRequest) -> DesignResult<ThermoProperties> {
        let report = fs::read_to_string(&self.path).map_err(|e| {
            DesignError::ThermoLookupFailed(format!(
                "cannot read CEA report {}: {}",
                self.path.display(),
                e
            ))
        })?;
        let properties = parse_cea_report(&report)?.properties_for(request)?;
        info!(
            "Read CEA report {} for {}/{} at {} psia, O/F {}",
            self.path.display(),
            request.oxidizer,
            request.fuel,
            request.chamber_pressure_psia,
            request.of_ratio
        );
        Ok(properties)
    }
}
