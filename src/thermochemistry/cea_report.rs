use std::sync::OnceLock;

use regex::Regex;

use crate::errors::{DesignError, DesignResult};
use crate::thermochemistry::properties::ThermoProperties;
use crate::thermochemistry::provider::ThermoRequest;

// The first occurrence of each row is the chamber column of the report.
const STAGNATION_TEMP_PATTERN: &str = r"T, K\s*([\d.]+)";
const MOLAR_MASS_PATTERN: &str = r"M, \(1/n\)\s*([\d.]+)";
const GAMMA_PATTERN: &str = r"GAMMAs\s*([\d.]+)";
const CHAMBER_PRESSURE_PATTERN: &str = r"Pin\s*=\s*([\d.]+)\s*PSIA";
const OF_RATIO_PATTERN: &str = r"O/F\s*=\s*([\d.]+)";

// Pin is printed to 0.1 psia, so low-pressure cases need some slack
pub const OPERATING_POINT_TOLERANCE: f64 = 5e-3;

struct ReportPatterns {
    stagnation_temp: Regex,
    molar_mass: Regex,
    gamma: Regex,
    chamber_pressure: Regex,
    of_ratio: Regex,
}

fn patterns() -> DesignResult<&'static ReportPatterns> {
    static PATTERNS: OnceLock<Result<ReportPatterns, regex::Error>> = OnceLock::new();
    PATTERNS
        .get_or_init(|| {
            Ok(ReportPatterns {
                stagnation_temp: Regex::new(STAGNATION_TEMP_PATTERN)?,
                molar_mass: Regex::new(MOLAR_MASS_PATTERN)?,
                gamma: Regex::new(GAMMA_PATTERN)?,
                chamber_pressure: Regex::new(CHAMBER_PRESSURE_PATTERN)?,
                of_ratio: Regex::new(OF_RATIO_PATTERN)?,
            })
        })
        .as_ref()
        .map_err(|e| DesignError::ThermoLookupFailed(format!("bad report pattern: {}", e)))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CeaReport {
    pub chamber_pressure_psia: f64,
    pub of_ratio: f64,
    pub properties: ThermoProperties,
}

// Reads a NASA CEA full-output report (SI units)
pub fn parse_cea_report(report: &str) -> DesignResult<CeaReport> {
    let patterns = patterns()?;
    let chamber_pressure_psia = capture(&patterns.chamber_pressure, report, "Pin")?;
    let of_ratio = capture(&patterns.of_ratio, report, "O/F")?;
    let stagnation_temp = capture(&patterns.stagnation_temp, report, "T, K")?;
    let molar_mass = capture(&patterns.molar_mass, report, "M, (1/n)")?;
    let gamma = capture(&patterns.gamma, report, "GAMMAs")?;

    Ok(CeaReport {
        chamber_pressure_psia,
        of_ratio,
        properties: ThermoProperties::new(stagnation_temp, molar_mass, gamma)?,
    })
}

impl CeaReport {
    // Chamber properties, provided the report was run at the requested point
    pub fn properties_for(&self, request: &ThermoRequest) -> DesignResult<ThermoProperties> {
        check_operating_point(
            "chamber pressure (psia)",
            self.chamber_pressure_psia,
            request.chamber_pressure_psia,
        )?;
        check_operating_point("O/F ratio", self.of_ratio, request.of_ratio)?;
        Ok(self.properties)
    }
}

fn check_operating_point(name: &str, reported: f64, requested: f64) -> DesignResult<()> {
    if (reported - requested).abs() > OPERATING_POINT_TOLERANCE * requested.abs() {
        return Err(DesignError::ThermoLookupFailed(format!(
            "report {} is {}, design asks for {}",
            name, reported, requested
        )));
    }
    Ok(())
}

fn capture(pattern: &Regex, report: &str, row: &str) -> DesignResult<f64> {
    let text = pattern
        .captures(report)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| {
            DesignError::ThermoLookupFailed(format!("row `{}` not found in CEA output", row))
        })?;
    text.parse::<f64>().map_err(|_| {
        DesignError::ThermoLookupFailed(format!("row `{}` has unreadable value `{}`", row, text))
    })
}
