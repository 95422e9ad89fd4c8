pub mod config;
pub mod constants;
pub mod errors;
pub mod presentation;
pub mod sizing;
pub mod thermochemistry;

pub use constants::*;
pub use errors::{DesignError, DesignResult};

// Re-export the sizing core
pub use sizing::calculator::size_engine;
pub use sizing::design::EngineDesign;
pub use sizing::inputs::EngineInputs;

// Re-export the thermochemistry boundary
pub use thermochemistry::cea_report::{parse_cea_report, CeaReport};
pub use thermochemistry::properties::ThermoProperties;
pub use thermochemistry::provider::{
    CeaReportFile, FixedThermochemistry, ThermoRequest, ThermochemistryProvider,
};

pub use config::DesignConfig;
