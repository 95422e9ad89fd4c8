pub mod cea_report;
pub mod properties;
pub mod provider;
