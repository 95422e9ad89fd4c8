// Physical Constants
pub const GAS_CONSTANT: f64 = 8314.0; // J/(kmol⋅K)
pub const ISP_GRAVITY: f64 = 9.8; // m/s², not standard 9.81; published Isp figures depend on it
pub const SEA_LEVEL_PRESSURE: f64 = 101325.0; // Pa

// Unit Conversions
pub const PSIA_PER_MPA: f64 = 145.038;
pub const PA_PER_MPA: f64 = 1e6;
pub const MM2_PER_M2: f64 = 1e6;
pub const CM_PER_M: f64 = 100.0;
pub const N_PER_KN: f64 = 1000.0;

// Chamber contraction correlation: Ac/At = a * Dt(cm)^b + c
pub const CONTRACTION_COEFFICIENT: f64 = 8.0;
pub const CONTRACTION_EXPONENT: f64 = -0.6;
pub const CONTRACTION_OFFSET: f64 = 1.25;

// Default Propellants (NASA CEA species names)
pub const DEFAULT_OXIDIZER: &str = "O2(G)";
pub const DEFAULT_FUEL: &str = "RP1_NASA";
