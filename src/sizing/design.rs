use serde::Serialize;

// Geometry and performance of a sized converging-diverging engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EngineDesign {
    pub fuel_mass_flow_rate: f64,     // kg/s
    pub ox_mass_flow_rate: f64,       // kg/s
    pub throat_area: f64,             // mm²
    pub throat_diameter: f64,         // m
    pub exit_mach: f64,
    pub exit_throat_area_ratio: f64,
    pub exit_area: f64,               // m²
    pub exit_diameter: f64,           // m
    pub exit_velocity: f64,           // m/s
    pub isp: f64,                     // s
    pub thrust: f64,                  // kN
    pub chamber_volume: f64,          // m³
    pub chamber_to_throat_ratio: f64,
    pub chamber_area: f64,            // m²
    pub chamber_length: f64,          // m
    pub nozzle_length: f64,           // m
}

impl EngineDesign {
    pub fn entries(&self) -> [(&'static str, f64); 16] {
        [
            ("Fuel Mass Flow Rate (kg/s)", self.fuel_mass_flow_rate),
            ("Oxidizer Mass Flow Rate (kg/s)", self.ox_mass_flow_rate),
            ("Throat Area (mm^2)", self.throat_area),
            ("Throat Diameter (m)", self.throat_diameter),
            ("Exit Mach Number", self.exit_mach),
            ("Exit to Throat Area Ratio", self.exit_throat_area_ratio),
            ("Exit Area (m^2)", self.exit_area),
            ("Exit Diameter (m)", self.exit_diameter),
            ("Exit Velocity (m/s)", self.exit_velocity),
            ("ISP (sec)", self.isp),
            ("Thrust (kN)", self.thrust),
            ("Chamber Volume (m^3)", self.chamber_volume),
            ("Chamber to Throat Area Ratio", self.chamber_to_throat_ratio),
            ("Chamber Area (m^2)", self.chamber_area),
            ("Chamber Length (m)", self.chamber_length),
            ("Nozzle Length (m)", self.nozzle_length),
        ]
    }
}
