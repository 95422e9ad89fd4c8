use log::{debug, info, warn};

use crate::constants::{
    CM_PER_M, CONTRACTION_COEFFICIENT, CONTRACTION_EXPONENT, CONTRACTION_OFFSET, GAS_CONSTANT,
    ISP_GRAVITY, MM2_PER_M2, N_PER_KN, PA_PER_MPA, PSIA_PER_MPA, SEA_LEVEL_PRESSURE,
};
use crate::errors::{DesignError, DesignResult};
use crate::sizing::design::EngineDesign;
use crate::sizing::guards::{checked_div, checked_powf, checked_sqrt, finite};
use crate::sizing::inputs::EngineInputs;
use crate::thermochemistry::properties::ThermoProperties;

// Sizes the engine from design inputs and chamber thermochemistry
pub fn size_engine(
    inputs: &EngineInputs,
    thermo: &ThermoProperties,
) -> DesignResult<EngineDesign> {
    inputs.validate()?;
    thermo.validate()?;

    let gamma = thermo.gamma;
    let chamber_pressure = psia_to_mpa(inputs.chamber_pressure);
    if inputs.exit_pressure > chamber_pressure {
        return Err(DesignError::domain(
            "exit_mach",
            format!(
                "exit pressure {} MPa exceeds chamber pressure {} MPa",
                inputs.exit_pressure, chamber_pressure
            ),
        ));
    }
    let pressure_ratio = inputs.exit_pressure / chamber_pressure;

    let (fuel_mass_flow_rate, ox_mass_flow_rate) =
        propellant_split(inputs.mass_flow_rate, inputs.of_ratio)?;

    let throat_area = throat_area(inputs.mass_flow_rate, chamber_pressure, thermo)?;
    let throat_area_m2 = throat_area / MM2_PER_M2;
    let throat_diameter = circular_diameter("throat_diameter", throat_area_m2)?;
    debug!(
        "throat: area = {} mm², diameter = {} m",
        throat_area, throat_diameter
    );

    let exit_mach = exit_mach_number(pressure_ratio, gamma)?;
    let exit_throat_area_ratio = exit_throat_area_ratio(exit_mach, gamma)?;
    let exit_area = throat_area_m2 * exit_throat_area_ratio;
    let exit_diameter = circular_diameter("exit_diameter", exit_area)?;
    debug!(
        "exit: mach = {}, area ratio = {}, diameter = {} m",
        exit_mach, exit_throat_area_ratio, exit_diameter
    );

    let exit_velocity = exit_velocity(pressure_ratio, thermo)?;
    let isp = specific_impulse(exit_velocity);
    let thrust = thrust(
        inputs.mass_flow_rate,
        exit_velocity,
        exit_area,
        inputs.exit_pressure,
    )?;
    debug!(
        "performance: exit velocity = {} m/s, isp = {} s, thrust = {} kN",
        exit_velocity, isp, thrust
    );

    let chamber_volume = chamber_volume(throat_area, inputs.l_star);
    let chamber_to_throat_ratio = chamber_to_throat_ratio(throat_diameter)?;
    let chamber_area = throat_area_m2 * chamber_to_throat_ratio;
    let chamber_length = checked_div("chamber_length", chamber_volume, chamber_area)?;
    let nozzle_length = nozzle_length(exit_diameter, throat_diameter, inputs.cone_half_angle)?;
    debug!(
        "chamber: volume = {} m³, area = {} m², length = {} m; nozzle length = {} m",
        chamber_volume, chamber_area, chamber_length, nozzle_length
    );

    info!(
        "Sized engine: {:.3} kN thrust, {:.1} s Isp, throat {:.4} m",
        thrust, isp, throat_diameter
    );

    Ok(EngineDesign {
        fuel_mass_flow_rate,
        ox_mass_flow_rate,
        throat_area,
        throat_diameter,
        exit_mach,
        exit_throat_area_ratio,
        exit_area,
        exit_diameter,
        exit_velocity,
        isp,
        thrust,
        chamber_volume,
        chamber_to_throat_ratio,
        chamber_area,
        chamber_length,
        nozzle_length,
    })
}

pub fn psia_to_mpa(pressure_psia: f64) -> f64 {
    pressure_psia / PSIA_PER_MPA
}

// Splits total flow into `(fuel, oxidizer)` by mixture ratio
pub fn propellant_split(mass_flow_rate: f64, of_ratio: f64) -> DesignResult<(f64, f64)> {
    let ox_mass_flow_rate = checked_div(
        "ox_mass_flow_rate",
        mass_flow_rate * of_ratio,
        1.0 + of_ratio,
    )?;
    Ok((mass_flow_rate - ox_mass_flow_rate, ox_mass_flow_rate))
}

// Choked-throat area in mm² for chamber pressure in MPa
pub fn throat_area(
    mass_flow_rate: f64,
    chamber_pressure: f64,
    thermo: &ThermoProperties,
) -> DesignResult<f64> {
    let gamma = thermo.gamma;
    let flow_per_pressure = checked_div("throat_area", mass_flow_rate, chamber_pressure)?;
    let specific_gas_term = checked_div(
        "throat_area",
        thermo.stagnation_temp * GAS_CONSTANT / thermo.molar_mass,
        gamma,
    )?;
    let choking_exponent = checked_div("throat_area", gamma + 1.0, 2.0 * (gamma - 1.0))?;
    let choking_term = checked_powf("throat_area", 1.0 + (gamma - 1.0) / 2.0, choking_exponent)?;
    finite(
        "throat_area",
        flow_per_pressure * checked_sqrt("throat_area", specific_gas_term)? * choking_term,
    )
}

// Diameter in m of a circle with the given area in m²
pub fn circular_diameter(quantity: &'static str, area: f64) -> DesignResult<f64> {
    Ok(2.0 * checked_sqrt(quantity, area / std::f64::consts::PI)?)
}

// Exit Mach number from the isentropic pressure ratio `pe / pc`
pub fn exit_mach_number(pressure_ratio: f64, gamma: f64) -> DesignResult<f64> {
    if pressure_ratio > 1.0 {
        return Err(DesignError::domain(
            "exit_mach",
            format!(
                "exit to chamber pressure ratio {} exceeds 1",
                pressure_ratio
            ),
        ));
    }
    let expansion = checked_powf("exit_mach", pressure_ratio, -(gamma - 1.0) / gamma)?;
    let radicand = checked_div("exit_mach", 2.0 * (expansion - 1.0), gamma - 1.0)?;
    checked_sqrt("exit_mach", radicand)
}

// Isentropic area-Mach relation `Ae/At` evaluated at `mach`
pub fn exit_throat_area_ratio(mach: f64, gamma: f64) -> DesignResult<f64> {
    let inverse_mach = checked_div("exit_throat_area_ratio", 1.0, mach)?;
    let base = (2.0 / (gamma + 1.0)) * (1.0 + ((gamma - 1.0) / 2.0) * mach.powi(2));
    let exponent = checked_div("exit_throat_area_ratio", gamma + 1.0, 2.0 * (gamma - 1.0))?;
    finite(
        "exit_throat_area_ratio",
        inverse_mach * checked_powf("exit_throat_area_ratio", base, exponent)?,
    )
}

// Ideal exhaust velocity in m/s from the energy equation
pub fn exit_velocity(pressure_ratio: f64, thermo: &ThermoProperties) -> DesignResult<f64> {
    let gamma = thermo.gamma;
    let enthalpy_term = checked_div(
        "exit_velocity",
        2.0 * GAS_CONSTANT * gamma,
        gamma - 1.0,
    )?;
    let temperature_term = checked_div(
        "exit_velocity",
        thermo.stagnation_temp,
        thermo.molar_mass,
    )?;
    let expansion = checked_powf("exit_velocity", pressure_ratio, (gamma - 1.0) / gamma)?;
    checked_sqrt(
        "exit_velocity",
        enthalpy_term * temperature_term * (1.0 - expansion),
    )
}

pub fn specific_impulse(exit_velocity: f64) -> f64 {
    exit_velocity / ISP_GRAVITY
}

// Sea-level thrust in kN: momentum plus pressure thrust, exit pressure in MPa
pub fn thrust(
    mass_flow_rate: f64,
    exit_velocity: f64,
    exit_area: f64,
    exit_pressure: f64,
) -> DesignResult<f64> {
    let pressure_thrust = exit_area * (exit_pressure * PA_PER_MPA - SEA_LEVEL_PRESSURE);
    if pressure_thrust < 0.0 {
        warn!(
            "Nozzle is overexpanded at sea level: pressure thrust {} N",
            pressure_thrust
        );
    }
    finite(
        "thrust",
        (mass_flow_rate * exit_velocity + pressure_thrust) / N_PER_KN,
    )
}

// Chamber volume in m³ from the throat area in mm² and L*
pub fn chamber_volume(throat_area: f64, l_star: f64) -> f64 {
    throat_area * l_star / MM2_PER_M2
}

// Empirical contraction ratio `Ac/At` for a throat diameter in m
pub fn chamber_to_throat_ratio(throat_diameter: f64) -> DesignResult<f64> {
    let correlation = checked_powf(
        "chamber_to_throat_ratio",
        throat_diameter * CM_PER_M,
        CONTRACTION_EXPONENT,
    )?;
    Ok(CONTRACTION_COEFFICIENT * correlation + CONTRACTION_OFFSET)
}

// Length in m of a conical divergent section
pub fn nozzle_length(
    exit_diameter: f64,
    throat_diameter: f64,
    cone_half_angle: f64,
) -> DesignResult<f64> {
    checked_div(
        "nozzle_length",
        exit_diameter - throat_diameter,
        2.0 * cone_half_angle.to_radians().tan(),
    )
}
