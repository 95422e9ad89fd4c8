use std::io::Write;

use crate::errors::DesignResult;
use crate::sizing::design::EngineDesign;
use crate::thermochemistry::properties::ThermoProperties;

pub fn write_thermo<W: Write>(writer: &mut W, thermo: &ThermoProperties) -> DesignResult<()> {
    writeln!(writer, "NASA CEA Calculations: ")?;
    writeln!(writer, "Stagnation Temperature (K): {}", thermo.stagnation_temp)?;
    writeln!(writer, "Molar Mass (kg/kmol): {}", thermo.molar_mass)?;
    writeln!(writer, "Specific Heat Ratio (Gamma): {}", thermo.gamma)?;
    Ok(())
}

pub fn write_design<W: Write>(writer: &mut W, design: &EngineDesign) -> DesignResult<()> {
    writeln!(writer)?;
    for (label, value) in design.entries() {
        writeln!(writer, "{}: {}", label, value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sizing::calculator::size_engine;
    use crate::sizing::inputs::EngineInputs;

    #[test]
    fn test_design_lines_in_field_order() {
        let inputs = EngineInputs::new(1.0, 2.3, 300.0, 0.101325, 1.0, 15.0).unwrap();
        let thermo = ThermoProperties::new(3400.0, 21.0, 1.2).unwrap();
        let design = size_engine(&inputs, &thermo).unwrap();

        let mut output = Vec::new();
        write_design(&mut output, &design).unwrap();
        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();

        assert_eq!(lines.len(), design.entries().len());
        assert!(lines[0].starts_with("Fuel Mass Flow Rate (kg/s): "));
        assert!(lines[9].starts_with("ISP (sec): "));
        assert!(lines[15].starts_with("Nozzle Length (m): "));

        let printed: f64 = lines[4]
            .split(": ")
            .nth(1)
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(printed, design.exit_mach);
    }

    #[test]
    fn test_thermo_echo() {
        let thermo = ThermoProperties::new(3400.0, 21.0, 1.2).unwrap();
        let mut output = Vec::new();
        write_thermo(&mut output, &thermo).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Stagnation Temperature (K): 3400"));
        assert!(text.contains("Specific Heat Ratio (Gamma): 1.2"));
    }
}
