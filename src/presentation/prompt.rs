use std::io::{BufRead, Write};

use crate::errors::{DesignError, DesignResult};
use crate::sizing::inputs::EngineInputs;
use crate::thermochemistry::properties::ThermoProperties;

pub fn prompt_inputs<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> DesignResult<EngineInputs> {
    writeln!(writer, "Converging/Diverging Engine Design Parameters")?;
    writeln!(writer)?;
    let mass_flow_rate = prompt_number(
        reader,
        writer,
        "mass_flow_rate",
        "Enter Mass Flow Rate (kg/s): ",
    )?;
    let of_ratio = prompt_number(reader, writer, "of_ratio", "Enter O/F Ratio: ")?;
    let chamber_pressure = prompt_number(
        reader,
        writer,
        "chamber_pressure",
        "Enter Chamber Pressure (psia): ",
    )?;
    let exit_pressure = prompt_number(
        reader,
        writer,
        "exit_pressure",
        "Enter Exit Pressure (MPa): ",
    )?;
    let l_star = prompt_number(
        reader,
        writer,
        "l_star",
        "Enter Characteristic Length (m): ",
    )?;
    let cone_half_angle = prompt_number(
        reader,
        writer,
        "cone_half_angle",
        "Enter Nozzle Cone Half Angle (deg): ",
    )?;
    writeln!(writer)?;

    EngineInputs::new(
        mass_flow_rate,
        of_ratio,
        chamber_pressure,
        exit_pressure,
        l_star,
        cone_half_angle,
    )
}

// Prompts for chamber thermochemistry when no analysis report is available
pub fn prompt_thermo<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> DesignResult<ThermoProperties> {
    let stagnation_temp = prompt_number(
        reader,
        writer,
        "stagnation_temp",
        "Enter Stagnation Temperature (K): ",
    )?;
    let molar_mass = prompt_number(reader, writer, "molar_mass", "Enter Molar Mass (kg/kmol): ")?;
    let gamma = prompt_number(reader, writer, "gamma", "Enter Specific Heat Ratio (Gamma): ")?;
    writeln!(writer)?;

    ThermoProperties::new(stagnation_temp, molar_mass, gamma)
}

fn prompt_number<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    field: &'static str,
    prompt: &str,
) -> DesignResult<f64> {
    write!(writer, "{}", prompt)?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(DesignError::invalid_input(field, "no value entered"));
    }
    let entry = line.trim();
    entry
        .parse::<f64>()
        .map_err(|_| DesignError::invalid_input(field, format!("`{}` is not a number", entry)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompts_in_order() {
        let mut reader = Cursor::new("1.0\n2.3\n300\n0.101325\n1.0\n15\n");
        let mut output = Vec::new();
        let inputs = prompt_inputs(&mut reader, &mut output).unwrap();

        assert_eq!(
            inputs,
            EngineInputs::new(1.0, 2.3, 300.0, 0.101325, 1.0, 15.0).unwrap()
        );
        let text = String::from_utf8(output).unwrap();
        let mass = text.find("Mass Flow Rate").unwrap();
        let angle = text.find("Cone Half Angle").unwrap();
        assert!(mass < angle);
    }

    #[test]
    fn test_non_numeric_entry_names_field() {
        let mut reader = Cursor::new("1.0\nlots\n");
        let mut output = Vec::new();
        let err = prompt_inputs(&mut reader, &mut output).unwrap_err();
        assert!(matches!(
            err,
            DesignError::InvalidInput {
                field: "of_ratio",
                ..
            }
        ));
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        let mut reader = Cursor::new("1.0\n2.3\n");
        let mut output = Vec::new();
        assert!(matches!(
            prompt_inputs(&mut reader, &mut output),
            Err(DesignError::InvalidInput {
                field: "chamber_pressure",
                ..
            })
        ));
    }

    #[test]
    fn test_out_of_range_entry_is_rejected() {
        let mut reader = Cursor::new("1.0\n2.3\n300\n0.1\n1.0\n120\n");
        let mut output = Vec::new();
        assert!(prompt_inputs(&mut reader, &mut output).is_err());
    }

    #[test]
    fn test_prompt_thermo() {
        let mut reader = Cursor::new("3400\n21.0\n1.2\n");
        let mut output = Vec::new();
        let thermo = prompt_thermo(&mut reader, &mut output).unwrap();
        assert_eq!(thermo, ThermoProperties::new(3400.0, 21.0, 1.2).unwrap());
    }
}
