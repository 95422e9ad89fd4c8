use std::io::{self, Write};
use std::process::ExitCode;

use engine_design::presentation::console::{write_design, write_thermo};
use engine_design::presentation::prompt::{prompt_inputs, prompt_thermo};
use engine_design::*;

const USAGE: &str = "usage: main [--config <design.toml> | --report <cea_output.txt>]";

enum Mode {
    Interactive,
    Report(String),
    Config(String),
}

fn parse_args() -> Result<Mode, String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => Ok(Mode::Interactive),
        [flag, path] if flag == "--report" => Ok(Mode::Report(path.clone())),
        [flag, path] if flag == "--config" => Ok(Mode::Config(path.clone())),
        _ => Err(USAGE.to_string()),
    }
}

fn run(mode: Mode) -> DesignResult<()> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut out = io::stdout().lock();

    let (inputs, provider, request) = match mode {
        Mode::Config(path) => {
            let config = DesignConfig::load(&path)?;
            (config.inputs, config.provider(), config.request())
        }
        Mode::Report(path) => {
            let inputs = prompt_inputs(&mut reader, &mut out)?;
            let provider: Box<dyn ThermochemistryProvider> = Box::new(CeaReportFile::new(path));
            let request = ThermoRequest::lox_rp1(inputs.chamber_pressure, inputs.of_ratio);
            (inputs, provider, request)
        }
        Mode::Interactive => {
            let inputs = prompt_inputs(&mut reader, &mut out)?;
            let thermo = prompt_thermo(&mut reader, &mut out)?;
            let provider: Box<dyn ThermochemistryProvider> =
                Box::new(FixedThermochemistry::new(thermo));
            let request = ThermoRequest::lox_rp1(inputs.chamber_pressure, inputs.of_ratio);
            (inputs, provider, request)
        }
    };

    let thermo = provider.analyze(&request)?;
    write_thermo(&mut out, &thermo)?;

    let design = size_engine(&inputs, &thermo)?;
    write_design(&mut out, &design)?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let mode = match parse_args() {
        Ok(mode) => mode,
        Err(usage) => {
            eprintln!("{}", usage);
            return ExitCode::from(2);
        }
    };

    match run(mode) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
