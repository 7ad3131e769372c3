//! # Geostack CLI Application
//!
//! Terminal interface for the at-rest earth pressure calculation.
//!
//! With an input file the request is read as `EarthPressureInput` JSON;
//! without one a short interactive demo prompts for the wall geometry and
//! solves a sand-over-clay profile from the soil catalog.
//!
//! Set `RUST_LOG=debug` (or pass `--verbose`) to follow the solver.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use calc_core::calculations::{calculate, EarthPressureInput, Layer, LayerStack, SolveResult, WaterTable};
use calc_core::soils::ReferenceSoil;
use calc_core::{CalcError, CalcResult};
use log::info;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "calc_cli",
    about = "At-rest earth pressure on a basement wall (PN-EN 1997-1)"
)]
struct Options {
    /// Earth pressure input JSON; prompts for a demo when omitted
    #[structopt(parse(from_os_str))]
    input: Option<PathBuf>,

    /// Print only the result JSON
    #[structopt(long)]
    json: bool,

    /// Log solver steps (same as RUST_LOG=debug)
    #[structopt(short, long)]
    verbose: bool,
}

fn prompt_f64(input: &mut dyn BufRead, out: &mut dyn Write, prompt: &str, default: f64) -> f64 {
    if write!(out, "{}", prompt).and_then(|_| out.flush()).is_err() {
        return default;
    }

    let mut line = String::new();
    if input.read_line(&mut line).is_err() {
        return default;
    }

    line.trim().parse().unwrap_or(default)
}

fn write_failed(e: io::Error) -> CalcError {
    CalcError::file_error("write", "<stdout>", e.to_string())
}

fn load_input(path: &PathBuf) -> CalcResult<EarthPressureInput> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
    Ok(serde_json::from_str(&text)?)
}

fn demo_input(input: &mut dyn BufRead, out: &mut dyn Write) -> EarthPressureInput {
    let _ = writeln!(out, "No input file given. Running interactive demo...");
    let _ = writeln!(out);

    let total_height_m = prompt_f64(input, out, "Enter wall height H (m) [3.0]: ", 3.0);
    let surcharge_kpa = prompt_f64(input, out, "Enter surcharge q (kPa) [5.0]: ", 5.0);
    let h_w = prompt_f64(
        input,
        out,
        "Enter water height above base h_w (m, negative = none) [-1]: ",
        -1.0,
    );

    let stack = LayerStack::new(total_height_m, surcharge_kpa)
        .with_layer(Layer::from_soil(ReferenceSoil::MediumSandMediumDense, Some(1.0)))
        .with_layer(Layer::from_soil(ReferenceSoil::ClayStiff, None));

    let water_table = if h_w < 0.0 {
        WaterTable::none()
    } else {
        WaterTable::at_height(h_w)
    };

    EarthPressureInput {
        label: "CLI-Demo".to_string(),
        stack,
        water_table,
    }
}

fn print_report(out: &mut dyn Write, input: &EarthPressureInput, result: &SolveResult) -> io::Result<()> {
    writeln!(out, "═══════════════════════════════════════════════════════════════════════")?;
    writeln!(out, "  AT-REST EARTH PRESSURE - {}", input.label)?;
    writeln!(out, "═══════════════════════════════════════════════════════════════════════")?;
    writeln!(out)?;
    writeln!(out, "Input:")?;
    writeln!(out, "  Wall height:  H = {:.2} m", input.stack.total_height_m)?;
    writeln!(out, "  Surcharge:    q = {:.2} kPa", input.stack.surcharge_kpa)?;
    writeln!(out, "  Layers:       {}", input.stack.layers.len())?;
    if input.water_table.present {
        writeln!(
            out,
            "  Groundwater:  h_w = {:.2} m (above foundation base)",
            input.water_table.height_above_base_m
        )?;
    } else {
        writeln!(out, "  Groundwater:  none")?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "  {:<32} {:>6} {:>6} {:>6} {:>8} {:>8} {:>7} {:>8}",
        "Segment", "z_top", "z_bot", "K0", "σ'v bot", "u bot", "e0 top", "e0 bot"
    )?;
    for s in &result.segments {
        writeln!(
            out,
            "  {:<32} {:>6.2} {:>6.2} {:>6.3} {:>8.2} {:>8.2} {:>7.2} {:>8.2}{}",
            s.name,
            s.z_top_m,
            s.z_bot_m,
            s.k0,
            s.sigma_v_bot_kpa,
            s.u_bot_kpa,
            s.e0_top_kpa,
            s.e0_bot_kpa,
            if s.is_submerged { "  ~" } else { "" }
        )?;
    }
    writeln!(out)?;
    writeln!(out, "═══════════════════════════════════════════════════════════════════════")?;
    writeln!(
        out,
        "  E0 = {:.2} kN/m   |   M0 = {:.2} kNm/m (about the base)",
        result.resultant_force().value(),
        result.overturning_moment().value()
    )?;
    if let Some(arm) = result.resultant_height_m() {
        writeln!(out, "  Resultant acts {:.2} m above the base", arm)?;
    }
    writeln!(out, "═══════════════════════════════════════════════════════════════════════")
}

/// Solve one request. Demo prompts go to `stderr` in `--json` mode so
/// `stdout` holds nothing but the result JSON.
fn run(
    options: &Options,
    stdin: &mut dyn BufRead,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> CalcResult<()> {
    let input = match &options.input {
        Some(path) => load_input(path)?,
        None if options.json => demo_input(stdin, stderr),
        None => demo_input(stdin, stdout),
    };
    info!("solving '{}' with {} layer(s)", input.label, input.stack.layers.len());

    let result = calculate(&input)?;
    let json = serde_json::to_string_pretty(&result)?;

    if options.json {
        writeln!(stdout, "{}", json).map_err(write_failed)?;
        return Ok(());
    }

    writeln!(stdout).map_err(write_failed)?;
    print_report(stdout, &input, &result).map_err(write_failed)?;
    writeln!(stdout).map_err(write_failed)?;
    writeln!(stdout, "JSON Output (for LLM/API use):").map_err(write_failed)?;
    writeln!(stdout, "{}", json).map_err(write_failed)?;
    Ok(())
}

fn main() {
    let options = Options::from_args();

    let default_level = if options.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let stdin = io::stdin();
    let result = run(&options, &mut stdin.lock(), &mut io::stdout(), &mut io::stderr());
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if let Ok(json) = serde_json::to_string_pretty(&e) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{}", json);
        }
        process::exit(1);
    }
}
