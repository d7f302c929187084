//! # Spoke CLI Application
//!
//! Terminal front end for the wheel geometry engine. Collects
//! measurements from flags or JSON files, runs the analysis and prints a
//! report (or JSON for scripting).
//!
//! Set `RUST_LOG=spoke_core=debug` to see the engine's trace events.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use spoke_core::analysis::{full_analysis, AnalysisResult, WheelSpec, DEFAULT_SPOKE_HOLE_DIAMETER_MM};
use spoke_core::build_sheet::{BuildSheet, BuildSheetRequest};
use spoke_core::components::describe_cross;
use spoke_core::errors::SpokeError;
use spoke_core::file_io::{load_json, load_wheel_spec, save_json};

#[derive(Parser)]
#[command(name = "spoke", version, about = "Wheel build calculator: spoke lengths, angles and tension")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a wheel from measurements given as flags
    Calc(CalcArgs),
    /// Analyze a wheel spec JSON file
    File {
        /// Path to a WheelSpec JSON document
        path: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print a build sheet from a build request JSON file
    Sheet {
        /// Path to a build request (customer, rim, hub, lacing)
        path: PathBuf,
    },
}

#[derive(Args)]
struct CalcArgs {
    /// Effective rim diameter (mm)
    #[arg(long)]
    erd: f64,
    /// Left flange pitch-circle diameter (mm)
    #[arg(long)]
    flange_diameter_left: f64,
    /// Right flange pitch-circle diameter (mm)
    #[arg(long)]
    flange_diameter_right: f64,
    /// Hub center to left flange (mm)
    #[arg(long)]
    flange_offset_left: f64,
    /// Hub center to right flange (mm)
    #[arg(long)]
    flange_offset_right: f64,
    /// Total spokes in the wheel
    #[arg(long)]
    spoke_count: u32,
    /// Left side crosses (0 = radial)
    #[arg(long)]
    cross_left: u32,
    /// Right side crosses (0 = radial)
    #[arg(long)]
    cross_right: u32,
    /// Hub flange spoke-hole diameter (mm)
    #[arg(long, default_value_t = DEFAULT_SPOKE_HOLE_DIAMETER_MM)]
    spoke_hole_diameter: f64,
    /// Rim drilling offset (mm, signed)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    rim_offset: f64,
    #[command(flatten)]
    output: OutputArgs,
}

impl CalcArgs {
    fn to_spec(&self) -> WheelSpec {
        WheelSpec {
            erd: self.erd,
            flange_diameter_left: self.flange_diameter_left,
            flange_diameter_right: self.flange_diameter_right,
            flange_offset_left: self.flange_offset_left,
            flange_offset_right: self.flange_offset_right,
            spoke_count: self.spoke_count,
            cross_pattern_left: self.cross_left,
            cross_pattern_right: self.cross_right,
            spoke_hole_diameter: self.spoke_hole_diameter,
            rim_offset: self.rim_offset,
        }
    }
}

#[derive(Args)]
struct OutputArgs {
    /// Print the result as JSON instead of a report
    #[arg(long)]
    json: bool,
    /// Also save the JSON result to this path
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            if let Some(spoke_err) = e.downcast_ref::<SpokeError>() {
                if spoke_err.is_input_fault() {
                    eprintln!("Check the rim and hub measurements and the spoke count.");
                }
                if let Ok(json) = serde_json::to_string_pretty(spoke_err) {
                    eprintln!();
                    eprintln!("Error JSON:");
                    eprintln!("{}", json);
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Calc(args) => analyze(&args.to_spec(), &args.output),
        Command::File { path, output } => {
            let spec = load_wheel_spec(&path)
                .with_context(|| format!("loading wheel spec from {}", path.display()))?;
            analyze(&spec, &output)
        }
        Command::Sheet { path } => {
            let request: BuildSheetRequest = load_json(&path)
                .with_context(|| format!("loading build request from {}", path.display()))?;
            let sheet = BuildSheet::prepare(request).context("analyzing build")?;
            print!("{}", sheet.render_text());
            Ok(())
        }
    }
}

fn analyze(spec: &WheelSpec, output: &OutputArgs) -> Result<()> {
    let result = full_analysis(spec).context("analyzing wheel")?;

    if output.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(spec, &result);
    }

    if let Some(path) = &output.output {
        save_result(&result, path)?;
    }
    Ok(())
}

fn save_result(result: &AnalysisResult, path: &Path) -> Result<()> {
    save_json(result, path).with_context(|| format!("saving result to {}", path.display()))?;
    info!(path = %path.display(), "saved analysis result");
    Ok(())
}

fn print_report(spec: &WheelSpec, result: &AnalysisResult) {
    println!("═══════════════════════════════════════");
    println!("  SPOKE CALCULATION RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  ERD:          {:.1} mm (rim offset {:.1} mm)", spec.erd, spec.rim_offset);
    println!(
        "  Flanges:      {:.1} / {:.1} mm dia, {:.1} / {:.1} mm offset",
        spec.flange_diameter_left,
        spec.flange_diameter_right,
        spec.flange_offset_left,
        spec.flange_offset_right
    );
    println!(
        "  Lacing:       {} spokes, {} / {}",
        spec.spoke_count,
        describe_cross(spec.cross_pattern_left),
        describe_cross(spec.cross_pattern_right)
    );
    println!("  Hole dia:     {:.1} mm", spec.spoke_hole_diameter);
    println!();
    println!("{:<22}{:>8}{:>8}", "", "Left", "Right");
    println!(
        "{:<22}{:>8.1}{:>8.1}",
        "  Length (mm)", result.spoke_length_left, result.spoke_length_right
    );
    println!(
        "{:<22}{:>8.0}{:>8.0}",
        "  Order (mm)", result.spoke_length_left_rounded, result.spoke_length_right_rounded
    );
    println!(
        "{:<22}{:>8.1}{:>8.1}",
        "  Tension (%)", result.tension_percent_left, result.tension_percent_right
    );
    println!(
        "{:<22}{:>8.1}{:>8.1}",
        "  Bracing (deg)", result.bracing_angle_left, result.bracing_angle_right
    );
    println!(
        "{:<22}{:>8.1}{:>8.1}",
        "  Wrap (deg)", result.wrap_angle_left, result.wrap_angle_right
    );
    println!(
        "{:<22}{:>8.1}{:>8.1}",
        "  Total (deg)", result.total_angle_left, result.total_angle_right
    );
    println!(
        "{:<22}{:>8.1}{:>8.1}",
        "  Theta (deg)", result.theta_angle_left, result.theta_angle_right
    );
    println!("═══════════════════════════════════════");
}
