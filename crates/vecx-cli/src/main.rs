//! vecx - command-line front end for the vecx vector kernels
//!
//! Evaluates angles, interpolation, smoothing trajectories and
//! orthonormalization for vectors given as `"(x, y)"` or `"(x, y, z)"`.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "vecx")]
#[command(author, version, about = "Vector math kernel CLI")]
#[command(long_about = "
Evaluate vecx vector operations from the shell.
Vectors are written as \"(x, y)\" or \"(x, y, z)\"; the component count
selects the 2D or 3D kernel.

Examples:
  vecx info \"(3, 4)\"                          # Magnitude, normalized, forms
  vecx angle \"(1, 0, 0)\" \"(0, 0, 1)\" --axis \"(0, 1, 0)\"
  vecx lerp \"(0, 0)\" \"(10, 5)\" -t 0.25
  vecx slerp \"(1, 0, 0)\" \"(0, 1, 0)\" -t 0.5
  vecx damp \"(0, 0)\" \"(10, -5)\" --smooth-time 0.3 --steps 120 --json
  vecx ortho \"(2, 0, 0)\" \"(1, 1, 0)\" \"(1, 1, 1)\"
  vecx rotate \"(2, 0, 0)\" \"(0, 5, 0)\" --max-radians 0.5 --max-magnitude 1
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Show magnitude, normalized form and conversions of a vector
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Unsigned or signed angle between two vectors, in degrees
    #[command(visible_alias = "a")]
    Angle(AngleArgs),

    /// Linear interpolation
    Lerp(LerpArgs),

    /// Spherical interpolation (3D)
    Slerp(LerpArgs),

    /// Critically damped smoothing trajectory
    #[command(visible_alias = "d")]
    Damp(DampArgs),

    /// Gram-Schmidt orthonormalization (3D)
    Ortho(OrthoArgs),

    /// Rotate a vector toward a target (3D)
    Rotate(RotateArgs),
}

#[derive(Args)]
struct InfoArgs {
    /// Vector, e.g. "(3, 4)"
    vector: String,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct AngleArgs {
    /// Start vector
    from: String,

    /// End vector
    to: String,

    /// Reference axis for a signed 3D angle
    #[arg(long)]
    axis: Option<String>,

    /// Report the signed angle (2D)
    #[arg(long)]
    signed: bool,
}

#[derive(Args)]
struct LerpArgs {
    /// Start vector
    a: String,

    /// End vector
    b: String,

    /// Interpolation parameter
    #[arg(short, long)]
    t: f64,

    /// Do not clamp t to [0, 1]
    #[arg(long)]
    unclamped: bool,
}

#[derive(Args)]
struct DampArgs {
    /// Start position
    current: String,

    /// Target position
    target: String,

    /// Approximate time to reach the target
    #[arg(long, default_value = "0.3")]
    smooth_time: f64,

    /// Time step
    #[arg(long, default_value = "0.016666666666666666")]
    dt: f64,

    /// Number of steps to simulate
    #[arg(short = 'n', long, default_value = "60")]
    steps: usize,

    /// Speed limit (default: unlimited)
    #[arg(long)]
    max_speed: Option<f64>,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct OrthoArgs {
    /// Normal vector
    normal: String,

    /// Tangent vector
    tangent: String,

    /// Optional binormal vector
    binormal: Option<String>,
}

#[derive(Args)]
struct RotateArgs {
    /// Current vector
    current: String,

    /// Target vector
    target: String,

    /// Maximum rotation in radians
    #[arg(long)]
    max_radians: f64,

    /// Maximum change in length
    #[arg(long, default_value = "0.0")]
    max_magnitude: f64,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let verbose = cli.verbose > 0;

    match cli.command {
        Commands::Info(args) => commands::info::run(args, verbose),
        Commands::Angle(args) => commands::angle::run(args, verbose),
        Commands::Lerp(args) => commands::interp::run_lerp(args, verbose),
        Commands::Slerp(args) => commands::interp::run_slerp(args, verbose),
        Commands::Damp(args) => commands::damp::run(args, verbose),
        Commands::Ortho(args) => commands::ortho::run(args, verbose),
        Commands::Rotate(args) => commands::rotate::run(args, verbose),
    }
}
