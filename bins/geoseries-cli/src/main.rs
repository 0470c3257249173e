//! geoseries — command-line front end for geoseries-core.
//!
//! Generates series, picks special values with both selectors, and runs the
//! consistency benchmark. Command output goes to stdout, logs to stderr.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};

use geoseries_core::{
    pick_special, pick_special_alt, round_quarter, run_benchmark, BenchConfig, Series,
    SeriesGenerator,
};

/// Quarter-rounded geometric series and special-value selection.
#[derive(Debug, Parser)]
#[command(name = "geoseries", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Log output format ("text" or "json").
    #[arg(long, global = true, default_value = "text")]
    log_format: String,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Round a value to the nearest quarter.
    Round {
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Generate a series.
    Series(SeriesArgs),
    /// Pick the special values with both selectors.
    Pick(PickArgs),
    /// Time both selectors over many targets and count disagreements.
    Bench(BenchArgs),
}

#[derive(Debug, Args)]
struct SeriesInputs {
    /// First-term input.
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    x: f64,

    /// Growth-rate input.
    #[arg(long, default_value_t = 5062.5, allow_negative_numbers = true)]
    y: f64,

    /// Requested series length.
    #[arg(long, default_value_t = 10)]
    length: usize,
}

#[derive(Debug, Args)]
struct SeriesArgs {
    #[command(flatten)]
    inputs: SeriesInputs,

    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct PickArgs {
    #[command(flatten)]
    inputs: SeriesInputs,

    /// Target ratio; values are matched against 1000 / z.
    #[arg(long, allow_negative_numbers = true)]
    z: f64,

    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct BenchArgs {
    /// Number of target ratios.
    #[arg(long, default_value_t = BenchConfig::default().count)]
    count: usize,

    #[arg(long, default_value_t = BenchConfig::default().x, allow_negative_numbers = true)]
    x: f64,

    #[arg(long, default_value_t = BenchConfig::default().y, allow_negative_numbers = true)]
    y: f64,

    #[arg(long, default_value_t = BenchConfig::default().length)]
    length: usize,

    /// Lower bound for target ratios.
    #[arg(long, default_value_t = BenchConfig::default().z_min, allow_negative_numbers = true)]
    z_min: f64,

    /// Upper bound (exclusive) for target ratios.
    #[arg(long, default_value_t = BenchConfig::default().z_max, allow_negative_numbers = true)]
    z_max: f64,

    /// RNG seed for the target draw.
    #[arg(long, default_value_t = BenchConfig::default().seed)]
    seed: u64,

    /// Index slack for the closed-form selector.
    #[arg(long, default_value_t = BenchConfig::default().leeway)]
    leeway: usize,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
}

impl BenchArgs {
    fn into_config(self) -> (BenchConfig, bool) {
        let config = BenchConfig {
            x: self.x,
            y: self.y,
            length: self.length,
            count: self.count,
            z_min: self.z_min,
            z_max: self.z_max,
            seed: self.seed,
            leeway: self.leeway,
        };
        (config, self.json)
    }
}

#[derive(Serialize)]
struct SeriesOutput<'a> {
    first_term: f64,
    growth_rate: f64,
    series: &'a Series,
}

#[derive(Serialize)]
struct PickOutput {
    z: f64,
    linear: (f64, f64),
    closed_form: (f64, f64),
    agree: bool,
}

fn format_values(values: &[f64]) -> String {
    let parts: Vec<String> = values.iter().map(|v| format!("{v:.2}")).collect();
    format!("[{}]", parts.join(", "))
}

fn cmd_series(args: SeriesArgs) -> Result<()> {
    let SeriesInputs { x, y, length } = args.inputs;
    let generator = SeriesGenerator::new(x, y, length);
    let params = generator.params();
    let series = generator.generate();
    info!(x, y, length, produced = series.len(), "series generated");

    if args.json {
        let out = SeriesOutput {
            first_term: params.first_term,
            growth_rate: params.growth_rate,
            series: &series,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("growth_rate: {}", params.growth_rate);
        println!("series: {}", format_values(&series));
    }
    Ok(())
}

fn cmd_pick(args: PickArgs) -> Result<()> {
    let SeriesInputs { x, y, length } = args.inputs;
    let generator = SeriesGenerator::new(x, y, length);
    let growth_rate = generator.params().growth_rate;
    let series = generator.generate();

    let linear = pick_special(args.z, &series).context("linear selection failed")?;
    let closed_form = pick_special_alt(args.z, growth_rate, &series)
        .context("closed-form selection failed")?;
    let agree = linear == closed_form;
    if !agree {
        warn!(z = args.z, ?linear, ?closed_form, "selectors disagree");
    }

    if args.json {
        let out = PickOutput {
            z: args.z,
            linear,
            closed_form,
            agree,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("series:      {}", format_values(&series));
        println!("linear:      ({:.2}, {:.2})", linear.0, linear.1);
        println!("closed_form: ({:.2}, {:.2})", closed_form.0, closed_form.1);
        println!("agree:       {agree}");
    }
    Ok(())
}

fn cmd_bench(args: BenchArgs) -> Result<()> {
    let (config, json) = args.into_config();
    let report = run_benchmark(&config).context("benchmark failed")?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, &cli.log_format);

    match cli.command {
        Commands::Round { value } => {
            println!("{:.2}", round_quarter(value));
            Ok(())
        }
        Commands::Series(args) => cmd_series(args),
        Commands::Pick(args) => cmd_pick(args),
        Commands::Bench(args) => cmd_bench(args),
    }
}

/// Initialize tracing subscriber with the given log level and output format.
///
/// Pass `format = "json"` for structured JSON output. Any other value
/// defaults to human-readable text. Both write to stderr.
fn init_logging(level_str: &str, format: &str) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_str));

    if format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
