//! StatLab CLI — analyze, simulate, and interactive commands.
//!
//! Commands:
//! - `analyze` — compute statistics for a dataset given on the command line
//! - `simulate` — sampling distributions of the mean, as histogram series
//! - `interactive` — the menu-driven session (default with no command)
//!
//! Use the `RUST_LOG` environment variable or `-v` to configure logging.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use statlab_core::config::SimulationConfig;
use statlab_core::data::load_reference_heights;
use statlab_core::{
    checked_sample_size, simulate, Dataset, DescriptiveSummary, QuartilePolicy, Statistic,
    StatlabConfig,
};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

mod interactive;
mod render;
mod source;

use interactive::Session;
use render::{format_histogram, format_stat, format_summary};
use source::SourceArgs;

#[derive(Parser)]
#[command(
    name = "statlab",
    version,
    about = "StatLab CLI — descriptive statistics calculator"
)]
struct Cli {
    /// TOML config file. Defaults apply for anything it omits.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute statistics for a dataset.
    Analyze {
        #[command(flatten)]
        source: SourceArgs,

        /// Statistic to compute; repeat for several. Defaults to all.
        #[arg(long = "stat")]
        stats: Vec<Statistic>,

        /// Print the full summary as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Fail instead of clamping when a quartile position is out of range.
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
    /// Simulate sampling distributions of the mean.
    Simulate {
        /// Dataset to sample from. Defaults to the reference heights.
        #[command(flatten)]
        source: SourceArgs,

        /// Samples drawn per sample size.
        #[arg(long)]
        sample_count: Option<usize>,

        /// Sample size; repeat for several.
        #[arg(long = "sample-size", allow_negative_numbers = true)]
        sample_sizes: Vec<i64>,

        /// Histogram bins.
        #[arg(long)]
        bins: Option<usize>,

        /// Master RNG seed.
        #[arg(long)]
        seed: Option<u64>,

        /// Write the distributions as JSON to this file.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Menu-driven session on stdin/stdout.
    Interactive,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Analyze {
            source,
            stats,
            json,
            strict,
        } => run_analyze(&config, &source, &stats, json, strict),
        Commands::Simulate {
            source,
            sample_count,
            sample_sizes,
            bins,
            seed,
            output,
        } => {
            let mut sim = config.simulation.clone();
            if let Some(count) = sample_count {
                sim.sample_count = count;
            }
            if !sample_sizes.is_empty() {
                sim.sample_sizes = sample_sizes
                    .into_iter()
                    .map(checked_sample_size)
                    .collect::<Result<_, _>>()?;
            }
            if let Some(bins) = bins {
                sim.bins = bins;
            }
            if let Some(seed) = seed {
                sim.seed = seed;
            }
            sim.validate()?;
            run_simulate(&config, &source, &sim, output.as_deref())
        }
        Commands::Interactive => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            Session::new(stdin.lock(), stdout.lock(), &config).run()
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .compact()
        .without_time()
        .with_writer(io::stderr)
        .with_env_filter(env_filter)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<StatlabConfig> {
    match path {
        Some(path) => {
            let config = StatlabConfig::from_file(path)?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(config)
        }
        None => Ok(StatlabConfig::default()),
    }
}

fn run_analyze(
    config: &StatlabConfig,
    source: &SourceArgs,
    stats: &[Statistic],
    json: bool,
    strict: bool,
) -> Result<()> {
    let data = source.resolve(config)?.context(
        "no dataset given: use one of --list, --values/--frequencies, --stem-leaf, --file, --heights",
    )?;
    let policy = if strict {
        QuartilePolicy::Strict
    } else {
        config.analysis.quartile_policy
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if json {
        let summary = DescriptiveSummary::compute(&data, policy)?;
        writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
        return Ok(());
    }

    if stats.is_empty() {
        let summary = DescriptiveSummary::compute(&data, policy)?;
        writeln!(out, "{}", format_summary(&summary))?;
        return Ok(());
    }

    for &stat in stats {
        let value = stat.compute(&data, policy)?;
        writeln!(out, "{}", format_stat(stat, &value))?;
    }
    Ok(())
}

fn run_simulate(
    config: &StatlabConfig,
    source: &SourceArgs,
    sim: &SimulationConfig,
    output: Option<&Path>,
) -> Result<()> {
    let data = match source.resolve(config)? {
        Some(data) => data,
        None => Dataset::new(
            load_reference_heights(&config.dataset).context("loading reference heights")?,
        )?,
    };

    let distributions = simulate(&data, sim)?;

    if let Some(path) = output {
        let json = serde_json::to_string_pretty(&distributions)?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        println!("Distributions saved to: {}", path.display());
        return Ok(());
    }

    println!("=== Sampling Distribution of Means ===");
    println!(
        "Samples per size: {}   Seed: {}",
        sim.sample_count, sim.seed
    );
    for dist in &distributions {
        println!();
        print!("{}", format_histogram(dist.sample_size, &dist.histogram));
    }
    Ok(())
}
