use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cie1931::Rounding;
use cie_table::models::{ConfigOverrides, GeneratorConfig};
use cie_table::services;

#[derive(Parser)]
#[command(name = "cie-table")]
#[command(about = "Generate a CIE 1931 brightness correction table as a C header")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    table: TableArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct TableArgs {
    /// YAML config file (command-line options override its values)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Largest input level; the table has input-size + 1 entries [default: 255]
    #[arg(long, global = true)]
    input_size: Option<u32>,

    /// Largest output level (full-scale PWM duty cycle) [default: 255]
    #[arg(long, global = true)]
    output_size: Option<u32>,

    /// C element type of the array [default: "const unsigned char"]
    #[arg(long, global = true)]
    element_type: Option<String>,

    /// Symbol name of the array [default: cie]
    #[arg(long, global = true)]
    table_name: Option<String>,

    /// Rounding policy: half-away-from-zero or half-even [default: half-away-from-zero]
    #[arg(long, global = true)]
    rounding: Option<Rounding>,

    /// Header file to write, "-" for stdout [default: src/cie1931.h]
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the header file (default when no command is given)
    Generate,
    /// Print the header to stdout
    Print,
    /// Check that an existing header matches what would be generated
    Verify {
        /// Header to check (defaults to the configured output path)
        header: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so `print` output stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cie_table=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config = load_config(&cli.table)?;

    match cli.command {
        Some(Commands::Generate) | None => run_generate_command(&config),
        Some(Commands::Print) => run_generate_command(&GeneratorConfig {
            output: PathBuf::from("-"),
            ..config
        }),
        Some(Commands::Verify { header }) => {
            let path = header.unwrap_or_else(|| config.output.clone());
            run_verify_command(&config, &path)
        }
    }
}

/// Merge defaults, config file and command-line overrides
fn load_config(args: &TableArgs) -> anyhow::Result<GeneratorConfig> {
    let base = match args.config {
        Some(ref path) => GeneratorConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => GeneratorConfig::default(),
    };

    let overrides = ConfigOverrides {
        input_size: args.input_size,
        output_size: args.output_size,
        element_type: args.element_type.clone(),
        table_name: args.table_name.clone(),
        rounding: args.rounding,
        output: args.output.clone(),
    };

    Ok(base.apply_overrides(&overrides))
}

/// Generate the table and write it out
fn run_generate_command(config: &GeneratorConfig) -> anyhow::Result<()> {
    let generated = services::write(config).with_context(|| {
        if config.writes_to_stdout() {
            "Failed to generate table".to_string()
        } else {
            format!("Failed to generate {}", config.output.display())
        }
    })?;

    if !config.writes_to_stdout() {
        println!(
            "Wrote {} ({} entries, max {})",
            config.output.display(),
            generated.table.len(),
            generated.table.max_value()
        );
    }

    Ok(())
}

/// Compare an existing header with a fresh generation
fn run_verify_command(config: &GeneratorConfig, path: &Path) -> anyhow::Result<()> {
    let report = services::verify(config, path)
        .with_context(|| format!("Failed to verify {}", path.display()))?;

    if report.matches() {
        if report.byte_identical {
            println!("{} is up to date", path.display());
        } else {
            println!(
                "{} is up to date (values match, formatting differs)",
                path.display()
            );
        }
        return Ok(());
    }

    if !report.name_matches {
        eprintln!("  symbol name differs from {:?}", config.table_name);
    }
    if !report.type_matches {
        eprintln!("  element type differs from {:?}", config.element_type);
    }
    if report.expected_len != report.found_len {
        eprintln!(
            "  expected {} entries, found {}",
            report.expected_len, report.found_len
        );
    }
    if let Some(index) = report.first_difference {
        eprintln!("  first differing entry at index {index}");
    }

    anyhow::bail!("{} is out of date", path.display())
}
