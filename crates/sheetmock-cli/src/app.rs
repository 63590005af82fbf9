//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use sheetmock_data::{reset_working_copy, DiskSheetProvider, ProviderConfig, RowData, Table};

/// Config file picked up from the current directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "sheetmock.toml";

/// Output format for tables
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain-text columns
    #[default]
    Text,
    /// JSON object with `columns` and `rows`
    Json,
}

#[derive(Parser)]
#[command(name = "sheetmock")]
#[command(author, version, about = "Offline mock of a sheet provider", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./sheetmock.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the fixture path
    #[arg(long, global = true)]
    fixture: Option<PathBuf>,

    /// Override the working file path
    #[arg(long, global = true)]
    working: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy the fixture over the working file
    Reset {
        /// Sheet identifier (accepted and ignored)
        #[arg(long, default_value = "")]
        sheet: String,
    },

    /// Print the working table
    Show {
        /// Reset from the fixture before printing
        #[arg(long)]
        reset: bool,

        /// Output format (text or json)
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Replace cells of one row in the working file
    Update {
        /// 1-based row number
        row: usize,

        /// Cell assignment, e.g. `status=done` (repeatable)
        #[arg(short, long = "set", value_parser = parse_assignment, required = true)]
        set: Vec<(String, String)>,

        /// Sheet identifier (accepted and ignored)
        #[arg(long, default_value = "")]
        sheet: String,
    },
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = resolve_config(cli.config.as_deref(), Path::new(DEFAULT_CONFIG_FILE))?;
    if let Some(fixture) = cli.fixture {
        config.fixture = fixture;
    }
    if let Some(working) = cli.working {
        config.working = working;
    }

    match cli.command {
        Commands::Reset { sheet } => {
            reset_command(&config, &sheet)?;
        }
        Commands::Show { reset, format } => {
            show_command(&config, reset, format)?;
        }
        Commands::Update { row, set, sheet } => {
            update_command(&config, row, &set, &sheet)?;
        }
    }

    Ok(())
}

/// Pick the provider config
///
/// An explicit path must exist. Otherwise `fallback` is used when present,
/// and built-in defaults when not.
pub fn resolve_config(explicit: Option<&Path>, fallback: &Path) -> Result<ProviderConfig> {
    if let Some(path) = explicit {
        return ProviderConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()));
    }

    if fallback.is_file() {
        debug!("Using config {}", fallback.display());
        return ProviderConfig::load(fallback)
            .with_context(|| format!("Failed to load config: {}", fallback.display()));
    }

    Ok(ProviderConfig::default())
}

/// Execute the reset command
pub fn reset_command(config: &ProviderConfig, sheet: &str) -> Result<Table> {
    let table = DiskSheetProvider::new(config.clone())
        .get_sheet_as_table(sheet)
        .with_context(|| format!("Failed to reset from fixture: {}", config.fixture.display()))?;

    println!(
        "Reset {} from {} ({} rows, {} columns)",
        config.working.display(),
        config.fixture.display(),
        table.len(),
        table.columns().len()
    );
    Ok(table)
}

/// Execute the show command
pub fn show_command(config: &ProviderConfig, reset: bool, format: OutputFormat) -> Result<()> {
    if reset {
        reset_working_copy(config).with_context(|| {
            format!("Failed to reset from fixture: {}", config.fixture.display())
        })?;
    }

    let table = DiskSheetProvider::new(config.clone())
        .read_table()
        .with_context(|| format!("Failed to read {}", config.working.display()))?;

    print!("{}", render_table(&table, format)?);
    Ok(())
}

/// Execute the update command
pub fn update_command(
    config: &ProviderConfig,
    row: usize,
    assignments: &[(String, String)],
    sheet: &str,
) -> Result<()> {
    let data: RowData = assignments.iter().cloned().collect();

    DiskSheetProvider::new(config.clone())
        .update_row_at(row, &data, sheet)
        .with_context(|| format!("Failed to update row {}", row))?;

    println!("Updated row {} in {}", row, config.working.display());
    Ok(())
}

/// Render a table for the terminal
pub fn render_table(table: &Table, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(table)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Text => Ok(render_text(table)),
    }
}

fn render_text(table: &Table) -> String {
    let mut widths: Vec<usize> = table
        .columns()
        .iter()
        .map(|c| c.chars().count())
        .collect();
    for row in table.rows() {
        for (width, value) in widths.iter_mut().zip(row.values()) {
            *width = (*width).max(value.chars().count());
        }
    }

    let mut output = String::new();
    push_line(&mut output, table.columns(), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut output, &rule, &widths);
    for row in table.rows() {
        push_line(&mut output, row.values(), &widths);
    }
    output.push_str(&format!("({} rows)\n", table.len()));
    output
}

fn push_line(output: &mut String, cells: &[String], widths: &[usize]) {
    // The last column is left unpadded so its value is printed verbatim.
    let last = cells.len().saturating_sub(1);
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, &width))| {
            if i == last {
                cell.clone()
            } else {
                format!("{:<width$}", cell, width = width)
            }
        })
        .collect();
    output.push_str(&line.join("  "));
    output.push('\n');
}

fn parse_assignment(s: &str) -> std::result::Result<(String, String), String> {
    match s.split_once('=') {
        Some((column, value)) if !column.is_empty() => Ok((column.to_string(), value.to_string())),
        _ => Err(format!("expected COLUMN=VALUE, got {:?}", s)),
    }
}
