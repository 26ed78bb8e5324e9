//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_file_adapter::CsvFileAdapter;
use crate::adapters::ini_config::IngestConfig;
use crate::domain::error::SimfeedError;
use crate::domain::loader;
use crate::domain::record::RecordCollection;
use crate::domain::value::Kind;
use crate::ports::record_source::RecordSource;

#[derive(Parser, Debug)]
#[command(name = "simfeed", about = "Typed market-data ingestion for the simulator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load a data file and print the parsed values
    Load {
        /// Load this file directly instead of resolving a code
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Code to load from the configured data directory
        #[arg(long)]
        code: Option<String>,
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Suppress the per-value echo
        #[arg(long)]
        quiet: bool,
    },
    /// List codes available in the configured data directory
    ListCodes {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Parse a data file and report what it contains
    Check {
        #[arg(short, long)]
        file: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Load {
            file,
            code,
            config,
            quiet,
        } => run_load(file.as_ref(), code.as_deref(), config.as_ref(), quiet),
        Command::ListCodes { config } => run_list_codes(&config),
        Command::Check { file } => run_check(&file),
    }
}

fn load_config(path: &PathBuf) -> Result<IngestConfig, ExitCode> {
    IngestConfig::from_file(path).map_err(|e| {
        eprintln!("error: {e}");
        ExitCode::from(&e)
    })
}

fn load_file(path: &PathBuf) -> Result<RecordCollection, SimfeedError> {
    let file = File::open(path).map_err(|e| SimfeedError::Source {
        reason: format!("failed to open {}: {}", path.display(), e),
    })?;
    loader::load_from_reader(BufReader::new(file))
}

fn run_load(
    file: Option<&PathBuf>,
    code: Option<&str>,
    config_path: Option<&PathBuf>,
    quiet: bool,
) -> ExitCode {
    let records = if let Some(path) = file {
        eprintln!("Loading {}", path.display());
        match load_file(path) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        }
    } else {
        let (Some(code), Some(config_path)) = (code, config_path) else {
            eprintln!("error: either --file or both --code and --config are required");
            return ExitCode::from(2);
        };

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(exit) => return exit,
        };

        let source = CsvFileAdapter::from_config(&config);
        eprintln!("Loading {} from {}", code, config.data_dir.display());
        match source.load_records(code) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        }
    };

    if !quiet {
        for value in &records {
            println!("{value}");
        }
    }
    eprintln!("{} values loaded", records.len());
    ExitCode::SUCCESS
}

fn run_list_codes(config_path: &PathBuf) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(exit) => return exit,
    };

    let source = CsvFileAdapter::from_config(&config);
    let codes = match source.list_codes() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    if codes.is_empty() {
        eprintln!("No codes found in {}", config.data_dir.display());
    } else {
        for code in &codes {
            println!("{}", code);
        }
        eprintln!("{} codes found", codes.len());
    }
    ExitCode::SUCCESS
}

fn run_check(path: &PathBuf) -> ExitCode {
    eprintln!("Checking {}", path.display());
    let records = match load_file(path) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let text = records.iter().filter(|v| v.kind() == Kind::Text).count();
    let number = records.iter().filter(|v| v.kind() == Kind::Number).count();
    let temporal = records
        .iter()
        .filter(|v| v.kind() == Kind::Temporal)
        .count();

    eprintln!(
        "{} values ({} text, {} number, {} temporal)",
        records.len(),
        text,
        number,
        temporal
    );
    eprintln!("File parsed successfully");
    ExitCode::SUCCESS
}
