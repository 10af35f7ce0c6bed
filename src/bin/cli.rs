// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Mesh-material assigner CLI

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use matassign::cli::ConsoleReporter;
use matassign::io::{load_records_json, save_records_json};
use matassign::{AssignerConfig, MemoryScene, Outcome, RecordStore, Session};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "matassign")]
#[command(about = "Record, save, and apply mesh material assignments", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to ./matassign.toml when present)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// JSON file holding the working records
    #[arg(short, long, value_name = "FILE", global = true)]
    records: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a record for every selected mesh in a scene
    Add {
        /// Scene JSON file
        #[arg(short, long)]
        scene: Option<PathBuf>,
    },

    /// List records
    List {
        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove the record at an index
    Remove {
        index: usize,
    },

    /// Remove all records
    Clear,

    /// Apply recorded materials to a scene
    Apply {
        /// Scene JSON file
        #[arg(short, long)]
        scene: Option<PathBuf>,

        /// Where to write the updated scene (defaults to the input scene)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Append records from a text assignment file
    Import {
        input: PathBuf,
    },

    /// Write records to a text assignment file
    Export {
        output: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = AssignerConfig::load(cli.config.as_deref())?;
    if !config.color {
        colored::control::set_override(false);
    }

    let records_path = cli.records.clone().unwrap_or_else(|| config.records_file.clone());
    let mut reporter = ConsoleReporter::new(config.min_level);

    match cli.command {
        Commands::Add { scene } => {
            let scene_path = scene_path(scene, &config)?;
            let scene = MemoryScene::from_file(&scene_path)?;

            let mut session = open_session(&records_path)?;
            let summary = session.add_selected(&scene, &mut reporter);
            save_session(&session, &records_path)?;

            ConsoleReporter::success(&format!(
                "Added {} record(s), skipped {}",
                summary.added_count(),
                summary.skipped.len()
            ));
        }
        Commands::List { json } => {
            let session = open_session(&records_path)?;
            if json {
                let json = serde_json::to_string_pretty(session.store().records())?;
                println!("{}", json);
            } else {
                ConsoleReporter::report_records(session.store().records());
            }
        }
        Commands::Remove { index } => {
            let mut session = open_session(&records_path)?;
            if session.remove(index, &mut reporter) == Outcome::Cancelled {
                std::process::exit(1);
            }
            save_session(&session, &records_path)?;
        }
        Commands::Clear => {
            let mut session = Session::open(records_path.display().to_string());
            session.remove_all();
            save_session(&session, &records_path)?;
        }
        Commands::Apply { scene, output } => {
            let scene_path = scene_path(scene, &config)?;
            let mut scene = MemoryScene::from_file(&scene_path)?;

            let session = open_session(&records_path)?;
            let summary = session.apply(&mut scene, &mut reporter);

            let output = output.unwrap_or(scene_path);
            scene.save(&output)?;
            ConsoleReporter::report_apply(&summary);
            if cli.verbose {
                println!("Scene written to: {}", output.display());
            }
        }
        Commands::Import { input } => {
            let mut session = open_session(&records_path)?;
            let before = session.store().len();
            let outcome = session.import(&input, &mut reporter);
            // Lines that did parse are kept even when others were rejected.
            save_session(&session, &records_path)?;

            if cli.verbose {
                println!("Records: {} -> {}", before, session.store().len());
            }
            if outcome == Outcome::Cancelled || reporter.error_count() > 0 {
                std::process::exit(1);
            }
        }
        Commands::Export { output } => {
            let session = open_session(&records_path)?;
            let outcome = session.export(&output, &mut reporter);
            if outcome == Outcome::Cancelled || reporter.error_count() > 0 {
                std::process::exit(1);
            }
        }
        Commands::Version => {
            println!("matassign v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn scene_path(arg: Option<PathBuf>, config: &AssignerConfig) -> Result<PathBuf> {
    match arg.or_else(|| config.scene_file.clone()) {
        Some(path) => Ok(path),
        None => bail!("No scene file given; pass --scene or set scene_file in the config"),
    }
}

/// Load the JSON records file, starting empty when it does not exist yet
fn open_session(path: &Path) -> Result<Session> {
    let document = path.display().to_string();
    if !path.exists() {
        log::debug!("{} does not exist yet, starting with no records", document);
        return Ok(Session::open(document));
    }

    let mut store = RecordStore::new();
    for record in load_records_json(path)? {
        store.push(record);
    }
    log::debug!("Loaded {} record(s) from {}", store.len(), document);

    Ok(Session::with_store(document, store))
}

fn save_session(session: &Session, path: &Path) -> Result<()> {
    save_records_json(session.store().records(), path)
        .with_context(|| format!("Failed to save records to {}", path.display()))
}
