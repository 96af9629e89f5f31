//! # dmp-site CLI
//!
//! The `dmp-site` binary builds the example index for the DMP documentation
//! site and gives command-line access to the package registry it browses.
//!
//! ## Usage
//!
//! ```bash
//! dmp-site --config ./config/dmp-site.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `dmp-site build` | Discover decision cards and export the example catalog |
//! | `dmp-site examples` | Print the example catalog as a table |
//! | `dmp-site packages [query]` | Search and filter the package registry |
//! | `dmp-site package <slug>` | Show one package in detail |
//! | `dmp-site facets` | List the filter values offered per facet |
//! | `dmp-site stats` | Summarise examples and packages |
//! | `dmp-site validate <dir>` | Check a package directory against DMP v0.1 |

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use dmp_site::config::{self, Config};
use dmp_site::filter::{Facet, FilterCriteria};
use dmp_site::{catalog, export, get, search, stats, validate};

const DEFAULT_CONFIG: &str = "./config/dmp-site.toml";

/// Content index and package catalog tooling for the Decision
/// Model Package site.
#[derive(Parser)]
#[command(
    name = "dmp-site",
    about = "Content index and package catalog tooling for the Decision Model Package site",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/dmp-site.toml`; built-in defaults are used when
    /// that file does not exist. An explicitly given file must exist.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level written to stderr (error, warn, info, debug, trace).
    /// `RUST_LOG` takes precedence when set.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Build the example catalog.
    ///
    /// Walks `<examples.root>/*/decision_card.md`, derives one entry per
    /// card and writes the sorted list as JSON.
    Build {
        /// Output file. Overrides `[output].catalog`; stdout when neither is set.
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Print the example catalog as a table.
    Examples,

    /// Search and filter the package registry.
    ///
    /// All criteria must match. Facet values are exact and case-sensitive;
    /// `all` disables a facet.
    Packages {
        /// Case-insensitive text matched against name, description and tags.
        query: Option<String>,

        /// Problem class facet (e.g. `VRPTW`, `Bin Packing`).
        #[arg(long, default_value = "all")]
        problem_class: Facet,

        /// Modelling backend facet (e.g. `OR-Tools`, `Pyomo`).
        #[arg(long, default_value = "all")]
        backend: Facet,

        /// Solver facet (e.g. `CP-SAT`, `HiGHS`).
        #[arg(long, default_value = "all")]
        solver: Facet,

        /// Print matching packages as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show a package by slug.
    Package {
        /// Package slug (e.g. `tsp-ortools-basic`).
        slug: String,
    },

    /// List the values offered for each filter facet.
    Facets,

    /// Summarise the example catalog and package registry.
    Stats,

    /// Validate a Decision Model Package directory.
    ///
    /// Structural checks only; no model or evaluation code is run.
    Validate {
        /// Package root directory.
        path: PathBuf,
    },
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => config::load_config(path),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG);
            if default_path.exists() {
                config::load_config(default_path)
            } else {
                tracing::debug!("no config file found, using defaults");
                Ok(Config::minimal())
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    // Validation works on a directory alone and needs no config.
    if let Commands::Validate { path } = &cli.command {
        return validate::run_validate(path);
    }

    let cfg = resolve_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Build { output } => {
            export::run_build(&cfg, output.as_deref())?;
        }
        Commands::Examples => {
            catalog::run_examples(&cfg)?;
        }
        Commands::Packages {
            query,
            problem_class,
            backend,
            solver,
            json,
        } => {
            let criteria = FilterCriteria {
                search_text: query.unwrap_or_default(),
                problem_class,
                backend,
                solver,
            };
            search::run_search(&cfg, &criteria, json)?;
        }
        Commands::Package { slug } => {
            get::run_get(&cfg, &slug)?;
        }
        Commands::Facets => {
            search::run_facets(&cfg)?;
        }
        Commands::Stats => {
            stats::run_stats(&cfg)?;
        }
        Commands::Validate { .. } => {
            // Handled above (before config loading)
            unreachable!()
        }
    }

    Ok(())
}
