//! Inspect, validate and render the documentation version catalog.
//!
//! Usage:
//!   doc-versions validate [--catalog catalog.json]
//!   doc-versions show --format js > _static/versions.js
//!   doc-versions targets --version latest
//!
//! The catalog comes from `--catalog`, then `DOC_VERSIONS_CATALOG`, then the
//! built-in catalog. Logs go to stderr and are filtered by `DOC_VERSIONS_LOG`.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use doc_versions::config::{DEFAULT_LOG_FILTER, ENV_LOG_FILTER};
use doc_versions::{
    CatalogSource, VersionCatalog, builtin_catalog, load_catalog_from_path, render_json,
    render_versions_js, validate_catalog,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "doc-versions")]
#[command(about = "Inspect, validate and render the documentation version catalog")]
struct Cli {
    /// Catalog file; overrides DOC_VERSIONS_CATALOG and the built-in catalog.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check name/value uniqueness and supported-target references.
    Validate,
    /// Print the whole catalog.
    Show {
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Print version names, one per line.
    Versions,
    /// Print `value<TAB>text` for targets, optionally for one version only.
    Targets {
        #[arg(long)]
        version: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Json,
    Js,
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(ENV_LOG_FILTER)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    let source = CatalogSource::resolve(cli.catalog.as_deref());
    match cli.command {
        Command::Validate => validate(&source),
        Command::Show { format } => {
            let index = source.load()?;
            let rendered = match format {
                Format::Json => render_json(index.catalog())?,
                Format::Js => render_versions_js(index.catalog())?,
            };
            print!("{rendered}");
            if !rendered.ends_with('\n') {
                println!();
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Versions => {
            let index = source.load()?;
            for version in index.catalog().versions() {
                println!("{}", version.name);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Targets { version } => {
            let index = source.load()?;
            let targets = match version.as_deref() {
                Some(name) => index.targets_for(name).ok_or_else(|| {
                    anyhow::anyhow!("unknown version '{name}' in {}", source.describe())
                })?,
                None => index.catalog().targets().iter().collect(),
            };
            for target in targets {
                println!("{}\t{}", target.value, target.text);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn validate(source: &CatalogSource) -> Result<ExitCode> {
    let loaded: VersionCatalog;
    let catalog = match source {
        CatalogSource::Builtin => builtin_catalog(),
        CatalogSource::File(path) => {
            loaded = load_catalog_from_path(path)?;
            &loaded
        }
    };

    let violations = validate_catalog(catalog);
    if violations.is_empty() {
        println!(
            "ok: {} versions, {} targets",
            catalog.versions().len(),
            catalog.targets().len()
        );
        return Ok(ExitCode::SUCCESS);
    }

    eprintln!(
        "{} has {} integrity violation(s):",
        source.describe(),
        violations.len()
    );
    for violation in &violations {
        eprintln!("  - {violation}");
    }
    Ok(ExitCode::FAILURE)
}
