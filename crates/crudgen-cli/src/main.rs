//! `crudgen` binary: load config and catalog snapshot, run generation.

use clap::Parser;
use crudgen_build::{GenerateError, GenerationConfig, generate};
use crudgen_config::{Config, ConfigError};
use crudgen_schema::{Catalog, CatalogError, JsonCatalog, SchemaError, validate_tables};
use std::{path::PathBuf, process::ExitCode};
use thiserror::Error as ThisError;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

///
/// Args
///

#[derive(Debug, Parser)]
#[command(
    name = "crudgen",
    about = "Generate CRUD routing modules from a schema catalog"
)]
struct Args {
    /// Path to the crudgen config file.
    #[arg(long, default_value = "crudgen.toml")]
    config: PathBuf,

    /// Path to the catalog snapshot (JSON).
    #[arg(long)]
    catalog: PathBuf,
}

///
/// CliError
///

#[derive(Debug, ThisError)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Generate(#[from] GenerateError),
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let config = Config::load(&args.config)?;
    info!(
        database = %config.database.name,
        catalog = %args.catalog.display(),
        "loading catalog snapshot"
    );

    let tables = JsonCatalog::new(&args.catalog).tables()?;
    validate_tables(&tables)?;

    let crud = &config.generator.crud;
    let generation = GenerationConfig::new(&crud.output_dir)
        .with_exceptions(crud.exceptions.iter().cloned())
        .with_module_extension(&crud.module_extension);

    let report = generate(&tables, &generation, |report| {
        info!(
            written = report.written.len(),
            skipped = report.skipped.len(),
            "crud generation done"
        );
    })?;

    info!(
        modules = report.written.len(),
        dir = %generation.output_dir.display(),
        "generated modules"
    );

    Ok(())
}
