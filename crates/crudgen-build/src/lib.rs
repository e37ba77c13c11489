//! Generation pipeline for CrudGen: statement templates, route-module
//! rendering, file emission, and the orchestrator that drives a run.

pub mod emit;
pub mod render;
pub mod report;
pub mod statement;


use crate::{
    emit::FileSystemError,
    report::{GenerationReport, SkipReason, WriteFailure},
};
use crudgen_schema::Table;
use std::{collections::BTreeSet, path::PathBuf};
use thiserror::Error as ThisError;
use tracing::{debug, warn};

/// Default extension for generated routing modules.
pub const DEFAULT_MODULE_EXTENSION: &str = "js";

///
/// GenerateError
///

#[derive(Debug, ThisError)]
pub enum GenerateError {
    #[error(transparent)]
    FileSystem(#[from] FileSystemError),

    #[error("module generation failed for {} table(s)", .failures.len())]
    Writes { failures: Vec<WriteFailure> },
}

///
/// GenerationConfig
///
/// Constructed once per run and passed by reference through every call;
/// nothing in the pipeline is shared across runs.
///

#[derive(Clone, Debug)]
pub struct GenerationConfig {
    pub output_dir: PathBuf,
    pub exceptions: BTreeSet<String>,
    pub module_extension: String,
}

impl GenerationConfig {
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            exceptions: BTreeSet::new(),
            module_extension: DEFAULT_MODULE_EXTENSION.to_string(),
        }
    }

    #[must_use]
    pub fn with_exceptions<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exceptions = names.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_module_extension(mut self, extension: impl Into<String>) -> Self {
        self.module_extension = extension.into();
        self
    }

    /// Canonical path of one table's generated module.
    #[must_use]
    pub fn module_path(&self, table: &str) -> PathBuf {
        self.output_dir
            .join(format!("{table}.{}", self.module_extension))
    }
}

/// Generate one routing module per candidate table, in catalog order.
///
/// The completion callback fires exactly once, after every scheduled write
/// has resolved; a run that schedules nothing (empty table list, or every
/// table skipped) completes immediately. A failed output-directory creation
/// is fatal: the error propagates and the callback never fires. Individual
/// write failures do not abort the run: unaffected tables still generate,
/// the callback still fires, and the failures come back aggregated as
/// [`GenerateError::Writes`].
pub fn generate<F>(
    tables: &[Table],
    config: &GenerationConfig,
    on_complete: F,
) -> Result<GenerationReport, GenerateError>
where
    F: FnOnce(&GenerationReport),
{
    emit::ensure_dir(&config.output_dir)?;

    let mut report = GenerationReport::new();
    let mut failures = Vec::new();

    for table in tables {
        let Some(fields) = table.fields.as_deref() else {
            debug!(table = %table.name, "skipping table without field list");
            report.skip(&table.name, SkipReason::MissingFields);
            continue;
        };

        if config.exceptions.contains(&table.name) {
            debug!(table = %table.name, "skipping excepted table");
            report.skip(&table.name, SkipReason::Excepted);
            continue;
        }

        let statements = statement::StatementSet::build(&table.name, fields);
        let text = render::render_module(&table.name, fields, &statements);
        let path = config.module_path(&table.name);

        report.schedule();
        match emit::write_module(&path, &text) {
            Ok(()) => {
                debug!(table = %table.name, path = %path.display(), "module written");
                report.complete_written(&table.name);
            }
            Err(error) => {
                warn!(table = %table.name, %error, "module write failed");
                report.complete_failed();
                failures.push(WriteFailure {
                    table: table.name.clone(),
                    error,
                });
            }
        }
    }

    // every scheduled write has resolved and no more will be scheduled
    debug_assert_eq!(report.scheduled, report.completed);
    on_complete(&report);

    if failures.is_empty() {
        Ok(report)
    } else {
        Err(GenerateError::Writes { failures })
    }
}
