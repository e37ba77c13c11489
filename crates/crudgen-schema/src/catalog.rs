use crate::table::Table;
use serde::Deserialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

///
/// CatalogError
///

#[derive(Debug, ThisError)]
pub enum CatalogError {
    #[error("failed to read catalog '{path}': {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to decode catalog '{path}': {source}")]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },
}

///
/// Catalog
///
/// Boundary to the schema catalog. Implementations own their connection or
/// snapshot lifecycle; the generator only ever consumes the table list.
///

pub trait Catalog {
    fn tables(&self) -> Result<Vec<Table>, CatalogError>;
}

///
/// JsonCatalog
///
/// Catalog source backed by a JSON snapshot: either a bare array of tables
/// or the `{ "tables": [...] }` document an introspection endpoint responds
/// with.
///

#[derive(Clone, Debug)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Snapshot {
    Document { tables: Vec<Table> },
    Tables(Vec<Table>),
}

impl Catalog for JsonCatalog {
    fn tables(&self) -> Result<Vec<Table>, CatalogError> {
        let text = fs::read_to_string(&self.path).map_err(|source| CatalogError::Read {
            path: self.path.clone(),
            source,
        })?;

        let snapshot: Snapshot =
            serde_json::from_str(&text).map_err(|source| CatalogError::Decode {
                path: self.path.clone(),
                source,
            })?;

        Ok(match snapshot {
            Snapshot::Document { tables } | Snapshot::Tables(tables) => tables,
        })
    }
}
