use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

/// Loosely-typed lead record as held by the document store.
pub type LeadDocument = Map<String, Value>;

/// Read-only access to historical lead documents.
pub trait LeadStore: Send + Sync {
    fn documents(&self) -> Result<Vec<LeadDocument>, LeadStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LeadStoreError {
    #[error("lead store unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read lead export {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Lead store backed by a CSV export whose header row names the document fields.
///
/// The file is re-read on every call so edits to the export show up without a restart.
/// Blank cells are treated as missing fields.
#[derive(Debug, Clone)]
pub struct CsvLeadStore {
    path: PathBuf,
}

impl CsvLeadStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn csv_error(&self, source: csv::Error) -> LeadStoreError {
        LeadStoreError::Csv {
            path: self.path.clone(),
            source,
        }
    }
}

impl LeadStore for CsvLeadStore {
    fn documents(&self) -> Result<Vec<LeadDocument>, LeadStoreError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .map_err(|err| self.csv_error(err))?;

        let mut documents = Vec::new();
        for row in reader.deserialize::<HashMap<String, String>>() {
            let row = row.map_err(|err| self.csv_error(err))?;
            let document = row
                .into_iter()
                .filter(|(_, value)| !value.is_empty())
                .map(|(key, value)| (key, Value::String(value)))
                .collect();
            documents.push(document);
        }

        Ok(documents)
    }
}
