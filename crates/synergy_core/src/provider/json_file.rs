//! JSON file provider.
//!
//! Reads a top-level array of projects. Deserialization runs domain
//! validation, so unknown statuses or out-of-range progress fail the whole
//! fetch instead of being aggregated.

use crate::model::project::Project;
use crate::provider::{ProjectProvider, ProviderError, ProviderResult};
use log::{error, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

pub struct JsonFileProjectProvider {
    path: PathBuf,
}

impl JsonFileProjectProvider {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ProjectProvider for JsonFileProjectProvider {
    fn provider_id(&self) -> &str {
        "json_file"
    }

    fn fetch_projects(&self) -> ProviderResult<Vec<Project>> {
        let started_at = Instant::now();
        let raw = std::fs::read_to_string(&self.path).map_err(|source| ProviderError::Io {
            path: self.path.clone(),
            source,
        })?;

        match serde_json::from_str::<Vec<Project>>(&raw) {
            Ok(projects) => {
                info!(
                    "event=provider_read module=provider status=ok provider=json_file projects={} duration_ms={}",
                    projects.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(projects)
            }
            Err(err) => {
                error!(
                    "event=provider_read module=provider status=error provider=json_file error_code=decode_failed error={err}"
                );
                Err(err.into())
            }
        }
    }
}
