//! Project data providers.
//!
//! # Responsibility
//! - Define the single "fetch projects" capability consumed by services.
//! - Ship in-process and JSON-file implementations.
//!
//! # Invariants
//! - A provider returns a complete, validated snapshot or an error, never a
//!   partial collection.
//! - Retries are the provider's concern; callers fetch once.

use crate::model::error::ValidationError;
use crate::model::project::Project;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileProjectProvider;
pub use memory::{SampleProjectProvider, StaticProjectProvider};

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Failure to produce a project snapshot.
#[derive(Debug)]
pub enum ProviderError {
    /// Backend could not be reached or refused the request.
    Unavailable(String),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Decode(serde_json::Error),
    Validation(ValidationError),
}

impl Display for ProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(message) => write!(f, "project provider unavailable: {message}"),
            Self::Io { path, source } => {
                write!(f, "failed to read projects from `{}`: {source}", path.display())
            }
            Self::Decode(err) => write!(f, "failed to decode projects: {err}"),
            Self::Validation(err) => write!(f, "provider returned invalid project: {err}"),
        }
    }
}

impl Error for ProviderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unavailable(_) => None,
            Self::Io { source, .. } => Some(source),
            Self::Decode(err) => Some(err),
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<ValidationError> for ProviderError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}

/// Source of project snapshots.
pub trait ProjectProvider {
    /// Stable id used in log events.
    fn provider_id(&self) -> &str;
    /// Produces the full project collection in display order.
    fn fetch_projects(&self) -> ProviderResult<Vec<Project>>;
}

impl<T: ProjectProvider + ?Sized> ProjectProvider for &T {
    fn provider_id(&self) -> &str {
        (**self).provider_id()
    }

    fn fetch_projects(&self) -> ProviderResult<Vec<Project>> {
        (**self).fetch_projects()
    }
}
