use crate::model::Plan;
use camino::{Utf8Path, Utf8PathBuf};

/// Failure to turn a file or request body into a [`Plan`].
///
/// These are the only hard failures in the workspace: they surface to the
/// caller before the engine runs, never as policy violations.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("read plan file {path}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid plan JSON")]
    Parse(#[from] serde_json::Error),
}

impl Plan {
    pub fn from_json(text: &str) -> Result<Plan, PlanError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_file(path: &Utf8Path) -> Result<Plan, PlanError> {
        let text = std::fs::read_to_string(path).map_err(|source| PlanError::Read {
            path: path.to_owned(),
            source,
        })?;
        Plan::from_json(&text)
    }
}
