//! The persisted project-created flag.
//! A single boolean JSON record kept beside the installed tool, read at
//! the start of every command invocation and written only after a project
//! creation that performed writes.

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// On-disk state record: `{ "projectCreated": bool }`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectState {
    pub project_created: bool,
}

impl ProjectState {
    /// Loads the state record from `path`. An absent file yields the
    /// default record with `project_created` false.
    ///
    /// # Errors
    /// * `Error::Io` if an existing file cannot be read
    /// * `Error::State` if the file contains invalid JSON
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("State file {} does not exist, assuming defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(Error::Io)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Writes the state record to `path` as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(Error::Io)
    }
}
