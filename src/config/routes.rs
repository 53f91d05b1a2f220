//! Saved routes, stored as JSON:
//!
//! ```json
//! { "work": { "from": "Munkegata M4 (Trondheim)", "to": "Solsiden (Trondheim)" } }
//! ```

use crate::domain::model::RouteAlias;
use crate::utils::error::{AtbError, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct RouteStore {
    path: PathBuf,
    routes: HashMap<String, RouteAlias>,
}

impl RouteStore {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| AtbError::RoutesFileError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        Self::from_json_str(path, &content)
    }

    pub fn from_json_str(path: PathBuf, content: &str) -> Result<Self> {
        let routes = serde_json::from_str(content).map_err(|e| AtbError::RoutesFileError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        Ok(Self { path, routes })
    }

    pub fn get(&self, name: &str) -> Result<&RouteAlias> {
        self.routes
            .get(name)
            .ok_or_else(|| AtbError::RouteNotFoundError {
                name: name.to_string(),
                path: self.path.display().to_string(),
            })
    }
}
