use std::path::PathBuf;

use anyhow::{anyhow, Result};

pub const STORE_PATH_ENV: &str = "TASK_CLI_FILE";
const DEFAULT_DIR_NAME: &str = ".task-cli";
const DEFAULT_FILE_NAME: &str = "tasks.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub store_path: PathBuf,
}

impl Config {
    pub fn new(store_path: impl Into<PathBuf>) -> Self {
        Self {
            store_path: store_path.into(),
        }
    }

    /// `$TASK_CLI_FILE` if set, otherwise `~/.task-cli/tasks.json`.
    pub fn from_env() -> Result<Self> {
        Self::resolve(std::env::var_os(STORE_PATH_ENV).map(PathBuf::from), dirs::home_dir())
    }

    fn resolve(override_path: Option<PathBuf>, home_dir: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = override_path.filter(|p| !p.as_os_str().is_empty()) {
            return Ok(Self::new(path));
        }
        let home_dir = home_dir.ok_or_else(|| {
            anyhow!(
                "Could not determine home directory; set {} to choose a task file",
                STORE_PATH_ENV
            )
        })?;
        Ok(Self::new(home_dir.join(DEFAULT_DIR_NAME).join(DEFAULT_FILE_NAME)))
    }
}
