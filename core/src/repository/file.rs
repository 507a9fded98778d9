use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::config::Config;
use crate::model::task_list::TaskList;
use crate::repository::traits::TaskRepository;

#[derive(Clone, Debug)]
pub struct FileTaskRepository {
    file_path: PathBuf,
}

impl FileTaskRepository {
    /// Opens the store at `config.store_path`, creating it (and its parent
    /// directories) with an empty array if it does not exist yet.
    pub fn new(config: &Config) -> Result<Self> {
        let repo = FileTaskRepository {
            file_path: config.store_path.clone(),
        };

        if let Some(parent) = repo.parent_dir() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create directory {}", parent.display())
            })?;
        }

        if !repo.file_path.exists() {
            debug!(path = %repo.file_path.display(), "initializing empty task file");
            repo.write_tasks(&TaskList::new())?;
        }

        Ok(repo)
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn parent_dir(&self) -> Option<&Path> {
        self.file_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
    }

    fn read_tasks(&self) -> Result<TaskList> {
        let file = File::open(&self.file_path)
            .with_context(|| format!("Failed to open task file {}", self.file_path.display()))?;
        let reader = BufReader::new(file);
        let tasks: TaskList = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse task file {}", self.file_path.display()))?;
        debug!(path = %self.file_path.display(), count = tasks.len(), "loaded tasks");
        Ok(tasks)
    }

    // Written to a sibling temp file first and renamed over the target, so a
    // failed write never leaves a truncated store behind.
    fn write_tasks(&self, tasks: &TaskList) -> Result<()> {
        let dir = self.parent_dir().unwrap_or_else(|| Path::new("."));
        let temp_file = NamedTempFile::new_in(dir).context("Failed to create temp file")?;

        let mut writer = BufWriter::new(temp_file);
        serde_json::to_writer_pretty(&mut writer, tasks)?;
        writer.write_all(b"\n")?;
        let temp_file = writer
            .into_inner()
            .map_err(|e| e.into_error())
            .context("Failed to flush temp file")?;

        temp_file
            .persist(&self.file_path)
            .with_context(|| format!("Failed to write task file {}", self.file_path.display()))?;
        debug!(path = %self.file_path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }
}

impl TaskRepository for FileTaskRepository {
    fn load(&self) -> Result<TaskList> {
        self.read_tasks()
    }

    fn save(&self, tasks: &TaskList) -> Result<()> {
        self.write_tasks(tasks)
    }
}
