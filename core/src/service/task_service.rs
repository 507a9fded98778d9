use crate::model::task::{Status, Task, TaskId};
use crate::repository::TaskRepository;
use anyhow::Result;
use tracing::{info, warn};

pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn add_task(&self, description: String) -> Result<Task> {
        let mut tasks = self.repo.load()?;
        let created = tasks.add(description)?.clone();
        self.repo.save(&tasks)?;
        info!(id = created.id, "task added");
        Ok(created)
    }

    pub fn update_task(&self, id: TaskId, description: String) -> Result<Task> {
        let mut tasks = self.repo.load()?;
        let updated = tasks.update_description(id, description)?.clone();
        self.repo.save(&tasks)?;
        info!(id, "task updated");
        Ok(updated)
    }

    pub fn delete_task(&self, id: TaskId) -> Result<()> {
        let mut tasks = self.repo.load()?;
        tasks.remove(id)?;
        self.repo.save(&tasks)?;
        info!(id, "task deleted");
        Ok(())
    }

    pub fn mark_status(&self, id: TaskId, status: Status) -> Result<Task> {
        let mut tasks = self.repo.load()?;
        let marked = tasks.set_status(id, status)?.clone();
        self.repo.save(&tasks)?;
        info!(id, %status, "task status changed");
        Ok(marked)
    }

    pub fn list_tasks(&self, filter: Option<&str>) -> Result<Vec<Task>> {
        let filter = filter.filter(|f| !f.is_empty());
        if let Some(f) = filter {
            if f.parse::<Status>().is_err() {
                warn!(filter = f, "filter does not name a known status");
            }
        }
        let tasks = self.repo.load()?;
        Ok(tasks.filter(filter).into_iter().cloned().collect())
    }
}
