use crate::model::task_list::TaskList;
use anyhow::Result;

/// Whole-collection storage: every mutation is a full load followed by a full save.
pub trait TaskRepository {
    fn load(&self) -> Result<TaskList>;
    fn save(&self, tasks: &TaskList) -> Result<()>;
}
