use serde::{Deserialize, Serialize};

use crate::error::TaskError;
use crate::model::task::{Status, Task, TaskId};

/// The whole collection, in insertion order. Serializes as a bare JSON array.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn next_id(&self) -> Result<TaskId, TaskError> {
        self.tasks
            .iter()
            .map(|t| t.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| TaskError::InvalidInput("No task IDs left to assign.".to_string()))
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: TaskId) -> Result<&mut Task, TaskError> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TaskError::NotFound(id))
    }

    pub fn add(&mut self, description: String) -> Result<&Task, TaskError> {
        if description.trim().is_empty() {
            return Err(TaskError::InvalidInput(
                "Task description cannot be empty.".to_string(),
            ));
        }
        let task = Task::new(self.next_id()?, description);
        self.tasks.push(task);
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    pub fn update_description(
        &mut self,
        id: TaskId,
        description: String,
    ) -> Result<&Task, TaskError> {
        if description.trim().is_empty() {
            return Err(TaskError::InvalidInput(
                "Task description cannot be empty.".to_string(),
            ));
        }
        let task = self.get_mut(id)?;
        task.set_description(description);
        Ok(task)
    }

    pub fn set_status(&mut self, id: TaskId, status: Status) -> Result<&Task, TaskError> {
        let task = self.get_mut(id)?;
        task.set_status(status);
        Ok(task)
    }

    pub fn remove(&mut self, id: TaskId) -> Result<(), TaskError> {
        let initial_len = self.tasks.len();
        self.tasks.retain(|t| t.id != id);

        if self.tasks.len() == initial_len {
            return Err(TaskError::NotFound(id));
        }
        Ok(())
    }

    /// Tasks whose status string equals `filter` exactly; all tasks when the
    /// filter is `None` or empty.
    pub fn filter(&self, filter: Option<&str>) -> Vec<&Task> {
        let filter = filter.filter(|f| !f.is_empty());
        self.tasks
            .iter()
            .filter(|t| filter.map_or(true, |f| t.status.as_str() == f))
            .collect()
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(descriptions: &[&str]) -> TaskList {
        let mut list = TaskList::new();
        for d in descriptions {
            list.add(d.to_string()).unwrap();
        }
        list
    }

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let list = list_of(&["a", "b", "c"]);
        let ids: Vec<TaskId> = list.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(list.next_id(), Ok(4));
    }

    #[test]
    fn test_next_id_uses_max_not_last() {
        let mut list = list_of(&["a", "b", "c"]);
        list.remove(3).unwrap();
        list.remove(1).unwrap();
        assert_eq!(list.next_id(), Ok(3));

        let mut list = TaskList::from(vec![Task::new(9, "x".into()), Task::new(4, "y".into())]);
        assert_eq!(list.add("z".into()).unwrap().id, 10);
    }

    #[test]
    fn test_add_fails_when_ids_are_exhausted() {
        let json = format!(
            r#"[{{"id":{},"description":"last","status":"todo","createdAt":"2024-01-01T00:00:00.000Z","updatedAt":"2024-01-01T00:00:00.000Z"}}]"#,
            TaskId::MAX
        );
        let mut list: TaskList = serde_json::from_str(&json).unwrap();
        let snapshot = list.clone();

        assert!(matches!(list.next_id(), Err(TaskError::InvalidInput(_))));
        assert!(matches!(list.add("y".into()), Err(TaskError::InvalidInput(_))));
        assert_eq!(list, snapshot);
    }

    #[test]
    fn test_add_rejects_blank_description() {
        let mut list = list_of(&["a"]);
        assert!(matches!(list.add(String::new()), Err(TaskError::InvalidInput(_))));
        assert!(matches!(list.add("   ".into()), Err(TaskError::InvalidInput(_))));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_update_description_keeps_other_fields() {
        let mut list = list_of(&["buy milk"]);
        list.set_status(1, Status::InProgress).unwrap();
        let before = list.get(1).unwrap().clone();

        let after = list.update_description(1, "buy oat milk".into()).unwrap().clone();
        assert_eq!(after.description, "buy oat milk");
        assert_eq!(after.id, before.id);
        assert_eq!(after.status, before.status);
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at >= before.updated_at);
    }

    #[test]
    fn test_missing_id_leaves_list_unchanged() {
        let mut list = list_of(&["a", "b"]);
        let snapshot = list.clone();

        assert_eq!(list.update_description(5, "x".into()).unwrap_err(), TaskError::NotFound(5));
        assert_eq!(list.set_status(5, Status::Done).unwrap_err(), TaskError::NotFound(5));
        assert_eq!(list.remove(5).unwrap_err(), TaskError::NotFound(5));
        assert_eq!(list, snapshot);
    }

    #[test]
    fn test_remove_takes_exactly_one() {
        let mut list = list_of(&["a", "b", "c"]);
        let untouched = list.get(3).unwrap().clone();

        list.remove(2).unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.get(2).is_none());
        assert_eq!(list.get(3), Some(&untouched));
    }

    #[test]
    fn test_filter_preserves_order() {
        let mut list = list_of(&["a", "b", "c", "d"]);
        list.set_status(3, Status::Done).unwrap();
        list.set_status(1, Status::Done).unwrap();

        let done: Vec<TaskId> = list.filter(Some("done")).iter().map(|t| t.id).collect();
        assert_eq!(done, vec![1, 3]);
        assert_eq!(list.filter(None).len(), 4);
        assert!(list.filter(Some("archived")).is_empty());
        assert_eq!(list.filter(Some("")).len(), 4);
    }

    #[test]
    fn test_serializes_as_array() {
        let list = list_of(&["a"]);
        let json = serde_json::to_value(&list).unwrap();
        assert!(json.is_array());
        assert_eq!(serde_json::to_string(&TaskList::new()).unwrap(), "[]");
    }
}
