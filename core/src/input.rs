use crate::error::TaskError;
use crate::model::task::TaskId;

/// Joins the remaining positional words of a command into one description.
pub fn join_description(args: &[String]) -> String {
    args.join(" ")
}

pub fn parse_id(raw: Option<&str>) -> Result<TaskId, TaskError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| TaskError::InvalidInput("Task ID is required.".to_string()))?;

    match raw.parse::<TaskId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(TaskError::InvalidInput(format!(
            "Invalid task ID: '{}'. Expected a positive integer.",
            raw
        ))),
    }
}
