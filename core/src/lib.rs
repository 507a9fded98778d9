pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;

pub use config::Config;
pub use error::TaskError;
pub use input::{join_description, parse_id};
pub use model::task::{Status, Task, TaskId};
pub use model::task_list::TaskList;
pub use repository::{FileTaskRepository, TaskRepository};
pub use service::task_service::TaskService;
