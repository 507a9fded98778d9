mod log;

use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use tasktrack_core::{
    join_description, parse_id, Config, FileTaskRepository, Status, Task, TaskError, TaskId,
    TaskService,
};
use tracing::debug;

#[derive(Parser)]
#[command(name = "task-cli")]
#[command(about = "Track tasks in a local JSON file", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    #[command(flatten)]
    Task(TaskCommand),
    #[command(external_subcommand)]
    Other(Vec<String>),
}

#[derive(clap::Subcommand)]
enum TaskCommand {
    /// Add a new task (usage: add buy milk)
    Add {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Replace the description of a task (usage: update 1 buy oat milk)
    Update {
        #[arg(allow_hyphen_values = true)]
        id: Option<String>,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Delete a task
    Delete(IdArgs),
    /// Mark a task as in-progress
    MarkInProgress(IdArgs),
    /// Mark a task as done
    MarkDone(IdArgs),
    /// Move a task back to todo
    MarkTodo(IdArgs),
    /// List tasks, optionally only those with the given status (todo, in-progress, done)
    List {
        #[arg(allow_hyphen_values = true)]
        status: Option<String>,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        extra: Vec<String>,
    },
}

/// A single task id. Anything after it is ignored.
#[derive(clap::Args)]
struct IdArgs {
    #[arg(allow_hyphen_values = true)]
    id: Option<String>,
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    extra: Vec<String>,
}

impl IdArgs {
    fn id(&self) -> Result<TaskId, TaskError> {
        ignore_extra(&self.extra);
        parse_id(self.id.as_deref())
    }
}

fn ignore_extra(extra: &[String]) {
    if !extra.is_empty() {
        debug!(?extra, "ignoring extra arguments");
    }
}

fn format_task(task: &Task) -> String {
    format!("{}. [{}] {}", task.id, task.status, task.description)
}

fn run(command: TaskCommand) -> Result<()> {
    let config = Config::from_env()?;
    let service = TaskService::new(FileTaskRepository::new(&config)?);

    match command {
        TaskCommand::Add { args } => {
            let created = service.add_task(join_description(&args))?;
            println!("Task added: \"{}\" (ID: {})", created.description, created.id);
        }
        TaskCommand::Update { id, args } => {
            let id = parse_id(id.as_deref())?;
            service.update_task(id, join_description(&args))?;
            println!("Task updated successfully.");
        }
        TaskCommand::Delete(args) => {
            service.delete_task(args.id()?)?;
            println!("Task deleted successfully.");
        }
        TaskCommand::MarkInProgress(args) => mark(&service, &args, Status::InProgress)?,
        TaskCommand::MarkDone(args) => mark(&service, &args, Status::Done)?,
        TaskCommand::MarkTodo(args) => mark(&service, &args, Status::Todo)?,
        TaskCommand::List { status, extra } => {
            ignore_extra(&extra);
            let tasks = service.list_tasks(status.as_deref())?;
            if tasks.is_empty() {
                println!("No tasks found.");
            } else {
                for task in &tasks {
                    println!("{}", format_task(task));
                }
            }
        }
    }
    Ok(())
}

fn mark(service: &TaskService<FileTaskRepository>, args: &IdArgs, status: Status) -> Result<()> {
    let task = service.mark_status(args.id()?, status)?;
    println!("Task marked as {}.", task.status);
    Ok(())
}

fn report(err: &anyhow::Error) {
    match err.downcast_ref::<TaskError>() {
        Some(task_err) => eprintln!("Error: {}", task_err),
        None => eprintln!("Error: {:#}", err),
    }
}

fn unknown_command() -> ExitCode {
    println!("Unknown command.");
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    log::setup();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            debug!(kind = ?err.kind(), "rejected command line");
            return unknown_command();
        }
    };

    let command = match cli.command {
        Some(Commands::Task(command)) => command,
        Some(Commands::Other(args)) => {
            debug!(command = ?args.first(), "unknown command");
            return unknown_command();
        }
        None => return unknown_command(),
    };

    match run(command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}
