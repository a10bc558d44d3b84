use clap::ValueEnum;
use colored::Colorize;

use crate::error::Result;
use crate::model::{Status, Task};

const ID_WIDTH: usize = 5;
const DESCRIPTION_WIDTH: usize = 65;
const STATUS_WIDTH: usize = 12;
const CREATED_WIDTH: usize = 20;
const RULE_WIDTH: usize = 120;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// What a mutating command did to a task, for its confirmation line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Added,
    Updated,
    Deleted,
    Marked(Status),
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Added => write!(f, "added"),
            Self::Updated => write!(f, "updated"),
            Self::Deleted => write!(f, "deleted"),
            Self::Marked(status) => write!(f, "marked {status}"),
        }
    }
}

pub fn confirmation(action: Action, task: &Task) -> String {
    format!("Task {}: {} (ID:{})", action, task.description, task.id)
}

pub fn print_confirmation(action: Action, task: &Task, format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string(task)?),
        Format::Text => println!("{}", confirmation(action, task)),
    }
    Ok(())
}

/// Render the creation time as a local `YYYY-MM-DD HH:MM:SS`, or `-` if out of range.
pub fn format_created_at(task: &Task) -> String {
    task.created_local()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn list_title(filter: Option<Status>) -> String {
    match filter {
        Some(status) => format!("Tasks with status '{status}':"),
        None => "All tasks:".to_string(),
    }
}

pub fn table_header() -> String {
    format!(
        "{:<ID_WIDTH$} {:<DESCRIPTION_WIDTH$} {:<STATUS_WIDTH$} {:<CREATED_WIDTH$}",
        "ID", "Description", "Status", "CreatedAt"
    )
}

pub fn table_row(task: &Task) -> String {
    format!(
        "{:<ID_WIDTH$} {:<DESCRIPTION_WIDTH$} {:<STATUS_WIDTH$} {}",
        task.id,
        task.description,
        task.status.to_string(),
        format_created_at(task)
    )
}

pub fn print_tasks(tasks: &[Task], filter: Option<Status>, format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string(tasks)?),
        Format::Text => {
            println!("{}", list_title(filter).bold());
            println!("{}", table_header());
            println!("{}", "-".repeat(RULE_WIDTH));
            for task in tasks {
                println!("{}", table_row(task));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u64, description: &str, status: Status) -> Task {
        Task {
            id,
            description: description.into(),
            status,
            created_at: 1_700_000_000.0,
            updated_at: 1_700_000_000.0,
        }
    }

    #[test]
    fn confirmation_names_action_description_and_id() {
        let t = task(4, "Walk dog", Status::Todo);
        assert_eq!(confirmation(Action::Added, &t), "Task added: Walk dog (ID:4)");
        assert_eq!(
            confirmation(Action::Marked(Status::InProgress), &t),
            "Task marked in-progress: Walk dog (ID:4)"
        );
        assert_eq!(
            confirmation(Action::Marked(Status::Done), &t),
            "Task marked done: Walk dog (ID:4)"
        );
    }

    #[test]
    fn header_columns_are_fixed_width() {
        let header = table_header();
        assert!(header.starts_with("ID    Description"));
        assert_eq!(header.find("Status"), Some(ID_WIDTH + 1 + DESCRIPTION_WIDTH + 1));
        assert_eq!(
            header.find("CreatedAt"),
            Some(ID_WIDTH + 1 + DESCRIPTION_WIDTH + 1 + STATUS_WIDTH + 1)
        );
    }

    #[test]
    fn row_aligns_with_header() {
        let t = task(12, "Read book", Status::InProgress);
        let row = table_row(&t);
        assert!(row.starts_with("12    Read book"));
        assert_eq!(row.find("in-progress"), table_header().find("Status"));
        assert!(row.ends_with(&format_created_at(&t)));
    }

    #[test]
    fn created_at_renders_calendar_time() {
        let mut t = task(1, "Dated", Status::Todo);
        t.created_at = 1_700_000_000.9;
        let rendered = format_created_at(&t);
        assert_eq!(rendered.len(), "2023-11-14 22:13:20".len());
        assert!(rendered.starts_with("2023-11-1"));

        t.created_at = f64::NAN;
        assert_eq!(format_created_at(&t), "-");
    }

    #[test]
    fn title_mentions_filter() {
        assert_eq!(list_title(None), "All tasks:");
        assert_eq!(list_title(Some(Status::Done)), "Tasks with status 'done':");
    }
}
