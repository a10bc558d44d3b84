use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use colored::Colorize;
use task_cli::config::{Config, CorruptPolicy, DEFAULT_TASKS_FILE};
use task_cli::model::Status;
use task_cli::output::Format;

#[derive(Parser)]
#[command(
    name = "task-cli",
    version,
    about = "Track tasks and their progress in a local JSON file"
)]
struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    format: Format,
    /// Task file to read and write
    #[arg(long, global = true, env = "TASK_CLI_FILE", default_value = DEFAULT_TASKS_FILE)]
    file: PathBuf,
    /// What to do when the task file cannot be decoded
    #[arg(
        long,
        global = true,
        value_enum,
        env = "TASK_CLI_ON_CORRUPT",
        default_value = "abort"
    )]
    on_corrupt: CorruptPolicy,
    /// Print debug diagnostics to stderr
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        /// Task description
        description: String,
    },
    /// Change a task's description
    Update {
        /// Task ID to update
        id: u64,
        /// New description
        new_description: String,
    },
    /// Delete a task by ID
    Delete {
        /// Task ID to delete
        id: u64,
    },
    /// Set a task to in-progress
    MarkInProgress {
        /// Task ID to mark
        id: u64,
    },
    /// Set a task to done
    MarkDone {
        /// Task ID to mark
        id: u64,
    },
    /// List tasks, optionally filtered by status
    List {
        /// Only show tasks with this status
        #[arg(value_enum)]
        status: Option<Status>,
    },
}

fn run(command: Commands, config: &Config, format: Format) -> task_cli::error::Result<()> {
    match command {
        Commands::Add { description } => task_cli::commands::add::run(config, description, format),
        Commands::Update {
            id,
            new_description,
        } => task_cli::commands::update::run(config, id, new_description, format),
        Commands::Delete { id } => task_cli::commands::delete::run(config, id, format),
        Commands::MarkInProgress { id } => task_cli::commands::mark::in_progress(config, id, format),
        Commands::MarkDone { id } => task_cli::commands::mark::done(config, id, format),
        Commands::List { status } => task_cli::commands::list::run(config, status, format),
    }
}

fn main() {
    let cli = Cli::parse();
    task_cli::logging::init(cli.verbose);

    let Some(command) = cli.command else {
        // No subcommand: show help and touch nothing.
        if let Err(e) = Cli::command().print_help() {
            eprintln!("{} {e}", "error:".red().bold());
            std::process::exit(1);
        }
        println!();
        return;
    };

    let config = Config::default()
        .with_tasks_file(cli.file)
        .with_on_corrupt(cli.on_corrupt);
    let format = cli.format;

    if let Err(e) = run(command, &config, format) {
        match format {
            Format::Json => {
                eprintln!(
                    "{}",
                    serde_json::json!({
                        "error": e.code(),
                        "message": e.to_string()
                    })
                );
            }
            Format::Text => eprintln!("{} {e}", "error:".red().bold()),
        }
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn list_accepts_known_statuses_only() {
        let cli = Cli::try_parse_from(["task-cli", "list", "in-progress"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::List {
                status: Some(Status::InProgress)
            })
        ));
        assert!(Cli::try_parse_from(["task-cli", "list", "waiting"]).is_err());
    }

    #[test]
    fn mark_commands_use_kebab_case_names() {
        let cli = Cli::try_parse_from(["task-cli", "mark-in-progress", "3"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::MarkInProgress { id: 3 })));
        let cli = Cli::try_parse_from(["task-cli", "mark-done", "3"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::MarkDone { id: 3 })));
    }

    #[test]
    fn no_subcommand_parses_to_none() {
        let cli = Cli::try_parse_from(["task-cli"]).unwrap();
        assert!(cli.command.is_none());
    }
}
