use std::path::{Path, PathBuf};

use clap::ValueEnum;

pub const DEFAULT_TASKS_FILE: &str = "tasks.json";

/// What `load` does when the task file exists but cannot be decoded.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum CorruptPolicy {
    /// Fail the command and leave the file alone.
    #[default]
    Abort,
    /// Warn and continue with an empty task list.
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub tasks_file: PathBuf,
    pub on_corrupt: CorruptPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tasks_file: PathBuf::from(DEFAULT_TASKS_FILE),
            on_corrupt: CorruptPolicy::default(),
        }
    }
}

impl Config {
    pub fn with_tasks_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.tasks_file = path.into();
        self
    }

    pub fn with_on_corrupt(mut self, policy: CorruptPolicy) -> Self {
        self.on_corrupt = policy;
        self
    }

    pub fn tasks_file(&self) -> &Path {
        &self.tasks_file
    }
}
