use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::config::{Config, CorruptPolicy};
use crate::error::{Result, TaskError};
use crate::model::{Status, Task};

/// The JSON file holding every task, read and rewritten whole on each operation.
pub struct TaskStore {
    path: PathBuf,
    on_corrupt: CorruptPolicy,
}

/// Next id for a collection: one past the highest id, or 1 when empty.
pub fn next_id(tasks: &[Task]) -> Result<u64> {
    match tasks.iter().map(|t| t.id).max() {
        Some(max) => max.checked_add(1).ok_or(TaskError::IdsExhausted),
        None => Ok(1),
    }
}

impl TaskStore {
    pub fn open(config: &Config) -> Self {
        Self {
            path: config.tasks_file().to_path_buf(),
            on_corrupt: config.on_corrupt,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Vec<Task>> {
        let path = self.path();
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("no task file at {}, starting empty", path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<Vec<Task>>(&data) {
            Ok(tasks) => {
                tracing::debug!("loaded {} tasks from {}", tasks.len(), path.display());
                Ok(tasks)
            }
            Err(source) => match self.on_corrupt {
                CorruptPolicy::Abort => Err(TaskError::CorruptStore {
                    path: path.display().to_string(),
                    source,
                }),
                CorruptPolicy::Reset => {
                    tracing::warn!(
                        "could not decode {} ({}), starting fresh",
                        path.display(),
                        source
                    );
                    Ok(Vec::new())
                }
            },
        }
    }

    /// Overwrite the file with `tasks`, 4-space indented, via temp file + rename.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        tasks.serialize(&mut ser)?;
        buf.push(b'\n');

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &buf)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        tracing::debug!("saved {} tasks to {}", tasks.len(), self.path.display());
        Ok(())
    }

    pub fn add(&self, description: String) -> Result<Task> {
        let mut tasks = self.load()?;
        let task = Task::new(next_id(&tasks)?, description);
        tasks.push(task.clone());
        self.save(&tasks)?;
        Ok(task)
    }

    pub fn update(&self, id: u64, description: String) -> Result<Task> {
        self.modify(id, |task| task.description = description)
    }

    pub fn set_status(&self, id: u64, status: Status) -> Result<Task> {
        self.modify(id, |task| task.status = status)
    }

    /// Remove the task with `id`. The file is rewritten even when nothing matched.
    pub fn delete(&self, id: u64) -> Result<Task> {
        let mut tasks = self.load()?;
        let removed = tasks
            .iter()
            .position(|t| t.id == id)
            .map(|idx| tasks.remove(idx));
        self.save(&tasks)?;
        removed.ok_or(TaskError::TaskNotFound(id))
    }

    pub fn list(&self, status: Option<Status>) -> Result<Vec<Task>> {
        let mut tasks = self.load()?;
        if let Some(status) = status {
            tasks.retain(|t| t.status == status);
        }
        Ok(tasks)
    }

    fn modify(&self, id: u64, apply: impl FnOnce(&mut Task)) -> Result<Task> {
        let mut tasks = self.load()?;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TaskError::TaskNotFound(id))?;
        apply(task);
        task.touch();
        let updated = task.clone();
        self.save(&tasks)?;
        Ok(updated)
    }
}
