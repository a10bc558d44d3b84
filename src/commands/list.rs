use crate::config::Config;
use crate::error::Result;
use crate::model::Status;
use crate::output::{self, Format};
use crate::store::TaskStore;

pub fn run(config: &Config, status: Option<Status>, format: Format) -> Result<()> {
    let store = TaskStore::open(config);
    let tasks = store.list(status)?;
    output::print_tasks(&tasks, status, format)?;
    Ok(())
}
