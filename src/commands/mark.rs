use crate::config::Config;
use crate::error::Result;
use crate::model::Status;
use crate::output::{self, Action, Format};
use crate::store::TaskStore;

/// Any status can be set from any other; there is no transition check.
fn set_status(config: &Config, id: u64, target: Status, format: Format) -> Result<()> {
    let store = TaskStore::open(config);
    let task = store.set_status(id, target)?;
    output::print_confirmation(Action::Marked(target), &task, format)?;
    Ok(())
}

pub fn in_progress(config: &Config, id: u64, format: Format) -> Result<()> {
    set_status(config, id, Status::InProgress, format)
}

pub fn done(config: &Config, id: u64, format: Format) -> Result<()> {
    set_status(config, id, Status::Done, format)
}
