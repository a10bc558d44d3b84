use crate::config::Config;
use crate::error::Result;
use crate::output::{self, Action, Format};
use crate::store::TaskStore;

pub fn run(config: &Config, id: u64, format: Format) -> Result<()> {
    let store = TaskStore::open(config);
    let task = store.delete(id)?;
    output::print_confirmation(Action::Deleted, &task, format)?;
    Ok(())
}
