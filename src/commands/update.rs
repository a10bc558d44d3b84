use crate::config::Config;
use crate::error::Result;
use crate::output::{self, Action, Format};
use crate::store::TaskStore;

pub fn run(config: &Config, id: u64, description: String, format: Format) -> Result<()> {
    let store = TaskStore::open(config);
    let task = store.update(id, description)?;
    output::print_confirmation(Action::Updated, &task, format)?;
    Ok(())
}
