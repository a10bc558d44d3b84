use crate::config::Config;
use crate::error::Result;
use crate::output::{self, Action, Format};
use crate::store::TaskStore;

pub fn run(config: &Config, description: String, format: Format) -> Result<()> {
    let store = TaskStore::open(config);
    let task = store.add(description)?;
    output::print_confirmation(Action::Added, &task, format)?;
    Ok(())
}
