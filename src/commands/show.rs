use std::path::Path;

use crate::error::Result;
use crate::output::{self, Format};
use crate::service::TaskService;

pub fn run(db: &Path, id: &str, format: Format) -> Result<()> {
    let service = TaskService::open(db)?;
    let task = service.get(id)?;
    output::print_task(&task, format)?;
    Ok(())
}
