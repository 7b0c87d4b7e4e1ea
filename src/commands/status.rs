use std::path::Path;

use crate::error::Result;
use crate::model::Status;
use crate::output::{self, Format};
use crate::service::TaskService;

pub fn run(db: &Path, id: &str, status: Status, format: Format) -> Result<()> {
    let service = TaskService::open(db)?;
    let task = service.set_status(id, status)?;
    output::print_task(&task, format)?;
    Ok(())
}
