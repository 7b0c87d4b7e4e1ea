use std::path::Path;

use crate::error::Result;
use crate::model::{Priority, Status, TaskPatch};
use crate::output::{self, Format};
use crate::service::TaskService;

pub fn run(
    db: &Path,
    id: &str,
    title: Option<String>,
    description: Option<String>,
    priority: Option<Priority>,
    status: Option<Status>,
    format: Format,
) -> Result<()> {
    let service = TaskService::open(db)?;
    let task = service.update(
        id,
        TaskPatch {
            title,
            description,
            priority,
            status,
        },
    )?;
    output::print_task(&task, format)?;
    Ok(())
}
