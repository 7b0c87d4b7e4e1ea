use std::path::Path;

use crate::error::Result;
use crate::model::{NewTask, Priority};
use crate::output::{self, Format};
use crate::service::TaskService;

pub fn run(
    db: &Path,
    title: String,
    description: Option<String>,
    priority: Option<Priority>,
    format: Format,
) -> Result<()> {
    let service = TaskService::open(db)?;
    let task = service.create(NewTask {
        title,
        description,
        priority,
    })?;
    output::print_task(&task, format)?;
    Ok(())
}
