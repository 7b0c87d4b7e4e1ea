use std::path::Path;

use crate::error::Result;
use crate::model::{Priority, Status, TaskFilter};
use crate::output::{self, Format};
use crate::service::TaskService;

pub fn run(
    db: &Path,
    status: Option<Status>,
    priority: Option<Priority>,
    with_stats: bool,
    format: Format,
) -> Result<()> {
    let service = TaskService::open(db)?;
    let page = service.list(&TaskFilter { status, priority })?;
    output::print_tasks(&page.tasks, format)?;
    if with_stats {
        output::print_stats(&page.stats, format)?;
    }
    Ok(())
}
