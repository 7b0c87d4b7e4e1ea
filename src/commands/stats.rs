use std::path::Path;

use crate::error::Result;
use crate::output::{self, Format};
use crate::service::TaskService;

pub fn run(db: &Path, format: Format) -> Result<()> {
    let service = TaskService::open(db)?;
    let stats = service.stats()?;
    output::print_stats(&stats, format)?;
    Ok(())
}
