use std::path::Path;

use crate::error::Result;
use crate::output::Format;
use crate::service::TaskService;

pub fn run(db: &Path, id: &str, format: Format) -> Result<()> {
    let service = TaskService::open(db)?;
    service.delete(id)?;
    match format {
        Format::Json => println!("{}", serde_json::json!({ "deleted": id })),
        _ => println!("deleted {id}"),
    }
    Ok(())
}
