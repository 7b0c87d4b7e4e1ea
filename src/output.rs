use clap::ValueEnum;

use crate::error::Result;
use crate::model::Task;
use crate::stats::Stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Pretty,
    Minimal,
}

pub fn print_task(task: &Task, format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string(&task)?),
        Format::Pretty => {
            println!("[{}] {} ({})", task.id, task.title, task.status);
            if !task.description.is_empty() {
                println!("  {}", task.description);
            }
            println!("  priority: {} | status: {}", task.priority, task.status);
            println!(
                "  created: {} | updated: {}",
                task.created_at.to_rfc3339(),
                task.updated_at.to_rfc3339()
            );
        }
        Format::Minimal => {
            let title = truncate_title(&task.title, 24);
            println!(
                "{:36} {:24} {:9} {}",
                task.id, title, task.status, task.priority
            );
        }
    }
    Ok(())
}

pub fn print_tasks(tasks: &[Task], format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string(tasks)?),
        Format::Pretty => {
            for task in tasks {
                print_task(task, Format::Pretty)?;
                println!();
            }
        }
        Format::Minimal => {
            println!("{:36} {:24} {:9} PRIORITY", "ID", "TITLE", "STATUS");
            println!("{}", "-".repeat(78));
            for task in tasks {
                print_task(task, Format::Minimal)?;
            }
        }
    }
    Ok(())
}

pub fn print_stats(stats: &Stats, format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string(stats)?),
        _ => println!(
            "total: {} | completed: {} | pending: {}",
            stats.total, stats.completed, stats.pending
        ),
    }
    Ok(())
}

pub fn truncate_title(title: &str, max_len: usize) -> String {
    if title.chars().count() > max_len {
        let truncated: String = title.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    } else {
        title.to_string()
    }
}
