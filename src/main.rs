use std::path::PathBuf;

use clap::{Parser, Subcommand};
use taskd::error::Result;
use taskd::model::{Priority, Status};
use taskd::output::Format;

#[derive(Parser)]
#[command(
    name = "taskd",
    version,
    about = "Task manager with live aggregate counts, as a CLI and a REST server"
)]
struct Cli {
    /// Path to the task database
    #[arg(long, global = true, default_value = "tasks.db")]
    db: PathBuf,
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "json")]
    format: Format,
    /// Shorthand for --format pretty
    #[arg(long, global = true, hide = true)]
    pretty: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new task
    Create {
        /// Task title
        title: String,
        /// Task description
        #[arg(long, short)]
        description: Option<String>,
        /// Task priority
        #[arg(long, value_enum)]
        priority: Option<Priority>,
    },
    /// List tasks, optionally filtered
    List {
        /// Filter by status
        #[arg(long, value_enum)]
        status: Option<Status>,
        /// Filter by priority
        #[arg(long, value_enum)]
        priority: Option<Priority>,
        /// Also print total/completed/pending counts
        #[arg(long)]
        stats: bool,
    },
    /// Display a single task
    Show {
        /// Task ID to show
        id: String,
    },
    /// Edit task fields
    Edit {
        /// Task ID to edit
        id: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New description
        #[arg(long, short)]
        description: Option<String>,
        /// New priority
        #[arg(long, value_enum)]
        priority: Option<Priority>,
        /// New status
        #[arg(long, value_enum)]
        status: Option<Status>,
    },
    /// Set a task's status
    Status {
        /// Task ID
        id: String,
        /// New status
        #[arg(value_enum)]
        status: Status,
    },
    /// Delete a task by ID
    Delete {
        /// Task ID to delete
        id: String,
    },
    /// Print total/completed/pending counts
    Stats,
    /// Run the REST API server
    Serve {
        /// Port to listen on
        #[arg(long, default_value_t = 5000)]
        port: u16,
    },
}

fn run(cli: Cli, format: Format) -> Result<()> {
    let db = cli.db;
    match cli.command {
        Commands::Create {
            title,
            description,
            priority,
        } => taskd::commands::create::run(&db, title, description, priority, format),
        Commands::List {
            status,
            priority,
            stats,
        } => taskd::commands::list::run(&db, status, priority, stats, format),
        Commands::Show { id } => taskd::commands::show::run(&db, &id, format),
        Commands::Edit {
            id,
            title,
            description,
            priority,
            status,
        } => taskd::commands::edit::run(&db, &id, title, description, priority, status, format),
        Commands::Status { id, status } => taskd::commands::status::run(&db, &id, status, format),
        Commands::Delete { id } => taskd::commands::delete::run(&db, &id, format),
        Commands::Stats => taskd::commands::stats::run(&db, format),
        Commands::Serve { port } => taskd::commands::serve::run(&db, port),
    }
}

fn main() {
    let cli = Cli::parse();
    let format = if cli.pretty {
        Format::Pretty
    } else {
        cli.format
    };
    if let Err(e) = run(cli, format) {
        match format {
            Format::Json => {
                eprintln!(
                    "{}",
                    serde_json::json!({
                        "error": e.code(),
                        "message": e.to_string()
                    })
                );
            }
            _ => eprintln!("error: {e}"),
        }
        std::process::exit(1);
    }
}
