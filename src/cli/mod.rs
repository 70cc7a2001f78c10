pub mod api_client;
mod commands;
pub mod error;
pub mod menu;
mod utils;




use std::path::PathBuf;

use clap::{Parser, Subcommand};

use api_client::ApiClient;
use commands::export::ExportKind;
use commands::{export, note, reminder, task, weather};
use error::CliResult;

#[derive(Parser)]
#[command(name = "smartlife")]
#[command(author, version, about = "Smart Life Manager CLI", long_about = None)]
pub struct Cli {
    /// Override the API URL (default: SMARTLIFE_API_URL env or http://127.0.0.1:8000)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Task management commands
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Note management commands
    Note {
        #[command(subcommand)]
        command: NoteCommands,
    },
    /// Reminder management commands
    Reminder {
        #[command(subcommand)]
        command: ReminderCommands,
    },
    /// Weather lookup and history
    Weather {
        #[command(subcommand)]
        command: WeatherCommands,
    },
    /// Write a listing to a JSON file
    Export {
        /// What to export
        #[arg(value_enum)]
        kind: ExportKind,
        /// Destination file
        file: PathBuf,
    },
    /// Interactive numbered menu
    Menu,
}

#[derive(Subcommand)]
enum TaskCommands {
    /// Add a task
    Add {
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long, default_value = "")]
        due: String,
        /// Priority (1-5)
        #[arg(long, default_value = "3")]
        priority: i64,
    },
    /// List tasks
    List {
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Replace every field of a task
    Edit {
        id: i64,
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        due: String,
        #[arg(long, default_value = "3")]
        priority: i64,
    },
    /// Delete a task
    Delete { id: i64 },
    /// Delete every task
    Clear {
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum NoteCommands {
    /// Add a note
    Add { content: String },
    /// List notes
    List {
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Replace a note's content
    Edit { id: i64, content: String },
    /// Delete a note
    Delete { id: i64 },
    /// Delete every note
    Clear {
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum ReminderCommands {
    /// Add a reminder
    Add {
        content: String,
        /// Date (YYYY-MM-DD)
        date: String,
    },
    /// List all reminders
    List {
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// List reminders due today
    Today {
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Replace a reminder
    Edit {
        id: i64,
        content: String,
        date: String,
    },
    /// Delete a reminder
    Delete { id: i64 },
    /// Delete every reminder
    Clear {
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum WeatherCommands {
    /// Current weather for a city
    Check { city: String },
    /// Past lookups, newest first
    History {
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Drop all weather history
    Reset {
        #[arg(long)]
        force: bool,
    },
}

pub async fn run() -> miette::Result<()> {
    let cli = Cli::parse();
    let api_client = ApiClient::new(cli.api_url);

    let Some(command) = cli.command else {
        // Show help when no command provided
        let _ = Cli::parse_from(["smartlife", "--help"]);
        return Ok(());
    };

    if let Some(output) = execute(&api_client, command).await? {
        println!("{}", output);
    }
    Ok(())
}

/// Run one command. `None` means it already wrote its own output.
async fn execute(api_client: &ApiClient, command: Commands) -> CliResult<Option<String>> {
    let output = match command {
        Commands::Task { command } => match command {
            TaskCommands::Add {
                title,
                description,
                due,
                priority,
            } => {
                let request = task::TaskRequest {
                    title,
                    description,
                    due_date: due,
                    priority,
                };
                task::add_task(api_client, &request).await
            }
            TaskCommands::List { format } => task::list_tasks(api_client, &format).await,
            TaskCommands::Edit {
                id,
                title,
                description,
                due,
                priority,
            } => {
                let request = task::TaskRequest {
                    title,
                    description,
                    due_date: due,
                    priority,
                };
                task::edit_task(api_client, id, &request).await
            }
            TaskCommands::Delete { id } => task::delete_task(api_client, id).await,
            TaskCommands::Clear { force } => task::clear_tasks(api_client, force).await,
        },
        Commands::Note { command } => match command {
            NoteCommands::Add { content } => note::add_note(api_client, &content).await,
            NoteCommands::List { format } => note::list_notes(api_client, &format).await,
            NoteCommands::Edit { id, content } => note::edit_note(api_client, id, &content).await,
            NoteCommands::Delete { id } => note::delete_note(api_client, id).await,
            NoteCommands::Clear { force } => note::clear_notes(api_client, force).await,
        },
        Commands::Reminder { command } => match command {
            ReminderCommands::Add { content, date } => {
                let request = reminder::ReminderRequest { content, date };
                reminder::add_reminder(api_client, &request).await
            }
            ReminderCommands::List { format } => {
                reminder::list_reminders(api_client, &format).await
            }
            ReminderCommands::Today { format } => {
                reminder::todays_reminders(api_client, &format).await
            }
            ReminderCommands::Edit { id, content, date } => {
                let request = reminder::ReminderRequest { content, date };
                reminder::edit_reminder(api_client, id, &request).await
            }
            ReminderCommands::Delete { id } => reminder::delete_reminder(api_client, id).await,
            ReminderCommands::Clear { force } => {
                reminder::clear_reminders(api_client, force).await
            }
        },
        Commands::Weather { command } => match command {
            WeatherCommands::Check { city } => weather::check_weather(api_client, &city).await,
            WeatherCommands::History { format } => {
                weather::weather_history(api_client, &format).await
            }
            WeatherCommands::Reset { force } => weather::reset_history(api_client, force).await,
        },
        Commands::Export { kind, file } => export::export(api_client, kind, &file).await,
        Commands::Menu => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            menu::Menu::new(api_client, stdin.lock(), stdout.lock())
                .run()
                .await?;
            return Ok(None);
        }
    };
    output.map(Some)
}
