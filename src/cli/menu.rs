//! Interactive numbered menu over the same HTTP commands as the subcommands.

use std::io::{BufRead, ErrorKind, Write};

use crate::cli::api_client::ApiClient;
use crate::cli::commands::{note, reminder, task, weather};
use crate::cli::error::{CliError, CliResult};

const MAIN_MENU: &[&str] = &[
    "Smart Life Manager CLI",
    "1. Task Manager",
    "2. Notes Manager",
    "3. Weather Info",
    "4. Reminders",
    "5. Clear / Reset Options",
    "6. Exit",
];

const TASK_MENU: &[&str] = &[
    "Task Manager",
    "1. Add task",
    "2. Show tasks",
    "3. Edit task",
    "4. Delete task",
    "5. Back",
];

const NOTES_MENU: &[&str] = &[
    "Notes Manager",
    "1. Add note",
    "2. Show notes",
    "3. Edit note",
    "4. Delete note",
    "5. Back",
];

const WEATHER_MENU: &[&str] = &[
    "Weather Info",
    "1. Check weather for city",
    "2. Show weather history",
    "3. Back",
];

const REMINDERS_MENU: &[&str] = &[
    "Reminders",
    "1. Add reminder",
    "2. Show all reminders",
    "3. Show today's reminders",
    "4. Edit reminder",
    "5. Delete reminder",
    "6. Back",
];

const CLEAR_MENU: &[&str] = &[
    "-- Clear / Reset Options --",
    "1. Clear all tasks",
    "2. Clear all notes",
    "3. Clear all reminders",
    "4. Reset weather history",
    "5. Back",
];

pub struct Menu<'a, R, W> {
    api: &'a ApiClient,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(api: &'a ApiClient, input: R, output: W) -> Self {
        Self { api, input, output }
    }

    /// Run until the user picks Exit or input ends.
    pub async fn run(&mut self) -> CliResult<()> {
        match self.main_loop().await {
            Err(CliError::Terminal(e)) if e.kind() == ErrorKind::UnexpectedEof => Ok(()),
            other => other,
        }
    }

    async fn main_loop(&mut self) -> CliResult<()> {
        loop {
            self.show(MAIN_MENU)?;
            match self.prompt("Select option: ")?.as_str() {
                "1" => self.tasks().await?,
                "2" => self.notes().await?,
                "3" => self.weather().await?,
                "4" => self.reminders().await?,
                "5" => self.clear_reset().await?,
                "6" => {
                    self.say("Goodbye!")?;
                    return Ok(());
                }
                _ => self.say("Invalid choice.")?,
            }
        }
    }

    async fn tasks(&mut self) -> CliResult<()> {
        loop {
            self.show(TASK_MENU)?;
            match self.prompt("Select task option: ")?.as_str() {
                "1" => {
                    if let Some(request) = self.read_task("")? {
                        let result = task::add_task(self.api, &request).await;
                        self.report(result)?;
                    }
                }
                "2" => {
                    let result = task::list_tasks(self.api, "table").await;
                    self.report(result)?;
                }
                "3" => {
                    let Some(id) = self.read_id("Task ID to edit: ")? else {
                        continue;
                    };
                    if let Some(request) = self.read_task("New ")? {
                        let result = task::edit_task(self.api, id, &request).await;
                        self.report(result)?;
                    }
                }
                "4" => {
                    if let Some(id) = self.read_id("Task ID to delete: ")? {
                        let result = task::delete_task(self.api, id).await;
                        self.report(result)?;
                    }
                }
                "5" => return Ok(()),
                _ => self.say("Invalid choice.")?,
            }
        }
    }

    async fn notes(&mut self) -> CliResult<()> {
        loop {
            self.show(NOTES_MENU)?;
            match self.prompt("Select notes option: ")?.as_str() {
                "1" => {
                    let content = self.prompt("Note content: ")?;
                    let result = note::add_note(self.api, &content).await;
                    self.report(result)?;
                }
                "2" => {
                    let result = note::list_notes(self.api, "table").await;
                    self.report(result)?;
                }
                "3" => {
                    let Some(id) = self.read_id("Note ID to edit: ")? else {
                        continue;
                    };
                    let content = self.prompt("New content: ")?;
                    let result = note::edit_note(self.api, id, &content).await;
                    self.report(result)?;
                }
                "4" => {
                    if let Some(id) = self.read_id("Note ID to delete: ")? {
                        let result = note::delete_note(self.api, id).await;
                        self.report(result)?;
                    }
                }
                "5" => return Ok(()),
                _ => self.say("Invalid choice.")?,
            }
        }
    }

    async fn weather(&mut self) -> CliResult<()> {
        loop {
            self.show(WEATHER_MENU)?;
            match self.prompt("Select weather option: ")?.as_str() {
                "1" => {
                    let city = self.prompt("City name: ")?;
                    match weather::check_weather(self.api, &city).await {
                        Ok(summary) => self.say(&summary)?,
                        Err(CliError::ApiError { message, .. }) => {
                            self.say(&format!("Weather fetch failed: {}", message))?
                        }
                        Err(e) => self.report(Err(e))?,
                    }
                }
                "2" => {
                    let result = weather::weather_history(self.api, "table").await;
                    self.report(result)?;
                }
                "3" => return Ok(()),
                _ => self.say("Invalid choice.")?,
            }
        }
    }

    async fn reminders(&mut self) -> CliResult<()> {
        loop {
            self.show(REMINDERS_MENU)?;
            match self.prompt("Select reminders option: ")?.as_str() {
                "1" => {
                    let request = self.read_reminder("")?;
                    let result = reminder::add_reminder(self.api, &request).await;
                    self.report(result)?;
                }
                "2" => {
                    let result = reminder::list_reminders(self.api, "table").await;
                    self.report(result)?;
                }
                "3" => {
                    let result = reminder::todays_reminders(self.api, "table").await;
                    self.report(result)?;
                }
                "4" => {
                    let Some(id) = self.read_id("Reminder ID to edit: ")? else {
                        continue;
                    };
                    let request = self.read_reminder("New ")?;
                    let result = reminder::edit_reminder(self.api, id, &request).await;
                    self.report(result)?;
                }
                "5" => {
                    if let Some(id) = self.read_id("Reminder ID to delete: ")? {
                        let result = reminder::delete_reminder(self.api, id).await;
                        self.report(result)?;
                    }
                }
                "6" => return Ok(()),
                _ => self.say("Invalid choice.")?,
            }
        }
    }

    async fn clear_reset(&mut self) -> CliResult<()> {
        loop {
            self.show(CLEAR_MENU)?;
            match self.prompt("Select option: ")?.as_str() {
                "1" => {
                    if self.confirm("Confirm clearing all tasks? (y/n): ")? {
                        let result = task::clear_tasks(self.api, true).await;
                        self.report(result)?;
                    }
                }
                "2" => {
                    if self.confirm("Confirm clearing all notes? (y/n): ")? {
                        let result = note::clear_notes(self.api, true).await;
                        self.report(result)?;
                    }
                }
                "3" => {
                    if self.confirm("Confirm clearing all reminders? (y/n): ")? {
                        let result = reminder::clear_reminders(self.api, true).await;
                        self.report(result)?;
                    }
                }
                "4" => {
                    if self.confirm("Confirm resetting weather history? (y/n): ")? {
                        let result = weather::reset_history(self.api, true).await;
                        self.report(result)?;
                    }
                }
                "5" => return Ok(()),
                _ => self.say("Invalid choice.")?,
            }
        }
    }

    fn read_task(&mut self, prefix: &str) -> CliResult<Option<task::TaskRequest>> {
        let title = self.prompt(&format!("{}title: ", prefix))?;
        let description = self.prompt(&format!("{}description: ", prefix))?;
        let due_date = self.prompt(&format!("{}due date (YYYY-MM-DD): ", prefix))?;
        let priority = self.prompt(&format!("{}priority (1-5): ", prefix))?;

        let Ok(priority) = priority.parse() else {
            self.say("Priority must be a whole number.")?;
            return Ok(None);
        };
        Ok(Some(task::TaskRequest {
            title,
            description,
            due_date,
            priority,
        }))
    }

    fn read_reminder(&mut self, prefix: &str) -> CliResult<reminder::ReminderRequest> {
        let content = self.prompt(&format!("{}content: ", prefix))?;
        let date = self.prompt(&format!("{}date (YYYY-MM-DD): ", prefix))?;
        Ok(reminder::ReminderRequest { content, date })
    }

    fn read_id(&mut self, label: &str) -> CliResult<Option<i64>> {
        let raw = self.prompt(label)?;
        match raw.parse() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                self.say("ID must be a whole number.")?;
                Ok(None)
            }
        }
    }

    fn confirm(&mut self, label: &str) -> CliResult<bool> {
        Ok(self.prompt(label)?.eq_ignore_ascii_case("y"))
    }

    /// Print `label` and read one trimmed line. End of input is `UnexpectedEof`.
    fn prompt(&mut self, label: &str) -> CliResult<String> {
        write!(self.output, "{}", label).map_err(CliError::Terminal)?;
        self.output.flush().map_err(CliError::Terminal)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(CliError::Terminal)?;
        if read == 0 {
            writeln!(self.output).map_err(CliError::Terminal)?;
            return Err(CliError::Terminal(ErrorKind::UnexpectedEof.into()));
        }
        Ok(line.trim().to_string())
    }

    fn show(&mut self, lines: &[&str]) -> CliResult<()> {
        writeln!(self.output).map_err(CliError::Terminal)?;
        for line in lines {
            writeln!(self.output, "{}", line).map_err(CliError::Terminal)?;
        }
        Ok(())
    }

    fn say(&mut self, text: &str) -> CliResult<()> {
        writeln!(self.output, "{}", text).map_err(CliError::Terminal)
    }

    /// Print a command's output, or its error without leaving the menu.
    fn report(&mut self, result: CliResult<String>) -> CliResult<()> {
        match result {
            Ok(text) => self.say(&text),
            Err(e @ CliError::Terminal(_)) => Err(e),
            Err(e) => self.say(&format!("Error: {}", e)),
        }
    }
}
