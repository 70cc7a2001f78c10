//! Dump a listing to a JSON file.

use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;

use crate::cli::api_client::ApiClient;
use crate::cli::commands::{note, reminder, task, weather};
use crate::cli::error::{CliError, CliResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportKind {
    Tasks,
    Notes,
    Reminders,
    Weather,
}

impl ExportKind {
    fn label(self) -> &'static str {
        match self {
            ExportKind::Tasks => "tasks",
            ExportKind::Notes => "notes",
            ExportKind::Reminders => "reminders",
            ExportKind::Weather => "weather records",
        }
    }
}

/// Fetch the listing for `kind` and write it to `path` as pretty JSON.
pub async fn export(api_client: &ApiClient, kind: ExportKind, path: &Path) -> CliResult<String> {
    let count = match kind {
        ExportKind::Tasks => write_json(path, &task::fetch_tasks(api_client).await?)?,
        ExportKind::Notes => write_json(path, &note::fetch_notes(api_client).await?)?,
        ExportKind::Reminders => write_json(path, &reminder::fetch_reminders(api_client).await?)?,
        ExportKind::Weather => write_json(path, &weather::fetch_history(api_client).await?)?,
    };

    Ok(format!(
        "✓ Exported {} {} to {}",
        count,
        kind.label(),
        path.display()
    ))
}

fn write_json<T: Serialize>(path: &Path, items: &[T]) -> CliResult<usize> {
    let json = serde_json::to_string_pretty(items)?;
    std::fs::write(path, json).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(items.len())
}
