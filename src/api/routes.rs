//! API route configuration.

use axum::Router;
use axum::routing::{delete, get, post, put};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{
    self, ErrorResponse, HealthResponse, MessageResponse, NoteList, NoteRequest, NoteResponse,
    NotesResponse, ReminderList, ReminderRequest, ReminderResponse, RemindersResponse, TaskList,
    TaskRequest, TaskResponse, TasksResponse, TodayReminderList, TodayRemindersResponse,
    WeatherHistory, WeatherHistoryResponse, WeatherRecordResponse, WeatherResponse,
};
use super::state::AppState;
use crate::db::Database;
use crate::weather::WeatherApi;

/// Build routes with generic database and weather types.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Database and WeatherApi traits. It applies the turbofish
/// operator automatically.
macro_rules! routes {
    ($D:ty, $W:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D, $W>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Smart Life Manager API",
        version = "0.1.0",
        description = "Tasks, notes, reminders and weather lookups",
        license(name = "GPL-2.0")
    ),
    paths(
        handlers::root,
        handlers::health,
        handlers::list_tasks,
        handlers::create_task,
        handlers::update_task,
        handlers::delete_task,
        handlers::clear_tasks,
        handlers::list_notes,
        handlers::create_note,
        handlers::update_note,
        handlers::delete_note,
        handlers::clear_notes,
        handlers::list_reminders,
        handlers::todays_reminders,
        handlers::create_reminder,
        handlers::update_reminder,
        handlers::delete_reminder,
        handlers::clear_reminders,
        handlers::check_weather,
        handlers::weather_history,
        handlers::reset_weather_history,
    ),
    components(
        schemas(
            MessageResponse,
            ErrorResponse,
            HealthResponse,
            TaskRequest,
            TaskResponse,
            TaskList,
            TasksResponse,
            NoteRequest,
            NoteResponse,
            NoteList,
            NotesResponse,
            ReminderRequest,
            ReminderResponse,
            ReminderList,
            RemindersResponse,
            TodayReminderList,
            TodayRemindersResponse,
            WeatherResponse,
            WeatherRecordResponse,
            WeatherHistory,
            WeatherHistoryResponse,
        )
    ),
    tags(
        (name = "system", description = "Welcome and health endpoints"),
        (name = "tasks", description = "Task management endpoints"),
        (name = "notes", description = "Note management endpoints"),
        (name = "reminders", description = "Reminder management endpoints"),
        (name = "weather", description = "Weather lookup and history endpoints")
    )
)]
pub struct ApiDoc;

/// Create the API router with OpenAPI documentation
///
/// Static segments (`clear_all`, `today`, `history`) take precedence over
/// the `{id}` / `{city}` captures.
pub fn create_router<D: Database, W: WeatherApi>(state: AppState<D, W>) -> Router {
    let api = ApiDoc::openapi();

    // System routes (non-generic)
    let system_routes = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health));

    let task_routes = routes!(D, W => {
        get "/tasks" => handlers::list_tasks,
        post "/tasks" => handlers::create_task,
        delete "/tasks/clear_all" => handlers::clear_tasks,
        put "/tasks/{id}" => handlers::update_task,
        delete "/tasks/{id}" => handlers::delete_task,
    });

    let note_routes = routes!(D, W => {
        get "/notes" => handlers::list_notes,
        post "/notes" => handlers::create_note,
        delete "/notes/clear_all" => handlers::clear_notes,
        put "/notes/{id}" => handlers::update_note,
        delete "/notes/{id}" => handlers::delete_note,
    });

    let reminder_routes = routes!(D, W => {
        get "/reminders" => handlers::list_reminders,
        post "/reminders" => handlers::create_reminder,
        get "/reminders/today" => handlers::todays_reminders,
        delete "/reminders/clear_all" => handlers::clear_reminders,
        put "/reminders/{id}" => handlers::update_reminder,
        delete "/reminders/{id}" => handlers::delete_reminder,
    });

    let weather_routes = routes!(D, W => {
        get "/weather/history" => handlers::weather_history,
        delete "/weather/history/reset" => handlers::reset_weather_history,
        get "/weather/{city}" => handlers::check_weather,
    });

    system_routes
        .merge(task_routes)
        .merge(note_routes)
        .merge(reminder_routes)
        .merge(weather_routes)
        .merge(Scalar::with_url("/docs", api))
        .with_state(state)
}
