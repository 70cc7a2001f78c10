//! Application state for the API server.

use std::sync::Arc;

use crate::db::Database;
use crate::weather::WeatherApi;

/// Shared application state.
///
/// Generic over the storage backend and the upstream weather source so tests
/// can inject an in-memory database and a scripted weather API. Both are
/// constructed by the caller and passed in; nothing is created here.
pub struct AppState<D: Database, W: WeatherApi> {
    db: Arc<D>,
    weather: Arc<W>,
}

// Manual Clone impl - only the Arcs are cloned, D and W need not be Clone
impl<D: Database, W: WeatherApi> Clone for AppState<D, W> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
            weather: Arc::clone(&self.weather),
        }
    }
}

impl<D: Database, W: WeatherApi> AppState<D, W> {
    pub fn new(db: D, weather: W) -> Self {
        Self {
            db: Arc::new(db),
            weather: Arc::new(weather),
        }
    }

    /// Get a reference to the database.
    pub fn db(&self) -> &D {
        &self.db
    }

    /// Get a cloned Arc to the database.
    pub fn db_arc(&self) -> Arc<D> {
        Arc::clone(&self.db)
    }

    /// Get a reference to the weather source.
    pub fn weather(&self) -> &W {
        &self.weather
    }
}
