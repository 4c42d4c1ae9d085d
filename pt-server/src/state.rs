use sqlx::SqlitePool;

/// Shared state handed to every handler. Each request is handled
/// independently; the pool is the only shared resource.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}
