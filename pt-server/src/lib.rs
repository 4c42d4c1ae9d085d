pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    error::{ApiError, ApiErrorBody, ApiErrorResponse, Result as ApiResult},
    projects::projects::{
        create_project, delete_project, get_project, list_projects, update_project,
    },
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
