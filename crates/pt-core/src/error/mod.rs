use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error on {field}: {message} {location}")]
    Validation {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid team size: {value} {location}")]
    InvalidTeamSize {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
