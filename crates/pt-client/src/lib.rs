//! pt-client library
//!
//! The client half of the tracker: a typed HTTP client for the pt-server
//! REST API, the list view with local filtering, and the create/edit form
//! state machine. The `pt` binary drives all three.

pub(crate) mod cli;
pub(crate) mod commands;

pub mod client;
pub mod form;
pub mod list_view;

#[cfg(test)]
mod tests;

pub use client::{CliClientResult, Client, ClientError};
pub use form::{FormMode, FormState, ProjectForm, SubmitOutcome};
pub use list_view::ProjectListView;
