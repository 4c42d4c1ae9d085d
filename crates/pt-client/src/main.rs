//! pt - Project tracker CLI
//!
//! Drives the tracker REST API through the same list-view and form logic
//! the client library exposes.
//!
//! # Examples
//!
//! ```bash
//! # List all projects, filtered locally
//! pt list --filter alpha --pretty
//!
//! # Create a project
//! pt create --name "Alpha" --description "First" --skill Java --skill SQL --members 3
//!
//! # Replace a project's fields
//! pt update <id> --name "Alpha" --description "First" --skill Java --members 2 --active
//! ```

mod cli;
mod commands;

use crate::cli::Cli;
use crate::commands::Commands;

use pt_client::{Client, ProjectForm, ProjectListView, SubmitOutcome};
use pt_core::ProjectDraft;

use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let client = Client::new(&cli.server);
    let pretty = cli.pretty;

    match cli.command {
        Commands::List { filter } => {
            let mut view = ProjectListView::new();
            if let Err(e) = view.load(&client).await {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
            if let Some(term) = filter {
                view.set_filter(&term);
            }
            print_json(&view.visible(), pretty)
        }

        Commands::Get { id } => match client.get_project(&id).await {
            Ok(project) => print_json(&project, pretty),
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },

        Commands::Create {
            name,
            description,
            skills,
            members,
            active,
        } => {
            let mut form = ProjectForm::create();
            form.draft = draft_from_args(name, description, skills, members, active);
            run_form(form, &client, pretty).await
        }

        Commands::Update {
            id,
            name,
            description,
            skills,
            members,
            active,
        } => {
            let project = match client.get_project(&id).await {
                Ok(project) => project,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return ExitCode::FAILURE;
                }
            };
            let mut form = ProjectForm::edit(&project);
            form.draft = draft_from_args(name, description, skills, members, active);
            run_form(form, &client, pretty).await
        }

        Commands::Delete { id } => match client.delete_project(&id).await {
            Ok(deleted) => print_json(&deleted, pretty),
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },

        Commands::Health => match client.health().await {
            Ok(health) => print_json(&health, pretty),
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}

fn draft_from_args(
    name: String,
    description: String,
    skills: Vec<String>,
    members: String,
    active: bool,
) -> ProjectDraft {
    ProjectDraft {
        project_name: name,
        project_description: description,
        skill_set: skills,
        no_of_members: members,
        is_active: active,
    }
}

/// Drive the form through one submit attempt and report the outcome
async fn run_form(mut form: ProjectForm, client: &Client, pretty: bool) -> ExitCode {
    match form.submit(client).await {
        SubmitOutcome::Saved(project) => print_json(&project, pretty),
        SubmitOutcome::Rejected => {
            for error in form.field_errors() {
                eprintln!("{}: {}", error.field, error.message);
            }
            ExitCode::FAILURE
        }
        SubmitOutcome::Failed(e) => {
            if let Some(notice) = form.notice() {
                eprintln!("{}", notice);
            }
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
        SubmitOutcome::Ignored => ExitCode::FAILURE,
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> ExitCode {
    let output = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    match output {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing response: {}", e);
            ExitCode::FAILURE
        }
    }
}
