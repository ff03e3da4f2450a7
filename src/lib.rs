//! directive-cli: fill in and submit digital services contracting
//! questionnaires from the terminal.

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod forms;
pub mod questionnaire;
pub mod ui;
