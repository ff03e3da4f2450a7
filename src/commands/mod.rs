pub mod config;
pub mod demo;
pub mod fill;

pub use config::{set_endpoint_command, set_token_command, show_command};
pub use demo::demo_command;
pub use fill::fill_command;
