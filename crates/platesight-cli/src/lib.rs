mod args;
mod commands;
pub mod context;
mod handlers;
pub mod output;
pub mod presentation;

pub use args::{Cli, Commands, OutputFormat, PredictArgs};
pub use commands::run;
