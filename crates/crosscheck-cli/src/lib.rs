pub mod args;
pub mod commands;
pub mod output;

pub use args::Cli;
pub use commands::run;
