pub mod output;
mod shell;
pub mod table;

pub use shell::{run_cli, CliError};
