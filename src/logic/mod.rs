//! Command parsing and execution.

pub mod commands;
pub mod logic_manager;
pub mod messages;
pub mod parser;
pub mod registry;

pub use commands::{Command, CommandError, CommandResult, TabWindow};
pub use logic_manager::{LogicError, LogicManager};
pub use registry::{CommandEntry, CommandRegistry};
