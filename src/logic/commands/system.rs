use tracing::info;

use crate::core::{Model, TransactBook};
use crate::logic::parser::ParseError;
use crate::utils::build_info;

use super::{Command, CommandError, CommandResult, TabWindow};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearCommand;

impl Command for ClearCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        model.set_book(TransactBook::new());
        info!("cleared all records");
        Ok(CommandResult::with_view(
            "Address book and transactions have been cleared!",
            TabWindow::AddressBook,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpCommand;

impl Command for HelpCommand {
    fn execute(&self, _model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        Ok(CommandResult::help("Showing help."))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitCommand;

impl Command for ExitCommand {
    fn execute(&self, _model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        Ok(CommandResult::exit("Exiting Transact as requested ..."))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionCommand;

impl Command for VersionCommand {
    fn execute(&self, _model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let meta = build_info::current();
        Ok(CommandResult::new(format!(
            "transact {} ({} {}, {} build for {}, built {} with {})",
            meta.version,
            meta.git_hash,
            meta.git_status,
            meta.profile,
            meta.target,
            meta.timestamp,
            meta.rustc
        )))
    }
}

pub fn parse_clear(_args: &str, _model: &dyn Model) -> Result<Box<dyn Command>, ParseError> {
    Ok(Box::new(ClearCommand))
}

pub fn parse_help(_args: &str, _model: &dyn Model) -> Result<Box<dyn Command>, ParseError> {
    Ok(Box::new(HelpCommand))
}

pub fn parse_version(_args: &str, _model: &dyn Model) -> Result<Box<dyn Command>, ParseError> {
    Ok(Box::new(VersionCommand))
}

pub fn parse_exit(_args: &str, _model: &dyn Model) -> Result<Box<dyn Command>, ParseError> {
    Ok(Box::new(ExitCommand))
}
