//! Executable commands and the result/error types they share.

pub mod edit_transaction;
pub mod person;
pub mod system;
pub mod transaction;

use std::fmt;

use thiserror::Error;

use crate::core::{EntryListError, Model};
use crate::logic::messages::{
    MESSAGE_INVALID_PERSON_DISPLAYED_INDEX, MESSAGE_INVALID_TRANSACTION_DISPLAYED_INDEX,
};

pub use edit_transaction::{EditTransactionCommand, EditTransactionDescriptor};
pub use person::{AddPersonCommand, DeletePersonCommand, FindPersonsCommand, ListPersonsCommand};
pub use system::{ClearCommand, ExitCommand, HelpCommand, VersionCommand};
pub use transaction::{
    AddTransactionCommand, DeleteTransactionCommand, FindTransactionsCommand,
    ListTransactionsCommand,
};

/// List view a result asks the UI to bring forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabWindow {
    AddressBook,
    Transactions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    pub view: Option<TabWindow>,
    pub show_help: bool,
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            view: None,
            show_help: false,
            exit: false,
        }
    }

    pub fn with_view(feedback: impl Into<String>, view: TabWindow) -> Self {
        Self {
            view: Some(view),
            ..Self::new(feedback)
        }
    }

    pub fn help(feedback: impl Into<String>) -> Self {
        Self {
            show_help: true,
            ..Self::new(feedback)
        }
    }

    pub fn exit(feedback: impl Into<String>) -> Self {
        Self {
            exit: true,
            ..Self::new(feedback)
        }
    }
}

/// Failures reported to the user. Every variant is raised before the model changes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("{}", MESSAGE_INVALID_PERSON_DISPLAYED_INDEX)]
    InvalidPersonIndex,
    #[error("{}", MESSAGE_INVALID_TRANSACTION_DISPLAYED_INDEX)]
    InvalidTransactionIndex,
    #[error("This person already exists in the address book")]
    DuplicatePerson,
    #[error("This transaction already exists in the Transaction book.")]
    DuplicateTransaction,
    #[error(transparent)]
    Store(#[from] EntryListError),
}

pub trait Command: fmt::Debug {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError>;
}
