use thiserror::Error;
use tracing::{debug, info};

use crate::core::{Model, ModelManager};
use crate::errors::TransactError;
use crate::logic::commands::{CommandError, CommandResult};
use crate::logic::parser::ParseError;
use crate::logic::registry::CommandRegistry;
use crate::storage::Storage;

#[derive(Debug, Error)]
pub enum LogicError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error("Could not save data file: {0}")]
    Storage(#[from] TransactError),
}

/// Runs one line of user input against the model and persists the result.
pub struct LogicManager {
    model: ModelManager,
    storage: Box<dyn Storage>,
    registry: CommandRegistry,
}

impl LogicManager {
    pub fn new(model: ModelManager, storage: Box<dyn Storage>) -> Self {
        Self {
            model,
            storage,
            registry: CommandRegistry::default(),
        }
    }

    pub fn execute(&mut self, input: &str) -> Result<CommandResult, LogicError> {
        debug!(input, "parsing command");
        let command = self.registry.parse(input, &self.model)?;
        info!(?command, "executing command");
        let result = command.execute(&mut self.model)?;
        self.storage.save(self.model.book())?;
        Ok(result)
    }

    pub fn model(&self) -> &dyn Model {
        &self.model
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::JsonStorage;
    use crate::test_support::typical_book;

    fn manager(dir: &tempfile::TempDir) -> LogicManager {
        let storage = JsonStorage::new(dir.path().join("book.json"));
        LogicManager::new(ModelManager::new(typical_book()), Box::new(storage))
    }

    #[test]
    fn successful_command_is_persisted() {
        let temp = tempfile::tempdir().unwrap();
        let mut logic = manager(&temp);

        let result = logic.execute("edittransaction 1 a/200").unwrap();

        assert!(result.feedback.starts_with("Edited Transaction: "));
        let saved = logic.storage().load().unwrap().unwrap();
        assert_eq!(saved.transactions()[0].amount.value(), 200.0);
    }

    #[test]
    fn failures_leave_storage_untouched() {
        let temp = tempfile::tempdir().unwrap();
        let mut logic = manager(&temp);

        let err = logic.execute("edittransaction 9 a/200").unwrap_err();

        assert!(matches!(
            err,
            LogicError::Command(CommandError::InvalidTransactionIndex)
        ));
        assert!(logic.storage().load().unwrap().is_none());
    }

    #[test]
    fn parse_errors_surface_usage() {
        let temp = tempfile::tempdir().unwrap();
        let mut logic = manager(&temp);
        let err = logic.execute("edittransaction 1").unwrap_err();
        assert_eq!(err.to_string(), "At least one field to edit must be provided.");
    }
}
