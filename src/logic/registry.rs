use std::collections::HashMap;

use strsim::levenshtein;

use crate::core::Model;
use crate::logic::commands::{edit_transaction, person, system, transaction, Command};
use crate::logic::parser::ParseError;

pub type CommandParser = fn(&str, &dyn Model) -> Result<Box<dyn Command>, ParseError>;

pub struct CommandEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub parser: CommandParser,
}

impl CommandEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        parser: CommandParser,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            parser,
        }
    }
}

pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandEntry>,
    order: Vec<&'static str>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        for entry in definitions() {
            registry.register(entry);
        }
        registry
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            order: Vec::new(),
        }
    }

    pub fn register(&mut self, entry: CommandEntry) {
        let name = entry.name;
        if self.commands.insert(name, entry).is_none() {
            self.order.push(name);
        }
    }

    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.commands.get(name)
    }

    pub fn list(&self) -> Vec<&CommandEntry> {
        self.order
            .iter()
            .filter_map(|name| self.commands.get(name))
            .collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }

    /// Splits off the command word and hands the rest to that command's parser.
    pub fn parse(&self, input: &str, model: &dyn Model) -> Result<Box<dyn Command>, ParseError> {
        let trimmed = input.trim();
        let (word, args) = trimmed
            .split_once(char::is_whitespace)
            .unwrap_or((trimmed, ""));
        let word = word.to_ascii_lowercase();
        match self.get(&word) {
            Some(entry) => (entry.parser)(args, model),
            None => Err(ParseError::UnknownCommand(self.unknown_message(&word))),
        }
    }

    fn unknown_message(&self, word: &str) -> String {
        let mut message = format!("Unknown command `{}`.", word);
        let best = self
            .names()
            .map(|name| (levenshtein(name, word), name))
            .min_by_key(|(distance, _)| *distance);
        if let Some((distance, name)) = best {
            if distance <= 3 {
                message.push_str(&format!(" Did you mean `{}`?", name));
            }
        }
        message.push_str(" Type `help` to see available commands.");
        message
    }
}

fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add",
            "Add a staff member",
            person::ADD_USAGE,
            person::parse_add,
        ),
        CommandEntry::new(
            "delete",
            "Delete a staff member",
            person::DELETE_USAGE,
            person::parse_delete,
        ),
        CommandEntry::new(
            "list",
            "Show every staff member",
            "list",
            person::parse_list,
        ),
        CommandEntry::new(
            "find",
            "Find staff members by name",
            person::FIND_USAGE,
            person::parse_find,
        ),
        CommandEntry::new(
            "addtransaction",
            "Record a transaction",
            transaction::ADD_USAGE,
            transaction::parse_add,
        ),
        CommandEntry::new(
            edit_transaction::COMMAND_WORD,
            "Edit a displayed transaction",
            edit_transaction::MESSAGE_USAGE,
            edit_transaction::parse,
        ),
        CommandEntry::new(
            "deletetransaction",
            "Delete a displayed transaction",
            transaction::DELETE_USAGE,
            transaction::parse_delete,
        ),
        CommandEntry::new(
            "listtransactions",
            "Show every transaction",
            "listtransactions",
            transaction::parse_list,
        ),
        CommandEntry::new(
            "findtransaction",
            "Find transactions by description",
            transaction::FIND_USAGE,
            transaction::parse_find,
        ),
        CommandEntry::new("clear", "Remove all records", "clear", system::parse_clear),
        CommandEntry::new("help", "Show command usage", "help", system::parse_help),
        CommandEntry::new(
            "version",
            "Show build information",
            "version",
            system::parse_version,
        ),
        CommandEntry::new("exit", "Leave the shell", "exit", system::parse_exit),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::typical_model;

    #[test]
    fn default_registry_keeps_declaration_order() {
        let registry = CommandRegistry::default();
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names.first(), Some(&"add"));
        assert_eq!(names.last(), Some(&"exit"));
        assert!(names.contains(&"edittransaction"));
    }

    #[test]
    fn command_word_is_case_insensitive() {
        let registry = CommandRegistry::default();
        let model = typical_model();
        assert!(registry.parse("EditTransaction 1 a/5", &model).is_ok());
    }

    #[test]
    fn unknown_command_suggests_closest() {
        let registry = CommandRegistry::default();
        let model = typical_model();
        let err = registry.parse("edittransactoin 1 a/5", &model).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Unknown command `edittransactoin`"));
        assert!(message.contains("Did you mean `edittransaction`?"));

        let err = registry.parse("zzzzzzzzzzzz", &model).unwrap_err();
        assert!(!err.to_string().contains("Did you mean"));
    }
}
