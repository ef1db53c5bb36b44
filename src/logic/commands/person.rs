//! Address book commands for staff records.

use tracing::info;

use crate::core::{show_all_persons, EntryListError, Index, Model};
use crate::domain::{Address, Email, Name, Person, Phone};
use crate::logic::messages;
use crate::logic::parser::{
    parse_index, split_keywords, tokenize, ParseError, PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_NAME,
    PREFIX_PHONE,
};

use super::{Command, CommandError, CommandResult, TabWindow};

pub const ADD_USAGE: &str = "add: Adds a staff member to the address book.\n\
Parameters: n/NAME p/PHONE e/EMAIL ad/ADDRESS\n\
Example: add n/John Doe p/98765432 e/johnd@example.com ad/311, Clementi Ave 2, #02-25";

pub const DELETE_USAGE: &str = "delete: Deletes the person identified by the index number used \
in the displayed person list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: delete 1";

pub const FIND_USAGE: &str = "find: Finds all persons whose names contain any of the specified \
keywords (case-insensitive).\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find alice bob charlie";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddPersonCommand {
    person: Person,
}

impl AddPersonCommand {
    pub fn new(person: Person) -> Self {
        Self { person }
    }
}

impl Command for AddPersonCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        if model.has_person(&self.person) {
            return Err(CommandError::DuplicatePerson);
        }
        model
            .add_person(self.person.clone())
            .map_err(EntryListError::from)?;
        info!(name = %self.person.name, "added person");
        Ok(CommandResult::with_view(
            format!(
                "New person added: {}",
                messages::format_person(&self.person)
            ),
            TabWindow::AddressBook,
        ))
    }
}

pub fn parse_add(args: &str, _model: &dyn Model) -> Result<Box<dyn Command>, ParseError> {
    let prefixes = [PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS];
    let map = tokenize(args, &prefixes);
    let all_present = prefixes.iter().all(|prefix| map.contains(*prefix));
    if !all_present || !map.preamble().is_empty() {
        return Err(ParseError::InvalidFormat(ADD_USAGE));
    }
    map.verify_no_duplicate_prefixes(&prefixes)?;

    let required = |prefix| map.value(prefix).unwrap_or_default();
    let person = Person::new(
        Name::parse(required(PREFIX_NAME))?,
        Phone::parse(required(PREFIX_PHONE))?,
        Email::parse(required(PREFIX_EMAIL))?,
        Address::parse(required(PREFIX_ADDRESS))?,
    );
    Ok(Box::new(AddPersonCommand::new(person)))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePersonCommand {
    index: Index,
}

impl DeletePersonCommand {
    pub fn new(index: Index) -> Self {
        Self { index }
    }
}

impl Command for DeletePersonCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let target = model
            .filtered_person_list()
            .get(self.index.zero_based())
            .map(|person| (*person).clone())
            .ok_or(CommandError::InvalidPersonIndex)?;
        model.delete_person(&target).map_err(EntryListError::from)?;
        info!(name = %target.name, "deleted person");
        Ok(CommandResult::with_view(
            format!("Deleted Person: {}", messages::format_person(&target)),
            TabWindow::AddressBook,
        ))
    }
}

pub fn parse_delete(args: &str, _model: &dyn Model) -> Result<Box<dyn Command>, ParseError> {
    let index = parse_index(args).map_err(|_| ParseError::InvalidFormat(DELETE_USAGE))?;
    Ok(Box::new(DeletePersonCommand::new(index)))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPersonsCommand;

impl Command for ListPersonsCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_person_list(show_all_persons());
        Ok(CommandResult::with_view(
            "Listed all persons",
            TabWindow::AddressBook,
        ))
    }
}

pub fn parse_list(_args: &str, _model: &dyn Model) -> Result<Box<dyn Command>, ParseError> {
    Ok(Box::new(ListPersonsCommand))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindPersonsCommand {
    keywords: Vec<String>,
}

impl FindPersonsCommand {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }
}

impl Command for FindPersonsCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let keywords: Vec<String> = self.keywords.iter().map(|k| k.to_lowercase()).collect();
        model.update_filtered_person_list(Box::new(move |person: &Person| {
            person
                .name
                .as_str()
                .split_whitespace()
                .any(|word| keywords.iter().any(|keyword| word.to_lowercase() == *keyword))
        }));
        let count = model.filtered_person_list().len();
        Ok(CommandResult::with_view(
            messages::persons_listed(count),
            TabWindow::AddressBook,
        ))
    }
}

pub fn parse_find(args: &str, _model: &dyn Model) -> Result<Box<dyn Command>, ParseError> {
    let keywords = split_keywords(args)?;
    if keywords.is_empty() {
        return Err(ParseError::InvalidFormat(FIND_USAGE));
    }
    Ok(Box::new(FindPersonsCommand::new(keywords)))
}
