//! The record store: persons and transactions, each free of duplicate entries.

use serde::{Deserialize, Serialize};

use crate::core::errors::{DuplicateEntryError, EntryListError, EntryNotFoundError};
use crate::core::unique_entry_list::UniqueEntryList;
use crate::domain::{Person, Transaction};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactBook {
    persons: UniqueEntryList<Person>,
    transactions: UniqueEntryList<Transaction>,
}

/// Serializable snapshot of a book. Uniqueness is re-checked when converting back.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookData {
    #[serde(default)]
    pub persons: Vec<Person>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl TransactBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(
        persons: Vec<Person>,
        transactions: Vec<Transaction>,
    ) -> Result<Self, DuplicateEntryError> {
        let mut book = Self::new();
        book.persons.set_all(persons)?;
        book.transactions.set_all(transactions)?;
        Ok(book)
    }

    pub fn clear(&mut self) {
        self.persons.clear();
        self.transactions.clear();
    }

    pub fn persons(&self) -> &[Person] {
        self.persons.as_slice()
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.transactions.as_slice()
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.contains(person)
    }

    pub fn add_person(&mut self, person: Person) -> Result<(), DuplicateEntryError> {
        self.persons.add(person)
    }

    pub fn remove_person(&mut self, target: &Person) -> Result<Person, EntryNotFoundError> {
        self.persons.remove(target)
    }

    pub fn find_person_by_name(&self, name: &str) -> Option<&Person> {
        self.persons.iter().find(|person| person.name.matches(name))
    }

    pub fn has_transaction(&self, transaction: &Transaction) -> bool {
        self.transactions.contains(transaction)
    }

    pub fn add_transaction(&mut self, transaction: Transaction) -> Result<(), DuplicateEntryError> {
        self.transactions.add(transaction)
    }

    pub fn set_transaction(
        &mut self,
        target: &Transaction,
        edited: Transaction,
    ) -> Result<(), EntryListError> {
        self.transactions.set(target, edited)
    }

    pub fn remove_transaction(
        &mut self,
        target: &Transaction,
    ) -> Result<Transaction, EntryNotFoundError> {
        self.transactions.remove(target)
    }

    pub fn to_data(&self) -> BookData {
        BookData {
            persons: self.persons.as_slice().to_vec(),
            transactions: self.transactions.as_slice().to_vec(),
        }
    }
}

impl TryFrom<BookData> for TransactBook {
    type Error = DuplicateEntryError;

    fn try_from(data: BookData) -> Result<Self, Self::Error> {
        Self::from_parts(data.persons, data.transactions)
    }
}
