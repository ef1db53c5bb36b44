//! In-memory model: the record store plus the filtered views shown to the user.

use tracing::debug;

use crate::core::book::TransactBook;
use crate::core::errors::{DuplicateEntryError, EntryListError, EntryNotFoundError};
use crate::domain::{Person, Transaction};

/// Filter applied to a displayed list.
pub type Predicate<T> = Box<dyn Fn(&T) -> bool>;

pub fn show_all_persons() -> Predicate<Person> {
    Box::new(|_| true)
}

pub fn show_all_transactions() -> Predicate<Transaction> {
    Box::new(|_| true)
}

/// Operations the command layer relies on.
pub trait Model {
    fn book(&self) -> &TransactBook;
    fn set_book(&mut self, book: TransactBook);

    fn has_person(&self, person: &Person) -> bool;
    fn add_person(&mut self, person: Person) -> Result<(), DuplicateEntryError>;
    fn delete_person(&mut self, target: &Person) -> Result<(), EntryNotFoundError>;

    fn has_transaction(&self, transaction: &Transaction) -> bool;
    fn add_transaction(&mut self, transaction: Transaction) -> Result<(), DuplicateEntryError>;
    fn delete_transaction(&mut self, target: &Transaction) -> Result<(), EntryNotFoundError>;
    /// Replaces `target` with `edited`. `target` must exist in the book.
    fn set_transaction(
        &mut self,
        target: &Transaction,
        edited: Transaction,
    ) -> Result<(), EntryListError>;

    fn filtered_person_list(&self) -> Vec<&Person>;
    fn update_filtered_person_list(&mut self, predicate: Predicate<Person>);

    fn filtered_transaction_list(&self) -> Vec<&Transaction>;
    fn update_filtered_transaction_list(&mut self, predicate: Predicate<Transaction>);
}

pub struct ModelManager {
    book: TransactBook,
    person_filter: Predicate<Person>,
    transaction_filter: Predicate<Transaction>,
}

impl Default for ModelManager {
    fn default() -> Self {
        Self::new(TransactBook::new())
    }
}

impl ModelManager {
    pub fn new(book: TransactBook) -> Self {
        debug!(
            persons = book.persons().len(),
            transactions = book.transactions().len(),
            "initialising model"
        );
        Self {
            book,
            person_filter: show_all_persons(),
            transaction_filter: show_all_transactions(),
        }
    }
}

impl Model for ModelManager {
    fn book(&self) -> &TransactBook {
        &self.book
    }

    fn set_book(&mut self, book: TransactBook) {
        self.book = book;
    }

    fn has_person(&self, person: &Person) -> bool {
        self.book.has_person(person)
    }

    fn add_person(&mut self, person: Person) -> Result<(), DuplicateEntryError> {
        self.book.add_person(person)?;
        self.update_filtered_person_list(show_all_persons());
        Ok(())
    }

    fn delete_person(&mut self, target: &Person) -> Result<(), EntryNotFoundError> {
        self.book.remove_person(target).map(|_| ())
    }

    fn has_transaction(&self, transaction: &Transaction) -> bool {
        self.book.has_transaction(transaction)
    }

    fn add_transaction(&mut self, transaction: Transaction) -> Result<(), DuplicateEntryError> {
        self.book.add_transaction(transaction)?;
        self.update_filtered_transaction_list(show_all_transactions());
        Ok(())
    }

    fn delete_transaction(&mut self, target: &Transaction) -> Result<(), EntryNotFoundError> {
        self.book.remove_transaction(target).map(|_| ())
    }

    fn set_transaction(
        &mut self,
        target: &Transaction,
        edited: Transaction,
    ) -> Result<(), EntryListError> {
        self.book.set_transaction(target, edited)
    }

    fn filtered_person_list(&self) -> Vec<&Person> {
        self.book
            .persons()
            .iter()
            .filter(|person| (self.person_filter)(person))
            .collect()
    }

    fn update_filtered_person_list(&mut self, predicate: Predicate<Person>) {
        self.person_filter = predicate;
    }

    fn filtered_transaction_list(&self) -> Vec<&Transaction> {
        self.book
            .transactions()
            .iter()
            .filter(|transaction| (self.transaction_filter)(transaction))
            .collect()
    }

    fn update_filtered_transaction_list(&mut self, predicate: Predicate<Transaction>) {
        self.transaction_filter = predicate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Address, Email, Name, Phone};

    fn person(name: &str) -> Person {
        Person::new(
            Name::parse(name).unwrap(),
            Phone::parse("8888").unwrap(),
            Email::parse("p@example.com").unwrap(),
            Address::parse("Somewhere").unwrap(),
        )
    }

    #[test]
    fn filter_narrows_view_without_touching_book() {
        let mut model = ModelManager::default();
        model.add_person(person("Alice")).unwrap();
        model.add_person(person("Bob")).unwrap();

        model.update_filtered_person_list(Box::new(|p: &Person| p.name.as_str() == "Bob"));

        assert_eq!(model.filtered_person_list().len(), 1);
        assert_eq!(model.book().persons().len(), 2);
    }

    #[test]
    fn adding_resets_filter() {
        let mut model = ModelManager::default();
        model.add_person(person("Alice")).unwrap();
        model.update_filtered_person_list(Box::new(|_| false));
        assert!(model.filtered_person_list().is_empty());

        model.add_person(person("Bob")).unwrap();
        assert_eq!(model.filtered_person_list().len(), 2);
    }
}
