//! User-facing message text shared across commands.

use crate::domain::{Displayable, Person, Transaction};

pub const MESSAGE_INVALID_PERSON_DISPLAYED_INDEX: &str = "The person index provided is invalid";
pub const MESSAGE_INVALID_TRANSACTION_DISPLAYED_INDEX: &str =
    "The transaction index provided is invalid";

pub fn persons_listed(count: usize) -> String {
    format!("{} persons listed!", count)
}

pub fn transactions_listed(count: usize) -> String {
    format!("{} transactions listed!", count)
}

pub fn format_person(person: &Person) -> String {
    person.display_label()
}

pub fn format_transaction(transaction: &Transaction) -> String {
    transaction.display_label()
}
