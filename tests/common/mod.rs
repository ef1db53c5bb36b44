#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use once_cell::sync::Lazy;
use tempfile::TempDir;
use transact::{
    core::{ModelManager, TransactBook},
    domain::{
        Address, Amount, Date, Description, Email, Name, Person, Phone, Transaction,
        TransactionId, TransactionType,
    },
    logic::LogicManager,
    storage::JsonStorage,
};

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a unique directory that outlives the calling test.
pub fn test_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

pub fn person(name: &str) -> Person {
    let local = name.to_ascii_lowercase().replace(' ', ".");
    Person::new(
        Name::parse(name).expect("valid name"),
        Phone::parse("98765432").expect("valid phone"),
        Email::parse(&format!("{local}@example.com")).expect("valid email"),
        Address::parse("1 Example Road").expect("valid address"),
    )
}

pub fn transaction(
    kind: TransactionType,
    description: &str,
    amount: &str,
    date: &str,
    staff: Person,
) -> Transaction {
    Transaction::new(
        TransactionId::new(),
        kind,
        Description::parse(description).expect("valid description"),
        Amount::parse(amount).expect("valid amount"),
        Date::parse(date).expect("valid date"),
        staff,
    )
}

pub fn expense(description: &str, amount: &str, staff: Person) -> Transaction {
    transaction(
        TransactionType::Expense,
        description,
        amount,
        "2024-03-01",
        staff,
    )
}

pub fn book(persons: Vec<Person>, transactions: Vec<Transaction>) -> TransactBook {
    TransactBook::from_parts(persons, transactions).expect("book without duplicates")
}

/// Logic manager over `book`, persisting into an isolated directory.
pub fn setup_logic(book: TransactBook) -> (LogicManager, PathBuf) {
    let path = test_dir().join("data").join("transact.json");
    let storage = JsonStorage::new(&path);
    (
        LogicManager::new(ModelManager::new(book), Box::new(storage)),
        path,
    )
}
