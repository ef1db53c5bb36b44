//! Fixtures shared by unit tests.

use crate::core::{ModelManager, TransactBook};
use crate::domain::{
    Address, Amount, Date, Description, Email, Name, Person, Phone, Transaction, TransactionId,
    TransactionType,
};

pub fn person(name: &str, phone: &str, email: &str, address: &str) -> Person {
    Person::new(
        Name::parse(name).unwrap(),
        Phone::parse(phone).unwrap(),
        Email::parse(email).unwrap(),
        Address::parse(address).unwrap(),
    )
}

pub fn alice() -> Person {
    person(
        "Alice Pauline",
        "94351253",
        "alice@example.com",
        "123, Jurong West Ave 6, #08-111",
    )
}

pub fn bob() -> Person {
    person("Bob Choo", "22222222", "bob@example.com", "Block 123, Bobby Street 3")
}

pub fn transaction(description: &str, amount: &str, staff: Person) -> Transaction {
    Transaction::new(
        TransactionId::new(),
        TransactionType::Expense,
        Description::parse(description).unwrap(),
        Amount::parse(amount).unwrap(),
        Date::parse("2024-03-01").unwrap(),
        staff,
    )
}

pub fn typical_book() -> TransactBook {
    TransactBook::from_parts(
        vec![alice(), bob()],
        vec![
            transaction("Team lunch", "100", alice()),
            transaction("Office chairs", "450.90", bob()),
            transaction("Taxi to client", "23.40", alice()),
        ],
    )
    .unwrap()
}

pub fn typical_model() -> ModelManager {
    ModelManager::new(typical_book())
}
