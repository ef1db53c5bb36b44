pub mod common;
pub mod person;
pub mod transaction;

pub use common::{Displayable, Entry, ValidationError};
pub use person::{Address, Email, Name, Person, Phone};
pub use transaction::{Amount, Date, Description, Transaction, TransactionId, TransactionType};
