pub mod book;
pub mod errors;
pub mod index;
pub mod model;
pub mod unique_entry_list;
pub mod utils;

pub use book::{BookData, TransactBook};
pub use errors::{DuplicateEntryError, EntryListError, EntryNotFoundError};
pub use index::Index;
pub use model::{show_all_persons, show_all_transactions, Model, ModelManager, Predicate};
pub use unique_entry_list::UniqueEntryList;
