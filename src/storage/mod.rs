pub mod json_backend;

use std::path::Path;

use crate::{core::TransactBook, errors::Result};

/// Abstraction over persistence backends for the record store.
pub trait Storage {
    fn path(&self) -> &Path;
    /// Returns `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<TransactBook>>;
    fn save(&self, book: &TransactBook) -> Result<()>;
}

pub use json_backend::JsonStorage;
