use thiserror::Error;

/// Signals that an operation would leave two entries that are the same entry
/// (persons or transactions) in one list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Operation would result in duplicate entries")]
pub struct DuplicateEntryError;

/// Signals that the entry targeted by a replace or remove is not in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Entry does not exist in the list")]
pub struct EntryNotFoundError;

/// Failures raised by entry-collection mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EntryListError {
    #[error(transparent)]
    Duplicate(#[from] DuplicateEntryError),
    #[error(transparent)]
    NotFound(#[from] EntryNotFoundError),
}
