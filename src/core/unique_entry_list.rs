//! Ordered collection that refuses two entries considered the same entry.

use crate::core::errors::{DuplicateEntryError, EntryListError, EntryNotFoundError};
use crate::domain::Entry;

#[derive(Debug, Clone, PartialEq)]
pub struct UniqueEntryList<T> {
    items: Vec<T>,
}

impl<T> Default for UniqueEntryList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entry + PartialEq> UniqueEntryList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if an entry that is the same entry as `candidate` is present.
    pub fn contains(&self, candidate: &T) -> bool {
        self.items.iter().any(|item| item.is_same_entry(candidate))
    }

    pub fn add(&mut self, entry: T) -> Result<(), DuplicateEntryError> {
        if self.contains(&entry) {
            return Err(DuplicateEntryError);
        }
        self.items.push(entry);
        Ok(())
    }

    /// Replaces `target` with `edited` in place.
    ///
    /// `edited` may be the same entry as `target`; it must not collide with any other element.
    pub fn set(&mut self, target: &T, edited: T) -> Result<(), EntryListError> {
        let position = self
            .items
            .iter()
            .position(|item| item == target)
            .ok_or(EntryNotFoundError)?;
        let collides = self
            .items
            .iter()
            .enumerate()
            .any(|(idx, item)| idx != position && item.is_same_entry(&edited));
        if collides {
            return Err(DuplicateEntryError.into());
        }
        self.items[position] = edited;
        Ok(())
    }

    pub fn remove(&mut self, target: &T) -> Result<T, EntryNotFoundError> {
        let position = self
            .items
            .iter()
            .position(|item| item == target)
            .ok_or(EntryNotFoundError)?;
        Ok(self.items.remove(position))
    }

    /// Replaces the whole contents; rejects inputs that contain duplicates.
    pub fn set_all(&mut self, entries: Vec<T>) -> Result<(), DuplicateEntryError> {
        let unique = entries.iter().enumerate().all(|(idx, entry)| {
            entries[idx + 1..]
                .iter()
                .all(|later| !entry.is_same_entry(later))
        });
        if !unique {
            return Err(DuplicateEntryError);
        }
        self.items = entries;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, T> IntoIterator for &'a UniqueEntryList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Tagged {
        key: &'static str,
        serial: u32,
    }

    impl Entry for Tagged {
        fn is_same_entry(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    fn tagged(key: &'static str, serial: u32) -> Tagged {
        Tagged { key, serial }
    }

    #[test]
    fn add_rejects_same_entry() {
        let mut list = UniqueEntryList::new();
        list.add(tagged("a", 1)).unwrap();
        assert_eq!(list.add(tagged("a", 2)), Err(DuplicateEntryError));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn set_replaces_in_place() {
        let mut list = UniqueEntryList::new();
        list.add(tagged("a", 1)).unwrap();
        list.add(tagged("b", 1)).unwrap();
        list.add(tagged("c", 1)).unwrap();

        list.set(&tagged("b", 1), tagged("x", 9)).unwrap();

        let keys: Vec<_> = list.iter().map(|item| item.key).collect();
        assert_eq!(keys, vec!["a", "x", "c"]);
    }

    #[test]
    fn set_allows_same_entry_as_target() {
        let mut list = UniqueEntryList::new();
        list.add(tagged("a", 1)).unwrap();
        list.set(&tagged("a", 1), tagged("a", 2)).unwrap();
        assert_eq!(list.as_slice(), &[tagged("a", 2)]);
    }

    #[test]
    fn set_rejects_collision_with_other_entry() {
        let mut list = UniqueEntryList::new();
        list.add(tagged("a", 1)).unwrap();
        list.add(tagged("b", 1)).unwrap();
        let err = list.set(&tagged("a", 1), tagged("b", 7)).unwrap_err();
        assert_eq!(err, EntryListError::Duplicate(DuplicateEntryError));
        assert_eq!(list.as_slice(), &[tagged("a", 1), tagged("b", 1)]);
    }

    #[test]
    fn set_and_remove_report_missing_target() {
        let mut list: UniqueEntryList<Tagged> = UniqueEntryList::new();
        assert_eq!(
            list.set(&tagged("a", 1), tagged("b", 1)),
            Err(EntryListError::NotFound(EntryNotFoundError))
        );
        assert_eq!(list.remove(&tagged("a", 1)), Err(EntryNotFoundError));
    }

    #[test]
    fn set_all_rejects_duplicates() {
        let mut list = UniqueEntryList::new();
        list.add(tagged("z", 1)).unwrap();
        assert!(list.set_all(vec![tagged("a", 1), tagged("a", 2)]).is_err());
        assert_eq!(list.len(), 1);
        list.set_all(vec![tagged("a", 1), tagged("b", 2)]).unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn duplicate_error_message() {
        assert_eq!(
            DuplicateEntryError.to_string(),
            "Operation would result in duplicate entries"
        );
    }
}
