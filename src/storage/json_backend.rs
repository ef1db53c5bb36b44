use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{
    core::{
        utils::{ensure_dir, tmp_path},
        BookData, TransactBook,
    },
    errors::Result,
};

use super::Storage;

/// Stores the whole book as one pretty-printed JSON document.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Storage for JsonStorage {
    fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Option<TransactBook>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no data file yet");
            return Ok(None);
        }
        let data = fs::read_to_string(&self.path)?;
        let snapshot: BookData = serde_json::from_str(&data)?;
        let book = TransactBook::try_from(snapshot)?;
        info!(
            path = %self.path.display(),
            persons = book.persons().len(),
            transactions = book.transactions().len(),
            "loaded data file"
        );
        Ok(Some(book))
    }

    fn save(&self, book: &TransactBook) -> Result<()> {
        let json = serde_json::to_string_pretty(&book.to_data())?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), "saved data file");
        Ok(())
    }
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TransactError;
    use crate::test_support::typical_book;

    #[test]
    fn missing_file_loads_as_none() {
        let temp = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(temp.path().join("absent.json"));
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_returns_same_book() {
        let temp = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(temp.path().join("nested").join("book.json"));
        let book = typical_book();

        storage.save(&book).unwrap();

        assert_eq!(storage.load().unwrap(), Some(book));
        assert!(!tmp_path(storage.path()).exists());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("book.json");
        fs::write(&path, "{ not json").unwrap();
        let err = JsonStorage::new(&path).load().unwrap_err();
        assert!(matches!(err, TransactError::Serde(_)));
    }

    #[test]
    fn duplicate_entries_in_file_are_rejected() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("book.json");
        let person = r#"{"name":"Alice","phone":"123","email":"a@example.com","address":"x"}"#;
        fs::write(
            &path,
            format!(r#"{{"persons":[{person},{person}],"transactions":[]}}"#),
        )
        .unwrap();
        let err = JsonStorage::new(&path).load().unwrap_err();
        assert!(matches!(err, TransactError::InvalidData(_)));
    }
}
