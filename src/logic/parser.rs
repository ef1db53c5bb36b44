//! Prefix-based argument parsing shared by every command.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::core::Index;
use crate::domain::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(token: &'static str) -> Self {
        Self(token)
    }

    pub fn token(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("ad/");
pub const PREFIX_TYPE: Prefix = Prefix::new("ty/");
pub const PREFIX_DESCRIPTION: Prefix = Prefix::new("d/");
pub const PREFIX_AMOUNT: Prefix = Prefix::new("a/");
pub const PREFIX_DATE: Prefix = Prefix::new("dt/");
pub const PREFIX_STAFF: Prefix = Prefix::new("s/");

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid command format!\n{0}")]
    InvalidFormat(&'static str),
    #[error("Index is not a non-zero unsigned integer.")]
    InvalidIndex,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Multiple values specified for the following single-valued field(s): {0}")]
    DuplicatePrefixes(String),
    #[error("At least one field to edit must be provided.")]
    NotEdited,
    #[error("No staff member named `{0}` exists in the address book")]
    UnknownStaff(String),
    #[error("{0}")]
    UnknownCommand(String),
    #[error("Could not split input: {0}")]
    Syntax(String),
}

/// Arguments split by prefix, in order of appearance.
#[derive(Debug, Default, Clone)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    pub fn verify_no_duplicate_prefixes(&self, prefixes: &[Prefix]) -> Result<(), ParseError> {
        let duplicated: Vec<&str> = prefixes
            .iter()
            .filter(|prefix| self.all_values(**prefix).len() > 1)
            .map(|prefix| prefix.token())
            .collect();
        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::DuplicatePrefixes(duplicated.join(" ")))
        }
    }
}

/// Splits `args` on the given prefixes. A prefix only counts when preceded by whitespace.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let padded = format!(" {}", args);
    let mut positions: Vec<(usize, Prefix)> = Vec::new();
    for prefix in prefixes {
        let needle = format!(" {}", prefix.token());
        let mut from = 0;
        while let Some(found) = padded[from..].find(&needle) {
            let start = from + found;
            positions.push((start, *prefix));
            from = start + needle.len();
        }
    }
    positions.sort_by_key(|(start, _)| *start);

    let mut multimap = ArgumentMultimap::default();
    let preamble_end = positions.first().map(|(start, _)| *start).unwrap_or(padded.len());
    multimap.preamble = padded[..preamble_end].trim().to_string();

    for (idx, (start, prefix)) in positions.iter().enumerate() {
        let value_start = start + 1 + prefix.token().len();
        let value_end = positions
            .get(idx + 1)
            .map(|(next, _)| *next)
            .unwrap_or(padded.len());
        let value = padded[value_start..value_end].trim().to_string();
        multimap.values.entry(*prefix).or_default().push(value);
    }
    multimap
}

pub fn parse_index(raw: &str) -> Result<Index, ParseError> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or(ParseError::InvalidIndex)
}

/// Splits free text into keywords, honouring quotes.
pub fn split_keywords(raw: &str) -> Result<Vec<String>, ParseError> {
    shell_words::split(raw).map_err(|err| ParseError::Syntax(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_splits_preamble_and_values() {
        let map = tokenize(
            "1 ty/E d/Lunch with client a/12.50",
            &[PREFIX_TYPE, PREFIX_DESCRIPTION, PREFIX_AMOUNT, PREFIX_DATE],
        );
        assert_eq!(map.preamble(), "1");
        assert_eq!(map.value(PREFIX_TYPE), Some("E"));
        assert_eq!(map.value(PREFIX_DESCRIPTION), Some("Lunch with client"));
        assert_eq!(map.value(PREFIX_AMOUNT), Some("12.50"));
        assert_eq!(map.value(PREFIX_DATE), None);
    }

    #[test]
    fn prefix_inside_a_word_is_not_a_prefix() {
        let map = tokenize(
            " d/pad/thai dt/2024-01-01",
            &[PREFIX_DESCRIPTION, PREFIX_DATE, PREFIX_ADDRESS],
        );
        assert_eq!(map.value(PREFIX_DESCRIPTION), Some("pad/thai"));
        assert_eq!(map.value(PREFIX_DATE), Some("2024-01-01"));
        assert!(!map.contains(PREFIX_ADDRESS));
    }

    #[test]
    fn repeated_prefix_is_reported() {
        let map = tokenize("1 a/5 a/6", &[PREFIX_AMOUNT]);
        assert_eq!(map.value(PREFIX_AMOUNT), Some("6"));
        assert_eq!(
            map.verify_no_duplicate_prefixes(&[PREFIX_AMOUNT]),
            Err(ParseError::DuplicatePrefixes("a/".into()))
        );
    }

    #[test]
    fn index_must_be_positive() {
        assert_eq!(parse_index(" 2 ").unwrap().zero_based(), 1);
        assert_eq!(parse_index("0"), Err(ParseError::InvalidIndex));
        assert_eq!(parse_index("-1"), Err(ParseError::InvalidIndex));
        assert_eq!(parse_index("one"), Err(ParseError::InvalidIndex));
    }

    #[test]
    fn keywords_respect_quotes() {
        assert_eq!(
            split_keywords(r#"alice "bob lee""#).unwrap(),
            vec!["alice".to_string(), "bob lee".to_string()]
        );
        assert!(split_keywords(r#""unterminated"#).is_err());
    }
}
