//! Transactions recorded against staff members.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;
use crate::domain::person::Person;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Generated identifier; never carried across edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(Uuid);

impl TransactionId {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    Expense,
    Income,
}

impl TransactionType {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "e" | "expense" => Ok(TransactionType::Expense),
            "i" | "income" => Ok(TransactionType::Income),
            _ => Err(ValidationError::TransactionType),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionType::Expense => "Expense",
            TransactionType::Income => "Income",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Description(String);

impl Description {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Err(ValidationError::Description)
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Description {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Description> for String {
    fn from(value: Description) -> Self {
        value.0
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Positive monetary value with at most two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Amount(f64);

impl Amount {
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        let scaled = value * 100.0;
        if value.is_finite() && value > 0.0 && (scaled - scaled.round()).abs() < 1e-6 {
            Ok(Self(value))
        } else {
            Err(ValidationError::Amount)
        }
    }

    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));
        let shape_ok = !whole.is_empty()
            && whole.chars().all(|ch| ch.is_ascii_digit())
            && fraction.len() <= 2
            && fraction.chars().all(|ch| ch.is_ascii_digit())
            && !(trimmed.ends_with('.'));
        if !shape_ok {
            return Err(ValidationError::Amount);
        }
        let value: f64 = trimmed.parse().map_err(|_| ValidationError::Amount)?;
        Self::new(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Amount {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for f64 {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::Date)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

/// An immutable transaction value. Edits build a new value with a fresh id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub kind: TransactionType,
    pub description: Description,
    pub amount: Amount,
    pub date: Date,
    pub staff: Person,
}

impl Transaction {
    pub fn new(
        id: TransactionId,
        kind: TransactionType,
        description: Description,
        amount: Amount,
        date: Date,
        staff: Person,
    ) -> Self {
        Self {
            id,
            kind,
            description,
            amount,
            date,
            staff,
        }
    }
}

impl Entry for Transaction {
    fn is_same_entry(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.description == other.description
            && self.amount == other.amount
            && self.date == other.date
            && self.staff.is_same_entry(&other.staff)
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!(
            "{}; Description: {}; Amount: {}; Date: {}; Staff: {}",
            self.kind, self.description, self.amount, self.date, self.staff.name
        )
    }
}
