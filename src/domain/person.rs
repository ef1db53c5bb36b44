//! Staff records referenced by transactions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::common::*;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        let valid = !trimmed.is_empty()
            && trimmed
                .chars()
                .all(|ch| ch.is_alphanumeric() || ch == ' ');
        if valid {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(ValidationError::Name)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against raw user input.
    pub fn matches(&self, raw: &str) -> bool {
        self.0.eq_ignore_ascii_case(raw.trim())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.len() >= 3 && trimmed.chars().all(|ch| ch.is_ascii_digit()) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(ValidationError::Phone)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        let Some((local, domain)) = trimmed.split_once('@') else {
            return Err(ValidationError::Email);
        };
        let local_ok = !local.is_empty()
            && local
                .chars()
                .all(|ch| ch.is_alphanumeric() || "+_.-".contains(ch))
            && !local.starts_with(|ch: char| "+_.-".contains(ch));
        let domain_ok = !domain.is_empty()
            && domain.split('.').all(|label| {
                !label.is_empty()
                    && label.chars().all(|ch| ch.is_alphanumeric() || ch == '-')
                    && !label.starts_with('-')
                    && !label.ends_with('-')
            });
        if local_ok && domain_ok {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(ValidationError::Email)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Err(ValidationError::Address)
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! string_field {
    ($($ty:ident),*) => {
        $(
            impl TryFrom<String> for $ty {
                type Error = ValidationError;

                fn try_from(value: String) -> Result<Self, Self::Error> {
                    Self::parse(&value)
                }
            }

            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.0
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }
        )*
    };
}

string_field!(Name, Phone, Email, Address);

/// A staff member in the address book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
}

impl Person {
    pub fn new(name: Name, phone: Phone, email: Email, address: Address) -> Self {
        Self {
            name,
            phone,
            email,
            address,
        }
    }
}

/// Names match ignoring ASCII case, the same rule staff lookup uses.
impl Entry for Person {
    fn is_same_entry(&self, other: &Self) -> bool {
        self.name.matches(other.name.as_str())
    }
}

impl Displayable for Person {
    fn display_label(&self) -> String {
        format!(
            "{}; Phone: {}; Email: {}; Address: {}",
            self.name, self.phone, self.email, self.address
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(name: &str, phone: &str) -> Person {
        Person::new(
            Name::parse(name).unwrap(),
            Phone::parse(phone).unwrap(),
            Email::parse("alice@example.com").unwrap(),
            Address::parse("123 Jurong West").unwrap(),
        )
    }

    #[test]
    fn name_rejects_blank_and_symbols() {
        assert_eq!(Name::parse("   "), Err(ValidationError::Name));
        assert_eq!(Name::parse("Alice*"), Err(ValidationError::Name));
        assert_eq!(Name::parse("  Alice Pauline ").unwrap().as_str(), "Alice Pauline");
    }

    #[test]
    fn phone_requires_three_digits() {
        assert!(Phone::parse("91").is_err());
        assert!(Phone::parse("9a12").is_err());
        assert!(Phone::parse("911").is_ok());
    }

    #[test]
    fn email_validation() {
        assert!(Email::parse("alice@example.com").is_ok());
        assert!(Email::parse("a.b+c@mail-host.org").is_ok());
        assert!(Email::parse("alice").is_err());
        assert!(Email::parse("@example.com").is_err());
        assert!(Email::parse("alice@-example.com").is_err());
        assert!(Email::parse("alice@example..com").is_err());
    }

    #[test]
    fn same_entry_compares_names_only() {
        let first = person("Alice", "94351253");
        let second = person("Alice", "98765432");
        let third = person("Bob", "94351253");
        assert!(first.is_same_entry(&second));
        assert_ne!(first, second);
        assert!(!first.is_same_entry(&third));
    }

    #[test]
    fn same_entry_ignores_name_case() {
        let upper = person("Alice Pauline", "94351253");
        let lower = person("alice pauline", "11111111");
        assert!(upper.is_same_entry(&lower));
        assert!(lower.is_same_entry(&upper));
    }

    #[test]
    fn deserialization_validates_fields() {
        let json = r#"{"name":"Alice","phone":"12","email":"a@b.com","address":"x"}"#;
        assert!(serde_json::from_str::<Person>(json).is_err());
    }
}
