use thiserror::Error;

/// Supplies a presentation-ready label for UI or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Domain equality used for duplicate detection.
///
/// Weaker than `PartialEq`: generated identifiers never participate.
pub trait Entry {
    fn is_same_entry(&self, other: &Self) -> bool;
}

/// Constraint violations raised when constructing field values from raw input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Names should only contain alphanumeric characters and spaces, and it should not be blank")]
    Name,
    #[error("Phone numbers should only contain numbers, and it should be at least 3 digits long")]
    Phone,
    #[error("Emails should be of the format local-part@domain")]
    Email,
    #[error("Addresses can take any values, and it should not be blank")]
    Address,
    #[error("Type should be either E (expense) or I (income)")]
    TransactionType,
    #[error("Description should not be blank")]
    Description,
    #[error("Amount should be a positive number with at most 2 decimal places")]
    Amount,
    #[error("Dates should be of the format YYYY-MM-DD and must be a valid calendar date")]
    Date,
}
