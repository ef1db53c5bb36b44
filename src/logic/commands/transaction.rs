//! Add, delete, list and search transactions.

use tracing::info;

use crate::core::{show_all_transactions, EntryListError, Index, Model};
use crate::domain::{Amount, Date, Description, Transaction, TransactionId, TransactionType};
use crate::logic::messages;
use crate::logic::parser::{
    parse_index, split_keywords, tokenize, ParseError, PREFIX_AMOUNT, PREFIX_DATE,
    PREFIX_DESCRIPTION, PREFIX_STAFF, PREFIX_TYPE,
};

use super::{Command, CommandError, CommandResult, TabWindow};

pub const ADD_USAGE: &str = "addtransaction: Adds a transaction handled by a staff member.\n\
Parameters: ty/TYPE d/DESCRIPTION a/AMOUNT dt/DATE s/STAFF\n\
Example: addtransaction ty/E d/Printer toner a/89.90 dt/2024-03-01 s/Alice Pauline";

pub const DELETE_USAGE: &str = "deletetransaction: Deletes the transaction identified by the \
index number used in the displayed transactions list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: deletetransaction 1";

pub const FIND_USAGE: &str = "findtransaction: Finds transactions whose descriptions contain \
any of the given keywords (case-insensitive).\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: findtransaction lunch taxi";

#[derive(Debug, Clone, PartialEq)]
pub struct AddTransactionCommand {
    transaction: Transaction,
}

impl AddTransactionCommand {
    pub fn new(transaction: Transaction) -> Self {
        Self { transaction }
    }
}

impl Command for AddTransactionCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        if model.has_transaction(&self.transaction) {
            return Err(CommandError::DuplicateTransaction);
        }
        model
            .add_transaction(self.transaction.clone())
            .map_err(EntryListError::from)?;
        info!(id = %self.transaction.id, "added transaction");
        Ok(CommandResult::with_view(
            format!(
                "New transaction added: {}",
                messages::format_transaction(&self.transaction)
            ),
            TabWindow::Transactions,
        ))
    }
}

pub fn parse_add(args: &str, model: &dyn Model) -> Result<Box<dyn Command>, ParseError> {
    let prefixes = [
        PREFIX_TYPE,
        PREFIX_DESCRIPTION,
        PREFIX_AMOUNT,
        PREFIX_DATE,
        PREFIX_STAFF,
    ];
    let map = tokenize(args, &prefixes);
    let all_present = prefixes.iter().all(|prefix| map.contains(*prefix));
    if !all_present || !map.preamble().is_empty() {
        return Err(ParseError::InvalidFormat(ADD_USAGE));
    }
    map.verify_no_duplicate_prefixes(&prefixes)?;

    let required = |prefix| map.value(prefix).unwrap_or_default();
    let staff_name = required(PREFIX_STAFF);
    let staff = model
        .book()
        .find_person_by_name(staff_name)
        .cloned()
        .ok_or_else(|| ParseError::UnknownStaff(staff_name.trim().to_string()))?;
    let transaction = Transaction::new(
        TransactionId::new(),
        TransactionType::parse(required(PREFIX_TYPE))?,
        Description::parse(required(PREFIX_DESCRIPTION))?,
        Amount::parse(required(PREFIX_AMOUNT))?,
        Date::parse(required(PREFIX_DATE))?,
        staff,
    );
    Ok(Box::new(AddTransactionCommand::new(transaction)))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTransactionCommand {
    index: Index,
}

impl DeleteTransactionCommand {
    pub fn new(index: Index) -> Self {
        Self { index }
    }
}

impl Command for DeleteTransactionCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let target = model
            .filtered_transaction_list()
            .get(self.index.zero_based())
            .map(|transaction| (*transaction).clone())
            .ok_or(CommandError::InvalidTransactionIndex)?;
        model
            .delete_transaction(&target)
            .map_err(EntryListError::from)?;
        info!(id = %target.id, "deleted transaction");
        Ok(CommandResult::with_view(
            format!(
                "Deleted Transaction: {}",
                messages::format_transaction(&target)
            ),
            TabWindow::Transactions,
        ))
    }
}

pub fn parse_delete(args: &str, _model: &dyn Model) -> Result<Box<dyn Command>, ParseError> {
    let index = parse_index(args).map_err(|_| ParseError::InvalidFormat(DELETE_USAGE))?;
    Ok(Box::new(DeleteTransactionCommand::new(index)))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListTransactionsCommand;

impl Command for ListTransactionsCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_transaction_list(show_all_transactions());
        Ok(CommandResult::with_view(
            "Listed all transactions",
            TabWindow::Transactions,
        ))
    }
}

pub fn parse_list(_args: &str, _model: &dyn Model) -> Result<Box<dyn Command>, ParseError> {
    Ok(Box::new(ListTransactionsCommand))
}

/// Matches descriptions containing any keyword as a whole word, ignoring case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindTransactionsCommand {
    keywords: Vec<String>,
}

impl FindTransactionsCommand {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }
}

impl Command for FindTransactionsCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let keywords: Vec<String> = self.keywords.iter().map(|k| k.to_lowercase()).collect();
        model.update_filtered_transaction_list(Box::new(move |transaction: &Transaction| {
            transaction
                .description
                .as_str()
                .split_whitespace()
                .any(|word| keywords.iter().any(|keyword| word.to_lowercase() == *keyword))
        }));
        let count = model.filtered_transaction_list().len();
        Ok(CommandResult::with_view(
            messages::transactions_listed(count),
            TabWindow::Transactions,
        ))
    }
}

pub fn parse_find(args: &str, _model: &dyn Model) -> Result<Box<dyn Command>, ParseError> {
    let keywords = split_keywords(args)?;
    if keywords.is_empty() {
        return Err(ParseError::InvalidFormat(FIND_USAGE));
    }
    Ok(Box::new(FindTransactionsCommand::new(keywords)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{alice, transaction, typical_model};

    #[test]
    fn add_appends_and_rejects_duplicates() {
        let mut model = typical_model();
        let command = AddTransactionCommand::new(transaction("Stationery", "12", alice()));
        command.execute(&mut model).unwrap();
        assert_eq!(model.book().transactions().len(), 4);

        let again = AddTransactionCommand::new(transaction("Stationery", "12", alice()));
        assert_eq!(
            again.execute(&mut model).unwrap_err(),
            CommandError::DuplicateTransaction
        );
    }

    #[test]
    fn parse_add_resolves_staff() {
        let mut model = typical_model();
        let command = parse_add(
            "ty/E d/Printer toner a/89.90 dt/2024-03-02 s/Alice Pauline",
            &model,
        )
        .unwrap();
        command.execute(&mut model).unwrap();
        let added = model.book().transactions().last().unwrap();
        assert_eq!(added.staff, alice());
        assert_eq!(added.amount.to_string(), "89.90");
    }

    #[test]
    fn parse_add_requires_every_field() {
        let model = typical_model();
        assert_eq!(
            parse_add("ty/E d/Toner a/5 dt/2024-03-02", &model).unwrap_err(),
            ParseError::InvalidFormat(ADD_USAGE)
        );
        assert_eq!(
            parse_add("junk ty/E d/Toner a/5 dt/2024-03-02 s/Bob Choo", &model).unwrap_err(),
            ParseError::InvalidFormat(ADD_USAGE)
        );
    }

    #[test]
    fn delete_uses_displayed_index() {
        let mut model = typical_model();
        model.update_filtered_transaction_list(Box::new(|t: &Transaction| {
            t.description.as_str() == "Taxi to client"
        }));
        DeleteTransactionCommand::new(Index::from_zero_based(0))
            .execute(&mut model)
            .unwrap();
        assert!(model
            .book()
            .transactions()
            .iter()
            .all(|t| t.description.as_str() != "Taxi to client"));

        let err = DeleteTransactionCommand::new(Index::from_zero_based(5))
            .execute(&mut model)
            .unwrap_err();
        assert_eq!(err, CommandError::InvalidTransactionIndex);
    }

    #[test]
    fn find_filters_by_description_words() {
        let mut model = typical_model();
        let result = FindTransactionsCommand::new(vec!["LUNCH".into(), "taxi".into()])
            .execute(&mut model)
            .unwrap();
        assert_eq!(result.feedback, "2 transactions listed!");
        assert_eq!(model.filtered_transaction_list().len(), 2);

        ListTransactionsCommand.execute(&mut model).unwrap();
        assert_eq!(model.filtered_transaction_list().len(), 3);
    }
}
