//! Edits a transaction chosen by its position in the displayed list.

use tracing::info;

use crate::core::{show_all_persons, show_all_transactions, Index, Model};
use crate::domain::{
    Amount, Date, Description, Entry, Person, Transaction, TransactionId, TransactionType,
};
use crate::logic::messages;
use crate::logic::parser::{
    parse_index, tokenize, ParseError, PREFIX_AMOUNT, PREFIX_DATE, PREFIX_DESCRIPTION,
    PREFIX_STAFF, PREFIX_TYPE,
};

use super::{Command, CommandError, CommandResult, TabWindow};

pub const COMMAND_WORD: &str = "edittransaction";

pub const MESSAGE_USAGE: &str = "edittransaction: Edits the details of the transaction identified \
by the index number used in the displayed transactions list. \
Existing values will be overwritten by the input values.\n\
Parameters: INDEX (must be a positive integer) [ty/TYPE] [d/DESCRIPTION] [a/AMOUNT] [dt/DATE] [s/STAFF]\n\
Example: edittransaction 1 ty/E a/10000";

/// Field overrides for a single edit. Unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditTransactionDescriptor {
    kind: Option<TransactionType>,
    description: Option<Description>,
    amount: Option<Amount>,
    date: Option<Date>,
    staff: Option<Person>,
}

impl EditTransactionDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_any_field_edited(&self) -> bool {
        self.kind.is_some()
            || self.description.is_some()
            || self.amount.is_some()
            || self.date.is_some()
            || self.staff.is_some()
    }

    pub fn kind(&self) -> Option<TransactionType> {
        self.kind
    }

    pub fn set_kind(&mut self, kind: TransactionType) {
        self.kind = Some(kind);
    }

    pub fn description(&self) -> Option<&Description> {
        self.description.as_ref()
    }

    pub fn set_description(&mut self, description: Description) {
        self.description = Some(description);
    }

    pub fn amount(&self) -> Option<Amount> {
        self.amount
    }

    pub fn set_amount(&mut self, amount: Amount) {
        self.amount = Some(amount);
    }

    pub fn date(&self) -> Option<Date> {
        self.date
    }

    pub fn set_date(&mut self, date: Date) {
        self.date = Some(date);
    }

    pub fn staff(&self) -> Option<&Person> {
        self.staff.as_ref()
    }

    pub fn set_staff(&mut self, staff: Person) {
        self.staff = Some(staff);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditTransactionCommand {
    index: Index,
    descriptor: EditTransactionDescriptor,
}

impl EditTransactionCommand {
    pub fn new(index: Index, descriptor: EditTransactionDescriptor) -> Self {
        Self { index, descriptor }
    }
}

impl Command for EditTransactionCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let target = model
            .filtered_transaction_list()
            .get(self.index.zero_based())
            .map(|transaction| (*transaction).clone())
            .ok_or(CommandError::InvalidTransactionIndex)?;

        let edited = create_edited_transaction(&target, &self.descriptor);

        if !target.is_same_entry(&edited) && model.has_transaction(&edited) {
            return Err(CommandError::DuplicateTransaction);
        }

        let feedback = format!(
            "Edited Transaction: {}",
            messages::format_transaction(&edited)
        );
        info!(old_id = %target.id, new_id = %edited.id, "editing transaction");
        model.set_transaction(&target, edited)?;
        model.update_filtered_person_list(show_all_persons());
        model.update_filtered_transaction_list(show_all_transactions());
        Ok(CommandResult::with_view(feedback, TabWindow::Transactions))
    }
}

/// Overlays the descriptor on `target`. The result always carries a freshly minted id.
fn create_edited_transaction(
    target: &Transaction,
    descriptor: &EditTransactionDescriptor,
) -> Transaction {
    Transaction::new(
        TransactionId::new(),
        descriptor.kind().unwrap_or(target.kind),
        descriptor
            .description()
            .cloned()
            .unwrap_or_else(|| target.description.clone()),
        descriptor.amount().unwrap_or(target.amount),
        descriptor.date().unwrap_or(target.date),
        descriptor
            .staff()
            .cloned()
            .unwrap_or_else(|| target.staff.clone()),
    )
}

pub fn parse(args: &str, model: &dyn Model) -> Result<Box<dyn Command>, ParseError> {
    let prefixes = [
        PREFIX_TYPE,
        PREFIX_DESCRIPTION,
        PREFIX_AMOUNT,
        PREFIX_DATE,
        PREFIX_STAFF,
    ];
    let map = tokenize(args, &prefixes);
    let index =
        parse_index(map.preamble()).map_err(|_| ParseError::InvalidFormat(MESSAGE_USAGE))?;
    map.verify_no_duplicate_prefixes(&prefixes)?;

    let mut descriptor = EditTransactionDescriptor::new();
    if let Some(raw) = map.value(PREFIX_TYPE) {
        descriptor.set_kind(TransactionType::parse(raw)?);
    }
    if let Some(raw) = map.value(PREFIX_DESCRIPTION) {
        descriptor.set_description(Description::parse(raw)?);
    }
    if let Some(raw) = map.value(PREFIX_AMOUNT) {
        descriptor.set_amount(Amount::parse(raw)?);
    }
    if let Some(raw) = map.value(PREFIX_DATE) {
        descriptor.set_date(Date::parse(raw)?);
    }
    if let Some(raw) = map.value(PREFIX_STAFF) {
        let staff = model
            .book()
            .find_person_by_name(raw)
            .cloned()
            .ok_or_else(|| ParseError::UnknownStaff(raw.trim().to_string()))?;
        descriptor.set_staff(staff);
    }

    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NotEdited);
    }
    Ok(Box::new(EditTransactionCommand::new(index, descriptor)))
}
