//! Plain-text tables for the address book and transaction views.

use crate::core::Model;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    pub header: &'static str,
    pub alignment: Alignment,
}

impl TableColumn {
    pub const fn left(header: &'static str) -> Self {
        Self {
            header,
            alignment: Alignment::Left,
        }
    }

    pub const fn right(header: &'static str) -> Self {
        Self {
            header,
            alignment: Alignment::Right,
        }
    }
}

pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(idx))
                    .map(|cell| cell.chars().count())
                    .fold(column.header.chars().count(), usize::max)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.compute_widths();
        let header: Vec<String> = self.columns.iter().map(|c| c.header.to_string()).collect();
        let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();

        let mut lines = vec![self.render_row(&header, &widths), rule.join(" ")];
        lines.extend(self.rows.iter().map(|row| self.render_row(row, &widths)));
        lines.join("\n")
    }

    fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        self.columns
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(idx, (column, width))| {
                let cell = row.get(idx).map(String::as_str).unwrap_or("");
                match column.alignment {
                    Alignment::Left => format!("{:<width$}", cell, width = width),
                    Alignment::Right => format!("{:>width$}", cell, width = width),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
            .trim_end()
            .to_string()
    }
}

pub fn persons_table(model: &dyn Model) -> Table {
    Table {
        columns: vec![
            TableColumn::right("#"),
            TableColumn::left("Name"),
            TableColumn::left("Phone"),
            TableColumn::left("Email"),
            TableColumn::left("Address"),
        ],
        rows: model
            .filtered_person_list()
            .iter()
            .enumerate()
            .map(|(idx, person)| {
                vec![
                    (idx + 1).to_string(),
                    person.name.to_string(),
                    person.phone.to_string(),
                    person.email.to_string(),
                    person.address.to_string(),
                ]
            })
            .collect(),
    }
}

pub fn transactions_table(model: &dyn Model) -> Table {
    Table {
        columns: vec![
            TableColumn::right("#"),
            TableColumn::left("Type"),
            TableColumn::left("Description"),
            TableColumn::right("Amount"),
            TableColumn::left("Date"),
            TableColumn::left("Staff"),
        ],
        rows: model
            .filtered_transaction_list()
            .iter()
            .enumerate()
            .map(|(idx, transaction)| {
                vec![
                    (idx + 1).to_string(),
                    transaction.kind.to_string(),
                    transaction.description.to_string(),
                    transaction.amount.to_string(),
                    transaction.date.to_string(),
                    transaction.staff.name.to_string(),
                ]
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::typical_model;

    #[test]
    fn columns_are_padded_to_widest_cell() {
        let table = Table {
            columns: vec![TableColumn::left("Name"), TableColumn::right("Amount")],
            rows: vec![
                vec!["Al".into(), "5.00".into()],
                vec!["Beatrice".into(), "1200.00".into()],
            ],
        };
        assert_eq!(
            table.render(),
            "Name      Amount\n-------- -------\nAl          5.00\nBeatrice 1200.00"
        );
    }

    #[test]
    fn transaction_rows_use_display_indices() {
        let model = typical_model();
        let table = transactions_table(&model);
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[0][0], "1");
        assert_eq!(table.rows[1][3], "450.90");
        assert_eq!(table.rows[1][5], "Bob Choo");
    }

    #[test]
    fn person_rows_follow_filter() {
        let mut model = typical_model();
        model.update_filtered_person_list(Box::new(|p: &crate::domain::Person| {
            p.name.as_str().starts_with('B')
        }));
        let table = persons_table(&model);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0][1], "Bob Choo");
    }
}
