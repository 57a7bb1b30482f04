//! Column-oriented view of the annotated records, shaped for CSV export.
//!
//! Records enter with snake_case keys; [`Table::for_export`] applies the
//! header normalization, missing-value fill and column ordering the CSV
//! expects.

use std::fmt;

use crate::JobRecord;

/// Rows shown by the pre-export preview.
pub const PREVIEW_ROWS: usize = 5;

const LEADING_COLUMN: &str = "Position Title";
const MISSING_TEXT: &str = "Unknown";
const RECORD_KEYS: [&str; 5] = [
    "position_title",
    "organization",
    "city",
    "state",
    "safe_state",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Numeric,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl Cell {
    fn is_missing(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(_) => false,
            Cell::Number(value) => value.is_nan(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(text) => f.write_str(text),
            Cell::Number(value) => write!(f, "{value}"),
            Cell::Empty => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Column {
    name: String,
    kind: ColumnKind,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = (S, ColumnKind)>,
        S: Into<String>,
    {
        Self {
            columns: columns
                .into_iter()
                .map(|(name, kind)| Column {
                    name: name.into(),
                    kind,
                })
                .collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row, padding short rows with [`Cell::Empty`] and dropping
    /// cells beyond the column count.
    pub fn push_row(&mut self, mut row: Vec<Cell>) {
        row.resize(self.columns.len(), Cell::Empty);
        self.rows.push(row);
    }

    /// One row per record, in record order, under the raw record keys.
    pub fn from_records(records: &[JobRecord]) -> Self {
        let mut table = Self::new(RECORD_KEYS.iter().map(|key| (*key, ColumnKind::Text)));
        for record in records {
            table.push_row(vec![
                Cell::Text(record.position_title.clone()),
                Cell::Text(record.organization.clone()),
                Cell::Text(record.city.clone()),
                Cell::Text(record.state.clone()),
                Cell::Text(record.safe_state.to_string()),
            ]);
        }
        table
    }

    /// `from_records` followed by every normalization step the CSV needs.
    pub fn for_export(records: &[JobRecord]) -> Self {
        let mut table = Self::from_records(records);
        table.normalize_headers();
        table.fill_missing();
        table.move_to_front(LEADING_COLUMN);
        table
    }

    /// `position_title` becomes `Position Title`.
    pub fn normalize_headers(&mut self) {
        for column in &mut self.columns {
            column.name = title_case(&column.name.replace('_', " "));
        }
    }

    /// Numeric gaps become `0`, text gaps become `Unknown`. Present but
    /// empty text is a value, not a gap, and is kept.
    pub fn fill_missing(&mut self) {
        for row in &mut self.rows {
            for (cell, column) in row.iter_mut().zip(&self.columns) {
                if !cell.is_missing() {
                    continue;
                }
                *cell = match column.kind {
                    ColumnKind::Numeric => Cell::Number(0.0),
                    ColumnKind::Text => Cell::Text(MISSING_TEXT.to_string()),
                };
            }
        }
    }

    /// Moves the named column to index 0, keeping the others in order.
    /// Returns `false` when no such column exists.
    pub fn move_to_front(&mut self, name: &str) -> bool {
        let Some(index) = self.columns.iter().position(|c| c.name == name) else {
            return false;
        };
        let column = self.columns.remove(index);
        self.columns.insert(0, column);
        for row in &mut self.rows {
            let cell = row.remove(index);
            row.insert(0, cell);
        }
        true
    }

    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Renders the first `n` rows as an aligned text block with a row index.
    pub fn head(&self, n: usize) -> String {
        let shown: Vec<Vec<String>> = self
            .rows
            .iter()
            .take(n)
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect();

        let index_width = shown.len().saturating_sub(1).to_string().len();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                shown
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(column.name.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        out.push_str(&" ".repeat(index_width));
        for (column, width) in self.columns.iter().zip(&widths) {
            out.push_str(&format!("  {:<width$}", column.name, width = *width));
        }
        out.truncate(out.trim_end().len());
        for (i, row) in shown.iter().enumerate() {
            out.push('\n');
            let mut line = format!("{i:>index_width$}");
            for (cell, width) in row.iter().zip(&widths) {
                line.push_str(&format!("  {:<width$}", cell, width = *width));
            }
            out.push_str(line.trim_end());
        }
        out
    }
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the
/// rest: `"safe state"` -> `"Safe State"`, `"NEW_york"` -> `"New_York"`.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_word = false;
    for ch in input.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}
