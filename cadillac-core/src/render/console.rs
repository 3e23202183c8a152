//! Aligned box tables for terminal output.

use std::fmt;

/// A text table with a header row, drawn with `+`, `-` and `|` borders.
///
/// Column widths are measured in characters so multi-byte comments stay
/// aligned as long as the terminal renders them one cell wide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsoleTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ConsoleTable {
    pub fn new<I>(headers: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row. Missing cells render empty; extra cells are dropped.
    pub fn add_row<I>(&mut self, cells: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut row: Vec<String> = cells
            .into_iter()
            .take(self.headers.len())
            .map(Into::into)
            .collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .map(|row| display_width(&row[i]))
                    .chain(std::iter::once(display_width(header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

fn display_width(cell: &str) -> usize {
    cell.chars().count()
}

fn write_border(f: &mut fmt::Formatter<'_>, widths: &[usize]) -> fmt::Result {
    for width in widths {
        write!(f, "+{}", "-".repeat(width.saturating_add(2)))?;
    }
    writeln!(f, "+")
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
    for (cell, width) in cells.iter().zip(widths) {
        // Newlines inside a cell would break the box
        let cell = cell.replace(['\r', '\n'], " ");
        let padding = width.saturating_sub(display_width(&cell));
        write!(f, "| {}{} ", cell, " ".repeat(padding))?;
    }
    writeln!(f, "|")
}

impl fmt::Display for ConsoleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();

        write_border(f, &widths)?;
        write_row(f, &self.headers, &widths)?;
        write_border(f, &widths)?;
        for row in &self.rows {
            write_row(f, row, &widths)?;
        }
        write_border(f, &widths)
    }
}
