//! Plain-text tables

use super::badge::{Badge, BadgeColor};
use std::fmt::Write;

/// One table cell, optionally painted as a badge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Text
    pub text: String,
    /// Badge color, if any
    pub badge: Option<BadgeColor>,
}

impl Cell {
    /// Plain cell
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            badge: None,
        }
    }

    /// Badge cell for a labelled value
    pub fn badge<B: Badge>(value: &B) -> Self {
        Self {
            text: value.label().to_string(),
            badge: Some(value.color()),
        }
    }

    /// Text with the badge color applied
    #[must_use]
    pub fn paint(&self) -> String {
        match self.badge {
            Some(color) => color.paint(&self.text).to_string(),
            None => self.text.clone(),
        }
    }

    fn width(&self) -> usize {
        self.text.chars().count()
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}

/// Column-aligned text table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Table with the given column headers
    #[must_use]
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(ToString::to_string).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row; missing cells render empty, extra cells are dropped
    pub fn push(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    /// Column headers
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Rows
    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Whether there are no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render with a header, a rule and one line per row
    ///
    /// Padding is computed on the plain text so badges stay aligned.
    #[must_use]
    pub fn render(&self) -> String {
        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(column, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(column).map(Cell::width))
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();

        let header: Vec<String> = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(header, width)| format!("{header:<width$}"))
            .collect();
        let _ = writeln!(out, "{}", header.join("  ").trim_end());

        let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
        let _ = writeln!(out, "{}", rule.join("  "));

        for row in &self.rows {
            let cells: Vec<String> = widths
                .iter()
                .enumerate()
                .map(|(column, width)| {
                    row.get(column).map_or_else(
                        || " ".repeat(*width),
                        |cell| {
                            let padded = format!("{:<width$}", cell.text, width = *width);
                            match cell.badge {
                                Some(color) => color.paint(&padded).to_string(),
                                None => padded,
                            }
                        },
                    )
                })
                .collect();
            let _ = writeln!(out, "{}", cells.join("  ").trim_end());
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use transparency_core::types::TicketPriority;

    #[test]
    fn test_render_aligns_columns() {
        colored::control::set_override(false);

        let mut table = Table::new(&["ID", "Priority"]);
        table.push(vec![Cell::text("t1"), Cell::badge(&TicketPriority::High)]);
        table.push(vec![Cell::text("t200"), Cell::badge(&TicketPriority::Low)]);

        assert_eq!(
            table.render(),
            "ID    Priority\n\
             ----  --------\n\
             t1    high\n\
             t200  low\n"
        );
    }

    #[test]
    fn test_short_rows_are_padded() {
        colored::control::set_override(false);

        let mut table = Table::new(&["A", "B"]);
        table.push(vec![Cell::text("x")]);

        assert_eq!(table.render(), "A  B\n-  -\nx\n");
    }
}
