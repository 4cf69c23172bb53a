//! Fixed-width table rendering for CLI and text export.

use crate::utils::formatting::{display_width, pad_right};

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width: width.max(display_width(header)),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    /// Character repeated under the header; `None` renders no rule.
    pub rule: Option<char>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            rule: None,
        }
    }

    pub fn with_rule(mut self, c: char) -> Self {
        self.rule = Some(c);
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        let header: Vec<&str> = self.columns.iter().map(|c| c.header.as_str()).collect();
        self.push_line(&mut out, &header);

        if let Some(c) = self.rule {
            let total: usize = self.columns.iter().map(|col| col.width).sum::<usize>()
                + 2 * self.columns.len().saturating_sub(1);
            out.push_str(&c.to_string().repeat(total));
            out.push('\n');
        }

        // Rows
        for row in &self.rows {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            self.push_line(&mut out, &cells);
        }

        out
    }

    fn push_line(&self, out: &mut String, cells: &[&str]) {
        let line: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| pad_right(cells.get(i).copied().unwrap_or(""), col.width))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
}
