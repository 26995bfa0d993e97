//! Table rendering for CLI output.
//!
//! Cells wider than their column wrap onto extra lines; widths are
//! measured in terminal columns, not bytes.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width: width.max(1),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        let headers: Vec<Vec<String>> = self
            .columns
            .iter()
            .map(|c| vec![c.header.clone()])
            .collect();
        self.push_lines(&mut out, &headers);

        let rule: Vec<Vec<String>> = self
            .columns
            .iter()
            .map(|c| vec!["-".repeat(c.width)])
            .collect();
        self.push_lines(&mut out, &rule);

        for row in &self.rows {
            let wrapped: Vec<Vec<String>> = self
                .columns
                .iter()
                .enumerate()
                .map(|(i, col)| wrap_cell(row.get(i).map(String::as_str).unwrap_or(""), col.width))
                .collect();
            self.push_lines(&mut out, &wrapped);
        }

        out
    }

    fn push_lines(&self, out: &mut String, cells: &[Vec<String>]) {
        let height = cells.iter().map(Vec::len).max().unwrap_or(1);
        for line in 0..height {
            let mut text = String::new();
            for (col, cell) in self.columns.iter().zip(cells) {
                let part = cell.get(line).map(String::as_str).unwrap_or("");
                text.push_str(&pad(part, col.width));
                text.push(' ');
            }
            out.push_str(text.trim_end());
            out.push('\n');
        }
    }
}

fn wrap_cell(text: &str, width: usize) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }
    textwrap::wrap(text, width)
        .into_iter()
        .map(|l| l.into_owned())
        .collect()
}

fn pad(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    let mut s = text.to_string();
    s.push_str(&" ".repeat(width.saturating_sub(used)));
    s
}
