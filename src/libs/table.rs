//! Fixed-width ASCII grid used by the weekly and monthly timesheets.
//!
//! Every cell is printed as `| ` + text left-aligned to the column width + ` `,
//! and each line is closed with `|`. The layout is:
//!
//! ```text
//!  ______________________________
//! | Issue           | Monday     |
//! |_________________|____________|
//! | ABC-1           | 3.5        |
//! |-----------------|------------|
//! | ABC-2           |            |
//! |_________________|____________|
//! ```
//!
//! The top border is a space followed by underscores up to, but not including,
//! the last column of the grid. The rule between body rows uses the table's
//! row separator character.

#[derive(Debug, Clone)]
pub struct Column {
    pub title: String,
    pub width: usize,
}

impl Column {
    pub fn new(title: &str, width: usize) -> Self {
        Self {
            title: title.to_owned(),
            width,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<Column>,
    row_separator: char,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>, row_separator: char) -> Self {
        Self {
            columns,
            row_separator,
            rows: Vec::new(),
        }
    }

    /// Appends a row. Missing trailing cells render blank.
    pub fn add_row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    /// Total width of a grid line, borders included.
    pub fn width(&self) -> usize {
        self.columns.iter().map(|column| column.width + 3).sum::<usize>() + 1
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push(' ');
        out.push_str(&"_".repeat(self.width().saturating_sub(2)));
        out.push('\n');

        let titles: Vec<String> = self.columns.iter().map(|column| column.title.clone()).collect();
        out.push_str(&self.line(&titles));
        out.push_str(&self.rule('_'));

        for (index, row) in self.rows.iter().enumerate() {
            if index > 0 {
                out.push_str(&self.rule(self.row_separator));
            }
            out.push_str(&self.line(row));
        }

        out.push_str(&self.rule('_'));
        out
    }

    fn line(&self, cells: &[String]) -> String {
        let mut line = String::new();
        for (index, column) in self.columns.iter().enumerate() {
            let text = cells.get(index).map(String::as_str).unwrap_or("");
            line.push_str(&format!("| {:<width$} ", text, width = column.width));
        }
        line.push_str("|\n");
        line
    }

    fn rule(&self, fill: char) -> String {
        let mut rule = String::from("|");
        for column in &self.columns {
            rule.push_str(&fill.to_string().repeat(column.width + 2));
            rule.push('|');
        }
        rule.push('\n');
        rule
    }
}
