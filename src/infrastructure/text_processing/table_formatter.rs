const COLUMN_GAP: &str = "  ";
pub const MISSING_CELL: &str = "NaN";

/// Header row plus data rows, rendered as a whitespace-aligned text table with
/// a 0-based row index on the left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    /// Ragged rows are padded with `NaN`; columns without a header get `Unnamed: i`.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(headers.len()))
            .max()
            .unwrap_or(0);

        let headers = (0..width)
            .map(|i| match headers.get(i).map(|h| h.trim()) {
                Some(h) if !h.is_empty() => h.to_string(),
                _ => format!("Unnamed: {i}"),
            })
            .collect();

        let rows = rows
            .into_iter()
            .map(|row| {
                (0..width)
                    .map(|i| match row.get(i).map(|c| c.trim()) {
                        Some(c) if !c.is_empty() => c.to_string(),
                        _ => MISSING_CELL.to_string(),
                    })
                    .collect()
            })
            .collect();

        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn render(&self) -> String {
        if self.rows.is_empty() {
            return format!(
                "Empty DataFrame\nColumns: [{}]\nIndex: []",
                self.headers.join(", ")
            );
        }

        let index_width = (self.rows.len() - 1).to_string().len();
        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut lines = Vec::with_capacity(self.rows.len() + 1);

        let mut header_line = " ".repeat(index_width);
        for (header, width) in self.headers.iter().zip(&widths) {
            header_line.push_str(COLUMN_GAP);
            header_line.push_str(&format!("{header:>width$}"));
        }
        lines.push(header_line);

        for (index, row) in self.rows.iter().enumerate() {
            let mut line = format!("{index:<index_width$}");
            for (cell, width) in row.iter().zip(&widths) {
                line.push_str(COLUMN_GAP);
                line.push_str(&format!("{cell:>width$}"));
            }
            lines.push(line);
        }

        lines.join("\n")
    }
}
