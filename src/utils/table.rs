/// Aligned text table for the console surface.
///
/// Column widths grow to fit the widest cell; the header is separated from
/// the body by a dashed rule.
pub struct TextTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    col_widths: Vec<usize>,
}

impl TextTable {
    /// Create a new table with the given headers.
    pub fn new(headers: &[&str]) -> Self {
        let col_widths = headers.iter().map(|h| h.chars().count()).collect();
        TextTable {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
            col_widths,
        }
    }

    /// Add a row of already-formatted cells. Cells beyond the header count
    /// are dropped.
    pub fn add_row(&mut self, cells: Vec<String>) {
        for (i, cell) in cells.iter().enumerate() {
            if i < self.col_widths.len() {
                self.col_widths[i] = self.col_widths[i].max(cell.chars().count());
            }
        }
        self.rows.push(cells);
    }

    /// Render the table as a plain string, one line per row.
    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.render_cells(&self.headers));
        output.push('\n');
        output.push_str(&self.render_rule());
        output.push('\n');

        for row in &self.rows {
            output.push_str(&self.render_cells(row));
            output.push('\n');
        }

        output
    }

    fn render_cells(&self, cells: &[String]) -> String {
        let mut line = String::new();
        let count = cells.len().min(self.col_widths.len());
        for (i, cell) in cells.iter().take(count).enumerate() {
            let pad = self.col_widths[i] - cell.chars().count();
            line.push_str(cell);
            if i < count - 1 {
                line.push_str(&" ".repeat(pad));
                line.push_str(" | ");
            }
        }
        line
    }

    fn render_rule(&self) -> String {
        let mut line = String::new();
        for (i, &width) in self.col_widths.iter().enumerate() {
            line.push_str(&"-".repeat(width));
            if i < self.col_widths.len() - 1 {
                line.push_str("-+-");
            }
        }
        line
    }
}
