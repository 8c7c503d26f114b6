/// Plain-text table for console output.
#[derive(Debug, Default)]
pub struct Table {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&'static str]) -> Self {
        Self {
            headers: headers.to_vec(),
            rows: Vec::new(),
        }
    }

    pub fn row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.rows.push(cells.into_iter().map(|c| c.to_string()).collect());
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let len = cell.chars().count();
                match widths.get_mut(i) {
                    Some(w) => *w = (*w).max(len),
                    None => widths.push(len),
                }
            }
        }

        let line = |cells: &[&str]| {
            cells
                .iter()
                .zip(&widths)
                .map(|(c, w)| format!("{:<width$}", c, width = *w))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };
        let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

        let mut out = Vec::with_capacity(self.rows.len() + 2);
        out.push(line(&self.headers));
        out.push(line(&dashes.iter().map(String::as_str).collect::<Vec<_>>()));
        for row in &self.rows {
            out.push(line(&row.iter().map(String::as_str).collect::<Vec<_>>()));
        }
        out.join("\n")
    }

    /// Prints the table, or `empty` when there are no rows.
    pub fn print(&self, empty: &str) {
        if self.is_empty() {
            println!("{}", empty);
        } else {
            println!("{}", self.render());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_are_aligned() {
        let mut table = Table::new(&["CODE", "TITLE"]);
        table.row(["T-1", "Write docs"]);
        table.row(["T-100", "Ship"]);

        assert_eq!(
            table.render(),
            "CODE   TITLE\n-----  ----------\nT-1    Write docs\nT-100  Ship"
        );
    }
}
