use crate::cli::output::current_preferences;

/// How a column aligns its cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    pub header: String,
    pub alignment: Alignment,
    /// Cells longer than this are cut and end in an ellipsis.
    pub max_width: Option<usize>,
}

impl TableColumn {
    pub fn left(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            alignment: Alignment::Left,
            max_width: None,
        }
    }

    pub fn right(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            alignment: Alignment::Right,
            max_width: None,
        }
    }

    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }
}

/// A text table rendered with a header, a rule, and one line per row.
#[derive(Clone, Debug, Default)]
pub struct Table {
    columns: Vec<TableColumn>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Width of each column: the widest of header and cells, capped by the
    /// column's maximum.
    pub fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let widest = self
                    .rows
                    .iter()
                    .filter_map(|row| row.get(idx))
                    .map(|cell| visible_width(cell))
                    .fold(visible_width(&column.header), usize::max);
                column.max_width.map_or(widest, |max| widest.min(max))
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.compute_widths();
        let headers: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(self.render_row(&headers, &widths));
        lines.push(horizontal_rule(&widths));
        lines.extend(self.rows.iter().map(|row| self.render_row(row, &widths)));
        lines.join("\n")
    }

    fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        let cells: Vec<String> = self
            .columns
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(idx, (column, width))| {
                let text = row.get(idx).map(String::as_str).unwrap_or("");
                pad_cell(text, *width, column.alignment)
            })
            .collect();
        cells.join(" | ").trim_end().to_string()
    }
}

/// Display width of `text`, ignoring ANSI escape sequences.
pub fn visible_width(text: &str) -> usize {
    let mut width = 0;
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' {
            // CSI sequences end with a byte in 0x40..=0x7E.
            if chars.next() == Some('[') {
                for next in chars.by_ref() {
                    if ('\u{40}'..='\u{7e}').contains(&next) {
                        break;
                    }
                }
            }
            continue;
        }
        width += 1;
    }
    width
}

fn truncate(text: &str, width: usize) -> String {
    if visible_width(text) <= width {
        return text.to_string();
    }
    match width {
        0 => String::new(),
        _ => {
            let mut cut: String = text.chars().take(width - 1).collect();
            cut.push('…');
            cut
        }
    }
}

fn pad_cell(text: &str, width: usize, alignment: Alignment) -> String {
    let fitted = truncate(text, width);
    let gap = " ".repeat(width.saturating_sub(visible_width(&fitted)));
    match alignment {
        Alignment::Left => format!("{fitted}{gap}"),
        Alignment::Right => format!("{gap}{fitted}"),
    }
}

fn horizontal_rule(widths: &[usize]) -> String {
    let ch = if current_preferences().plain_mode {
        "-"
    } else {
        "─"
    };
    let joint = if current_preferences().plain_mode {
        "-+-"
    } else {
        "─┼─"
    };
    widths
        .iter()
        .map(|width| ch.repeat(*width))
        .collect::<Vec<_>>()
        .join(joint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_grow_to_widest_cell() {
        let mut table = Table::new(vec![TableColumn::left("#"), TableColumn::right("Amount")]);
        table.push_row(vec!["1".into(), "$1234.50".into()]);
        assert_eq!(table.compute_widths(), vec![1, 8]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "# |   Amount");
        assert_eq!(lines[2], "1 | $1234.50");
    }

    #[test]
    fn long_cells_are_truncated() {
        let mut table = Table::new(vec![TableColumn::left("Description").max_width(11)]);
        table.push_row(vec!["Weekly grocery run".into()]);
        let rendered = table.render();
        assert!(rendered.lines().any(|line| line == "Weekly gro…"));
    }

    #[test]
    fn ansi_sequences_have_no_width() {
        assert_eq!(visible_width("\u{1b}[1mbold\u{1b}[0m"), 4);
        assert_eq!(visible_width("₹12"), 3);
    }
}
