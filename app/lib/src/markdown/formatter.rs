//! Markdown pipe-table formatter.

use crate::table::Table;

/// Render a table as an aligned markdown pipe table.
///
/// Every line, including the last, ends with `\n`.
pub fn format_markdown(table: &Table) -> String {
    let widths = column_widths(table);
    let mut out = String::new();

    push_row(&mut out, table.headers(), &widths);

    out.push('|');
    for width in &widths {
        out.push_str(&"-".repeat(width + 2));
        out.push('|');
    }
    out.push('\n');

    for row in table.rows() {
        push_row(&mut out, row, &widths);
    }

    out
}

/// Widest cell per column, header included, measured in characters.
pub fn column_widths(table: &Table) -> Vec<usize> {
    let mut widths: Vec<usize> = table.headers().iter().map(|h| h.chars().count()).collect();
    for row in table.rows() {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    out.push('|');
    for (cell, &width) in cells.iter().zip(widths) {
        out.push_str(&format!(" {:<width$} |", cell, width = width));
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
        Table::new(
            headers.iter().map(|s| s.to_string()).collect(),
            rows.iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_format_single_width_columns() {
        let t = table(&["a", "b"], &[&["1", "2"], &["3", "4"]]);
        assert_eq!(
            format_markdown(&t),
            "| a | b |\n|---|---|\n| 1 | 2 |\n| 3 | 4 |\n"
        );
    }

    #[test]
    fn test_format_pads_to_widest_cell() {
        let t = table(&["id", "name"], &[&["1", "alice"], &["100", "bo"]]);
        assert_eq!(
            format_markdown(&t),
            "| id  | name  |\n|-----|-------|\n| 1   | alice |\n| 100 | bo    |\n"
        );
    }

    #[test]
    fn test_format_numbers_are_left_justified() {
        let t = table(&["amount"], &[&["7"]]);
        assert_eq!(format_markdown(&t), "| amount |\n|--------|\n| 7      |\n");
    }

    #[test]
    fn test_format_header_only() {
        let t = table(&["h1", "h2"], &[]);
        assert_eq!(format_markdown(&t), "| h1 | h2 |\n|----|----|\n");
    }

    #[test]
    fn test_format_empty_cells() {
        let t = table(&["", "x"], &[&["", ""]]);
        assert_eq!(format_markdown(&t), "|  | x |\n|--|---|\n|  |   |\n");
    }

    #[test]
    fn test_column_widths_count_characters() {
        let t = table(&["é"], &[&["ab"]]);
        assert_eq!(column_widths(&t), vec![2]);
        assert_eq!(format_markdown(&t), "| é  |\n|----|\n| ab |\n");
    }
}
