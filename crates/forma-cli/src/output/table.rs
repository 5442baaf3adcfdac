//! Aligned text tables for `forma` reports.
//!
//! Every layout ends with its free-text column (violation messages, required
//! fields), so that is the only column shrunk to fit the terminal.

/// Layout knobs resolved from [`crate::ui::prefs`].
#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    /// Truncate the last column so each line fits.
    pub max_width: Option<usize>,
    /// Color the `status` column.
    pub color: bool,
}

const SEPARATOR: &str = "  ";
const ELLIPSIS: char = '…';

/// Render `rows` under `headers`, left-aligned, one line per row.
#[must_use]
pub fn render(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    if let Some(max_width) = options.max_width {
        shrink_last(&mut widths, headers, max_width);
    }

    let status_column = headers.iter().position(|h| *h == "status");
    let header_cells: Vec<String> = headers.iter().map(|h| (*h).to_string()).collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    let header_line = render_line(&header_cells, &widths, None, false);
    lines.push("-".repeat(header_line.chars().count()));
    lines.insert(0, header_line);
    for row in rows {
        lines.push(render_line(row, &widths, status_column, options.color));
    }
    lines.join("\n")
}

fn shrink_last(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let Some((last, fixed)) = widths.split_last_mut() else {
        return;
    };
    let used = fixed.iter().sum::<usize>() + fixed.len() * SEPARATOR.len();
    let floor = headers.last().map_or(1, |h| h.chars().count());
    *last = (*last).min(max_width.saturating_sub(used)).max(floor);
}

fn render_line(
    cells: &[String],
    widths: &[usize],
    status_column: Option<usize>,
    color: bool,
) -> String {
    let last = widths.len().saturating_sub(1);
    let mut line = String::new();
    for (index, width) in widths.iter().enumerate() {
        let cell = cells.get(index).map_or("-", String::as_str);
        let text = truncate_text(cell, *width);
        let pad = width.saturating_sub(text.chars().count());

        if index > 0 {
            line.push_str(SEPARATOR);
        }
        if color && status_column == Some(index) {
            line.push_str(&colorize_status(&text));
        } else {
            line.push_str(&text);
        }
        if index < last {
            line.push_str(&" ".repeat(pad));
        }
    }
    line
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push(ELLIPSIS);
    out
}

/// Green for `valid`, red for `invalid`.
fn colorize_status(value: &str) -> String {
    match value {
        "valid" => format!("\u{1b}[32m{value}\u{1b}[0m"),
        "invalid" => format!("\u{1b}[31m{value}\u{1b}[0m"),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{TableOptions, colorize_status, render, truncate_text};

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| (*c).to_string()).collect()
    }

    #[test]
    fn columns_are_aligned_without_trailing_padding() {
        let rows = vec![
            row(&["0", "valid", "-"]),
            row(&["12", "invalid", "orderItems.0.quantity"]),
        ];
        let table = render(&["index", "status", "field"], &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "index  status   field");
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], "0      valid    -");
        assert_eq!(lines[3], "12     invalid  orderItems.0.quantity");
    }

    #[test]
    fn only_the_last_column_is_truncated() {
        let rows = vec![row(&["orderItems.0.quantity", &"x".repeat(80)])];
        let table = render(
            &["field", "message"],
            &rows,
            TableOptions {
                max_width: Some(40),
                color: false,
            },
        );
        let body = table.lines().nth(2).unwrap();
        assert!(body.starts_with("orderItems.0.quantity  "));
        assert_eq!(body.chars().count(), 40);
        assert!(body.ends_with('…'));
    }

    #[test]
    fn status_column_is_colorized_when_enabled() {
        let rows = vec![row(&["1", "invalid"])];
        let table = render(
            &["index", "status"],
            &rows,
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        assert!(table.contains("\u{1b}[31minvalid\u{1b}[0m"));
        assert_eq!(colorize_status("required"), "required");
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate_text("age", 6), "age");
        assert_eq!(truncate_text("diagnosedWith", 6), "diagn…");
    }
}
