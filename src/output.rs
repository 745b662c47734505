//! Terminal Output
//!
//! Tabular rendering of query results, plus the decorative startup banner.
//! All tables go to stdout; logs stay on stderr.

/// Decorative banner printed once at startup
pub const BANNER: &str = r"
 _____                 _
| ____|_ __ ___  _ __ | | ___  _   _  ___  ___
|  _| | '_ ` _ \| '_ \| |/ _ \| | | |/ _ \/ _ \
| |___| | | | | | |_) | | (_) | |_| |  __/  __/
|_____|_| |_| |_| .__/|_|\___/ \__, |\___|\___|
                |_|            |___/
 __  __
|  \/  | __ _ _ __   __ _  __ _  ___ _ __
| |\/| |/ _` | '_ \ / _` |/ _` |/ _ \ '__|
| |  | | (_| | | | | (_| | (_| |  __/ |
|_|  |_|\__,_|_| |_|\__,_|\__, |\___|_|
                          |___/
";

/// A record that can be rendered as one table row
///
/// Implemented by every model type. `cells()` must return exactly
/// `HEADERS.len()` entries; absent values render as empty cells.
pub trait Tabular {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

/// Render rows as a plain ASCII table
///
/// Column widths fit the widest cell (headers included). An empty slice
/// renders as a header-only table, so "view all" on an empty table still
/// shows the column names.
pub fn render_table<T: Tabular>(rows: &[T]) -> String {
    let headers = T::HEADERS;
    let cells: Vec<Vec<String>> = rows.iter().map(Tabular::cells).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &cells {
        for (idx, cell) in row.iter().enumerate() {
            if cell.len() > widths[idx] {
                widths[idx] = cell.len();
            }
        }
    }

    let separator = {
        let mut line = String::from("+");
        for width in &widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line
    };

    let format_row = |cells: &[String]| {
        let mut line = String::from("|");
        for (idx, cell) in cells.iter().enumerate() {
            line.push_str(&format!(" {cell:<width$} |", width = widths[idx]));
        }
        line
    };

    let header_cells: Vec<String> = headers.iter().map(|h| (*h).to_string()).collect();

    let mut out = String::new();
    out.push_str(&separator);
    out.push('\n');
    out.push_str(&format_row(&header_cells));
    out.push('\n');
    out.push_str(&separator);
    for row in &cells {
        out.push('\n');
        out.push_str(&format_row(row));
    }
    out.push('\n');
    out.push_str(&separator);
    out
}

/// Print rows as a table to stdout
pub fn print_table<T: Tabular>(rows: &[T]) {
    println!("{}", render_table(rows));
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair {
        left: String,
        right: String,
    }

    impl Tabular for Pair {
        const HEADERS: &'static [&'static str] = &["left", "right"];

        fn cells(&self) -> Vec<String> {
            vec![self.left.clone(), self.right.clone()]
        }
    }

    #[test]
    fn test_render_empty_table_shows_headers() {
        let rendered = render_table::<Pair>(&[]);
        insta::assert_snapshot!(rendered, @r"
        +------+-------+
        | left | right |
        +------+-------+
        +------+-------+
        ");
    }

    #[test]
    fn test_render_widths_fit_widest_cell() {
        let rows = vec![
            Pair { left: "a".to_string(), right: "stretchy value".to_string() },
            Pair { left: "longer".to_string(), right: String::new() },
        ];
        let rendered = render_table(&rows);
        insta::assert_snapshot!(rendered, @r"
        +--------+----------------+
        | left   | right          |
        +--------+----------------+
        | a      | stretchy value |
        | longer |                |
        +--------+----------------+
        ");
    }

    #[test]
    fn test_all_lines_equal_width() {
        let rows = vec![Pair { left: "x".to_string(), right: "y".to_string() }];
        let rendered = render_table(&rows);
        let lengths: Vec<usize> = rendered.lines().map(str::len).collect();
        assert!(lengths.windows(2).all(|w| w[0] == w[1]), "ragged table: {rendered}");
    }

    #[test]
    fn test_empty_cell_renders_blank() {
        let rows = vec![Pair { left: "1".to_string(), right: String::new() }];
        let rendered = render_table(&rows);
        assert!(rendered.contains("| 1    |       |"));
    }
}
