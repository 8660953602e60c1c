use unicode_width::UnicodeWidthStr;

pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

    let mut value = bytes as f64;
    for unit in &UNITS[..UNITS.len() - 1] {
        if value < 1024.0 {
            return format!("{value:.1} {unit}");
        }
        value /= 1024.0;
    }
    format!("{value:.1} {}", UNITS[UNITS.len() - 1])
}

/// Left-align `s` in a column `width` terminal cells wide.
///
/// CJK characters take two cells, so `str::len` padding would misalign them.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let used = s.width();
    let mut out = String::with_capacity(s.len() + width.saturating_sub(used));
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    out
}

/// Plain text table: header row, dash rule, then rows, cells joined by `" | "`.
/// Trailing padding is trimmed from every line.
pub fn render_table<S: AsRef<str>>(headers: &[&str], rows: &[Vec<S>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            let w = cell.as_ref().width();
            match widths.get_mut(i) {
                Some(current) => *current = (*current).max(w),
                None => widths.push(w),
            }
        }
    }

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(headers, &widths));
    lines.push(format_row(rule.as_slice(), &widths));
    for row in rows {
        lines.push(format_row(row.as_slice(), &widths));
    }
    lines.join("\n")
}

fn format_row<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad_to_width(cell.as_ref(), *width))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_units() {
        assert_eq!(format_bytes(0), "0.0 B");
        assert_eq!(format_bytes(512), "512.0 B");
        assert_eq!(format_bytes(1536), "1.5 KiB");
        assert_eq!(format_bytes(8 * 1024 * 1024 * 1024), "8.0 GiB");
        assert_eq!(format_bytes(3 * 1024u64.pow(5)), "3072.0 TiB");
    }

    #[test]
    fn pad_counts_display_cells() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("内存", 6), "内存  ");
        assert_eq!(pad_to_width("toolong", 3), "toolong");
    }

    #[test]
    fn table_aligns_columns() {
        let rows = vec![vec!["1", "init"], vec!["4242", "sh"]];
        let table = render_table(&["PID", "Name"], &rows);
        assert_eq!(table, "PID  | Name\n---- | ----\n1    | init\n4242 | sh");
    }

    #[test]
    fn table_with_wide_characters() {
        let rows = vec![vec!["内存压力", "x"]];
        let table = render_table(&["问题", "原因"], &rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "问题     | 原因");
        assert_eq!(lines[1], "-------- | ----");
        assert_eq!(lines[2], "内存压力 | x");
    }
}
