/// Minimum column width, so short headers like `id` still get some room.
const MIN_WIDTH: usize = 4;
const SEPARATOR: &str = "  ";

/// Render rows as an aligned plain-text table.
///
/// Widths are measured in chars. When `max_width` is set, the widest columns
/// shrink first and overflowing cells end in `…`. Numeric cells right-align.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], max_width: Option<usize>) -> String {
    let mut widths = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
                .max(MIN_WIDTH)
        })
        .collect::<Vec<_>>();

    if let Some(max_width) = max_width {
        shrink_to_fit(&mut widths, max_width);
    }

    let header_line = join_cells(headers.iter().map(|h| (*h).to_string()), &widths);
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = vec![header_line, divider];
    lines.extend(
        rows.iter()
            .map(|row| join_cells(row.iter().cloned(), &widths)),
    );
    lines.join("\n")
}

fn join_cells(cells: impl Iterator<Item = String>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, width)| pad(&truncate(&cell, *width), *width))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
        .trim_end()
        .to_string()
}

fn shrink_to_fit(widths: &mut [usize], max_width: usize) {
    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();
    while widths.iter().sum::<usize>() + separators > max_width {
        let Some(widest) = widths
            .iter_mut()
            .filter(|width| **width > MIN_WIDTH)
            .max_by_key(|width| **width)
        else {
            break;
        };
        *widest -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out = value.chars().take(width.saturating_sub(1)).collect::<String>();
    out.push('…');
    out
}

fn pad(value: &str, width: usize) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if looks_numeric(value) {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

fn looks_numeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|ch| ch.is_ascii_digit())
}
