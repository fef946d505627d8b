/// Width of stdout when it is a terminal.
pub fn terminal_width() -> Option<usize> {
    terminal_size::terminal_size().map(|(terminal_size::Width(w), _)| w as usize)
}

/// Rendered width of one `[label]` chip.
fn chip_width(label: &str) -> usize {
    label.chars().count() + 2
}

/// Split chip labels into rows that fit in `width` columns after `indent`.
///
/// Chips are separated by one space. A chip wider than the row still gets a
/// row of its own, so no label is ever dropped.
pub fn chip_rows<'a>(labels: &[&'a str], width: Option<usize>, indent: usize) -> Vec<Vec<&'a str>> {
    let Some(width) = width else {
        return if labels.is_empty() {
            Vec::new()
        } else {
            vec![labels.to_vec()]
        };
    };

    let available = width.saturating_sub(indent);
    let mut rows: Vec<Vec<&str>> = Vec::new();
    let mut used = 0;

    for &label in labels {
        let needed = chip_width(label);
        match rows.last_mut() {
            Some(row) if used + 1 + needed <= available => {
                row.push(label);
                used += 1 + needed;
            }
            _ => {
                rows.push(vec![label]);
                used = needed;
            }
        }
    }

    rows
}
