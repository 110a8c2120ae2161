/// List syntax: markers, numbering and orderedness detection.
///
/// Lists are always written back with `-` or `1.`-style markers, one item
/// per line, regardless of the marker the source used.
pub struct ListMarkers;

impl ListMarkers {
    pub const BULLET: &'static str = "- ";

    /// Whether a list's `raw` form is ordered: its first non-whitespace
    /// character is a digit.
    pub fn is_ordered(raw: &str) -> bool {
        raw.trim_start()
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit())
    }

    /// Writes `items` as list lines, numbering from 1 when `ordered`.
    pub fn write<'a>(items: impl IntoIterator<Item = &'a str>, ordered: bool) -> String {
        let mut raw = String::new();
        for (index, item) in items.into_iter().enumerate() {
            if ordered {
                raw.push_str(&(index + 1).to_string());
                raw.push_str(". ");
            } else {
                raw.push_str(Self::BULLET);
            }
            raw.push_str(item);
            raw.push('\n');
        }
        raw
    }
}

/// Collapses a multi-line fragment onto one line.
///
/// Every line is trimmed and empty lines dropped; the remaining lines are
/// joined with single spaces.
pub fn one_line(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(line);
    }
    out
}
