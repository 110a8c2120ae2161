/// ATX heading syntax.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';

    /// `'#' x level`, a space, then `text`.
    pub fn atx(level: u8, text: &str) -> String {
        let mut raw = String::with_capacity(level as usize + 1 + text.len());
        for _ in 0..level {
            raw.push(Self::MARKER);
        }
        raw.push(' ');
        raw.push_str(text);
        raw
    }

    /// Upper-cases the first code point of `text`.
    ///
    /// Works on code points, so `"élan"` becomes `"Élan"`. Uses the full
    /// Unicode upper case mapping, so a character whose upper case form is
    /// several code points expands (`ß` becomes `SS`) instead of being kept
    /// as a single-code-point mapping would.
    pub fn capitalize(text: &str) -> String {
        let mut chars = text.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}
