/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, shared by extraction
/// and reconstruction.
pub struct BlockQuote;

impl BlockQuote {
    /// The prefix written in front of every quoted line.
    pub const PREFIX: &'static str = "> ";

    /// Prefixes every `\n`-separated line of `text`, empty ones included.
    pub fn quote_lines(text: &str, out: &mut String) {
        for line in text.split('\n') {
            out.push_str(Self::PREFIX);
            out.push_str(line);
            out.push('\n');
        }
    }

    /// Quotes `text` into a fresh string.
    pub fn quote(text: &str) -> String {
        let mut out = String::with_capacity(text.len() + 8);
        Self::quote_lines(text, &mut out);
        out
    }
}
