/// Which delimiter character a code fence uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    fn char(self) -> char {
        match self {
            FenceKind::Backticks => '`',
            FenceKind::Tildes => '~',
        }
    }
}

/// Code block syntax: fenced and indented forms.
pub struct CodeFence;

impl CodeFence {
    pub const MIN_LEN: usize = 3;
    pub const INDENT: &'static str = "    ";

    /// Picks the fence for a body and info string.
    ///
    /// Backtick fences cannot carry an info string containing a backtick,
    /// so tildes are used there. The fence is one longer than the longest
    /// run of the fence character opening any body line.
    pub fn fence_for(body: &str, info: &str) -> String {
        let kind = if info.contains('`') {
            FenceKind::Tildes
        } else {
            FenceKind::Backticks
        };
        let c = kind.char();
        let longest = body
            .lines()
            .map(|line| line.trim_start().chars().take_while(|&ch| ch == c).count())
            .max()
            .unwrap_or(0);
        c.to_string().repeat(Self::MIN_LEN.max(longest + 1))
    }

    /// Wraps `body` in a fence with `info` as the info string.
    pub fn fenced(body: &str, info: &str) -> String {
        let fence = Self::fence_for(body, info);
        let mut raw = String::with_capacity(body.len() + 2 * fence.len() + info.len() + 2);
        raw.push_str(&fence);
        raw.push_str(info);
        raw.push('\n');
        raw.push_str(body);
        if !body.is_empty() && !body.ends_with('\n') {
            raw.push('\n');
        }
        raw.push_str(&fence);
        raw
    }

    /// Re-indents `body` as an indented code block.
    ///
    /// Blank lines stay blank; every other line gets four spaces.
    pub fn indented(body: &str) -> String {
        let mut raw = String::with_capacity(body.len() + 16);
        for line in body.lines() {
            if !line.is_empty() {
                raw.push_str(Self::INDENT);
                raw.push_str(line);
            }
            raw.push('\n');
        }
        raw
    }

    /// Writes `code` as an inline code span.
    ///
    /// The delimiter is one backtick longer than the longest backtick run in
    /// `code`. Content that starts or ends with a backtick, or is wrapped in
    /// spaces on both sides, is padded with one space so the parser strips
    /// exactly that padding.
    pub fn span(code: &str) -> String {
        let longest = code
            .split(|c| c != '`')
            .map(str::len)
            .max()
            .unwrap_or(0);
        let delimiter = "`".repeat(longest + 1);
        let pad = code.starts_with('`')
            || code.ends_with('`')
            || (code.len() > 1 && code.starts_with(' ') && code.ends_with(' '));
        let space = if pad { " " } else { "" };
        format!("{delimiter}{space}{code}{space}{delimiter}")
    }
}
