use std::fmt;

/// Longest save name kept after sanitization, in characters.
pub const MAX_SLOT_NAME: usize = 59;

/// Substituted when sanitization leaves nothing behind.
pub const FALLBACK_NAME: &str = "!";

const REPLACEMENT: char = '_';

/// A user-chosen save identifier that is safe to use as a filename stem.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotName(String);

impl SlotName {
    pub fn sanitize(raw: &str) -> Self {
        sanitize(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SlotName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SlotName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Punctuation accepted verbatim in save names.
pub fn is_allowed_symbol(ch: char) -> bool {
    matches!(
        ch,
        '-' | '+' | '!' | ',' | '=' | '^' | '@' | '#' | '$' | '%' | '&' | '\'' | '(' | ')' | '['
            | ']'
    )
}

fn is_kept(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || is_allowed_symbol(ch) || !ch.is_ascii()
}

/// Turn arbitrary user input into a [`SlotName`].
///
/// Never fails: leading and repeated spaces are dropped, characters that are
/// unsafe in filenames become `_`, the result is cut to [`MAX_SLOT_NAME`]
/// characters and stripped of trailing spaces. An empty result becomes
/// [`FALLBACK_NAME`].
pub fn sanitize(raw: &str) -> SlotName {
    let mut out = String::with_capacity(raw.len().min(MAX_SLOT_NAME * 4));
    let mut count = 0usize;

    for ch in raw.chars() {
        if count == MAX_SLOT_NAME {
            break;
        }
        if ch == ' ' {
            if out.is_empty() || out.ends_with(' ') {
                continue;
            }
            out.push(' ');
        } else if is_kept(ch) {
            out.push(ch);
        } else {
            out.push(REPLACEMENT);
        }
        count += 1;
    }

    let trimmed_len = out.trim_end_matches(' ').len();
    out.truncate(trimmed_len);

    if out.is_empty() {
        out.push_str(FALLBACK_NAME);
    }
    SlotName(out)
}
