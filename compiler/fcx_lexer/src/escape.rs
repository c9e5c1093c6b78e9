//! Escape sequence processing for string and character literals.
//!
//! Recognized escapes: `\n`, `\t`, `\r`, `\0`, `\\`, `\"`, `\'`, `\a`,
//! `\b`, `\f`, `\v`. Anything else is kept as written, backslash included.

#[cfg(test)]
mod tests;

/// Resolve the character after a backslash.
#[inline]
pub(crate) fn resolve_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '0' => Some('\0'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        '\'' => Some('\''),
        'a' => Some('\u{07}'),
        'b' => Some('\u{08}'),
        'f' => Some('\u{0C}'),
        'v' => Some('\u{0B}'),
        _ => None,
    }
}

/// Process the body of a string literal (quotes excluded).
pub(crate) fn unescape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some(esc) => match resolve_escape(esc) {
                Some(resolved) => result.push(resolved),
                None => {
                    result.push('\\');
                    result.push(esc);
                }
            },
            None => result.push('\\'),
        }
    }

    result
}

/// Process the body of a character literal (quotes excluded).
///
/// Returns `None` for an empty body. An unknown escape yields the escaped
/// character itself.
pub(crate) fn unescape_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match chars.next()? {
        '\\' => {
            let esc = chars.next()?;
            Some(resolve_escape(esc).unwrap_or(esc))
        }
        c => Some(c),
    }
}
