//! Escape sequences in string literals.
//!
//! Recognized: `\n`, `\t`, `\r`, `\\`, `\"`, `\0`. Anything else is kept
//! as written, backslash included.

#[inline]
fn resolve_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        '0' => Some('\0'),
        _ => None,
    }
}

/// Decode the body of a string literal (quotes already stripped).
pub(crate) fn unescape_string(body: &str) -> String {
    let mut result = String::with_capacity(body.len());
    let mut chars = body.chars();

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
