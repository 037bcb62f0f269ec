// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Text value escaping as defined in RFC 5545 Section 3.3.11.

/// Escape text for a TEXT property value.
///
/// Backslash is escaped first so the escapes introduced afterwards are not
/// doubled. Carriage returns are dropped; a CRLF pair becomes a single `\n`.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            ',' => out.push_str("\\,"),
            ';' => out.push_str("\\;"),
            '\r' => {}
            c => out.push(c),
        }
    }
    out
}

/// Reverse [`escape_text`].
///
/// Both `\n` and `\N` decode to a line feed. An unknown escape keeps the
/// escaped character and a trailing lone backslash is kept as-is.
#[must_use]
pub fn unescape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n' | 'N') => out.push('\n'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// Render CR and LF in a raw (non-text) value as the two-octet `\n`, so the
/// value can never break the content line.
pub(crate) fn neutralize_line_breaks(raw: &str) -> std::borrow::Cow<'_, str> {
    if !raw.contains(['\r', '\n']) {
        return std::borrow::Cow::Borrowed(raw);
    }
    std::borrow::Cow::Owned(raw.replace("\r\n", "\\n").replace(['\r', '\n'], "\\n"))
}
