// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! iCalendar (RFC 5545) formatter module.
//!
//! This module renders a [`Component`] tree to the RFC 5545 text format:
//! one CRLF-terminated content line per property, with `BEGIN`/`END`
//! lines around every component and long lines folded.
//!
//! # Example
//!
//! ```
//! use calforge_ical::{Component, Property, formatter};
//!
//! let calendar = Component::new("VCALENDAR").with_property(Property::token("VERSION", "2.0"));
//! let ics = formatter::serialize(&calendar).unwrap();
//! assert_eq!(ics, "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nEND:VCALENDAR\r\n");
//! ```

mod component;
mod parameter;
pub(crate) mod property;
pub(crate) mod value;

use std::io::{self, Write};

use crate::component::Component;
use crate::error::{Error, Result};
use crate::formatter::component::write_component;

/// Render a component tree with the default options.
///
/// Either the whole tree is rendered or an error is returned, no partial
/// output is produced.
///
/// # Errors
///
/// Returns [`Error::InvalidField`] for an invalid component kind, property
/// name or recurrence rule anywhere in the tree.
pub fn serialize(component: &Component) -> Result<String> {
    FormatOptions::default().write_to_string(component)
}

/// Formatting options for the iCalendar formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Maximum line length in octets before folding.
    /// - `None`: no line folding
    /// - `Some(n)`: fold lines longer than n octets
    ///
    /// Default: `Some(75)` for RFC 5545 compliance.
    pub folding: Option<usize>,

    /// Line folding style.
    ///
    /// Default: `FoldingStyle::Space` (CRLF + SPACE).
    pub folding_style: FoldingStyle,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            folding: Some(75),
            folding_style: FoldingStyle::default(),
        }
    }
}

impl FormatOptions {
    /// Set the line folding option.
    #[must_use]
    pub const fn folding(mut self, folding: Option<usize>) -> Self {
        self.folding = folding;
        self
    }

    /// Set the line folding style.
    #[must_use]
    pub const fn folding_style(mut self, style: FoldingStyle) -> Self {
        self.folding_style = style;
        self
    }

    /// Write a component tree to any `Write` implementer.
    ///
    /// The tree is rendered in memory first, so nothing reaches `w` when
    /// rendering fails.
    ///
    /// # Errors
    /// Returns an error if the tree is invalid or if writing fails.
    pub fn write(&self, component: &Component, w: &mut impl Write) -> Result<()> {
        let rendered = self.write_to_string(component)?;
        w.write_all(rendered.as_bytes())?;
        Ok(())
    }

    /// Render a component tree to a `String`.
    ///
    /// # Errors
    /// Returns an error if the tree is invalid.
    pub fn write_to_string(&self, component: &Component) -> Result<String> {
        let mut formatter = Formatter::new(Vec::new(), *self);
        write_component(&mut formatter, component)?;
        let buffer = formatter.into_writer();
        let out = String::from_utf8(buffer)
            .map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))?;
        tracing::debug!(
            kind = component.kind(),
            bytes = out.len(),
            "serialized component"
        );
        Ok(out)
    }
}

/// Line folding style for RFC 5545 formatting.
///
/// RFC 5545 specifies that folded lines should start with CRLF followed by
/// a whitespace character (SPACE or TAB).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FoldingStyle {
    /// CRLF + SPACE (RFC 5545 default)
    #[default]
    Space,
    /// CRLF + TAB
    Tab,
}

impl FoldingStyle {
    /// Get the folding sequence for this style.
    #[must_use]
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Space => "\r\n ",
            Self::Tab => "\r\n\t",
        }
    }

    /// Get the length of the continuation character after CRLF.
    #[must_use]
    pub(crate) const fn continuation_len() -> usize {
        1 // Both SPACE and TAB are 1 byte
    }
}

/// Fold one content line (without its CRLF) per RFC 5545 Section 3.1.
///
/// A fold is never placed inside a UTF-8 code point nor between a
/// backslash and the character it escapes. Every physical line stays within
/// the limit unless the limit is smaller than one such unit.
#[must_use]
pub fn fold_line(line: &str, options: &FormatOptions) -> String {
    let Some(limit) = options.folding else {
        return line.to_string();
    };
    if line.len() <= limit {
        return line.to_string();
    }

    let continuation = FoldingStyle::continuation_len();
    let mut out = String::with_capacity(line.len() + line.len() / limit * 3);
    let mut line_length = 0;
    let mut line_start = 0; // octets that are not content on the current physical line

    let mut rest = line;
    while let Some(unit) = next_unit(rest) {
        if line_length + unit.len() > limit && line_length > line_start {
            out.push_str(options.folding_style.as_str());
            line_length = continuation;
            line_start = continuation;
        }
        out.push_str(unit);
        line_length += unit.len();
        rest = rest.split_at(unit.len()).1;
    }
    out
}

/// Next indivisible unit: one code point, or a backslash with the code
/// point it escapes.
fn next_unit(s: &str) -> Option<&str> {
    let mut chars = s.char_indices();
    let (_, first) = chars.next()?;
    let end = if first == '\\' {
        chars.next().map_or(s.len(), |(i, c)| i + c.len_utf8())
    } else {
        first.len_utf8()
    };
    s.get(..end)
}

/// Line writer shared by the component and property writers.
#[derive(Debug)]
pub(crate) struct Formatter<W: Write> {
    writer: W,
    options: FormatOptions,
}

impl<W: Write> Formatter<W> {
    pub(crate) fn new(writer: W, options: FormatOptions) -> Self {
        Self { writer, options }
    }

    pub(crate) fn into_writer(self) -> W {
        self.writer
    }

    /// Write one content line, folded, followed by CRLF.
    pub(crate) fn write_line(&mut self, line: &str) -> io::Result<()> {
        let folded = fold_line(line, &self.options);
        tracing::trace!(bytes = folded.len(), "write content line");
        self.writer.write_all(folded.as_bytes())?;
        self.writer.write_all(b"\r\n")
    }
}
