// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Typed property values and their encoders.
//!
//! This module holds the value types defined in RFC 5545 Section 3.3 that
//! the builder emits. Rendering lives in [`crate::formatter`].

mod datetime;
mod duration;
mod rrule;
mod text;

pub use datetime::{DateTimeKind, ValueDate, ValueDateTime, ValueTime, ValueUtcOffset};
pub(crate) use duration::DurationParts;
pub use duration::ValueDuration;
pub use rrule::{Frequency, RecurrenceRule, WeekDay, WeekDayNum};
pub(crate) use text::neutralize_line_breaks;
pub use text::{escape_text, unescape_text};

use crate::error::Result;

/// A property value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Free-form text, escaped on output
    Text(String),

    /// Date, date-time or zoned date-time
    DateTime(ValueDateTime),

    /// Signed duration
    Duration(ValueDuration),

    /// Single integer
    Integer(i64),

    /// Comma-separated integers
    IntegerList(Vec<i64>),

    /// Enumerated token such as `OPAQUE` or `2.0`, written verbatim
    Token(String),

    /// Comma-separated values
    List(Vec<Value>),

    /// Calendar user address (URI), written verbatim
    CalAddress(String),

    /// UTC offset, `+HHMM[SS]`
    UtcOffset(ValueUtcOffset),

    /// Recurrence rule, validated on output
    Recur(RecurrenceRule),
}

impl Value {
    /// Encode into the RFC 5545 value string.
    ///
    /// The result never contains a raw line break.
    ///
    /// # Errors
    ///
    /// Fails only when a [`Value::Recur`] rule is invalid, see
    /// [`RecurrenceRule::validate`].
    pub fn encode(&self) -> Result<String> {
        let mut out = String::new();
        crate::formatter::value::write_value(&mut out, self)?;
        Ok(out)
    }

    /// Text value.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Token value.
    pub fn token(token: impl Into<String>) -> Self {
        Self::Token(token.into())
    }
}

impl From<ValueDateTime> for Value {
    fn from(value: ValueDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<ValueDuration> for Value {
    fn from(value: ValueDuration) -> Self {
        Self::Duration(value)
    }
}

impl From<ValueUtcOffset> for Value {
    fn from(value: ValueUtcOffset) -> Self {
        Self::UtcOffset(value)
    }
}

impl From<RecurrenceRule> for Value {
    fn from(value: RecurrenceRule) -> Self {
        Self::Recur(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}
