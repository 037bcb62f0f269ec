// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Value formatting for iCalendar values.
//!
//! This module provides functions to format the iCalendar value types
//! as defined in RFC 5545 Section 3.3.

use std::fmt::{self, Write};

use crate::error::{Error, Result};
use crate::keyword::{
    KW_RRULE_BYDAY, KW_RRULE_BYHOUR, KW_RRULE_BYMINUTE, KW_RRULE_BYMONTH, KW_RRULE_BYMONTHDAY,
    KW_RRULE_BYSECOND, KW_RRULE_BYSETPOS, KW_RRULE_BYWEEKNO, KW_RRULE_BYYEARDAY, KW_RRULE_COUNT,
    KW_RRULE_FREQ, KW_RRULE_INTERVAL, KW_RRULE_UNTIL, KW_RRULE_WKST,
};
use crate::value::{
    DateTimeKind, DurationParts, RecurrenceRule, Value, ValueDate, ValueDateTime, ValueDuration,
    ValueTime, ValueUtcOffset, escape_text, neutralize_line_breaks,
};

/// Format a value.
///
/// This is the main entry point for formatting values.
pub(crate) fn write_value<W: Write>(w: &mut W, value: &Value) -> Result<()> {
    match value {
        Value::Text(text) => w.write_str(&escape_text(text)).map_err(fmt_error)?,
        // Tokens and addresses are not escaped, only kept on one line
        Value::Token(raw) | Value::CalAddress(raw) => w
            .write_str(&neutralize_line_breaks(raw))
            .map_err(fmt_error)?,
        Value::DateTime(datetime) => write_date_time(w, datetime).map_err(fmt_error)?,
        Value::Duration(duration) => write_duration(w, *duration).map_err(fmt_error)?,
        Value::Integer(int) => write!(w, "{int}").map_err(fmt_error)?,
        Value::IntegerList(ints) => write_list(w, ints).map_err(fmt_error)?,
        Value::UtcOffset(offset) => write_utc_offset(w, *offset).map_err(fmt_error)?,
        Value::Recur(rule) => {
            rule.validate()?;
            write_recurrence_rule(w, rule).map_err(fmt_error)?;
        }
        Value::List(values) => {
            for (i, value) in values.iter().enumerate() {
                if i > 0 {
                    w.write_char(',').map_err(fmt_error)?;
                }
                write_value(w, value)?;
            }
        }
    }
    Ok(())
}

fn fmt_error(_: fmt::Error) -> Error {
    Error::invalid("value", "formatter rejected the output")
}

/// Format a date value as `YYYYMMDD`.
pub(crate) fn write_date<W: Write>(w: &mut W, date: ValueDate) -> fmt::Result {
    write!(w, "{:04}{:02}{:02}", date.year, date.month, date.day)
}

/// Format a time value as `HHMMSS`.
pub(crate) fn write_time<W: Write>(w: &mut W, time: ValueTime) -> fmt::Result {
    write!(w, "{:02}{:02}{:02}", time.hour, time.minute, time.second)
}

/// Format a date-time value as `YYYYMMDD`, `YYYYMMDDTHHMMSS` or
/// `YYYYMMDDTHHMMSSZ`. A zoned value uses the floating layout, its zone is
/// carried by the `TZID` parameter.
pub(crate) fn write_date_time<W: Write>(w: &mut W, datetime: &ValueDateTime) -> fmt::Result {
    write_date(w, datetime.date)?;
    match datetime.kind {
        DateTimeKind::Date => Ok(()),
        DateTimeKind::Floating | DateTimeKind::Zoned(_) => {
            w.write_char('T')?;
            write_time(w, datetime.time)
        }
        DateTimeKind::Utc => {
            w.write_char('T')?;
            write_time(w, datetime.time)?;
            w.write_char('Z')
        }
    }
}

/// Format a duration value as `PnW` or `P[n]DT[n]H[n]M[n]S` (RFC 5545 Section 3.3.6).
pub(crate) fn write_duration<W: Write>(w: &mut W, duration: ValueDuration) -> fmt::Result {
    match duration.parts() {
        DurationParts::Week { negative, week } => {
            if negative {
                w.write_char('-')?;
            }
            write!(w, "P{week}W")
        }
        DurationParts::DateTime {
            negative,
            day,
            hour,
            minute,
            second,
        } => {
            if negative {
                w.write_char('-')?;
            }
            w.write_char('P')?;

            // Only include components that are non-zero
            if day > 0 {
                write!(w, "{day}D")?;
            }
            if hour > 0 || minute > 0 || second > 0 {
                w.write_char('T')?;
            }
            if hour > 0 {
                write!(w, "{hour}H")?;
            }
            if minute > 0 {
                write!(w, "{minute}M")?;
            }
            if second > 0 {
                write!(w, "{second}S")?;
            }
            // All zero still needs a designator
            if day == 0 && hour == 0 && minute == 0 && second == 0 {
                w.write_str("T0S")?;
            }
            Ok(())
        }
    }
}

/// Format a UTC offset value as `+HHMM` or `-HHMM` (with optional seconds).
pub(crate) fn write_utc_offset<W: Write>(w: &mut W, offset: ValueUtcOffset) -> fmt::Result {
    let sign = if offset.seconds < 0 { '-' } else { '+' };
    let total = offset.seconds.unsigned_abs();
    let (hour, minute, second) = (total / 3600, total % 3600 / 60, total % 60);
    write!(w, "{sign}{hour:02}{minute:02}")?;
    if second > 0 {
        write!(w, "{second:02}")?;
    }
    Ok(())
}

/// Format a recurrence rule value (RFC 5545 Section 3.3.10).
///
/// The rule is assumed validated. Parts are written in a fixed order so the
/// output does not depend on how the rule was built.
pub(crate) fn write_recurrence_rule<W: Write>(w: &mut W, rule: &RecurrenceRule) -> fmt::Result {
    // FREQ is required
    write!(w, "{KW_RRULE_FREQ}={}", rule.frequency)?;

    if let Some(until) = &rule.until {
        write!(w, ";{KW_RRULE_UNTIL}=")?;
        write_date_time(w, until)?;
    }
    if let Some(count) = rule.count {
        write!(w, ";{KW_RRULE_COUNT}={count}")?;
    }
    if let Some(interval) = rule.interval.filter(|i| *i != 1) {
        write!(w, ";{KW_RRULE_INTERVAL}={interval}")?;
    }

    write_rule_part(w, KW_RRULE_BYSECOND, &rule.by_second)?;
    write_rule_part(w, KW_RRULE_BYMINUTE, &rule.by_minute)?;
    write_rule_part(w, KW_RRULE_BYHOUR, &rule.by_hour)?;
    write_rule_part(w, KW_RRULE_BYDAY, &rule.by_day)?;
    write_rule_part(w, KW_RRULE_BYMONTHDAY, &rule.by_month_day)?;
    write_rule_part(w, KW_RRULE_BYYEARDAY, &rule.by_year_day)?;
    write_rule_part(w, KW_RRULE_BYWEEKNO, &rule.by_week_no)?;
    write_rule_part(w, KW_RRULE_BYMONTH, &rule.by_month)?;
    write_rule_part(w, KW_RRULE_BYSETPOS, &rule.by_set_pos)?;

    if let Some(wkst) = rule.week_start {
        write!(w, ";{KW_RRULE_WKST}={wkst}")?;
    }
    Ok(())
}

fn write_rule_part<W: Write, T: fmt::Display>(w: &mut W, name: &str, values: &[T]) -> fmt::Result {
    if values.is_empty() {
        return Ok(());
    }
    write!(w, ";{name}=")?;
    write_list(w, values)
}

fn write_list<W: Write, T: fmt::Display>(w: &mut W, values: &[T]) -> fmt::Result {
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            w.write_char(',')?;
        }
        write!(w, "{v}")?;
    }
    Ok(())
}
