// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Recurrence rule builder for iCalendar, RFC 5545 Section 3.3.10.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::keyword::{
    KW_DAY_FR, KW_DAY_MO, KW_DAY_SA, KW_DAY_SU, KW_DAY_TH, KW_DAY_TU, KW_DAY_WE, KW_RRULE,
};
use crate::property::Property;
use crate::value::{DateTimeKind, Value, ValueDateTime};

/// Recurrence rule.
///
/// Fields are public so a rule can be built literally, the consuming
/// setters give the same result with less noise. The rule is validated when
/// encoded, not when built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceRule {
    /// Frequency of recurrence
    pub frequency: Frequency,
    /// Last instance bound, exclusive with `count`
    pub until: Option<ValueDateTime>,
    /// Number of occurrences, exclusive with `until`
    pub count: Option<u32>,
    /// Interval between recurrences, 1 when absent
    pub interval: Option<u32>,
    /// Second specifier
    pub by_second: Vec<u8>,
    /// Minute specifier
    pub by_minute: Vec<u8>,
    /// Hour specifier
    pub by_hour: Vec<u8>,
    /// Day of week specifier
    pub by_day: Vec<WeekDayNum>,
    /// Day of month specifier
    pub by_month_day: Vec<i8>,
    /// Day of year specifier
    pub by_year_day: Vec<i16>,
    /// Week number specifier
    pub by_week_no: Vec<i8>,
    /// Month specifier
    pub by_month: Vec<u8>,
    /// Position in the set of instances
    pub by_set_pos: Vec<i16>,
    /// Start day of week
    pub week_start: Option<WeekDay>,
}

impl RecurrenceRule {
    /// Rule with only a frequency.
    #[must_use]
    pub const fn new(frequency: Frequency) -> Self {
        Self {
            frequency,
            until: None,
            count: None,
            interval: None,
            by_second: Vec::new(),
            by_minute: Vec::new(),
            by_hour: Vec::new(),
            by_day: Vec::new(),
            by_month_day: Vec::new(),
            by_year_day: Vec::new(),
            by_week_no: Vec::new(),
            by_month: Vec::new(),
            by_set_pos: Vec::new(),
            week_start: None,
        }
    }

    /// Set the `UNTIL` bound.
    #[must_use]
    pub fn until(mut self, until: ValueDateTime) -> Self {
        self.until = Some(until);
        self
    }

    /// Set the `COUNT` bound.
    #[must_use]
    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Set the `INTERVAL`.
    #[must_use]
    pub fn interval(mut self, interval: u32) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Set `BYSECOND`.
    #[must_use]
    pub fn by_second(mut self, seconds: impl IntoIterator<Item = u8>) -> Self {
        self.by_second = seconds.into_iter().collect();
        self
    }

    /// Set `BYMINUTE`.
    #[must_use]
    pub fn by_minute(mut self, minutes: impl IntoIterator<Item = u8>) -> Self {
        self.by_minute = minutes.into_iter().collect();
        self
    }

    /// Set `BYHOUR`.
    #[must_use]
    pub fn by_hour(mut self, hours: impl IntoIterator<Item = u8>) -> Self {
        self.by_hour = hours.into_iter().collect();
        self
    }

    /// Set `BYDAY`.
    #[must_use]
    pub fn by_day(mut self, days: impl IntoIterator<Item = WeekDayNum>) -> Self {
        self.by_day = days.into_iter().collect();
        self
    }

    /// Set `BYMONTHDAY`.
    #[must_use]
    pub fn by_month_day(mut self, days: impl IntoIterator<Item = i8>) -> Self {
        self.by_month_day = days.into_iter().collect();
        self
    }

    /// Set `BYYEARDAY`.
    #[must_use]
    pub fn by_year_day(mut self, days: impl IntoIterator<Item = i16>) -> Self {
        self.by_year_day = days.into_iter().collect();
        self
    }

    /// Set `BYWEEKNO`.
    #[must_use]
    pub fn by_week_no(mut self, weeks: impl IntoIterator<Item = i8>) -> Self {
        self.by_week_no = weeks.into_iter().collect();
        self
    }

    /// Set `BYMONTH`.
    #[must_use]
    pub fn by_month(mut self, months: impl IntoIterator<Item = u8>) -> Self {
        self.by_month = months.into_iter().collect();
        self
    }

    /// Set `BYSETPOS`.
    #[must_use]
    pub fn by_set_pos(mut self, positions: impl IntoIterator<Item = i16>) -> Self {
        self.by_set_pos = positions.into_iter().collect();
        self
    }

    /// Set `WKST`.
    #[must_use]
    pub fn week_start(mut self, day: WeekDay) -> Self {
        self.week_start = Some(day);
        self
    }

    /// Check the rule against the RFC 5545 grammar.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidField`] naming the first offending part.
    pub fn validate(&self) -> Result<()> {
        if self.count.is_some() && self.until.is_some() {
            return Err(Error::invalid(
                "RRULE",
                "COUNT and UNTIL must not both be set",
            ));
        }
        if self.interval == Some(0) {
            return Err(Error::invalid("INTERVAL", "must be at least 1"));
        }
        if let Some(DateTimeKind::Zoned(_)) = self.until.as_ref().map(ValueDateTime::kind) {
            return Err(Error::invalid(
                "UNTIL",
                "must be a date, a floating date-time or a UTC date-time",
            ));
        }

        check_range("BYSECOND", &self.by_second, 0..=60, false)?;
        check_range("BYMINUTE", &self.by_minute, 0..=59, false)?;
        check_range("BYHOUR", &self.by_hour, 0..=23, false)?;
        check_range("BYMONTHDAY", &self.by_month_day, 1..=31, true)?;
        check_range("BYYEARDAY", &self.by_year_day, 1..=366, true)?;
        check_range("BYWEEKNO", &self.by_week_no, 1..=53, true)?;
        check_range("BYMONTH", &self.by_month, 1..=12, false)?;
        check_range("BYSETPOS", &self.by_set_pos, 1..=366, true)?;
        for day in &self.by_day {
            if let Some(n) = day.ordinal {
                check_ordinal(n)?;
            }
        }
        Ok(())
    }

    /// Value part, without the `RRULE:` prefix, e.g. `FREQ=WEEKLY;BYDAY=MO`.
    ///
    /// # Errors
    ///
    /// See [`RecurrenceRule::validate`].
    pub fn to_value_string(&self) -> Result<String> {
        self.validate()?;
        let mut out = String::new();
        crate::formatter::value::write_recurrence_rule(&mut out, self)
            .map_err(|_| Error::invalid("RRULE", "failed to render rule"))?;
        Ok(out)
    }

    /// Full content line, e.g. `RRULE:FREQ=DAILY;COUNT=5`.
    ///
    /// # Errors
    ///
    /// See [`RecurrenceRule::validate`].
    pub fn encode(&self) -> Result<String> {
        Ok(format!("{KW_RRULE}:{}", self.to_value_string()?))
    }

    /// `RRULE` property holding this rule.
    ///
    /// # Errors
    ///
    /// See [`RecurrenceRule::validate`].
    pub fn to_property(&self) -> Result<Property> {
        self.validate()?;
        Ok(Property::new(KW_RRULE, Value::Recur(self.clone())))
    }
}

fn check_range<T>(
    field: &'static str,
    values: &[T],
    range: std::ops::RangeInclusive<i32>,
    signed: bool,
) -> Result<()>
where
    T: Copy + Into<i32> + Display,
{
    for v in values {
        let n: i32 = (*v).into();
        let magnitude = if signed { n.abs() } else { n };
        if !range.contains(&magnitude) {
            let sign = if signed { "±" } else { "" };
            return Err(Error::invalid(
                field,
                format!(
                    "{v} is outside {sign}{}..={}",
                    range.start(),
                    range.end()
                ),
            ));
        }
    }
    Ok(())
}

fn check_ordinal(n: i8) -> Result<()> {
    if n == 0 || n.unsigned_abs() > 53 {
        return Err(Error::invalid(
            "BYDAY",
            format!("ordinal {n} must be non-zero and within ±53"),
        ));
    }
    Ok(())
}

/// Recurrence frequency
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[expect(missing_docs)]
pub enum Frequency {
    Secondly,
    Minutely,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// Day of the week
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(ascii_case_insensitive)]
#[expect(missing_docs)]
pub enum WeekDay {
    #[strum(serialize = "SU")]
    Sunday,
    #[strum(serialize = "MO")]
    Monday,
    #[strum(serialize = "TU")]
    Tuesday,
    #[strum(serialize = "WE")]
    Wednesday,
    #[strum(serialize = "TH")]
    Thursday,
    #[strum(serialize = "FR")]
    Friday,
    #[strum(serialize = "SA")]
    Saturday,
}

impl WeekDay {
    /// Two-letter RFC 5545 token.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            WeekDay::Sunday => KW_DAY_SU,
            WeekDay::Monday => KW_DAY_MO,
            WeekDay::Tuesday => KW_DAY_TU,
            WeekDay::Wednesday => KW_DAY_WE,
            WeekDay::Thursday => KW_DAY_TH,
            WeekDay::Friday => KW_DAY_FR,
            WeekDay::Saturday => KW_DAY_SA,
        }
    }
}

impl From<jiff::civil::Weekday> for WeekDay {
    fn from(value: jiff::civil::Weekday) -> Self {
        use jiff::civil::Weekday as W;
        match value {
            W::Sunday => WeekDay::Sunday,
            W::Monday => WeekDay::Monday,
            W::Tuesday => WeekDay::Tuesday,
            W::Wednesday => WeekDay::Wednesday,
            W::Thursday => WeekDay::Thursday,
            W::Friday => WeekDay::Friday,
            W::Saturday => WeekDay::Saturday,
        }
    }
}

/// Day of week with optional occurrence, `[±n]DD` in `BYDAY`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekDayNum {
    /// Occurrence within the month or year, never zero
    pub ordinal: Option<i8>,
    /// Day of the week
    pub day: WeekDay,
}

impl WeekDayNum {
    /// Every occurrence of `day`.
    #[must_use]
    pub const fn every(day: WeekDay) -> Self {
        Self { ordinal: None, day }
    }

    /// The `n`-th occurrence of `day`, negative counts from the end.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidField`] if `n` is zero or beyond ±53.
    pub fn nth(n: i8, day: WeekDay) -> Result<Self> {
        check_ordinal(n)?;
        Ok(Self {
            ordinal: Some(n),
            day,
        })
    }
}

impl From<WeekDay> for WeekDayNum {
    fn from(day: WeekDay) -> Self {
        Self::every(day)
    }
}

impl Display for WeekDayNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(n) = self.ordinal {
            write!(f, "{n}")?;
        }
        f.write_str(self.day.token())
    }
}

impl FromStr for WeekDayNum {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let split = s
            .char_indices()
            .find(|(_, c)| c.is_ascii_alphabetic())
            .map_or(s.len(), |(i, _)| i);
        let (num, day) = s.split_at(split);

        let day = WeekDay::from_str(day)
            .map_err(|_| Error::invalid("BYDAY", format!("unknown weekday in {s:?}")))?;
        if num.is_empty() {
            return Ok(Self::every(day));
        }

        let digits = num.trim_start_matches(['+', '-']);
        if digits.is_empty() || digits.len() > 2 || num.len() - digits.len() > 1 {
            return Err(Error::invalid("BYDAY", format!("malformed ordinal in {s:?}")));
        }
        let n: i8 = num
            .strip_prefix('+')
            .unwrap_or(num)
            .parse()
            .map_err(|_| Error::invalid("BYDAY", format!("malformed ordinal in {s:?}")))?;
        Self::nth(n, day)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_frequency_tokens() {
        let tokens: Vec<String> = Frequency::iter().map(|f| f.to_string()).collect();
        assert_eq!(
            tokens,
            [
                "SECONDLY", "MINUTELY", "HOURLY", "DAILY", "WEEKLY", "MONTHLY", "YEARLY"
            ]
        );
        assert_eq!(Frequency::from_str("weekly").unwrap(), Frequency::Weekly);
    }

    #[test]
    fn test_weekday_tokens_round_trip() {
        for day in WeekDay::iter() {
            assert_eq!(WeekDay::from_str(day.token()).unwrap(), day);
            assert_eq!(day.to_string(), day.token());
        }
    }

    #[test]
    fn test_weekdaynum_parse() {
        assert_eq!(
            WeekDayNum::from_str("2MO").unwrap(),
            WeekDayNum::nth(2, WeekDay::Monday).unwrap()
        );
        assert_eq!(
            WeekDayNum::from_str("-1FR").unwrap(),
            WeekDayNum::nth(-1, WeekDay::Friday).unwrap()
        );
        assert_eq!(
            WeekDayNum::from_str("+3TU").unwrap(),
            WeekDayNum::nth(3, WeekDay::Tuesday).unwrap()
        );
        assert_eq!(
            WeekDayNum::from_str("SU").unwrap(),
            WeekDayNum::every(WeekDay::Sunday)
        );
        assert!(WeekDayNum::from_str("0MO").is_err());
        assert!(WeekDayNum::from_str("54MO").is_err());
        assert!(WeekDayNum::from_str("--1MO").is_err());
        assert!(WeekDayNum::from_str("1XX").is_err());
    }

    #[test]
    fn test_weekdaynum_display() {
        assert_eq!(WeekDayNum::nth(-1, WeekDay::Friday).unwrap().to_string(), "-1FR");
        assert_eq!(WeekDayNum::every(WeekDay::Sunday).to_string(), "SU");
    }

    #[test]
    fn test_validate_count_and_until_exclusive() {
        let rule = RecurrenceRule::new(Frequency::Daily)
            .count(3)
            .until(ValueDateTime::date(2024, 12, 31).unwrap());
        assert!(matches!(
            rule.validate(),
            Err(Error::InvalidField { field: "RRULE", .. })
        ));
    }

    #[test]
    fn test_validate_interval_zero() {
        let rule = RecurrenceRule::new(Frequency::Daily).interval(0);
        assert!(rule.validate().is_err());
    }

    #[test]
    fn test_validate_zoned_until() {
        let until = ValueDateTime::zoned("Europe/Paris", 2024, 12, 31, 0, 0, 0).unwrap();
        let rule = RecurrenceRule::new(Frequency::Daily).until(until);
        assert!(matches!(
            rule.validate(),
            Err(Error::InvalidField { field: "UNTIL", .. })
        ));
    }

    #[test]
    fn test_validate_by_ranges() {
        let ok = RecurrenceRule::new(Frequency::Yearly)
            .by_second([0, 60])
            .by_month_day([-31, 1, 31])
            .by_year_day([-366, 366])
            .by_week_no([-53, 53])
            .by_month([1, 12])
            .by_set_pos([-1]);
        assert!(ok.validate().is_ok());

        for bad in [
            RecurrenceRule::new(Frequency::Yearly).by_second([61]),
            RecurrenceRule::new(Frequency::Yearly).by_minute([60]),
            RecurrenceRule::new(Frequency::Yearly).by_hour([24]),
            RecurrenceRule::new(Frequency::Yearly).by_month_day([0]),
            RecurrenceRule::new(Frequency::Yearly).by_month_day([32]),
            RecurrenceRule::new(Frequency::Yearly).by_year_day([-367]),
            RecurrenceRule::new(Frequency::Yearly).by_week_no([0]),
            RecurrenceRule::new(Frequency::Yearly).by_month([0]),
            RecurrenceRule::new(Frequency::Yearly).by_month([13]),
            RecurrenceRule::new(Frequency::Yearly).by_set_pos([0]),
        ] {
            assert!(bad.validate().is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_validate_rejects_literal_zero_ordinal() {
        let rule = RecurrenceRule {
            by_day: vec![WeekDayNum {
                ordinal: Some(0),
                day: WeekDay::Monday,
            }],
            ..RecurrenceRule::new(Frequency::Monthly)
        };
        assert!(rule.validate().is_err());
    }

    #[test]
    fn test_to_property() {
        let prop = RecurrenceRule::new(Frequency::Daily).to_property().unwrap();
        assert_eq!(prop.name(), "RRULE");
        assert!(matches!(prop.value(), Value::Recur(_)));
    }
}
