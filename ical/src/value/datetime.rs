// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Date, date-time and UTC offset values as defined in RFC 5545 Sections
//! 3.3.4, 3.3.5 and 3.3.14.

use crate::error::{Error, Result};
use crate::timezone::is_utc_identifier;

/// Date value in the iCalendar format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValueDate {
    /// Year component, 0-9999.
    pub(crate) year: u16,

    /// Month component, 1-12.
    pub(crate) month: u8,

    /// Day component, 1-31.
    pub(crate) day: u8,
}

impl ValueDate {
    /// Create a validated date.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EncodingOverflow`] if the year does not fit four digits
    /// and [`Error::InvalidField`] if the triple is not a calendar date.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self> {
        let year = u16::try_from(year)
            .ok()
            .filter(|y| *y <= 9999)
            .ok_or_else(|| Error::overflow("year", year))?;

        #[expect(clippy::cast_possible_wrap)]
        let valid = month <= 12
            && day <= 31
            && jiff::civil::Date::new(year as i16, month as i8, day as i8).is_ok();
        if !valid {
            return Err(Error::invalid(
                "date",
                format!("{year:04}-{month:02}-{day:02} is not a calendar date"),
            ));
        }

        Ok(Self { year, month, day })
    }

    /// Year component.
    #[must_use]
    pub const fn year(self) -> u16 {
        self.year
    }

    /// Month component.
    #[must_use]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Day component.
    #[must_use]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Convert to `jiff::civil::Date`.
    #[must_use]
    #[expect(clippy::cast_possible_wrap)]
    pub fn civil_date(self) -> jiff::civil::Date {
        // fields were range-checked in the constructor
        jiff::civil::date(self.year as i16, self.month as i8, self.day as i8)
    }
}

/// Time of day, without any zone information.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValueTime {
    /// Hour component, 0-23.
    pub(crate) hour: u8,

    /// Minute component, 0-59.
    pub(crate) minute: u8,

    /// Second component, 0-60 (60 is a leap second).
    pub(crate) second: u8,
}

impl ValueTime {
    /// Create a validated time of day.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidField`] if any component is out of range.
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self> {
        if hour > 23 || minute > 59 || second > 60 {
            return Err(Error::invalid(
                "time",
                format!("{hour:02}:{minute:02}:{second:02} is not a time of day"),
            ));
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Hour component.
    #[must_use]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    /// Minute component.
    #[must_use]
    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// Second component.
    #[must_use]
    pub const fn second(self) -> u8 {
        self.second
    }
}

/// How a date-time relates to a time zone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DateTimeKind {
    /// A calendar date with no time of day.
    Date,
    /// Local time with no zone, interpreted in the viewer's zone.
    Floating,
    /// Absolute time in UTC, rendered with a trailing `Z`.
    Utc,
    /// Local time in a named zone, carried out-of-band as a `TZID` parameter.
    Zoned(String),
}

/// Date-Time value defined in the RFC 5545 Section 3.3.5, together with its
/// zone classification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValueDateTime {
    pub(crate) date: ValueDate,
    pub(crate) time: ValueTime,
    pub(crate) kind: DateTimeKind,
}

impl ValueDateTime {
    /// A date without time of day (`VALUE=DATE`).
    ///
    /// # Errors
    ///
    /// See [`ValueDate::new`].
    pub fn date(year: i32, month: u8, day: u8) -> Result<Self> {
        Ok(Self {
            date: ValueDate::new(year, month, day)?,
            time: ValueTime::default(),
            kind: DateTimeKind::Date,
        })
    }

    /// A floating (local, zone-less) date-time.
    ///
    /// # Errors
    ///
    /// See [`ValueDate::new`] and [`ValueTime::new`].
    pub fn floating(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Result<Self> {
        Self::with_kind(year, month, day, hour, minute, second, DateTimeKind::Floating)
    }

    /// A UTC date-time.
    ///
    /// # Errors
    ///
    /// See [`ValueDate::new`] and [`ValueTime::new`].
    pub fn utc(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Result<Self> {
        Self::with_kind(year, month, day, hour, minute, second, DateTimeKind::Utc)
    }

    /// A date-time in the named zone.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidField`] if the identifier cannot be carried in
    /// a `TZID` parameter, otherwise see [`ValueDate::new`] and
    /// [`ValueTime::new`].
    #[expect(clippy::too_many_arguments)]
    pub fn zoned(
        tzid: impl Into<String>,
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self> {
        let tzid = tzid.into();
        validate_tzid(&tzid)?;
        Self::with_kind(year, month, day, hour, minute, second, DateTimeKind::Zoned(tzid))
    }

    #[expect(clippy::too_many_arguments)]
    fn with_kind(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        kind: DateTimeKind,
    ) -> Result<Self> {
        Ok(Self {
            date: ValueDate::new(year, month, day)?,
            time: ValueTime::new(hour, minute, second)?,
            kind,
        })
    }

    /// The current instant as a UTC date-time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EncodingOverflow`] if the system clock is set before
    /// year 0.
    pub fn now_utc() -> Result<Self> {
        Self::try_from(jiff::Timestamp::now())
    }

    /// Date part.
    #[must_use]
    pub const fn date_part(&self) -> ValueDate {
        self.date
    }

    /// Time part; all zero for [`DateTimeKind::Date`].
    #[must_use]
    pub const fn time_part(&self) -> ValueTime {
        self.time
    }

    /// Zone classification.
    #[must_use]
    pub const fn kind(&self) -> &DateTimeKind {
        &self.kind
    }

    /// Whether this is a plain date.
    #[must_use]
    pub const fn is_date(&self) -> bool {
        matches!(self.kind, DateTimeKind::Date)
    }

    /// The `TZID` that must accompany this value, if any.
    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        match &self.kind {
            DateTimeKind::Zoned(tzid) => Some(tzid),
            _ => None,
        }
    }

    /// Rewrite a zoned value whose identifier names UTC into the UTC kind.
    ///
    /// `TZID=UTC` is not portable; consumers expect the `Z` form instead.
    #[must_use]
    pub fn normalized(self) -> Self {
        match &self.kind {
            DateTimeKind::Zoned(tzid) if is_utc_identifier(tzid) => Self {
                kind: DateTimeKind::Utc,
                ..self
            },
            _ => self,
        }
    }

    /// Civil date-time, ignoring the zone. A leap second is clamped to `:59`.
    #[must_use]
    #[expect(clippy::cast_possible_wrap)]
    pub fn civil_date_time(&self) -> jiff::civil::DateTime {
        self.date.civil_date().at(
            self.time.hour as i8,
            self.time.minute as i8,
            self.time.second.min(59) as i8,
            0,
        )
    }
}

impl TryFrom<jiff::civil::Date> for ValueDateTime {
    type Error = Error;

    fn try_from(value: jiff::civil::Date) -> Result<Self> {
        #[expect(clippy::cast_sign_loss)]
        Self::date(i32::from(value.year()), value.month() as u8, value.day() as u8)
    }
}

impl TryFrom<jiff::civil::DateTime> for ValueDateTime {
    type Error = Error;

    fn try_from(value: jiff::civil::DateTime) -> Result<Self> {
        from_civil(value, DateTimeKind::Floating)
    }
}

impl TryFrom<jiff::Timestamp> for ValueDateTime {
    type Error = Error;

    fn try_from(value: jiff::Timestamp) -> Result<Self> {
        let civil = value.to_zoned(jiff::tz::TimeZone::UTC).datetime();
        from_civil(civil, DateTimeKind::Utc)
    }
}

impl TryFrom<&jiff::Zoned> for ValueDateTime {
    type Error = Error;

    fn try_from(value: &jiff::Zoned) -> Result<Self> {
        let kind = match value.time_zone().iana_name() {
            Some(name) if is_utc_identifier(name) => DateTimeKind::Utc,
            Some(name) => {
                validate_tzid(name)?;
                DateTimeKind::Zoned(name.to_string())
            }
            None if *value.time_zone() == jiff::tz::TimeZone::UTC => DateTimeKind::Utc,
            None => {
                return Err(Error::unresolved(
                    value.offset().to_string(),
                    "zone has no IANA identifier to carry in TZID",
                ));
            }
        };
        from_civil(value.datetime(), kind)
    }
}

#[expect(clippy::cast_sign_loss)]
fn from_civil(value: jiff::civil::DateTime, kind: DateTimeKind) -> Result<ValueDateTime> {
    let date = ValueDate::new(
        i32::from(value.year()),
        value.month() as u8,
        value.day() as u8,
    )?;
    let time = ValueTime::new(value.hour() as u8, value.minute() as u8, value.second() as u8)?;
    Ok(ValueDateTime { date, time, kind })
}

fn validate_tzid(tzid: &str) -> Result<()> {
    if tzid.is_empty() {
        return Err(Error::invalid("TZID", "identifier is empty"));
    }
    if tzid.chars().any(|c| c == '"' || c.is_control()) {
        return Err(Error::invalid(
            "TZID",
            format!("identifier {tzid:?} contains a double quote or control character"),
        ));
    }
    Ok(())
}

/// UTC offset value defined in RFC 5545 Section 3.3.14.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueUtcOffset {
    pub(crate) seconds: i32,
}

impl ValueUtcOffset {
    /// Offset of zero.
    pub const UTC: Self = Self { seconds: 0 };

    /// Create an offset from seconds east of UTC.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EncodingOverflow`] unless `|seconds|` is below 24 hours.
    pub fn from_seconds(seconds: i32) -> Result<Self> {
        if seconds.unsigned_abs() >= 24 * 3600 {
            return Err(Error::overflow("UTC offset", seconds));
        }
        Ok(Self { seconds })
    }

    /// Seconds east of UTC.
    #[must_use]
    pub const fn seconds(self) -> i32 {
        self.seconds
    }
}

impl From<jiff::tz::Offset> for ValueUtcOffset {
    fn from(value: jiff::tz::Offset) -> Self {
        // jiff bounds offsets to ±25:59:59, clamp into the RFC range
        Self {
            seconds: value.seconds().clamp(-(24 * 3600 - 1), 24 * 3600 - 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_rejects_year_out_of_range() {
        assert!(matches!(
            ValueDate::new(10_000, 1, 1),
            Err(Error::EncodingOverflow { field: "year", .. })
        ));
        assert!(matches!(
            ValueDate::new(-1, 1, 1),
            Err(Error::EncodingOverflow { .. })
        ));
        assert!(ValueDate::new(0, 1, 1).is_ok());
        assert!(ValueDate::new(9999, 12, 31).is_ok());
    }

    #[test]
    fn test_date_rejects_non_calendar_dates() {
        assert!(matches!(
            ValueDate::new(2023, 2, 29),
            Err(Error::InvalidField { .. })
        ));
        assert!(ValueDate::new(2024, 2, 29).is_ok());
        assert!(ValueDate::new(2024, 13, 1).is_err());
        assert!(ValueDate::new(2024, 4, 31).is_err());
        assert!(ValueDate::new(2024, 1, 0).is_err());
    }

    #[test]
    fn test_time_bounds() {
        assert!(ValueTime::new(23, 59, 60).is_ok());
        assert!(ValueTime::new(24, 0, 0).is_err());
        assert!(ValueTime::new(0, 60, 0).is_err());
    }

    #[test]
    fn test_zoned_rejects_unsafe_tzid() {
        assert!(ValueDateTime::zoned("Bad\"Zone", 2024, 1, 1, 0, 0, 0).is_err());
        assert!(ValueDateTime::zoned("", 2024, 1, 1, 0, 0, 0).is_err());
        let dt = ValueDateTime::zoned("Europe/Berlin", 2024, 1, 1, 9, 0, 0).unwrap();
        assert_eq!(dt.tzid(), Some("Europe/Berlin"));
    }

    #[test]
    fn test_normalized_turns_utc_zone_into_utc_kind() {
        let dt = ValueDateTime::zoned("UTC", 2024, 1, 1, 9, 0, 0).unwrap();
        assert_eq!(dt.normalized().kind(), &DateTimeKind::Utc);

        let dt = ValueDateTime::zoned("gmt", 2024, 1, 1, 9, 0, 0).unwrap();
        assert_eq!(dt.normalized().kind(), &DateTimeKind::Utc);

        let dt = ValueDateTime::zoned("Etc/UTC", 2024, 1, 1, 9, 0, 0).unwrap();
        assert_eq!(dt.normalized().kind(), &DateTimeKind::Utc);

        let dt = ValueDateTime::zoned("Asia/Tokyo", 2024, 1, 1, 9, 0, 0).unwrap();
        assert_eq!(dt.clone().normalized(), dt);
    }

    #[test]
    fn test_from_jiff_types() {
        let date = jiff::civil::date(2024, 3, 4);
        assert_eq!(ValueDateTime::try_from(date).unwrap().kind(), &DateTimeKind::Date);

        let floating = ValueDateTime::try_from(date.at(10, 0, 0, 0)).unwrap();
        assert_eq!(floating.kind(), &DateTimeKind::Floating);
        assert_eq!(floating.time_part().hour(), 10);

        let ts: jiff::Timestamp = "2024-03-04T10:00:00Z".parse().unwrap();
        let utc = ValueDateTime::try_from(ts).unwrap();
        assert_eq!(utc.kind(), &DateTimeKind::Utc);
        assert_eq!(utc.date_part().day(), 4);

        let zoned = ts.to_zoned(jiff::tz::TimeZone::get("Etc/UTC").unwrap());
        assert_eq!(ValueDateTime::try_from(&zoned).unwrap().kind(), &DateTimeKind::Utc);
    }

    #[test]
    fn test_now_utc_is_utc() {
        let now = ValueDateTime::now_utc().unwrap();
        assert_eq!(now.kind(), &DateTimeKind::Utc);
        assert!(now.date_part().year() >= 2024);
    }

    #[test]
    fn test_utc_offset_range() {
        assert!(ValueUtcOffset::from_seconds(-5 * 3600).is_ok());
        assert!(ValueUtcOffset::from_seconds(24 * 3600).is_err());
    }
}
