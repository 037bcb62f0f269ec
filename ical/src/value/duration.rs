// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Duration value type as defined in RFC 5545 Section 3.3.6.

use crate::error::{Error, Result};

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;
const SECONDS_PER_WEEK: i64 = 7 * SECONDS_PER_DAY;

/// Duration Value defined in RFC 5545 Section 3.3.6, stored as signed
/// total seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValueDuration {
    seconds: i64,
}

/// Unit breakdown used by the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DurationParts {
    /// Whole weeks, `PnW`
    Week { negative: bool, week: u64 },
    /// Day and time units, `PnDTnHnMnS`
    DateTime {
        negative: bool,
        day: u64,
        hour: u64,
        minute: u64,
        second: u64,
    },
}

impl ValueDuration {
    /// Zero duration, encoded as `PT0S`.
    pub const ZERO: Self = Self { seconds: 0 };

    /// Duration from signed seconds.
    #[must_use]
    pub const fn from_seconds(seconds: i64) -> Self {
        Self { seconds }
    }

    /// Duration of whole minutes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EncodingOverflow`] when the total does not fit `i64` seconds.
    pub fn from_minutes(minutes: i64) -> Result<Self> {
        Self::scaled("minutes", minutes, SECONDS_PER_MINUTE)
    }

    /// Duration of whole hours.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EncodingOverflow`] when the total does not fit `i64` seconds.
    pub fn from_hours(hours: i64) -> Result<Self> {
        Self::scaled("hours", hours, SECONDS_PER_HOUR)
    }

    /// Duration of whole days.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EncodingOverflow`] when the total does not fit `i64` seconds.
    pub fn from_days(days: i64) -> Result<Self> {
        Self::scaled("days", days, SECONDS_PER_DAY)
    }

    fn scaled(field: &'static str, n: i64, unit: i64) -> Result<Self> {
        n.checked_mul(unit)
            .map(Self::from_seconds)
            .ok_or_else(|| Error::overflow(field, n))
    }

    /// Signed total seconds.
    #[must_use]
    pub const fn seconds(self) -> i64 {
        self.seconds
    }

    /// Whether the duration is negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.seconds < 0
    }

    pub(crate) fn parts(self) -> DurationParts {
        let negative = self.is_negative();
        let total = self.seconds.unsigned_abs();

        #[expect(clippy::cast_sign_loss)]
        let week_len = SECONDS_PER_WEEK as u64;
        if total != 0 && total % week_len == 0 {
            return DurationParts::Week {
                negative,
                week: total / week_len,
            };
        }

        #[expect(clippy::cast_sign_loss)]
        let (day_len, hour_len, minute_len) = (
            SECONDS_PER_DAY as u64,
            SECONDS_PER_HOUR as u64,
            SECONDS_PER_MINUTE as u64,
        );
        DurationParts::DateTime {
            negative,
            day: total / day_len,
            hour: total % day_len / hour_len,
            minute: total % hour_len / minute_len,
            second: total % minute_len,
        }
    }
}

impl TryFrom<std::time::Duration> for ValueDuration {
    type Error = Error;

    fn try_from(value: std::time::Duration) -> Result<Self> {
        let secs = value.as_secs();
        i64::try_from(secs)
            .map(Self::from_seconds)
            .map_err(|_| Error::overflow("duration", secs))
    }
}

impl TryFrom<jiff::SignedDuration> for ValueDuration {
    type Error = Error;

    fn try_from(value: jiff::SignedDuration) -> Result<Self> {
        if value.subsec_nanos() != 0 {
            return Err(Error::invalid(
                "duration",
                format!("{value:?} has a sub-second part, which iCalendar cannot express"),
            ));
        }
        Ok(Self::from_seconds(value.as_secs()))
    }
}

impl From<ValueDuration> for jiff::SignedDuration {
    fn from(value: ValueDuration) -> Self {
        jiff::SignedDuration::from_secs(value.seconds)
    }
}
