// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

use jiff::Timestamp;
use jiff::tz::{Offset, TimeZone};

use crate::error::{Error, Result};
use crate::semantic::{ObservanceKind, ResolvedTimezone, TimeZoneObservance};
use crate::timezone::{TimezoneProvider, resolve_builtin};
use crate::value::ValueDateTime;

const DEFAULT_START_YEAR: i16 = 1970;
const DEFAULT_END_YEAR: i16 = 2037;
const YEAR_RANGE: std::ops::RangeInclusive<i16> = 1..=9998;

/// Provider backed by the jiff time zone database.
///
/// Observances are derived from the zone transitions between January 1 of
/// the start year and the end of the end year. Resolved zones are cached.
#[derive(Debug)]
pub struct SystemTimezoneProvider {
    start_year: i16,
    end_year: i16,
    cache: RwLock<HashMap<String, ResolvedTimezone>>,
}

impl Default for SystemTimezoneProvider {
    fn default() -> Self {
        Self {
            start_year: DEFAULT_START_YEAR,
            end_year: DEFAULT_END_YEAR,
            cache: RwLock::new(HashMap::new()),
        }
    }
}

impl SystemTimezoneProvider {
    /// Provider with the default 1970-2037 window.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider with a custom year window, both ends inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidField`] if the window is empty or leaves
    /// `1..=9998`. The first observance starts at local midnight of the
    /// start year, which is in the previous year west of UTC, so year 0 is
    /// excluded to keep every onset encodable.
    pub fn with_year_window(start_year: i16, end_year: i16) -> Result<Self> {
        if !YEAR_RANGE.contains(&start_year) || !YEAR_RANGE.contains(&end_year) {
            return Err(Error::invalid(
                "timezone year window",
                format!("{start_year}..={end_year} leaves 1..=9998"),
            ));
        }
        if start_year > end_year {
            return Err(Error::invalid(
                "timezone year window",
                format!("start year {start_year} is after end year {end_year}"),
            ));
        }
        Ok(Self {
            start_year,
            end_year,
            cache: RwLock::new(HashMap::new()),
        })
    }

    /// Process-wide provider with the default window.
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<SystemTimezoneProvider> = OnceLock::new();
        GLOBAL.get_or_init(Self::new)
    }

    /// The configured year window.
    #[must_use]
    pub const fn year_window(&self) -> (i16, i16) {
        (self.start_year, self.end_year)
    }

    fn observances(&self, tzid: &str, tz: &TimeZone) -> Result<Vec<TimeZoneObservance>> {
        let start = year_start(tzid, self.start_year)?;
        let end = year_start(tzid, self.end_year + 1)?;

        let initial = tz.to_offset_info(start);
        let mut prev_offset = initial.offset();
        let mut observances = vec![TimeZoneObservance {
            kind: if initial.dst().is_dst() {
                ObservanceKind::Daylight
            } else {
                ObservanceKind::Standard
            },
            onset: onset(start, prev_offset)?,
            offset_from: prev_offset.into(),
            offset_to: prev_offset.into(),
            name: abbreviation(initial.abbreviation()),
        }];

        for transition in tz.following(start) {
            if transition.timestamp() >= end {
                break;
            }
            let offset = transition.offset();
            observances.push(TimeZoneObservance {
                kind: if transition.dst().is_dst() {
                    ObservanceKind::Daylight
                } else {
                    ObservanceKind::Standard
                },
                onset: onset(transition.timestamp(), prev_offset)?,
                offset_from: prev_offset.into(),
                offset_to: offset.into(),
                name: abbreviation(transition.abbreviation()),
            });
            prev_offset = offset;
        }

        if let [only] = observances.as_mut_slice() {
            only.kind = ObservanceKind::Standard;
        }
        Ok(observances)
    }
}

impl TimezoneProvider for SystemTimezoneProvider {
    #[tracing::instrument(skip(self))]
    fn resolve(&self, tzid: &str) -> Result<ResolvedTimezone> {
        if let Some(zone) = resolve_builtin(tzid) {
            return Ok(zone);
        }

        if let Some(zone) = self.cache.read().ok().and_then(|c| c.get(tzid).cloned()) {
            tracing::trace!("timezone cache hit");
            return Ok(zone);
        }

        let tz = TimeZone::get(tzid).map_err(|e| Error::unresolved(tzid, e.to_string()))?;
        let zone = ResolvedTimezone {
            tzid: tzid.to_string(),
            observances: self.observances(tzid, &tz)?,
        };
        tracing::debug!(
            observances = zone.observances.len(),
            "resolved timezone from tz database"
        );

        if let Ok(mut cache) = self.cache.write() {
            cache.insert(tzid.to_string(), zone.clone());
        }
        Ok(zone)
    }
}

fn year_start(tzid: &str, year: i16) -> Result<Timestamp> {
    jiff::civil::Date::new(year, 1, 1)
        .and_then(|date| TimeZone::UTC.to_timestamp(date.at(0, 0, 0, 0)))
        .map_err(|e| Error::unresolved(tzid, e.to_string()))
}

/// Local wall-clock time of `at`, as seen under the offset in force before it.
fn onset(at: Timestamp, prev_offset: Offset) -> Result<ValueDateTime> {
    ValueDateTime::try_from(at.to_zoned(TimeZone::fixed(prev_offset)).datetime())
}

fn abbreviation(abbr: &str) -> Option<String> {
    (!abbr.is_empty()).then(|| abbr.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueUtcOffset;

    #[test]
    fn test_year_window_validation() {
        assert!(SystemTimezoneProvider::with_year_window(2030, 2020).is_err());
        assert!(SystemTimezoneProvider::with_year_window(-1, 2020).is_err());
        assert!(SystemTimezoneProvider::with_year_window(0, 2024).is_err());
        assert!(SystemTimezoneProvider::with_year_window(2024, 9999).is_err());
        let provider = SystemTimezoneProvider::with_year_window(2024, 2024).unwrap();
        assert_eq!(provider.year_window(), (2024, 2024));
    }

    #[test]
    fn test_window_bounds_resolve_west_and_east_of_utc() {
        let first = SystemTimezoneProvider::with_year_window(1, 1).unwrap();
        let last = SystemTimezoneProvider::with_year_window(9998, 9998).unwrap();
        for provider in [first, last] {
            for tzid in ["America/New_York", "Pacific/Honolulu", "Asia/Tokyo", "Pacific/Kiritimati"] {
                let zone = provider.resolve(tzid).unwrap();
                assert!(!zone.observances.is_empty(), "{tzid}");
                assert!(zone.component().is_ok(), "{tzid}");
            }
        }
    }

    #[test]
    fn test_resolve_zone_with_dst() {
        let provider = SystemTimezoneProvider::with_year_window(2024, 2024).unwrap();
        let zone = provider.resolve("America/New_York").unwrap();
        assert_eq!(zone.tzid, "America/New_York");

        // window start plus the March and November transitions
        assert_eq!(zone.observances.len(), 3);
        let spring = &zone.observances[1];
        assert_eq!(spring.kind, ObservanceKind::Daylight);
        assert_eq!(spring.offset_from, ValueUtcOffset::from_seconds(-5 * 3600).unwrap());
        assert_eq!(spring.offset_to, ValueUtcOffset::from_seconds(-4 * 3600).unwrap());
        assert_eq!(spring.name.as_deref(), Some("EDT"));
        assert_eq!(
            spring.onset,
            ValueDateTime::floating(2024, 3, 10, 2, 0, 0).unwrap()
        );

        let fall = &zone.observances[2];
        assert_eq!(fall.kind, ObservanceKind::Standard);
        assert_eq!(
            fall.onset,
            ValueDateTime::floating(2024, 11, 3, 2, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_resolve_zone_without_transitions() {
        let provider = SystemTimezoneProvider::with_year_window(2024, 2025).unwrap();
        let zone = provider.resolve("Asia/Tokyo").unwrap();
        assert_eq!(zone.observances.len(), 1);
        assert_eq!(zone.observances[0].kind, ObservanceKind::Standard);
        assert_eq!(
            zone.observances[0].offset_to,
            ValueUtcOffset::from_seconds(9 * 3600).unwrap()
        );
    }

    #[test]
    fn test_resolve_is_cached() {
        let provider = SystemTimezoneProvider::with_year_window(2024, 2024).unwrap();
        let first = provider.resolve("Europe/Berlin").unwrap();
        let second = provider.resolve("Europe/Berlin").unwrap();
        assert_eq!(first, second);
        assert_eq!(provider.cache.read().unwrap().len(), 1);
    }

    #[test]
    fn test_resolve_unknown_zone() {
        let err = SystemTimezoneProvider::global().resolve("Not/AZone");
        assert!(matches!(err, Err(Error::UnresolvedTimezone { .. })));
    }

    #[test]
    fn test_resolve_utc_uses_builtin() {
        let zone = SystemTimezoneProvider::global().resolve("UTC").unwrap();
        assert_eq!(zone.observances.len(), 1);
    }
}
