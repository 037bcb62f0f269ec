// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Timezone resolution for `VTIMEZONE` generation.
//!
//! The builder never interprets zone rules itself. A [`TimezoneProvider`]
//! turns a `TZID` into the observances written into `VTIMEZONE`; UTC and
//! GMT are handled without any database by [`resolve_builtin`].

mod system;

use std::collections::HashMap;

pub use system::SystemTimezoneProvider;

use crate::error::{Error, Result};
use crate::semantic::{ObservanceKind, ResolvedTimezone, TimeZoneObservance};
use crate::value::{ValueDateTime, ValueUtcOffset};

/// Source of timezone definitions.
pub trait TimezoneProvider {
    /// Resolve a zone identifier into its observances.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnresolvedTimezone`] if the identifier is unknown.
    fn resolve(&self, tzid: &str) -> Result<ResolvedTimezone>;
}

impl<T: TimezoneProvider + ?Sized> TimezoneProvider for &T {
    fn resolve(&self, tzid: &str) -> Result<ResolvedTimezone> {
        (**self).resolve(tzid)
    }
}

const UTC_IDENTIFIERS: [&str; 3] = ["UTC", "GMT", "Etc/UTC"];

/// Whether the identifier names UTC itself (`UTC`, `GMT` or `Etc/UTC`),
/// ASCII case-insensitive.
#[must_use]
pub fn is_utc_identifier(tzid: &str) -> bool {
    UTC_IDENTIFIERS
        .iter()
        .any(|name| tzid.eq_ignore_ascii_case(name))
}

/// Resolve `UTC`, `GMT` and `Etc/UTC` to a single zero-offset observance.
#[must_use]
pub fn resolve_builtin(tzid: &str) -> Option<ResolvedTimezone> {
    if !is_utc_identifier(tzid) {
        return None;
    }

    let onset = ValueDateTime::floating(1970, 1, 1, 0, 0, 0).ok()?;
    Some(ResolvedTimezone {
        tzid: tzid.to_string(),
        observances: vec![TimeZoneObservance {
            kind: ObservanceKind::Standard,
            onset,
            offset_from: ValueUtcOffset::UTC,
            offset_to: ValueUtcOffset::UTC,
            name: Some(if tzid.eq_ignore_ascii_case("GMT") { "GMT" } else { "UTC" }.to_string()),
        }],
    })
}

/// Provider backed by caller-registered zones.
///
/// Output depends only on what was registered, which makes it the provider
/// of choice for tests and for embedding fixed definitions.
#[derive(Debug, Clone, Default)]
pub struct StaticTimezoneProvider {
    zones: HashMap<String, ResolvedTimezone>,
}

impl StaticTimezoneProvider {
    /// Empty provider, resolving only the builtin UTC identifiers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a zone under its own `tzid`, replacing any previous entry.
    pub fn insert(&mut self, zone: ResolvedTimezone) {
        self.zones.insert(zone.tzid.clone(), zone);
    }

    /// Builder form of [`StaticTimezoneProvider::insert`].
    #[must_use]
    pub fn with_zone(mut self, zone: ResolvedTimezone) -> Self {
        self.insert(zone);
        self
    }
}

impl TimezoneProvider for StaticTimezoneProvider {
    fn resolve(&self, tzid: &str) -> Result<ResolvedTimezone> {
        if let Some(zone) = self.zones.get(tzid) {
            return Ok(zone.clone());
        }
        resolve_builtin(tzid).ok_or_else(|| Error::unresolved(tzid, "zone is not registered"))
    }
}
