// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Timezone component (VTIMEZONE) generation.

use crate::component::Component;
use crate::error::{Error, Result};
use crate::keyword::{
    KW_DAYLIGHT, KW_DTSTART, KW_STANDARD, KW_TZID, KW_TZNAME, KW_TZOFFSETFROM, KW_TZOFFSETTO,
    KW_VTIMEZONE,
};
use crate::property::Property;
use crate::value::{DateTimeKind, Value, ValueDateTime, ValueUtcOffset};

/// A resolved zone: identifier plus its UTC-offset regimes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTimezone {
    /// Timezone identifier, as referenced by `TZID` parameters
    pub tzid: String,

    /// Observances in chronological order
    pub observances: Vec<TimeZoneObservance>,
}

/// Kind of observance sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObservanceKind {
    /// `STANDARD`
    Standard,
    /// `DAYLIGHT`
    Daylight,
}

impl ObservanceKind {
    /// Component name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => KW_STANDARD,
            Self::Daylight => KW_DAYLIGHT,
        }
    }
}

/// Timezone observance (STANDARD or DAYLIGHT)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeZoneObservance {
    /// Standard or daylight time
    pub kind: ObservanceKind,

    /// Local start of the observance, a floating date-time
    pub onset: ValueDateTime,

    /// Offset in force before the onset
    pub offset_from: ValueUtcOffset,

    /// Offset in force from the onset on
    pub offset_to: ValueUtcOffset,

    /// Customary abbreviation such as `CET`
    pub name: Option<String>,
}

impl TimeZoneObservance {
    /// Render the observance sub-component.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidField`] if the onset is not floating.
    pub fn component(&self) -> Result<Component> {
        if *self.onset.kind() != DateTimeKind::Floating {
            return Err(Error::invalid(
                "observance onset",
                "must be a floating local date-time",
            ));
        }

        let mut component = Component::new(self.kind.name())
            .with_property(Property::date_time(KW_DTSTART, self.onset.clone())?)
            .with_property(Property::new(
                KW_TZOFFSETFROM,
                Value::UtcOffset(self.offset_from),
            ))
            .with_property(Property::new(
                KW_TZOFFSETTO,
                Value::UtcOffset(self.offset_to),
            ));
        if let Some(name) = &self.name {
            component.push_property(Property::text(KW_TZNAME, name.clone()));
        }
        Ok(component)
    }
}

impl ResolvedTimezone {
    /// Render the `VTIMEZONE` component.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidField`] if there is no observance, since
    /// `VTIMEZONE` requires at least one, or if an observance is invalid.
    pub fn component(&self) -> Result<Component> {
        if self.observances.is_empty() {
            return Err(Error::invalid(
                "VTIMEZONE",
                format!("{} has no observance", self.tzid),
            ));
        }

        let mut component =
            Component::new(KW_VTIMEZONE).with_property(Property::text(KW_TZID, self.tzid.clone()));
        for observance in &self.observances {
            component.push_child(observance.component()?);
        }
        Ok(component)
    }
}
