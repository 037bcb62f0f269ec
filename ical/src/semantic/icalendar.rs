// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar object (VCALENDAR) assembly.

use std::fmt;

use crate::component::Component;
use crate::error::{Error, Result};
use crate::keyword::{
    KW_CALSCALE, KW_CALSCALE_GREGORIAN, KW_METHOD, KW_METHOD_ADD, KW_METHOD_CANCEL,
    KW_METHOD_COUNTER, KW_METHOD_DECLINECOUNTER, KW_METHOD_PUBLISH, KW_METHOD_REFRESH,
    KW_METHOD_REPLY, KW_METHOD_REQUEST, KW_PRODID, KW_VCALENDAR, KW_VERSION, KW_VERSION_2_0,
};
use crate::parameter::validate_name;
use crate::property::Property;
use crate::semantic::vevent::Event;
use crate::timezone::TimezoneProvider;

/// iTIP method, RFC 5546 and RFC 5545 Section 3.7.2
#[derive(Debug, Clone, PartialEq, Eq, Hash, strum::EnumString)]
#[strum(ascii_case_insensitive)]
#[expect(missing_docs)]
pub enum Method {
    #[strum(serialize = "PUBLISH")]
    Publish,
    #[strum(serialize = "REQUEST")]
    Request,
    #[strum(serialize = "REPLY")]
    Reply,
    #[strum(serialize = "ADD")]
    Add,
    #[strum(serialize = "CANCEL")]
    Cancel,
    #[strum(serialize = "REFRESH")]
    Refresh,
    #[strum(serialize = "COUNTER")]
    Counter,
    #[strum(serialize = "DECLINECOUNTER")]
    DeclineCounter,
    /// Extension method, written verbatim
    #[strum(default)]
    X(String),
}

impl Method {
    /// The `METHOD` token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Publish => KW_METHOD_PUBLISH,
            Self::Request => KW_METHOD_REQUEST,
            Self::Reply => KW_METHOD_REPLY,
            Self::Add => KW_METHOD_ADD,
            Self::Cancel => KW_METHOD_CANCEL,
            Self::Refresh => KW_METHOD_REFRESH,
            Self::Counter => KW_METHOD_COUNTER,
            Self::DeclineCounter => KW_METHOD_DECLINECOUNTER,
            Self::X(value) => value,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

/// Calendar scale, RFC 5545 Section 3.7.1
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, strum::EnumString)]
#[strum(ascii_case_insensitive)]
pub enum CalendarScale {
    /// The Gregorian calendar, the RFC 5545 default
    #[default]
    #[strum(serialize = "GREGORIAN")]
    Gregorian,
    /// Extension scale, written verbatim
    #[strum(default)]
    X(String),
}

impl CalendarScale {
    /// The `CALSCALE` token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Gregorian => KW_CALSCALE_GREGORIAN,
            Self::X(value) => value,
        }
    }
}

impl fmt::Display for CalendarScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

/// Calendar object (VCALENDAR)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    /// Product identifier of the producer
    pub prod_id: String,

    /// iTIP method (optional)
    pub method: Option<Method>,

    /// Calendar scale (optional, Gregorian when absent)
    pub calscale: Option<CalendarScale>,

    /// Events, written in this order
    pub events: Vec<Event>,
}

impl Calendar {
    /// Empty calendar.
    pub fn new(prod_id: impl Into<String>) -> Self {
        Self {
            prod_id: prod_id.into(),
            method: None,
            calscale: None,
            events: Vec::new(),
        }
    }

    /// Distinct non-UTC zone identifiers, in order of first use.
    #[must_use]
    pub fn tzids(&self) -> Vec<String> {
        let mut tzids: Vec<String> = Vec::new();
        for tzid in self.events.iter().flat_map(Event::tzids) {
            if !tzids.contains(&tzid) {
                tzids.push(tzid);
            }
        }
        tzids
    }

    /// Assemble the `VCALENDAR` component.
    ///
    /// Written as `PRODID`, `VERSION`, `CALSCALE`, `METHOD`, one
    /// `VTIMEZONE` per referenced zone, then the events.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidField`] for an empty product identifier, an
    /// unusable method or scale token, or an invalid event, and
    /// [`Error::UnresolvedTimezone`] if the provider cannot resolve a zone.
    pub fn to_component(&self, provider: &impl TimezoneProvider) -> Result<Component> {
        if self.prod_id.trim().is_empty() {
            return Err(Error::invalid("PRODID", "product identifier is empty"));
        }

        let mut component = Component::new(KW_VCALENDAR)
            .with_property(Property::text(KW_PRODID, self.prod_id.clone()))
            .with_property(Property::token(KW_VERSION, KW_VERSION_2_0));
        if let Some(calscale) = &self.calscale {
            validate_name("CALSCALE", calscale.as_str())?;
            component.push_property(Property::token(KW_CALSCALE, calscale.as_str()));
        }
        if let Some(method) = &self.method {
            validate_name("METHOD", method.as_str())?;
            component.push_property(Property::token(KW_METHOD, method.as_str()));
        }

        let tzids = self.tzids();
        for tzid in &tzids {
            let zone = provider.resolve(tzid)?;
            component.push_child(zone.component()?);
        }
        for event in &self.events {
            component.push_child(event.to_component()?);
        }

        tracing::debug!(
            events = self.events.len(),
            timezones = tzids.len(),
            "assembled VCALENDAR"
        );
        Ok(component)
    }
}
