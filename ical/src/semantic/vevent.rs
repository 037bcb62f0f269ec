// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Event component (VEVENT) assembly.

use crate::component::Component;
use crate::error::{Error, Result};
use crate::keyword::{
    KW_CREATED, KW_DESCRIPTION, KW_DTEND, KW_DTSTAMP, KW_DTSTART, KW_DURATION, KW_SUMMARY,
    KW_TRANSP, KW_TRANSP_OPAQUE, KW_TRANSP_TRANSPARENT, KW_UID, KW_VEVENT,
};
use crate::property::Property;
use crate::semantic::attendee::{Attendee, Organizer};
use crate::value::{DateTimeKind, RecurrenceRule, ValueDateTime, ValueDuration};

/// When an event takes place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventTime {
    /// Explicit start and end, written as `DTSTART` and `DTEND`
    StartEnd(ValueDateTime, ValueDateTime),

    /// Start and length, written as `DTSTART` and `DURATION`
    StartDuration(ValueDateTime, ValueDuration),
}

impl EventTime {
    /// The event start.
    #[must_use]
    pub fn start(&self) -> &ValueDateTime {
        match self {
            Self::StartEnd(start, _) | Self::StartDuration(start, _) => start,
        }
    }
}

/// Time transparency, RFC 5545 Section 3.8.2.7
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TimeTransparency {
    /// Blocks time on free/busy lookups
    #[default]
    Opaque,
    /// Does not block time
    Transparent,
}

impl TimeTransparency {
    /// The `TRANSP` token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Opaque => KW_TRANSP_OPAQUE,
            Self::Transparent => KW_TRANSP_TRANSPARENT,
        }
    }
}

/// Event component (VEVENT)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Short summary
    pub summary: String,

    /// Longer description (optional)
    pub description: Option<String>,

    /// Creation time of this representation, must be UTC
    pub dtstamp: ValueDateTime,

    /// Start with end or duration
    pub time: EventTime,

    /// Unique identifier
    pub uid: String,

    /// Creation time in the organizer's store, must be UTC
    pub created: ValueDateTime,

    /// Recurrence rule (optional)
    pub recurrence_rule: Option<RecurrenceRule>,

    /// Organizer (optional)
    pub organizer: Option<Organizer>,

    /// Attendees, written in this order
    pub attendees: Vec<Attendee>,

    /// Time transparency
    pub transparency: TimeTransparency,
}

impl Event {
    /// Event with a fresh UUID and `DTSTAMP`/`CREATED` set to now.
    ///
    /// # Errors
    ///
    /// Returns an error if the system clock cannot be encoded as a UTC
    /// date-time.
    pub fn new(summary: impl Into<String>, time: EventTime) -> Result<Self> {
        let now = ValueDateTime::now_utc()?;
        Ok(Self {
            summary: summary.into(),
            description: None,
            dtstamp: now.clone(),
            time,
            uid: uuid::Uuid::new_v4().to_string(),
            created: now,
            recurrence_rule: None,
            organizer: None,
            attendees: Vec::new(),
            transparency: TimeTransparency::default(),
        })
    }

    /// Zone identifiers this event needs a `VTIMEZONE` for, in property order.
    pub fn tzids(&self) -> impl Iterator<Item = String> + '_ {
        let end = match &self.time {
            EventTime::StartEnd(_, end) => Some(end),
            EventTime::StartDuration(..) => None,
        };
        std::iter::once(self.time.start())
            .chain(end)
            .filter_map(|dt| dt.clone().normalized().tzid().map(str::to_string))
    }

    /// Assemble the `VEVENT` component.
    ///
    /// Properties are written as `DTSTAMP`, `DTSTART`, `DTEND` or
    /// `DURATION`, `SUMMARY`, `UID`, `DESCRIPTION`, `TRANSP`, `CREATED`,
    /// `ORGANIZER`, `ATTENDEE`s and `RRULE`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidField`] if a stamp is not UTC, the times
    /// are inconsistent, the recurrence rule is invalid or does not match
    /// the start, or an attendee cannot be encoded.
    pub fn to_component(&self) -> Result<Component> {
        if self.uid.trim().is_empty() {
            return Err(Error::invalid("UID", "identifier is empty"));
        }
        let dtstamp = require_utc("DTSTAMP", &self.dtstamp)?;
        let created = require_utc("CREATED", &self.created)?;
        let start = self.time.start().clone().normalized();

        let mut component = Component::new(KW_VEVENT)
            .with_property(Property::date_time(KW_DTSTAMP, dtstamp)?)
            .with_property(Property::date_time(KW_DTSTART, start.clone())?);

        match &self.time {
            EventTime::StartEnd(_, end) => {
                let end = end.clone().normalized();
                check_end(&start, &end)?;
                component.push_property(Property::date_time(KW_DTEND, end)?);
            }
            EventTime::StartDuration(_, duration) => {
                check_duration(&start, *duration)?;
                component.push_property(Property::duration(KW_DURATION, *duration));
            }
        }

        component.push_property(Property::text(KW_SUMMARY, self.summary.clone()));
        component.push_property(Property::text(KW_UID, self.uid.clone()));
        if let Some(description) = &self.description {
            component.push_property(Property::text(KW_DESCRIPTION, description.clone()));
        }
        component.push_property(Property::token(KW_TRANSP, self.transparency.as_str()));
        component.push_property(Property::date_time(KW_CREATED, created)?);

        if let Some(organizer) = &self.organizer {
            component.push_property(organizer.to_property()?);
        }
        for attendee in &self.attendees {
            component.push_property(attendee.to_property()?);
        }
        if let Some(rule) = &self.recurrence_rule {
            check_until(&start, rule)?;
            component.push_property(rule.to_property()?);
        }

        tracing::trace!(uid = %self.uid, "assembled VEVENT");
        Ok(component)
    }
}

fn require_utc(field: &'static str, value: &ValueDateTime) -> Result<ValueDateTime> {
    let value = value.clone().normalized();
    if *value.kind() != DateTimeKind::Utc {
        return Err(Error::invalid(field, "must be a UTC date-time"));
    }
    Ok(value)
}

/// Start and end must share a value type, and end must not precede start
/// whenever both are on the same clock.
fn check_end(start: &ValueDateTime, end: &ValueDateTime) -> Result<()> {
    if start.is_date() != end.is_date() {
        return Err(Error::invalid(
            "DTEND",
            "must have the same value type as DTSTART, both dates or both date-times",
        ));
    }

    // same kind, and for zoned values the same TZID
    let comparable = start.kind() == end.kind();
    if comparable && end.civil_date_time() < start.civil_date_time() {
        return Err(Error::invalid("DTEND", "must not be earlier than DTSTART"));
    }
    Ok(())
}

fn check_duration(start: &ValueDateTime, duration: ValueDuration) -> Result<()> {
    if duration.is_negative() {
        return Err(Error::invalid("DURATION", "must not be negative"));
    }
    if start.is_date() && duration.seconds() % 86_400 != 0 {
        return Err(Error::invalid(
            "DURATION",
            "must be whole days or weeks when DTSTART is a date",
        ));
    }
    Ok(())
}

/// RFC 5545 Section 3.3.10: UNTIL has the value type of DTSTART, and is UTC
/// when DTSTART is UTC or zoned.
fn check_until(start: &ValueDateTime, rule: &RecurrenceRule) -> Result<()> {
    let Some(until) = &rule.until else {
        return Ok(());
    };
    let ok = match start.kind() {
        DateTimeKind::Date => until.is_date(),
        DateTimeKind::Floating => *until.kind() == DateTimeKind::Floating,
        DateTimeKind::Utc | DateTimeKind::Zoned(_) => *until.kind() == DateTimeKind::Utc,
    };
    if !ok {
        return Err(Error::invalid(
            "UNTIL",
            "must be a date for a date DTSTART, floating for a floating DTSTART, \
             and UTC otherwise",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::serialize;
    use crate::value::Frequency;

    fn fixed_event(time: EventTime) -> Event {
        let stamp = ValueDateTime::utc(2024, 1, 1, 0, 0, 0).unwrap();
        Event {
            uid: "fixed-uid".to_string(),
            dtstamp: stamp.clone(),
            created: stamp,
            ..Event::new("Team Sync", time).unwrap()
        }
    }

    fn floating(h: u8) -> ValueDateTime {
        ValueDateTime::floating(2024, 3, 4, h, 0, 0).unwrap()
    }

    fn names(component: &Component) -> Vec<&str> {
        component.properties().iter().map(Property::name).collect()
    }

    #[test]
    fn test_new_defaults() {
        let event = Event::new("x", EventTime::StartEnd(floating(10), floating(11))).unwrap();
        assert_eq!(event.uid.len(), 36);
        assert_eq!(event.dtstamp.kind(), &DateTimeKind::Utc);
        assert_eq!(event.transparency, TimeTransparency::Opaque);
        assert!(event.attendees.is_empty());
    }

    #[test]
    fn test_property_order() {
        let mut event = fixed_event(EventTime::StartEnd(floating(10), floating(11)));
        event.description = Some("Weekly".to_string());
        event.organizer = Some(Organizer::new("mailto:boss@example.com"));
        event.attendees.push(Attendee::new("mailto:a@example.com"));
        event.recurrence_rule = Some(RecurrenceRule::new(Frequency::Weekly));

        let component = event.to_component().unwrap();
        assert_eq!(
            names(&component),
            [
                "DTSTAMP",
                "DTSTART",
                "DTEND",
                "SUMMARY",
                "UID",
                "DESCRIPTION",
                "TRANSP",
                "CREATED",
                "ORGANIZER",
                "ATTENDEE",
                "RRULE"
            ]
        );
    }

    #[test]
    fn test_duration_form() {
        let event = fixed_event(EventTime::StartDuration(
            floating(10),
            ValueDuration::from_minutes(45).unwrap(),
        ));
        let ics = serialize(&event.to_component().unwrap()).unwrap();
        assert!(ics.contains("\r\nDURATION:PT45M\r\n"));
        assert!(!ics.contains("DTEND"));
    }

    #[test]
    fn test_dtstamp_must_be_utc() {
        let mut event = fixed_event(EventTime::StartEnd(floating(10), floating(11)));
        event.dtstamp = floating(9);
        assert!(matches!(
            event.to_component(),
            Err(Error::InvalidField { field: "DTSTAMP", .. })
        ));
    }

    #[test]
    fn test_end_before_start() {
        let event = fixed_event(EventTime::StartEnd(floating(11), floating(10)));
        assert!(matches!(
            event.to_component(),
            Err(Error::InvalidField { field: "DTEND", .. })
        ));
    }

    #[test]
    fn test_mixed_date_and_date_time() {
        let date = ValueDateTime::date(2024, 3, 4).unwrap();
        let event = fixed_event(EventTime::StartEnd(date, floating(10)));
        assert!(event.to_component().is_err());
    }

    #[test]
    fn test_different_zones_are_not_compared() {
        let start = ValueDateTime::zoned("Asia/Tokyo", 2024, 3, 4, 10, 0, 0).unwrap();
        let end = ValueDateTime::zoned("Europe/London", 2024, 3, 4, 2, 0, 0).unwrap();
        let event = fixed_event(EventTime::StartEnd(start, end));
        assert!(event.to_component().is_ok());
        assert_eq!(event.tzids().collect::<Vec<_>>(), ["Asia/Tokyo", "Europe/London"]);
    }

    #[test]
    fn test_utc_zone_is_normalized() {
        let start = ValueDateTime::zoned("UTC", 2024, 3, 4, 10, 0, 0).unwrap();
        let end = ValueDateTime::utc(2024, 3, 4, 11, 0, 0).unwrap();
        let event = fixed_event(EventTime::StartEnd(start, end));
        let ics = serialize(&event.to_component().unwrap()).unwrap();
        assert!(ics.contains("\r\nDTSTART:20240304T100000Z\r\n"));
        assert!(!ics.contains("TZID"));
        assert_eq!(event.tzids().count(), 0);
    }

    #[test]
    fn test_all_day_duration_must_be_whole_days() {
        let date = ValueDateTime::date(2024, 3, 4).unwrap();
        let event = fixed_event(EventTime::StartDuration(
            date.clone(),
            ValueDuration::from_hours(5).unwrap(),
        ));
        assert!(event.to_component().is_err());

        let event = fixed_event(EventTime::StartDuration(
            date,
            ValueDuration::from_days(1).unwrap(),
        ));
        let ics = serialize(&event.to_component().unwrap()).unwrap();
        assert!(ics.contains("DTSTART;VALUE=DATE:20240304\r\n"));
        assert!(ics.contains("DURATION:P1D\r\n"));
    }

    #[test]
    fn test_until_must_match_start() {
        let mut event = fixed_event(EventTime::StartEnd(floating(10), floating(11)));
        event.recurrence_rule = Some(
            RecurrenceRule::new(Frequency::Daily)
                .until(ValueDateTime::utc(2024, 4, 1, 0, 0, 0).unwrap()),
        );
        assert!(matches!(
            event.to_component(),
            Err(Error::InvalidField { field: "UNTIL", .. })
        ));

        event.recurrence_rule = Some(
            RecurrenceRule::new(Frequency::Daily)
                .until(ValueDateTime::floating(2024, 4, 1, 0, 0, 0).unwrap()),
        );
        assert!(event.to_component().is_ok());
    }

    #[test]
    fn test_zoned_start_requires_utc_until() {
        let start = ValueDateTime::zoned("Europe/Paris", 2024, 3, 4, 10, 0, 0).unwrap();
        let end = ValueDateTime::zoned("Europe/Paris", 2024, 3, 4, 11, 0, 0).unwrap();
        let mut event = fixed_event(EventTime::StartEnd(start, end));
        event.recurrence_rule = Some(
            RecurrenceRule::new(Frequency::Weekly)
                .until(ValueDateTime::utc(2024, 6, 1, 0, 0, 0).unwrap()),
        );
        let ics = serialize(&event.to_component().unwrap()).unwrap();
        assert!(ics.contains("RRULE:FREQ=WEEKLY;UNTIL=20240601T000000Z\r\n"));
    }

    #[test]
    fn test_transparent() {
        let mut event = fixed_event(EventTime::StartEnd(floating(10), floating(11)));
        event.transparency = TimeTransparency::Transparent;
        let ics = serialize(&event.to_component().unwrap()).unwrap();
        assert!(ics.contains("\r\nTRANSP:TRANSPARENT\r\n"));
    }
}
