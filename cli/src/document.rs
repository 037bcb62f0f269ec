// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::str::FromStr;

use calforge_ical::{
    Attendee, Calendar, CalendarScale, CalendarUserType, Event, EventTime, Frequency, Method,
    Organizer, ParticipationRole, ParticipationStatus, RecurrenceRule, TimeTransparency,
    ValueDateTime, ValueDuration, WeekDay, WeekDayNum,
};
use jiff::{Span, SpanRelativeTo, civil};

use crate::config::{AttendeeConfig, CalendarConfig, EventConfig, OrganizerConfig, RruleConfig};

const DEFAULT_PROD_ID: &str = concat!("-//calforge//calforge ", env!("CARGO_PKG_VERSION"), "//EN");

impl CalendarConfig {
    /// Build the typed calendar this description stands for.
    pub fn to_calendar(&self) -> Result<Calendar, Box<dyn Error>> {
        let mut calendar = Calendar::new(self.prod_id.as_deref().unwrap_or(DEFAULT_PROD_ID));
        calendar.method = self.method.as_deref().map(Method::from_str).transpose()?;
        calendar.calscale = self
            .calscale
            .as_deref()
            .map(CalendarScale::from_str)
            .transpose()?;

        for (i, event) in self.events.iter().enumerate() {
            let built = event
                .to_event()
                .map_err(|e| format!("event #{} ({:?}): {}", i + 1, event.summary, e))?;
            calendar.events.push(built);
        }
        Ok(calendar)
    }
}

impl EventConfig {
    fn to_event(&self) -> Result<Event, Box<dyn Error>> {
        if self.all_day && self.time_zone.is_some() {
            return Err("`time_zone` has no effect on an all-day event".into());
        }
        let start = self.date_time(&self.start)?;
        let time = match (&self.end, &self.duration) {
            (Some(end), None) => EventTime::StartEnd(start, self.date_time(end)?),
            (None, Some(duration)) => EventTime::StartDuration(start, parse_duration(duration)?),
            (None, None) if self.all_day => {
                EventTime::StartDuration(start, ValueDuration::from_days(1)?)
            }
            (None, None) => return Err("one of `end` or `duration` is required".into()),
            (Some(_), Some(_)) => return Err("`end` and `duration` are mutually exclusive".into()),
        };

        let mut event = Event::new(self.summary.clone(), time)?;
        event.description.clone_from(&self.description);
        if let Some(uid) = &self.uid {
            event.uid.clone_from(uid);
        }
        if let Some(transparency) = &self.transparency {
            event.transparency = parse_transparency(transparency)?;
        }
        event.recurrence_rule = self
            .rrule
            .as_ref()
            .map(|rule| rule.to_rule(self))
            .transpose()?;
        event.organizer = self.organizer.as_ref().map(OrganizerConfig::to_organizer);
        event.attendees = self
            .attendees
            .iter()
            .map(AttendeeConfig::to_attendee)
            .collect();
        Ok(event)
    }

    /// A date for all-day events, otherwise a date-time in `time_zone`.
    fn date_time(&self, s: &str) -> Result<ValueDateTime, Box<dyn Error>> {
        if self.all_day {
            let date: civil::Date = s
                .parse()
                .map_err(|e| format!("invalid date {s:?}: {e}"))?;
            return Ok(ValueDateTime::try_from(date)?);
        }

        let dt: civil::DateTime = s
            .parse()
            .map_err(|e| format!("invalid date-time {s:?}: {e}"))?;
        match &self.time_zone {
            None => Ok(ValueDateTime::try_from(dt)?),
            Some(tz) => {
                let zoned = dt
                    .in_tz(tz)
                    .map_err(|e| format!("invalid time zone {tz:?}: {e}"))?;
                if zoned.datetime() != dt {
                    tracing::warn!(%dt, %zoned, "local time does not exist, shifted forward");
                }
                Ok(ValueDateTime::try_from(&zoned)?)
            }
        }
    }
}

impl RruleConfig {
    fn to_rule(&self, event: &EventConfig) -> Result<RecurrenceRule, Box<dyn Error>> {
        let frequency = Frequency::from_str(&self.freq)
            .map_err(|_| format!("unknown frequency {:?}", self.freq))?;
        let by_day = self
            .by_day
            .iter()
            .map(|day| WeekDayNum::from_str(day))
            .collect::<Result<Vec<_>, _>>()?;

        let mut rule = RecurrenceRule::new(frequency)
            .by_second(self.by_second.iter().copied())
            .by_minute(self.by_minute.iter().copied())
            .by_hour(self.by_hour.iter().copied())
            .by_day(by_day)
            .by_month_day(self.by_month_day.iter().copied())
            .by_year_day(self.by_year_day.iter().copied())
            .by_week_no(self.by_week_no.iter().copied())
            .by_month(self.by_month.iter().copied())
            .by_set_pos(self.by_set_pos.iter().copied());
        if let Some(until) = &self.until {
            rule = rule.until(until_value(until, event)?);
        }
        if let Some(count) = self.count {
            rule = rule.count(count);
        }
        if let Some(interval) = self.interval {
            rule = rule.interval(interval);
        }
        if let Some(wkst) = &self.wkst {
            let day = WeekDay::from_str(wkst).map_err(|_| format!("unknown weekday {wkst:?}"))?;
            rule = rule.week_start(day);
        }
        rule.validate()?;
        Ok(rule)
    }
}

/// `UNTIL` follows the start: a date for all-day events, floating for
/// floating events, UTC otherwise.
fn until_value(s: &str, event: &EventConfig) -> Result<ValueDateTime, Box<dyn Error>> {
    if event.all_day {
        let date: civil::Date = s
            .parse()
            .map_err(|e| format!("invalid UNTIL date {s:?}: {e}"))?;
        return Ok(ValueDateTime::try_from(date)?);
    }

    let dt: civil::DateTime = s
        .parse()
        .map_err(|e| format!("invalid UNTIL date-time {s:?}: {e}"))?;
    match &event.time_zone {
        None => Ok(ValueDateTime::try_from(dt)?),
        Some(tz) => {
            let instant = dt
                .in_tz(tz)
                .map_err(|e| format!("invalid time zone {tz:?}: {e}"))?
                .timestamp();
            Ok(ValueDateTime::try_from(instant)?)
        }
    }
}

impl OrganizerConfig {
    fn to_organizer(&self) -> Organizer {
        Organizer {
            common_name: self.common_name.clone(),
            sent_by: self.sent_by.clone(),
            ..Organizer::new(self.address.clone())
        }
    }
}

impl AttendeeConfig {
    fn to_attendee(&self) -> Attendee {
        let mut attendee = Attendee {
            rsvp: self.rsvp,
            common_name: self.common_name.clone(),
            member: self.member.clone(),
            delegated_to: self.delegated_to.clone(),
            delegated_from: self.delegated_from.clone(),
            sent_by: self.sent_by.clone(),
            ..Attendee::new(self.address.clone())
        };

        // unknown tokens parse into the extension variant, written verbatim
        if let Some(s) = &self.user_type {
            let Ok(user_type) = s.parse::<CalendarUserType>();
            attendee.user_type = user_type;
        }
        if let Some(s) = &self.status {
            let Ok(status) = s.parse::<ParticipationStatus>();
            attendee.participation_status = status;
        }
        if let Some(s) = &self.role {
            let Ok(role) = s.parse::<ParticipationRole>();
            attendee.role = role;
        }
        attendee
    }
}

fn parse_transparency(s: &str) -> Result<TimeTransparency, Box<dyn Error>> {
    if s.eq_ignore_ascii_case("opaque") {
        Ok(TimeTransparency::Opaque)
    } else if s.eq_ignore_ascii_case("transparent") {
        Ok(TimeTransparency::Transparent)
    } else {
        Err(format!("transparency must be `opaque` or `transparent`, got {s:?}").into())
    }
}

/// Days count as 24 hours and weeks as 7 days, which is what `DURATION`
/// means for a nominal length.
fn parse_duration(s: &str) -> Result<ValueDuration, Box<dyn Error>> {
    let span: Span = s
        .parse()
        .map_err(|e| format!("invalid duration {s:?}: {e}"))?;
    let duration = span
        .to_duration(SpanRelativeTo::days_are_24_hours())
        .map_err(|e| format!("invalid duration {s:?}: {e}"))?;
    Ok(ValueDuration::try_from(duration)?)
}
