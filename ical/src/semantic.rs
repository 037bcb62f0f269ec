// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Typed calendar objects and their assembly into component trees.
//!
//! The types here hold what a caller knows about a calendar; the
//! `to_property`/`to_component` methods check the RFC 5545 rules between
//! fields and build the generic [`crate::Component`] tree.

mod attendee;
mod icalendar;
mod vevent;
mod vtimezone;

pub use attendee::{Attendee, DefaultParameters, Organizer};
pub use icalendar::{Calendar, CalendarScale, Method};
pub use vevent::{Event, EventTime, TimeTransparency};
pub use vtimezone::{ObservanceKind, ResolvedTimezone, TimeZoneObservance};
