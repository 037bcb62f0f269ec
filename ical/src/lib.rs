// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Build iCalendar components and properties and render them as RFC 5545 text.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(
    clippy::similar_names,
    clippy::single_match_else,
    clippy::match_bool,
    clippy::module_name_repetitions
)]

pub mod component;
mod error;
pub mod formatter;
pub mod keyword;
pub mod parameter;
pub mod property;
pub mod semantic;
pub mod timezone;
pub mod value;

pub use crate::component::Component;
pub use crate::error::{Error, Result};
pub use crate::formatter::{FoldingStyle, FormatOptions, fold_line, serialize};
pub use crate::parameter::{
    CalendarUserType, Parameter, ParameterKind, ParticipationRole, ParticipationStatus,
};
pub use crate::property::{Property, PropertyKind};
pub use crate::semantic::{
    Attendee, Calendar, CalendarScale, DefaultParameters, Event, EventTime, Method,
    ObservanceKind, Organizer, ResolvedTimezone, TimeTransparency, TimeZoneObservance,
};
pub use crate::timezone::{
    StaticTimezoneProvider, SystemTimezoneProvider, TimezoneProvider, resolve_builtin,
};
pub use crate::value::{
    DateTimeKind, Frequency, RecurrenceRule, Value, ValueDate, ValueDateTime, ValueDuration,
    ValueTime, ValueUtcOffset, WeekDay, WeekDayNum, escape_text, unescape_text,
};
