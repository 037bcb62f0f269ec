// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! calforge - build RFC 5545 calendars from a TOML description.

mod cli;
mod config;
mod document;

pub use crate::cli::{Cli, run};
pub use crate::config::{
    AttendeeConfig, CalendarConfig, EventConfig, OrganizerConfig, RruleConfig, TimezoneConfig,
    parse_config,
};
