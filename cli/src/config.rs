// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use serde::Deserialize;

pub const APP_NAME: &str = "calforge";

const CALFORGE_CONFIG_ENV: &str = "CALFORGE_CONFIG";
const CONFIG_FILE_NAME: &str = "calendar.toml";

/// Locate and load the calendar description.
///
/// The path comes from `--config`, then `CALFORGE_CONFIG`, then
/// `$XDG_CONFIG_HOME/calforge/calendar.toml`.
#[tracing::instrument]
pub fn parse_config(path: Option<PathBuf>) -> Result<(PathBuf, CalendarConfig), Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(CALFORGE_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(APP_NAME).join(CONFIG_FILE_NAME);
        if !config.exists() {
            return Err(format!("No calendar description found at: {}", config.display()).into());
        }
        config
    };

    let config = std::fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?
        .parse::<CalendarConfig>()
        .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;
    tracing::debug!(events = config.events.len(), "loaded calendar description");
    Ok((path, config))
}

/// Calendar description, the top level of the TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarConfig {
    /// `PRODID`; a calforge identifier when absent
    pub prod_id: Option<String>,

    /// `METHOD` token
    pub method: Option<String>,

    /// `CALSCALE` token
    pub calscale: Option<String>,

    /// Year window for `VTIMEZONE` generation
    pub timezone: Option<TimezoneConfig>,

    #[serde(default)]
    pub events: Vec<EventConfig>,
}

impl FromStr for CalendarConfig {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimezoneConfig {
    pub start_year: i16,
    pub end_year: i16,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventConfig {
    pub summary: String,
    pub description: Option<String>,

    /// Generated when absent
    pub uid: Option<String>,

    /// `2024-03-04T10:00:00`, or `2024-03-04` for all-day events
    pub start: String,
    pub end: Option<String>,

    /// ISO 8601 (`PT1H`) or friendly (`1h 30m`)
    pub duration: Option<String>,

    /// IANA zone of `start` and `end`; floating when absent, rejected for
    /// all-day events
    pub time_zone: Option<String>,

    #[serde(default)]
    pub all_day: bool,

    /// `opaque` or `transparent`
    pub transparency: Option<String>,

    pub rrule: Option<RruleConfig>,
    pub organizer: Option<OrganizerConfig>,

    #[serde(default)]
    pub attendees: Vec<AttendeeConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RruleConfig {
    pub freq: String,

    /// A date for all-day events, otherwise a date-time; UTC unless the
    /// event is floating
    pub until: Option<String>,
    pub count: Option<u32>,
    pub interval: Option<u32>,

    #[serde(default)]
    pub by_second: Vec<u8>,
    #[serde(default)]
    pub by_minute: Vec<u8>,
    #[serde(default)]
    pub by_hour: Vec<u8>,

    /// `MO`, `-1FR`, `+2TU`
    #[serde(default)]
    pub by_day: Vec<String>,
    #[serde(default)]
    pub by_month_day: Vec<i8>,
    #[serde(default)]
    pub by_year_day: Vec<i16>,
    #[serde(default)]
    pub by_week_no: Vec<i8>,
    #[serde(default)]
    pub by_month: Vec<u8>,
    #[serde(default)]
    pub by_set_pos: Vec<i16>,

    pub wkst: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrganizerConfig {
    pub address: String,
    pub common_name: Option<String>,
    pub sent_by: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttendeeConfig {
    pub address: String,
    pub common_name: Option<String>,

    /// `CUTYPE`
    pub user_type: Option<String>,

    /// `PARTSTAT`
    pub status: Option<String>,

    /// `ROLE`
    pub role: Option<String>,

    #[serde(default)]
    pub rsvp: bool,

    pub member: Option<String>,
    #[serde(default)]
    pub delegated_to: Vec<String>,
    #[serde(default)]
    pub delegated_from: Vec<String>,
    pub sent_by: Option<String>,
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(not(unix))]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}
