// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for VTIMEZONE generation from the tz database.

use calforge_ical::{
    Calendar, Event, EventTime, FormatOptions, ObservanceKind, SystemTimezoneProvider,
    TimezoneProvider, ValueDateTime, ValueUtcOffset, resolve_builtin, serialize,
};

#[test]
fn test_system_provider_observances_are_chronological() {
    let provider = SystemTimezoneProvider::with_year_window(2020, 2025).unwrap();
    let zone = provider.resolve("Europe/Berlin").unwrap();

    // one observance at the window start plus two transitions a year
    assert_eq!(zone.observances.len(), 1 + 2 * 6);
    let onsets: Vec<_> = zone
        .observances
        .iter()
        .map(|o| o.onset.civil_date_time())
        .collect();
    assert!(onsets.windows(2).all(|w| w[0] < w[1]));

    // each observance starts from the offset the previous one ended with
    for pair in zone.observances.windows(2) {
        assert_eq!(pair[1].offset_from, pair[0].offset_to);
    }

    let cest = ValueUtcOffset::from_seconds(2 * 3600).unwrap();
    for observance in &zone.observances {
        let expected = if observance.offset_to == cest {
            ObservanceKind::Daylight
        } else {
            ObservanceKind::Standard
        };
        assert_eq!(observance.kind, expected);
    }
}

#[test]
fn test_system_provider_southern_hemisphere() {
    let provider = SystemTimezoneProvider::with_year_window(2024, 2024).unwrap();
    let zone = provider.resolve("Australia/Sydney").unwrap();

    // summer time at the start of the year, then April and October transitions
    let kinds: Vec<_> = zone.observances.iter().map(|o| o.kind).collect();
    assert_eq!(
        kinds,
        [
            ObservanceKind::Daylight,
            ObservanceKind::Standard,
            ObservanceKind::Daylight
        ]
    );
}

#[test]
fn test_system_provider_vtimezone_component() {
    let provider = SystemTimezoneProvider::with_year_window(2024, 2024).unwrap();
    let component = provider
        .resolve("America/New_York")
        .unwrap()
        .component()
        .unwrap();
    let ics = FormatOptions::default().write_to_string(&component).unwrap();

    assert!(ics.starts_with("BEGIN:VTIMEZONE\r\nTZID:America/New_York\r\n"));
    assert!(ics.ends_with("END:VTIMEZONE\r\n"));
    assert!(ics.contains(
        "BEGIN:DAYLIGHT\r\nDTSTART:20240310T020000\r\nTZOFFSETFROM:-0500\r\nTZOFFSETTO:-0400\r\nTZNAME:EDT\r\nEND:DAYLIGHT\r\n"
    ));
    assert!(ics.contains(
        "BEGIN:STANDARD\r\nDTSTART:20241103T020000\r\nTZOFFSETFROM:-0400\r\nTZOFFSETTO:-0500\r\nTZNAME:EST\r\nEND:STANDARD\r\n"
    ));
}

#[test]
fn test_system_provider_in_calendar() {
    let start = ValueDateTime::zoned("Asia/Kolkata", 2024, 3, 4, 10, 0, 0).unwrap();
    let end = ValueDateTime::zoned("Asia/Kolkata", 2024, 3, 4, 11, 0, 0).unwrap();
    let mut calendar = Calendar::new("-//Example Corp//calforge//EN");
    calendar
        .events
        .push(Event::new("Standup", EventTime::StartEnd(start, end)).unwrap());

    let ics = serialize(&calendar.to_component(SystemTimezoneProvider::global()).unwrap()).unwrap();
    assert!(ics.contains("TZID:Asia/Kolkata\r\n"));
    assert!(ics.contains("BEGIN:STANDARD\r\n"));
    assert!(ics.contains("TZOFFSETTO:+0530\r\n"));
    assert!(!ics.contains("BEGIN:DAYLIGHT"));
}

#[test]
fn test_builtin_utc_needs_no_database() {
    let zone = resolve_builtin("GMT").unwrap();
    let ics = serialize(&zone.component().unwrap()).unwrap();
    assert!(ics.contains("TZOFFSETFROM:+0000\r\n"));
    assert!(ics.contains("TZOFFSETTO:+0000\r\n"));
    assert!(ics.contains("TZNAME:GMT\r\n"));
}
