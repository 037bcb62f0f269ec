// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the iCalendar formatter.

use calforge_ical::{
    Component, Error, FoldingStyle, FormatOptions, Parameter, Property, Value, escape_text,
    fold_line, serialize, unescape_text,
};

fn unfold(folded: &str) -> String {
    folded.replace("\r\n ", "").replace("\r\n\t", "")
}

#[test]
fn test_format_creates_crlf_line_endings() {
    let calendar = Component::new("VCALENDAR")
        .with_property(Property::text("PRODID", "test"))
        .with_property(Property::token("VERSION", "2.0"));
    let formatted = serialize(&calendar).unwrap();

    assert!(formatted.ends_with("\r\n"));
    assert!(!formatted.replace("\r\n", "").contains('\n'));
    assert!(!formatted.replace("\r\n", "").contains('\r'));
    assert_eq!(formatted.lines().count(), 4);
}

#[test]
fn test_format_long_values_never_exceed_75_octets() {
    let long_ascii = "The quick brown fox jumps over the lazy dog. ".repeat(10);
    let long_unicode = "Zürich 会议室 ☕ - ".repeat(20);
    let long_escapes = "a,b;c\\d\n".repeat(40);

    let event = Component::new("VEVENT")
        .with_property(Property::text("SUMMARY", long_ascii.clone()))
        .with_property(Property::text("DESCRIPTION", long_unicode.clone()))
        .with_property(Property::text("COMMENT", long_escapes.clone()))
        .with_property(
            Property::text("LOCATION", "Room 1")
                .with_parameter(Parameter::new("ALTREP", "http://example.com/".repeat(15)).unwrap()),
        );
    let calendar = Component::new("VCALENDAR").with_child(event);
    let formatted = serialize(&calendar).unwrap();

    for line in formatted.split("\r\n") {
        assert!(line.len() <= 75, "line of {} octets: {line:?}", line.len());
    }

    // Unfolding gives back the escaped content lines
    let unfolded = unfold(&formatted);
    assert!(unfolded.contains(&format!("SUMMARY:{}", escape_text(&long_ascii))));
    assert!(unfolded.contains(&format!("DESCRIPTION:{}", escape_text(&long_unicode))));
    assert!(unfolded.contains(&format!("COMMENT:{}", escape_text(&long_escapes))));
}

#[test]
fn test_escape_fold_unfold_unescape_round_trip() {
    let options = FormatOptions::default();
    let japanese = "日本語のテキスト、とても長い。".repeat(12);
    let escapes = "\\;\\,".repeat(50);
    for text in [
        "plain",
        "comma, semicolon; backslash \\ newline\nend",
        japanese.as_str(),
        escapes.as_str(),
    ] {
        let line = format!("DESCRIPTION:{}", escape_text(text));
        let folded = fold_line(&line, &options);
        let unfolded = unfold(&folded);
        assert_eq!(unfolded, line);

        let value = unfolded.strip_prefix("DESCRIPTION:").unwrap();
        assert_eq!(unescape_text(value), text);
    }
}

#[test]
fn test_format_without_folding() {
    let summary = "x".repeat(200);
    let event = Component::new("VEVENT").with_property(Property::text("SUMMARY", summary.clone()));
    let formatted = FormatOptions::default()
        .folding(None)
        .write_to_string(&event)
        .unwrap();
    assert!(formatted.contains(&format!("SUMMARY:{summary}\r\n")));
}

#[test]
fn test_format_with_tab_folding() {
    let event = Component::new("VEVENT").with_property(Property::text("SUMMARY", "y".repeat(100)));
    let formatted = FormatOptions::default()
        .folding_style(FoldingStyle::Tab)
        .write_to_string(&event)
        .unwrap();
    assert!(formatted.contains("\r\n\t"));
    assert!(!formatted.contains("\r\n "));
}

#[test]
fn test_format_write_to_writer() {
    let event = Component::new("VEVENT").with_property(Property::text("SUMMARY", "hello"));
    let mut buffer = Vec::new();
    FormatOptions::default().write(&event, &mut buffer).unwrap();
    assert_eq!(
        String::from_utf8(buffer).unwrap(),
        "BEGIN:VEVENT\r\nSUMMARY:hello\r\nEND:VEVENT\r\n"
    );
}

#[test]
fn test_format_invalid_names_fail_without_output() {
    let bad_property = Component::new("VCALENDAR")
        .with_child(Component::new("VEVENT").with_property(Property::text("SUM:MARY", "x")));
    assert!(matches!(
        serialize(&bad_property),
        Err(Error::InvalidField { .. })
    ));

    let bad_kind = Component::new("");
    assert!(serialize(&bad_kind).is_err());

    let mut sink = Vec::new();
    assert!(
        FormatOptions::default()
            .write(&bad_property, &mut sink)
            .is_err()
    );
    assert!(sink.is_empty());
}

#[test]
fn test_format_late_failure_writes_nothing() {
    // the invalid kind sits after lines that would render fine
    let calendar = Component::new("VCALENDAR")
        .with_property(Property::token("VERSION", "2.0"))
        .with_child(Component::new("V EVENT"));

    assert!(serialize(&calendar).is_err());
    for options in [
        FormatOptions::default(),
        FormatOptions::default().folding(None),
        FormatOptions::default().folding_style(FoldingStyle::Tab),
    ] {
        assert!(options.write_to_string(&calendar).is_err());

        let mut sink = Vec::new();
        assert!(options.write(&calendar, &mut sink).is_err());
        assert!(sink.is_empty(), "partial output: {sink:?}");
    }
}

#[test]
fn test_format_duplicate_parameters_are_kept() {
    let prop = Property::new("X-TAGS", Value::token("A"))
        .with_parameter(Parameter::new("X-K", "1").unwrap())
        .with_parameter(Parameter::new("X-K", "2").unwrap());
    let formatted = serialize(&Component::new("VEVENT").with_property(prop)).unwrap();
    assert!(formatted.contains("X-TAGS;X-K=1;X-K=2:A\r\n"));
}

#[test]
fn test_format_quoted_parameter_values() {
    let prop = Property::cal_address("ATTENDEE", "mailto:a@example.com")
        .with_parameter(Parameter::new("CN", "Doe, Jane").unwrap())
        .with_parameter(Parameter::new("X-PATH", r"C:\Users").unwrap());
    let formatted = FormatOptions::default()
        .folding(None)
        .write_to_string(&Component::new("VEVENT").with_property(prop))
        .unwrap();
    assert!(formatted.contains(r#"ATTENDEE;CN="Doe, Jane";X-PATH="C:\Users":mailto:a@example.com"#));
}

#[test]
fn test_format_raw_value_cannot_inject_lines() {
    let prop = Property::token("X-RAW", "A\r\nEND:VCALENDAR");
    let formatted = serialize(&Component::new("VEVENT").with_property(prop)).unwrap();
    let lines: Vec<_> = formatted.lines().collect();
    assert_eq!(lines, ["BEGIN:VEVENT", r"X-RAW:A\nEND:VCALENDAR", "END:VEVENT"]);
}
