// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Property formatting for iCalendar properties.
//!
//! This module formats one property as one content line, RFC 5545
//! Section 3.1: `name *(";" param) ":" value`.

use std::io::Write;

use crate::error::Result;
use crate::formatter::Formatter;
use crate::formatter::parameter::write_parameters;
use crate::formatter::value::write_value;
use crate::parameter::validate_name;
use crate::property::Property;

/// Render a property to its unfolded content line, without CRLF.
pub fn format_property(property: &Property) -> Result<String> {
    validate_name("property name", property.name())?;

    let mut line = String::with_capacity(property.name().len() + 32);
    line.push_str(property.name());
    write_parameters(&mut line, property.parameters())?;
    line.push(':');
    write_value(&mut line, property.value())?;
    Ok(line)
}

/// Format a single property as a folded content line.
pub(crate) fn write_property<W: Write>(f: &mut Formatter<W>, property: &Property) -> Result<()> {
    let line = format_property(property)?;
    f.write_line(&line)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::parameter::Parameter;
    use crate::value::{Value, ValueDateTime};

    #[test]
    fn test_format_property_line() {
        let prop = Property::text("SUMMARY", "Lunch; bring food")
            .with_parameter(Parameter::new("LANGUAGE", "en").unwrap());
        assert_eq!(
            format_property(&prop).unwrap(),
            r"SUMMARY;LANGUAGE=en:Lunch\; bring food"
        );
    }

    #[test]
    fn test_format_zoned_date_time() {
        let dt = ValueDateTime::zoned("America/New_York", 2024, 3, 4, 10, 0, 0).unwrap();
        let prop = Property::date_time("DTSTART", dt).unwrap();
        assert_eq!(
            format_property(&prop).unwrap(),
            "DTSTART;TZID=America/New_York:20240304T100000"
        );
    }

    #[test]
    fn test_format_date_value() {
        let prop = Property::date_time("DTSTART", ValueDateTime::date(2024, 3, 4).unwrap()).unwrap();
        assert_eq!(
            format_property(&prop).unwrap(),
            "DTSTART;VALUE=DATE:20240304"
        );
    }

    #[test]
    fn test_format_rejects_invalid_name() {
        let prop = Property::new("BAD NAME", Value::Integer(1));
        assert!(matches!(
            format_property(&prop),
            Err(Error::InvalidField {
                field: "property name",
                ..
            })
        ));
    }
}
