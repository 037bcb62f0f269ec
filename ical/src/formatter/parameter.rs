// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Parameter formatting for iCalendar parameters.
//!
//! This module formats parameters as defined in RFC 5545 Section 3.2.

use std::borrow::Cow;

use crate::error::Result;
use crate::parameter::{Parameter, validate_name, validate_parameter_value};

/// Format all parameters, each prefixed with a semicolon.
pub fn write_parameters(line: &mut String, parameters: &[Parameter]) -> Result<()> {
    for param in parameters {
        write_parameter(line, param)?;
    }
    Ok(())
}

/// Format a single parameter as `;NAME=v1[,v2...]`.
///
/// Parameters are validated on construction, the check is repeated here
/// since the output must stay a single well-formed content line.
fn write_parameter(line: &mut String, param: &Parameter) -> Result<()> {
    validate_name("parameter name", param.name())?;
    line.push(';');
    line.push_str(param.name());
    line.push('=');
    for (i, value) in param.values().iter().enumerate() {
        validate_parameter_value("parameter value", value)?;
        if i > 0 {
            line.push(',');
        }
        line.push_str(&quote_if_needed(value));
    }
    Ok(())
}

/// Quote a parameter value if it contains special characters.
///
/// Per RFC 5545, parameter values containing COLON, SEMICOLON or COMMA
/// must be quoted. A backslash is quoted as well so it is not mistaken for
/// a text escape. Quoted values are not escaped any further.
fn quote_if_needed(value: &str) -> Cow<'_, str> {
    if value.contains([':', ';', ',', '\\']) {
        Cow::Owned(format!("\"{value}\""))
    } else {
        Cow::Borrowed(value)
    }
}
