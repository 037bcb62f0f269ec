// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Property parameters as defined in RFC 5545 Section 3.2.

mod definition;
mod kind;

pub use definition::{CalendarUserType, ParticipationRole, ParticipationStatus};
pub use kind::ParameterKind;

use crate::error::{Error, Result};

/// A property parameter: a name and one or more values.
///
/// Values are stored unquoted, quoting is decided by the formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    name: String,
    values: Vec<String>,
}

impl Parameter {
    /// Single-valued parameter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidField`] if the name is not an `iana-token` or
    /// `x-name`, or if the value cannot be written as a `param-value`.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        Self::with_values(name, [value.into()])
    }

    /// Multi-valued parameter, written as `NAME=v1,v2`.
    ///
    /// # Errors
    ///
    /// Same as [`Parameter::new`]; an empty value list is also rejected.
    pub fn with_values(
        name: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self> {
        let name = name.into();
        validate_name("parameter name", &name)?;

        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Err(Error::invalid(
                "parameter value",
                format!("{name} has no value"),
            ));
        }
        for value in &values {
            validate_parameter_value("parameter value", value)?;
        }

        Ok(Self { name, values })
    }

    /// Parameter of a known kind.
    ///
    /// # Errors
    ///
    /// See [`Parameter::new`].
    pub fn of_kind(kind: ParameterKind, value: impl Into<String>) -> Result<Self> {
        Self::new(kind.name(), value)
    }

    /// Parameter name as given.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameter values, in order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// The known kind, if the name is one the crate emits.
    #[must_use]
    pub fn kind(&self) -> Option<ParameterKind> {
        self.name.parse().ok()
    }

    /// Case-insensitive name comparison.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// Check `iana-token` / `x-name`: non-empty, ASCII alphanumerics and `-`.
pub(crate) fn validate_name(field: &'static str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::invalid(field, "name is empty"));
    }
    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-'))
    {
        return Err(Error::invalid(
            field,
            format!("{name:?} contains {c:?}, only ASCII letters, digits and '-' are allowed"),
        ));
    }
    Ok(())
}

/// Check `param-value`: no double quote and no control character except HTAB.
pub(crate) fn validate_parameter_value(field: &'static str, value: &str) -> Result<()> {
    if let Some(c) = value
        .chars()
        .find(|c| *c == '"' || (c.is_control() && *c != '\t'))
    {
        return Err(Error::invalid(
            field,
            format!("{value:?} contains {c:?}, which cannot appear in a parameter value"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_new() {
        let param = Parameter::new("CN", "John Doe").unwrap();
        assert_eq!(param.name(), "CN");
        assert_eq!(param.values(), ["John Doe"]);
        assert_eq!(param.kind(), Some(ParameterKind::CommonName));
    }

    #[test]
    fn test_parameter_rejects_bad_names() {
        for name in ["", "X PARAM", "X_PARAM", "CN:", "ÄÖ"] {
            assert!(
                matches!(
                    Parameter::new(name, "v"),
                    Err(Error::InvalidField {
                        field: "parameter name",
                        ..
                    })
                ),
                "{name:?} should be rejected"
            );
        }
        assert!(Parameter::new("X-CUSTOM-1", "v").is_ok());
    }

    #[test]
    fn test_parameter_rejects_bad_values() {
        assert!(Parameter::new("CN", "say \"hi\"").is_err());
        assert!(Parameter::new("CN", "line\nbreak").is_err());
        assert!(Parameter::new("CN", "bell\u{7}").is_err());
        assert!(Parameter::new("CN", "tab\tok").is_ok());
        assert!(Parameter::new("CN", "Doe, John; Jr.").is_ok());
    }

    #[test]
    fn test_parameter_with_values() {
        let param =
            Parameter::with_values("MEMBER", ["mailto:a@example.com", "mailto:b@example.com"])
                .unwrap();
        assert_eq!(param.values().len(), 2);
        assert!(Parameter::with_values("MEMBER", Vec::<String>::new()).is_err());
    }

    #[test]
    fn test_is_named_ignores_case() {
        let param = Parameter::new("x-foo", "1").unwrap();
        assert!(param.is_named("X-FOO"));
        assert_eq!(param.kind(), None);
    }
}
