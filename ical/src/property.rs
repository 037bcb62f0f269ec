// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Properties as defined in RFC 5545 Section 3.8.
//!
//! A [`Property`] is a name, exactly one [`Value`] and an ordered list of
//! [`Parameter`]s. Names are checked when the property is serialized.

mod kind;

pub use kind::PropertyKind;

use crate::error::{Error, Result};
use crate::keyword::{KW_DATE, KW_TZID, KW_VALUE};
use crate::parameter::Parameter;
use crate::value::{Value, ValueDateTime, ValueDuration};

/// A single content line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    name: String,
    value: Value,
    parameters: Vec<Parameter>,
}

impl Property {
    /// Property with no parameters.
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
            parameters: Vec::new(),
        }
    }

    /// Text property such as `SUMMARY`.
    pub fn text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name, Value::Text(text.into()))
    }

    /// Token property such as `TRANSP:OPAQUE`, written verbatim.
    pub fn token(name: impl Into<String>, token: impl Into<String>) -> Self {
        Self::new(name, Value::Token(token.into()))
    }

    /// Calendar user address property such as `ATTENDEE`.
    pub fn cal_address(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self::new(name, Value::CalAddress(address.into()))
    }

    /// Duration property.
    pub fn duration(name: impl Into<String>, duration: ValueDuration) -> Self {
        Self::new(name, Value::Duration(duration))
    }

    /// Date or date-time property.
    ///
    /// Adds `VALUE=DATE` for dates and `TZID` for zoned values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidField`] if the zone identifier cannot be
    /// written as a parameter value.
    pub fn date_time(name: impl Into<String>, datetime: ValueDateTime) -> Result<Self> {
        let mut parameters = Vec::new();
        if datetime.is_date() {
            parameters.push(Parameter::new(KW_VALUE, KW_DATE)?);
        } else if let Some(tzid) = datetime.tzid() {
            parameters.push(Parameter::new(KW_TZID, tzid)?);
        }
        Ok(Self {
            name: name.into(),
            value: Value::DateTime(datetime),
            parameters,
        })
    }

    /// Builder form of [`Property::add_parameter`].
    #[must_use]
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.add_parameter(parameter);
        self
    }

    /// Append a parameter. Duplicated names are kept and written in order.
    pub fn add_parameter(&mut self, parameter: Parameter) {
        self.parameters.push(parameter);
    }

    /// Append a parameter whose name must not be present yet.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidField`] if a parameter with the same name
    /// (ASCII case-insensitive) already exists.
    pub fn insert_parameter(&mut self, parameter: Parameter) -> Result<()> {
        if self.parameter(parameter.name()).is_some() {
            return Err(Error::invalid(
                "parameter",
                format!(
                    "{} already carries a {} parameter",
                    self.name,
                    parameter.name()
                ),
            ));
        }
        self.parameters.push(parameter);
        Ok(())
    }

    /// Property name as given.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The known kind, if the name is one the crate emits.
    #[must_use]
    pub fn kind(&self) -> Option<PropertyKind> {
        self.name.parse().ok()
    }

    /// Property value.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Parameters, in insertion order.
    #[must_use]
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// First parameter with the given name, ASCII case-insensitive.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.is_named(name))
    }

    /// Case-insensitive name comparison.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}
