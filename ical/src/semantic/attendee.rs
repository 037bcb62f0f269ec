// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Attendee and organizer properties, RFC 5545 Sections 3.8.4.1 and 3.8.4.3.

use crate::error::{Error, Result};
use crate::keyword::{KW_ATTENDEE, KW_ORGANIZER, KW_RSVP_FALSE, KW_RSVP_TRUE};
use crate::parameter::{
    CalendarUserType, Parameter, ParameterKind, ParticipationRole, ParticipationStatus,
};
use crate::property::Property;

/// Whether parameters equal to their RFC 5545 default are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DefaultParameters {
    /// Leave out `CUTYPE=INDIVIDUAL`, `PARTSTAT=NEEDS-ACTION`,
    /// `ROLE=REQ-PARTICIPANT` and `RSVP=FALSE`
    #[default]
    Omit,
    /// Always write all four
    Emit,
}

/// Attendee information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attendee {
    /// Calendar user address (mailto: or other URI)
    pub address: String,

    /// Calendar user type
    pub user_type: CalendarUserType,

    /// Participation status
    pub participation_status: ParticipationStatus,

    /// Participation role
    pub role: ParticipationRole,

    /// RSVP expectation
    pub rsvp: bool,

    /// Group or list membership (optional)
    pub member: Option<String>,

    /// Delegatees
    pub delegated_to: Vec<String>,

    /// Delegators
    pub delegated_from: Vec<String>,

    /// Acting on behalf of (optional)
    pub sent_by: Option<String>,

    /// Common name (optional)
    pub common_name: Option<String>,
}

impl Attendee {
    /// Attendee with every parameter at its default.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            user_type: CalendarUserType::default(),
            participation_status: ParticipationStatus::default(),
            role: ParticipationRole::default(),
            rsvp: false,
            member: None,
            delegated_to: Vec::new(),
            delegated_from: Vec::new(),
            sent_by: None,
            common_name: None,
        }
    }

    /// `ATTENDEE` property with default-valued parameters left out.
    ///
    /// # Errors
    ///
    /// See [`Attendee::to_property_with`].
    pub fn to_property(&self) -> Result<Property> {
        self.to_property_with(DefaultParameters::Omit)
    }

    /// `ATTENDEE` property under the given default policy.
    ///
    /// Parameters are written as `CUTYPE`, `PARTSTAT`, `ROLE`, `RSVP`,
    /// `MEMBER`, `DELEGATED-TO`, `DELEGATED-FROM`, `SENT-BY`, `CN`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidField`] if the address is empty or a value
    /// cannot be written as a parameter value.
    pub fn to_property_with(&self, defaults: DefaultParameters) -> Result<Property> {
        let mut prop = address_property(KW_ATTENDEE, &self.address)?;
        let emit_defaults = defaults == DefaultParameters::Emit;

        if emit_defaults || !self.user_type.is_default() {
            self.user_type.validate()?;
            prop.insert_parameter(Parameter::of_kind(
                ParameterKind::CalendarUserType,
                self.user_type.as_str(),
            )?)?;
        }
        if emit_defaults || !self.participation_status.is_default() {
            self.participation_status.validate()?;
            prop.insert_parameter(Parameter::of_kind(
                ParameterKind::ParticipationStatus,
                self.participation_status.as_str(),
            )?)?;
        }
        if emit_defaults || !self.role.is_default() {
            self.role.validate()?;
            prop.insert_parameter(Parameter::of_kind(
                ParameterKind::ParticipationRole,
                self.role.as_str(),
            )?)?;
        }
        if emit_defaults || self.rsvp {
            let rsvp = if self.rsvp { KW_RSVP_TRUE } else { KW_RSVP_FALSE };
            prop.insert_parameter(Parameter::of_kind(ParameterKind::RsvpExpectation, rsvp)?)?;
        }
        if let Some(member) = &self.member {
            prop.insert_parameter(Parameter::of_kind(
                ParameterKind::GroupOrListMembership,
                member.as_str(),
            )?)?;
        }
        if !self.delegated_to.is_empty() {
            prop.insert_parameter(Parameter::with_values(
                ParameterKind::Delegatees.name(),
                &self.delegated_to,
            )?)?;
        }
        if !self.delegated_from.is_empty() {
            prop.insert_parameter(Parameter::with_values(
                ParameterKind::Delegators.name(),
                &self.delegated_from,
            )?)?;
        }
        if let Some(sent_by) = &self.sent_by {
            prop.insert_parameter(Parameter::of_kind(ParameterKind::SendBy, sent_by.as_str())?)?;
        }
        if let Some(cn) = &self.common_name {
            prop.insert_parameter(Parameter::of_kind(ParameterKind::CommonName, cn.as_str())?)?;
        }
        Ok(prop)
    }
}

/// Organizer information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organizer {
    /// Calendar user address (mailto: or other URI)
    pub address: String,

    /// Common name (optional)
    pub common_name: Option<String>,

    /// Acting on behalf of (optional)
    pub sent_by: Option<String>,
}

impl Organizer {
    /// Organizer with only an address.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            common_name: None,
            sent_by: None,
        }
    }

    /// `ORGANIZER` property, `SENT-BY` then `CN` when present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidField`] if the address is empty or a value
    /// cannot be written as a parameter value.
    pub fn to_property(&self) -> Result<Property> {
        let mut prop = address_property(KW_ORGANIZER, &self.address)?;
        if let Some(sent_by) = &self.sent_by {
            prop.insert_parameter(Parameter::of_kind(ParameterKind::SendBy, sent_by.as_str())?)?;
        }
        if let Some(cn) = &self.common_name {
            prop.insert_parameter(Parameter::of_kind(ParameterKind::CommonName, cn.as_str())?)?;
        }
        Ok(prop)
    }
}

fn address_property(name: &str, address: &str) -> Result<Property> {
    if address.trim().is_empty() {
        return Err(Error::invalid("calendar user address", "address is empty"));
    }
    Ok(Property::cal_address(name, address))
}
