// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::keyword::{
    KW_CUTYPE_GROUP, KW_CUTYPE_INDIVIDUAL, KW_CUTYPE_RESOURCE, KW_CUTYPE_ROOM, KW_CUTYPE_UNKNOWN,
    KW_PARTSTAT_ACCEPTED, KW_PARTSTAT_DECLINED, KW_PARTSTAT_DELEGATED, KW_PARTSTAT_NEEDS_ACTION,
    KW_PARTSTAT_TENTATIVE, KW_ROLE_CHAIR, KW_ROLE_NON_PARTICIPANT, KW_ROLE_OPT_PARTICIPANT,
    KW_ROLE_REQ_PARTICIPANT,
};
use crate::parameter::validate_parameter_value;

/// Macro to define parameter enums with extension value support.
///
/// Known values map to unit variants, anything else is kept verbatim in
/// `X(String)` and written back unchanged.
macro_rules! define_param_enum_with_unknown {
    (
        $(#[$meta:meta])*
        enum $Name:ident {
            $(
                $(#[$vmeta:meta])*
                $Variant:ident => $kw:ident
            ),* $(,)?
        }

        default = $Default:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        #[allow(missing_docs)]
        pub enum $Name {
            $(
                $(#[$vmeta])*
                $Variant,
            )*
            /// Experimental or IANA-registered value not known to this crate
            X(String),
        }

        impl $Name {
            /// Whether this is an extension value.
            #[must_use]
            pub const fn is_extension(&self) -> bool {
                matches!(self, Self::X(_))
            }

            /// Whether this is the RFC 5545 default value.
            #[must_use]
            pub const fn is_default(&self) -> bool {
                matches!(self, Self::$Default)
            }

            /// Returns the token written as the parameter value
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(
                        Self::$Variant => $kw,
                    )*
                    Self::X(value) => value,
                }
            }

            /// Check that the value can be written as a parameter value.
            ///
            /// # Errors
            ///
            /// Returns [`Error::InvalidField`] if an extension value is empty
            /// or contains a double quote or control character.
            pub fn validate(&self) -> Result<()> {
                match self {
                    Self::X(value) if value.is_empty() => Err(Error::invalid(
                        stringify!($Name),
                        "extension value is empty",
                    )),
                    Self::X(value) => validate_parameter_value(stringify!($Name), value),
                    _ => Ok(()),
                }
            }
        }

        impl Default for $Name {
            fn default() -> Self {
                Self::$Default
            }
        }

        impl FromStr for $Name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($kw) {
                        return Ok(Self::$Variant);
                    }
                )*
                Ok(Self::X(s.to_string()))
            }
        }

        impl fmt::Display for $Name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.as_str().fmt(f)
            }
        }
    };
}

define_param_enum_with_unknown! {
    /// Calendar user type, RFC 5545 Section 3.2.3
    enum CalendarUserType {
        Individual  => KW_CUTYPE_INDIVIDUAL,
        Group       => KW_CUTYPE_GROUP,
        Resource    => KW_CUTYPE_RESOURCE,
        Room        => KW_CUTYPE_ROOM,
        Unknown     => KW_CUTYPE_UNKNOWN,
    }

    default = Individual;
}

define_param_enum_with_unknown! {
    /// Participation status for `VEVENT` attendees, RFC 5545 Section 3.2.12
    enum ParticipationStatus {
        NeedsAction => KW_PARTSTAT_NEEDS_ACTION,
        Accepted    => KW_PARTSTAT_ACCEPTED,
        Declined    => KW_PARTSTAT_DECLINED,
        Tentative   => KW_PARTSTAT_TENTATIVE,
        Delegated   => KW_PARTSTAT_DELEGATED,
    }

    default = NeedsAction;
}

define_param_enum_with_unknown! {
    /// Participation role, RFC 5545 Section 3.2.16
    enum ParticipationRole {
        Chair               => KW_ROLE_CHAIR,
        RequiredParticipant => KW_ROLE_REQ_PARTICIPANT,
        OptionalParticipant => KW_ROLE_OPT_PARTICIPANT,
        NonParticipant      => KW_ROLE_NON_PARTICIPANT,
    }

    default = RequiredParticipant;
}
