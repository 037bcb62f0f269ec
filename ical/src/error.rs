// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Error type shared by every encoder and the formatter.

use std::io;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors raised while building or encoding calendar objects.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Caller-supplied data violates a structural precondition
    #[error("Invalid {field}: {reason}")]
    InvalidField {
        /// The field or element that is invalid
        field: &'static str,
        /// Human readable description of the violation
        reason: String,
    },

    /// The timezone provider could not resolve an identifier
    #[error("Unresolved timezone '{tzid}': {reason}")]
    UnresolvedTimezone {
        /// The identifier that failed to resolve
        tzid: String,
        /// Why the provider gave up
        reason: String,
    },

    /// A numeric field does not fit its fixed-width representation
    #[error("Value {value} of {field} exceeds its encodable range")]
    EncodingOverflow {
        /// The overflowing field
        field: &'static str,
        /// The offending value
        value: i128,
    },

    /// Writing formatted output failed
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn overflow(field: &'static str, value: impl Into<i128>) -> Self {
        Self::EncodingOverflow {
            field,
            value: value.into(),
        }
    }

    pub(crate) fn unresolved(tzid: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnresolvedTimezone {
            tzid: tzid.into(),
            reason: reason.into(),
        }
    }
}
