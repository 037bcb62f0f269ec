// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Property kinds for the iCalendar properties the builder emits.

use std::fmt;
use std::str::FromStr;

use crate::keyword::{
    KW_ATTENDEE, KW_CALSCALE, KW_CREATED, KW_DESCRIPTION, KW_DTEND, KW_DTSTAMP, KW_DTSTART,
    KW_DURATION, KW_METHOD, KW_ORGANIZER, KW_PRODID, KW_RRULE, KW_SUMMARY, KW_TRANSP, KW_TZID,
    KW_TZNAME, KW_TZOFFSETFROM, KW_TZOFFSETTO, KW_UID, KW_VERSION,
};

/// Macro to define `PropertyKind` with its keyword mapping.
///
/// Usage: `property_kind!(Variant => KW, ...)`
macro_rules! property_kind {
    (
        $(
            $(#[$attr:meta])*
            $variant:ident => $kw:ident $(,)?
        )*
    ) => {
        /// Kind of iCalendar property.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[expect(missing_docs)]
        pub enum PropertyKind {
            $(
                $(#[$attr])*
                $variant,
            )*
        }

        impl PropertyKind {
            /// Returns the property name keyword
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(PropertyKind::$variant => $kw,)*
                }
            }
        }

        impl FromStr for PropertyKind {
            type Err = ();

            // Property names are case-insensitive per RFC 5545
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($kw) {
                        return Ok(PropertyKind::$variant);
                    }
                )*
                Err(())
            }
        }

        impl fmt::Display for PropertyKind {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.name().fmt(f)
            }
        }

        #[cfg(test)]
        const KINDS: &[PropertyKind] = &[
            $(
                PropertyKind::$variant,
            )*
        ];
    };
}

property_kind! {
    // 3.7.1.  Calendar Scale
    CalScale    => KW_CALSCALE,
    // 3.7.2.  Method
    Method      => KW_METHOD,
    // 3.7.3.  Product Identifier
    ProdId      => KW_PRODID,
    // 3.7.4.  Version
    Version     => KW_VERSION,
    // 3.8.1.5.  Description
    Description => KW_DESCRIPTION,
    // 3.8.1.12.  Summary
    Summary     => KW_SUMMARY,
    // 3.8.2.2.  Date-Time End
    DtEnd       => KW_DTEND,
    // 3.8.2.4.  Date-Time Start
    DtStart     => KW_DTSTART,
    // 3.8.2.5.  Duration
    Duration    => KW_DURATION,
    // 3.8.2.7.  Time Transparency
    Transp      => KW_TRANSP,
    // 3.8.3.1.  Time Zone Identifier
    TzId        => KW_TZID,
    // 3.8.3.2.  Time Zone Name
    TzName      => KW_TZNAME,
    // 3.8.3.3.  Time Zone Offset From
    TzOffsetFrom => KW_TZOFFSETFROM,
    // 3.8.3.4.  Time Zone Offset To
    TzOffsetTo  => KW_TZOFFSETTO,
    // 3.8.4.1.  Attendee
    Attendee    => KW_ATTENDEE,
    // 3.8.4.3.  Organizer
    Organizer   => KW_ORGANIZER,
    // 3.8.4.7.  Unique Identifier
    Uid         => KW_UID,
    // 3.8.5.3.  Recurrence Rule
    RRule       => KW_RRULE,
    // 3.8.7.1.  Date-Time Created
    Created     => KW_CREATED,
    // 3.8.7.2.  Date-Time Stamp
    DtStamp     => KW_DTSTAMP,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_kind_round_trip() {
        for kind in KINDS {
            assert_eq!(kind.name().parse::<PropertyKind>(), Ok(*kind));
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn test_property_kind_case_insensitive() {
        assert_eq!("dtstart".parse::<PropertyKind>(), Ok(PropertyKind::DtStart));
        assert!("X-CUSTOM".parse::<PropertyKind>().is_err());
    }
}
