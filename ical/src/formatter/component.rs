// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Component formatting for iCalendar components.
//!
//! This module formats a component tree as defined in RFC 5545 Section 3.4
//! and 3.6, recursively and in pre-order.

use std::io::Write;

use crate::component::Component;
use crate::error::Result;
use crate::formatter::Formatter;
use crate::formatter::property::write_property;
use crate::keyword::{KW_BEGIN, KW_END};
use crate::parameter::validate_name;

/// Format a component with its properties and nested components.
pub(crate) fn write_component<W: Write>(f: &mut Formatter<W>, component: &Component) -> Result<()> {
    validate_name("component kind", component.kind())?;
    with_block(f, component.kind(), |f| {
        for property in component.properties() {
            write_property(f, property)?;
        }
        for child in component.children() {
            write_component(f, child)?;
        }
        Ok(())
    })
}

/// Helper to write a component block with BEGIN/END markers.
fn with_block<W: Write, F>(f: &mut Formatter<W>, kind: &str, body: F) -> Result<()>
where
    F: FnOnce(&mut Formatter<W>) -> Result<()>,
{
    f.write_line(&format!("{KW_BEGIN}:{kind}"))?;
    body(f)?;
    f.write_line(&format!("{KW_END}:{kind}"))?;
    Ok(())
}
