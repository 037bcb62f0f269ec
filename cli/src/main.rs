// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! calforge - build RFC 5545 calendars from a TOML description

use std::process::ExitCode;

fn main() -> ExitCode {
    calforge_cli::run()
}
