// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, io::Write, path::PathBuf, process::ExitCode};

use calforge_ical::{
    Calendar, Component, EventTime, FormatOptions, SystemTimezoneProvider, TimezoneProvider,
};
use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::config::{APP_NAME, TimezoneConfig, parse_config};

/// Run the calforge command-line interface.
pub fn run() -> ExitCode {
    let cli = match Cli::parse() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(cli.verbose);
    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            ExitCode::FAILURE
        }
    }
}

/// Command-line interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cli {
    /// Path to the calendar description
    pub config: Option<PathBuf>,

    /// Output file, stdout when absent
    pub output: Option<PathBuf>,

    /// Fold content lines at 75 octets
    pub fold: bool,

    /// Log at debug level unless `RUST_LOG` says otherwise
    pub verbose: bool,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Build an RFC 5545 calendar from a TOML description.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .arg(
                arg!(-c --config [CONFIG] "Path to the calendar description")
                    .long_help(
                        "\
Path to the calendar description. Defaults to $CALFORGE_CONFIG, then \
$XDG_CONFIG_HOME/calforge/calendar.toml on Linux and MacOS, \
%APPDATA%/calforge/calendar.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(
                arg!(-o --output [OUTPUT] "Write the calendar to a file instead of stdout")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(arg!(--"no-fold" "Do not fold long content lines"))
            .arg(arg!(-v --verbose "Print debug logs to stderr"))
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Ok(Self::from(&matches))
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Ok(Self::from(&matches))
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            config: matches.get_one("config").cloned(),
            output: matches.get_one("output").cloned(),
            fold: !matches.get_flag("no-fold"),
            verbose: matches.get_flag("verbose"),
        }
    }

    /// Render the described calendar and write it out
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating calendar...");
        let (path, config) = parse_config(self.config.clone())?;
        let calendar = config.to_calendar()?;
        let window = match config.timezone {
            Some(TimezoneConfig {
                start_year,
                end_year,
            }) => Some((start_year, end_year)),
            None => event_year_window(&calendar),
        };
        let component = match window {
            Some((start_year, end_year)) => {
                tracing::debug!(start_year, end_year, "timezone year window");
                let provider = SystemTimezoneProvider::with_year_window(start_year, end_year)?;
                assemble(&calendar, &provider)?
            }
            None => assemble(&calendar, SystemTimezoneProvider::global())?,
        };

        let ics = self.format_options().write_to_string(&component)?;
        match &self.output {
            Some(output) => {
                std::fs::write(output, &ics)
                    .map_err(|e| format!("Failed to write {}: {}", output.display(), e))?;
                eprintln!(
                    "{} {} event(s) from {} to {}",
                    "Wrote".green(),
                    calendar.events.len(),
                    path.display(),
                    output.display()
                );
            }
            None => std::io::stdout().lock().write_all(ics.as_bytes())?,
        }
        Ok(())
    }

    fn format_options(&self) -> FormatOptions {
        let options = FormatOptions::default();
        if self.fold {
            options
        } else {
            options.folding(None)
        }
    }
}

fn assemble(
    calendar: &Calendar,
    provider: &impl TimezoneProvider,
) -> Result<Component, Box<dyn Error>> {
    let tzids = calendar.tzids();
    if !tzids.is_empty() {
        tracing::debug!(?tzids, "resolving timezones");
    }
    Ok(calendar.to_component(provider)?)
}

/// Years the events touch. A rule without `UNTIL` keeps recurring, so it
/// extends the window to the provider's default end year.
fn event_year_window(calendar: &Calendar) -> Option<(i16, i16)> {
    let open_ended = calendar
        .events
        .iter()
        .any(|event| event.recurrence_rule.as_ref().is_some_and(|r| r.until.is_none()));

    let years = calendar.events.iter().flat_map(|event| {
        let end = match &event.time {
            EventTime::StartEnd(_, end) => Some(end),
            EventTime::StartDuration(..) => None,
        };
        let until = event.recurrence_rule.as_ref().and_then(|r| r.until.as_ref());
        std::iter::once(event.time.start())
            .chain(end)
            .chain(until)
            .filter_map(|dt| i16::try_from(dt.date_part().year()).ok())
    });

    let (first, mut last) = years.fold(None, |acc, year| match acc {
        None => Some((year, year)),
        Some((lo, hi)) => Some((i16::min(lo, year), i16::max(hi, year))),
    })?;
    if open_ended {
        last = last.max(SystemTimezoneProvider::global().year_window().1);
    }
    Some((first.clamp(1, 9998), last.clamp(1, 9998)))
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // a subscriber may already be installed by an embedding program
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
