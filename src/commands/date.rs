//! `date` — render wall-clock time.
//!
//! Output precedence: custom `+FORMAT` beats `-I`, which beats `-u`,
//! which beats the default local string. The `+` token and every
//! following non-flag token are space-joined into one format string.
//! Substitution is a single left-to-right pass, so characters produced
//! by one specifier are never re-read as another.

use std::fmt;
use std::path::Path;

use async_trait::async_trait;
use chrono::{DateTime, Local, SecondsFormat, TimeZone, Utc};

use crate::error::Error;
use crate::output::CommandOutput;
use crate::registry::Command;

pub struct DateCommand;

#[async_trait]
impl Command for DateCommand {
    fn name(&self) -> &str {
        "date"
    }

    fn description(&self) -> Option<&str> {
        Some("Display current date and time")
    }

    async fn execute(&self, _root: &Path, args: &[&str]) -> Result<CommandOutput, Error> {
        let flags: Vec<&str> = args.iter().copied().filter(|a| a.starts_with('-')).collect();
        let utc = flags.contains(&"-u") || flags.contains(&"--utc");
        let iso = flags.contains(&"-I") || flags.contains(&"--iso-8601");

        if let Some(start) = args.iter().position(|a| a.starts_with('+')) {
            let joined: String = args[start..]
                .iter()
                .copied()
                .filter(|a| !a.starts_with('-'))
                .collect::<Vec<_>>()
                .join(" ");
            let format = joined.strip_prefix('+').unwrap_or(&joined);
            let rendered = if utc {
                render_format(&Utc::now(), format)
            } else {
                render_format(&Local::now(), format)
            };
            return Ok(CommandOutput::Text(rendered));
        }

        if iso {
            let text = if utc {
                Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
            } else {
                Local::now().to_rfc3339_opts(SecondsFormat::Millis, false)
            };
            return Ok(CommandOutput::Text(text));
        }

        if utc {
            let text = Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string();
            return Ok(CommandOutput::Text(text));
        }

        let text = Local::now().format("%a %b %d %Y %H:%M:%S GMT%z").to_string();
        Ok(CommandOutput::Text(text))
    }
}

/// Recognized strftime-style specifiers. Anything else after `%` passes
/// through untouched.
const SPECIFIERS: &[char] = &[
    'Y', 'y', 'm', 'b', 'B', 'd', 'e', 'H', 'I', 'M', 'S', 'p', 'a', 'A',
];

fn render_format<Tz: TimeZone>(now: &DateTime<Tz>, format: &str) -> String
where
    Tz::Offset: fmt::Display,
{
    let mut out = String::with_capacity(format.len());
    let mut chars = format.chars();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('%') => out.push('%'),
            Some(spec) if SPECIFIERS.contains(&spec) => {
                let pattern = format!("%{spec}");
                out.push_str(&now.format(&pattern).to_string());
            }
            Some(other) => {
                out.push('%');
                out.push(other);
            }
            None => out.push('%'),
        }
    }

    out
}
