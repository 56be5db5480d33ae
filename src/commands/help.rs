//! `help` — list every resolvable command with a description.
//!
//! The registry hands each `help` instance a snapshot of its descriptors
//! at build time, so precedence and shadowing are already applied by the
//! time formatting happens here. Arguments are ignored.

use std::path::Path;

use async_trait::async_trait;

use crate::error::Error;
use crate::output::CommandOutput;
use crate::registry::{Command, CommandInfo};

pub(crate) const NAME: &str = "help";
pub(crate) const DESCRIPTION: &str = "Show available commands and their descriptions";

pub struct HelpCommand {
    commands: Vec<CommandInfo>,
}

impl HelpCommand {
    pub(crate) fn new(commands: Vec<CommandInfo>) -> Self {
        Self { commands }
    }
}

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &str {
        NAME
    }

    fn description(&self) -> Option<&str> {
        Some(DESCRIPTION)
    }

    async fn execute(&self, _root: &Path, _args: &[&str]) -> Result<CommandOutput, Error> {
        let mut described: Vec<(&str, &str)> = self
            .commands
            .iter()
            .filter_map(|info| {
                let description = info.description.as_deref()?;
                if description.is_empty() {
                    return None;
                }
                Some((info.name.as_str(), description))
            })
            .collect();

        if described.is_empty() {
            return Ok(CommandOutput::Text("No commands available.\n".into()));
        }

        // Byte-wise ordering; names are already deduplicated upstream.
        described.sort();

        let width = described.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
        let mut out = String::from("Available commands:\n");
        for (name, description) in described {
            out.push_str(&format!("  {name:<width$} - {description}\n"));
        }
        Ok(CommandOutput::Text(out))
    }
}
