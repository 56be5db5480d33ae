//! `echo` — join arguments back into text.
//!
//! Tokens are passed through verbatim; the tokenizer already discarded
//! quoting, and none is reinterpreted here. Any token starting with `-`
//! is treated as a flag and removed from the output, wherever it sits.
//! Only `-n` (suppress the trailing newline) is recognized.

use std::path::Path;

use async_trait::async_trait;

use crate::commands::split_flags;
use crate::error::Error;
use crate::output::CommandOutput;
use crate::registry::Command;

pub struct EchoCommand;

#[async_trait]
impl Command for EchoCommand {
    fn name(&self) -> &str {
        "echo"
    }

    fn description(&self) -> Option<&str> {
        Some("Display text")
    }

    async fn execute(&self, _root: &Path, args: &[&str]) -> Result<CommandOutput, Error> {
        let (flags, words) = split_flags(args);
        let no_newline = flags.contains(&"-n");

        let mut text = words.join(" ");
        if !no_newline {
            text.push('\n');
        }
        Ok(CommandOutput::Text(text))
    }
}
