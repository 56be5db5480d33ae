//! `cd` — resolve a directory path inside the sandbox.
//!
//! Returns the resolved path as text. No working-directory state is
//! mutated anywhere; callers track their own notion of "current
//! directory" across invocations if they want one.

use std::path::Path;

use async_trait::async_trait;

use crate::error::Error;
use crate::guard::{self, PathKind};
use crate::output::CommandOutput;
use crate::registry::Command;

pub struct CdCommand;

#[async_trait]
impl Command for CdCommand {
    fn name(&self) -> &str {
        "cd"
    }

    fn description(&self) -> Option<&str> {
        Some("Change directory")
    }

    async fn execute(&self, root: &Path, args: &[&str]) -> Result<CommandOutput, Error> {
        let Some(path) = args.first().copied() else {
            // No operand means the root itself.
            return Ok(CommandOutput::Text(root.display().to_string()));
        };

        let resolved = guard::resolve("cd", root, path, PathKind::Directory).await?;
        Ok(CommandOutput::Text(resolved.display().to_string()))
    }
}
