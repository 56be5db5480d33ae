//! `cat` — stream a file's bytes out of the sandbox.

use std::path::Path;

use async_trait::async_trait;
use tokio::fs::File;

use crate::error::Error;
use crate::guard::{self, PathKind};
use crate::output::CommandOutput;
use crate::registry::Command;
use crate::stream::ByteStream;

pub struct CatCommand;

#[async_trait]
impl Command for CatCommand {
    fn name(&self) -> &str {
        "cat"
    }

    fn description(&self) -> Option<&str> {
        Some("Display file contents")
    }

    async fn execute(&self, root: &Path, args: &[&str]) -> Result<CommandOutput, Error> {
        let path = args.first().copied().ok_or(Error::MissingOperand {
            command: "cat",
            operand: "file path",
        })?;

        let resolved = guard::resolve("cat", root, path, PathKind::File).await?;

        let file = File::open(&resolved).await.map_err(|source| Error::Io {
            command: "cat",
            path: path.to_string(),
            source,
        })?;

        Ok(CommandOutput::Stream(ByteStream::new(file)))
    }
}
