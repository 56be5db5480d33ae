//! `ls` — list a directory inside the sandbox.
//!
//! `-a` includes dot-entries, `-l` adds permissions, size, and a
//! calendar-day mtime; the combined `-la`/`-al` forms are accepted.
//! Entry order follows the underlying directory enumeration and is
//! deliberately unspecified.

use std::path::Path;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::commands::split_flags;
use crate::error::Error;
use crate::guard::{self, PathKind};
use crate::output::{CommandOutput, EntryKind, FileEntry};
use crate::registry::Command;

pub struct LsCommand;

#[async_trait]
impl Command for LsCommand {
    fn name(&self) -> &str {
        "ls"
    }

    fn description(&self) -> Option<&str> {
        Some("List directory contents")
    }

    async fn execute(&self, root: &Path, args: &[&str]) -> Result<CommandOutput, Error> {
        let (flags, paths) = split_flags(args);
        let show_hidden = ["-a", "-la", "-al"].iter().any(|f| flags.contains(f));
        let long_format = ["-l", "-la", "-al"].iter().any(|f| flags.contains(f));

        let path = paths.first().copied().ok_or(Error::MissingOperand {
            command: "ls",
            operand: "path",
        })?;

        let resolved = guard::resolve("ls", root, path, PathKind::Directory).await?;

        let io_err = |source| Error::Io {
            command: "ls",
            path: path.to_string(),
            source,
        };

        let mut dir = tokio::fs::read_dir(&resolved).await.map_err(io_err)?;
        let mut entries = Vec::new();

        while let Some(child) = dir.next_entry().await.map_err(io_err)? {
            let name = child.file_name().to_string_lossy().into_owned();
            if !show_hidden && name.starts_with('.') {
                continue;
            }

            let meta = child.metadata().await.map_err(io_err)?;
            let kind = if meta.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };

            let mut entry = FileEntry::new(name, kind);
            if long_format {
                entry.permissions = Some(permission_string(kind == EntryKind::Directory, mode_bits(&meta)));
                entry.size = Some(meta.len());
                entry.date = Some(mtime_date(&meta).map_err(io_err)?);
            }
            entries.push(entry);
        }

        Ok(CommandOutput::Entries(entries))
    }
}

#[cfg(unix)]
fn mode_bits(meta: &std::fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode()
}

#[cfg(not(unix))]
fn mode_bits(meta: &std::fs::Metadata) -> u32 {
    if meta.permissions().readonly() { 0o444 } else { 0o666 }
}

/// Type char plus rwx triples from the mode's final three octal digits.
fn permission_string(is_dir: bool, mode: u32) -> String {
    let mut out = String::with_capacity(10);
    out.push(if is_dir { 'd' } else { '-' });
    for shift in [6u32, 3, 0] {
        let bits = (mode >> shift) & 0o7;
        out.push(if bits & 0o4 != 0 { 'r' } else { '-' });
        out.push(if bits & 0o2 != 0 { 'w' } else { '-' });
        out.push(if bits & 0o1 != 0 { 'x' } else { '-' });
    }
    out
}

/// Modification time truncated to calendar-day granularity, in UTC.
fn mtime_date(meta: &std::fs::Metadata) -> std::io::Result<String> {
    let mtime: DateTime<Utc> = meta.modified()?.into();
    Ok(mtime.format("%Y-%m-%d").to_string())
}
