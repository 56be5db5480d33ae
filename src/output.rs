//! Command result contract.
//!
//! Every command resolves to exactly one [`CommandOutput`] case: plain
//! text, a lazy byte stream, or a directory listing. Callers match
//! exhaustively; no command ever produces more than one kind.

use serde::{Deserialize, Serialize};

use crate::stream::ByteStream;

/// The tagged union returned by every command.
#[derive(Debug)]
pub enum CommandOutput {
    /// Plain text, e.g. from `cd`, `date`, `echo`, `help`.
    Text(String),
    /// Lazy, single-consumption byte stream, produced by `cat`.
    Stream(ByteStream),
    /// One row per directory child, produced by `ls`.
    Entries(Vec<FileEntry>),
}

impl CommandOutput {
    /// Consume the output as text, if it is the text case.
    pub fn into_text(self) -> Option<String> {
        match self {
            CommandOutput::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Consume the output as a byte stream, if it is the stream case.
    pub fn into_stream(self) -> Option<ByteStream> {
        match self {
            CommandOutput::Stream(stream) => Some(stream),
            _ => None,
        }
    }

    /// Consume the output as a directory listing, if it is the listing case.
    pub fn into_entries(self) -> Option<Vec<FileEntry>> {
        match self {
            CommandOutput::Entries(entries) => Some(entries),
            _ => None,
        }
    }
}

/// One row of `ls` output. Recreated fresh on every call; the name is the
/// only identity an entry has within a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// 10-character mode string, long format only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<String>,
    /// Size in bytes, long format only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Modification date truncated to `YYYY-MM-DD`, long format only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl FileEntry {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
            permissions: None,
            size: None,
            date: None,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}
