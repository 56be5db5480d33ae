//! # sandsh
//!
//! A sandboxed shell-command emulator. An [`Emulator`] is bound to a root
//! directory and dispatches command lines to a small set of builtin
//! filesystem-inspection commands — `cat`, `cd`, `date`, `echo`, `help`,
//! `ls` — every one of them jailed to that root: only absolute paths are
//! accepted, and a path resolving outside the root is rejected before any
//! filesystem access happens.
//!
//! ## Quick start
//!
//! ```rust
//! use sandsh::Emulator;
//!
//! let emulator = Emulator::new("/workspace").unwrap();
//! assert_eq!(emulator.root(), std::path::Path::new("/workspace"));
//! ```
//!
//! Commands return one of three result shapes through [`CommandOutput`]:
//! plain text, a lazy [`ByteStream`] (`cat`), or a [`FileEntry`] listing
//! (`ls`):
//!
//! ```rust,no_run
//! use sandsh::{CommandOutput, Emulator};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let emulator = Emulator::new("/workspace")?;
//! match emulator.run("ls -l /workspace/src").await? {
//!     CommandOutput::Text(text) => print!("{text}"),
//!     CommandOutput::Entries(entries) => {
//!         for entry in entries {
//!             println!("{}", entry.name);
//!         }
//!     }
//!     CommandOutput::Stream(mut stream) => {
//!         while let Some(chunk) = stream.next_chunk().await? {
//!             // consume at your own pace; dropping the stream early
//!             // closes the file handle
//!             let _ = chunk;
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom commands
//!
//! Implement [`Command`] and register it in a [`CommandSet`]; sets passed
//! to [`Emulator::with_command_sets`] shadow the builtins, earlier sets
//! shadowing later ones. `help` picks up custom descriptions
//! automatically.

pub mod commands;
pub mod emulator;
pub mod error;
pub mod output;
pub mod registry;
pub mod stream;

mod guard;

pub use emulator::Emulator;
pub use error::{Error, ErrorKind};
pub use output::{CommandOutput, EntryKind, FileEntry};
pub use registry::{Command, CommandInfo, CommandRegistry, CommandSet};
pub use stream::ByteStream;
