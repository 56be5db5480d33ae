//! The emulator: parse a command line, resolve the command, invoke it.
//!
//! Each invocation is independent; the only state an [`Emulator`] carries
//! is the root directory and the registry fixed at construction, so one
//! instance can serve concurrent calls.

use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::guard;
use crate::output::CommandOutput;
use crate::registry::{CommandRegistry, CommandSet};

#[derive(Debug)]
pub struct Emulator {
    root: PathBuf,
    registry: CommandRegistry,
}

impl Emulator {
    /// Bind the builtin commands to `root`. The root must be absolute;
    /// it is lexically normalized once, here.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, Error> {
        Self::with_command_sets(root, Vec::new())
    }

    /// Like [`Emulator::new`], with custom command sets resolved ahead of
    /// the builtins. Earlier sets take precedence over later ones.
    pub fn with_command_sets(
        root: impl AsRef<Path>,
        custom: Vec<CommandSet>,
    ) -> Result<Self, Error> {
        let root = root.as_ref();
        if !root.is_absolute() {
            return Err(Error::RelativeRoot {
                path: root.display().to_string(),
            });
        }
        Ok(Self {
            root: guard::normalize(root),
            registry: CommandRegistry::with_builtins(custom),
        })
    }

    /// The normalized sandbox root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Run one command line: split on whitespace runs (no quoting), take
    /// the first token as the command name, pass the rest as arguments.
    /// Command failures propagate verbatim.
    pub async fn run(&self, command_line: &str) -> Result<CommandOutput, Error> {
        let mut tokens = command_line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Err(Error::EmptyCommand);
        };
        let args: Vec<&str> = tokens.collect();

        let command = self
            .registry
            .resolve(name)
            .ok_or_else(|| Error::CommandNotFound { name: name.to_string() })?;

        command.execute(&self.root, &args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::output::EntryKind;
    use crate::registry::Command;
    use async_trait::async_trait;
    use tempfile::tempdir;

    #[tokio::test]
    async fn empty_command_line() {
        let root = tempdir().unwrap();
        let emulator = Emulator::new(root.path()).unwrap();
        let err = emulator.run("").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyCommand);
        assert_eq!(err.to_string(), "No command provided");
    }

    #[tokio::test]
    async fn whitespace_only_command_line() {
        let root = tempdir().unwrap();
        let emulator = Emulator::new(root.path()).unwrap();
        let err = emulator.run("   ").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyCommand);
    }

    #[tokio::test]
    async fn unknown_command() {
        let root = tempdir().unwrap();
        let emulator = Emulator::new(root.path()).unwrap();
        let err = emulator.run("invalidcommand").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CommandNotFound);
        assert_eq!(err.to_string(), "bash: invalidcommand: command not found");
    }

    #[tokio::test]
    async fn splits_arguments_on_whitespace_runs() {
        let root = tempdir().unwrap();
        let emulator = Emulator::new(root.path()).unwrap();
        // Flags parse through; the missing path is the first complaint.
        let err = emulator.run("  ls   -l   ").await.unwrap_err();
        assert_eq!(err.to_string(), "ls: missing operand (path required)");
    }

    #[tokio::test]
    async fn relative_root_rejected_at_construction() {
        let err = Emulator::new("relative/root").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[tokio::test]
    async fn root_is_normalized_at_construction() {
        let root = tempdir().unwrap();
        let trailing = format!("{}/", root.path().display());
        let emulator = Emulator::new(&trailing).unwrap();
        assert_eq!(emulator.root(), root.path());
    }

    #[tokio::test]
    async fn command_failures_propagate_verbatim() {
        let root = tempdir().unwrap();
        let emulator = Emulator::new(root.path()).unwrap();
        let err = emulator.run("cat /etc/passwd").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "cat: /etc/passwd: Permission denied (outside root directory)"
        );
    }

    #[tokio::test]
    async fn cat_scenario_drains_to_content() {
        let root = tempdir().unwrap();
        let file = root.path().join("a.txt");
        tokio::fs::write(&file, "hi").await.unwrap();

        let out = emulate(&root, &format!("cat {}", file.display())).await;
        let bytes = out.into_stream().unwrap().drain().await.unwrap();
        assert_eq!(bytes, b"hi");
    }

    #[tokio::test]
    async fn cd_scenario_returns_root() {
        let root = tempdir().unwrap();
        let out = emulate(&root, "cd").await;
        assert_eq!(out.into_text().unwrap(), root.path().display().to_string());
    }

    #[tokio::test]
    async fn echo_scenario() {
        let root = tempdir().unwrap();
        let out = emulate(&root, "echo -n a b").await;
        assert_eq!(out.into_text().unwrap(), "a b");
    }

    #[tokio::test]
    async fn ls_scenario_empty_directory() {
        let root = tempdir().unwrap();
        let empty = root.path().join("empty");
        tokio::fs::create_dir(&empty).await.unwrap();

        let out = emulate(&root, &format!("ls {}", empty.display())).await;
        assert_eq!(out.into_entries().unwrap(), Vec::new());
    }

    #[tokio::test]
    async fn ls_entries_through_the_emulator() {
        let root = tempdir().unwrap();
        tokio::fs::write(root.path().join("f.txt"), "x").await.unwrap();
        tokio::fs::create_dir(root.path().join("d")).await.unwrap();

        let out = emulate(&root, &format!("ls {}", root.path().display())).await;
        let mut entries = out.into_entries().unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind, EntryKind::Directory);
        assert_eq!(entries[1].kind, EntryKind::File);
    }

    #[tokio::test]
    async fn concurrent_runs_are_independent() {
        let root = tempdir().unwrap();
        tokio::fs::write(root.path().join("f.txt"), "body").await.unwrap();
        let emulator = std::sync::Arc::new(Emulator::new(root.path()).unwrap());

        let mut handles = Vec::new();
        for _ in 0..8 {
            let emulator = emulator.clone();
            let line = format!("cat {}/f.txt", root.path().display());
            handles.push(tokio::spawn(async move {
                let out = emulator.run(&line).await.unwrap();
                out.into_stream().unwrap().drain().await.unwrap()
            }));
        }
        for handle in handles {
            assert_eq!(handle.await.unwrap(), b"body");
        }
    }

    struct ReverseCommand;

    #[async_trait]
    impl Command for ReverseCommand {
        fn name(&self) -> &str {
            "rev"
        }

        fn description(&self) -> Option<&str> {
            Some("Reverse each argument")
        }

        async fn execute(&self, _root: &Path, args: &[&str]) -> Result<CommandOutput, Error> {
            let reversed: Vec<String> = args
                .iter()
                .map(|arg| arg.chars().rev().collect())
                .collect();
            Ok(CommandOutput::Text(reversed.join(" ")))
        }
    }

    #[tokio::test]
    async fn custom_command_resolves_through_run() {
        let root = tempdir().unwrap();
        let mut set = CommandSet::new();
        set.register(ReverseCommand);
        let emulator = Emulator::with_command_sets(root.path(), vec![set]).unwrap();

        let out = emulator.run("rev abc def").await.unwrap();
        assert_eq!(out.into_text().unwrap(), "cba fed");
    }

    #[tokio::test]
    async fn help_lists_builtins_sorted_and_padded() {
        let root = tempdir().unwrap();
        let out = emulate(&root, "help").await;
        assert_eq!(
            out.into_text().unwrap(),
            "Available commands:\n\
             \x20 cat  - Display file contents\n\
             \x20 cd   - Change directory\n\
             \x20 date - Display current date and time\n\
             \x20 echo - Display text\n\
             \x20 help - Show available commands and their descriptions\n\
             \x20 ls   - List directory contents\n"
        );
    }

    #[tokio::test]
    async fn help_ignores_arguments() {
        let root = tempdir().unwrap();
        let plain = emulate(&root, "help").await.into_text().unwrap();
        let with_args = emulate(&root, "help --verbose").await.into_text().unwrap();
        assert_eq!(plain, with_args);
    }

    #[tokio::test]
    async fn help_sorts_custom_command_into_position() {
        let root = tempdir().unwrap();
        let mut set = CommandSet::new();
        set.register(ReverseCommand);
        let emulator = Emulator::with_command_sets(root.path(), vec![set]).unwrap();

        let out = emulator.run("help").await.unwrap().into_text().unwrap();
        assert!(out.contains("  rev  - Reverse each argument\n"));

        let names: Vec<&str> = out
            .lines()
            .skip(1)
            .map(|line| line.trim_start().split(' ').next().unwrap())
            .collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    struct SilentCat;

    #[async_trait]
    impl Command for SilentCat {
        fn name(&self) -> &str {
            "cat"
        }

        async fn execute(&self, _root: &Path, _args: &[&str]) -> Result<CommandOutput, Error> {
            Ok(CommandOutput::Text(String::new()))
        }
    }

    #[tokio::test]
    async fn undescribed_shadow_drops_builtin_from_help() {
        let root = tempdir().unwrap();
        let mut set = CommandSet::new();
        set.register(SilentCat);
        let emulator = Emulator::with_command_sets(root.path(), vec![set]).unwrap();

        let out = emulator.run("help").await.unwrap().into_text().unwrap();
        assert!(!out.contains("cat"));
        assert!(out.contains("Change directory"));
    }

    async fn emulate(root: &tempfile::TempDir, line: &str) -> CommandOutput {
        Emulator::new(root.path()).unwrap().run(line).await.unwrap()
    }
}
