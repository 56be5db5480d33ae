//! Command trait, command sets, and the precedence-ordered registry.
//!
//! A [`CommandSet`] is one named group of commands; the registry holds an
//! ordered list of sets — caller-supplied custom sets first, builtins
//! last — and resolves a name to its first hit. The registry is built
//! once at emulator construction and never mutated afterwards.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::commands::{self, help::HelpCommand};
use crate::error::Error;
use crate::output::CommandOutput;

/// One command implementation: a pure async function of
/// `(root directory, argument list)` plus its metadata.
#[async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &str;

    /// Shown by `help`; commands without one are hidden from its listing.
    fn description(&self) -> Option<&str> {
        None
    }

    async fn execute(&self, root: &Path, args: &[&str]) -> Result<CommandOutput, Error>;
}

/// Name and description of a resolvable command, as surfaced by `help`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInfo {
    pub name: String,
    pub description: Option<String>,
}

/// A named group of commands. Registering a second command under the same
/// name replaces the first within the set.
#[derive(Default)]
pub struct CommandSet {
    commands: HashMap<String, Arc<dyn Command>>,
}

impl CommandSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, command: impl Command + 'static) {
        let name = command.name().to_string();
        self.commands.insert(name, Arc::new(command));
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Command>> {
        self.commands.get(name)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    fn iter(&self) -> impl Iterator<Item = (&String, &Arc<dyn Command>)> {
        self.commands.iter()
    }
}

impl std::fmt::Debug for CommandSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSet")
            .field("commands", &self.commands.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Ordered list of command sets; earlier sets shadow later ones.
#[derive(Debug)]
pub struct CommandRegistry {
    sets: Vec<CommandSet>,
}

impl CommandRegistry {
    /// Assemble custom sets (in caller order) in front of the builtin set,
    /// then add the `help` builtin with a snapshot of every descriptor it
    /// can see — including its own, unless a custom set shadows it.
    pub(crate) fn with_builtins(custom: Vec<CommandSet>) -> Self {
        let mut builtins = commands::builtin_set();

        let mut infos = collect_descriptors(custom.iter().chain(std::iter::once(&builtins)));
        if !infos.iter().any(|info| info.name == commands::help::NAME) {
            infos.push(CommandInfo {
                name: commands::help::NAME.to_string(),
                description: Some(commands::help::DESCRIPTION.to_string()),
            });
        }
        builtins.register(HelpCommand::new(infos));

        let mut sets = custom;
        sets.push(builtins);
        Self { sets }
    }

    /// First implementation for `name` across sets, in precedence order.
    pub fn resolve(&self, name: &str) -> Option<Arc<dyn Command>> {
        self.sets.iter().find_map(|set| set.get(name).cloned())
    }

    /// First descriptor per distinct command name, in precedence order.
    /// A shadowing command hides the shadowed descriptor even when the
    /// shadower has no description of its own.
    pub fn descriptors(&self) -> Vec<CommandInfo> {
        collect_descriptors(self.sets.iter())
    }
}

fn collect_descriptors<'a>(sets: impl Iterator<Item = &'a CommandSet>) -> Vec<CommandInfo> {
    let mut seen = HashSet::new();
    let mut infos = Vec::new();
    for set in sets {
        for (name, command) in set.iter() {
            if seen.insert(name.clone()) {
                infos.push(CommandInfo {
                    name: name.clone(),
                    description: command.description().map(str::to_string),
                });
            }
        }
    }
    infos
}
