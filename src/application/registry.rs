//! # Command Registry
//!
//! Scans the command directory, parses every definition file and maps each
//! command name to its handler. The registry is built once at startup and only
//! read afterwards.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::parsing::is_valid_command_name;
use crate::domain::traits::Command;
use crate::domain::types::{CommandDefinition, CommandSummary};
use crate::interface::commands;
use crate::strings::logs;

/// File extensions recognised as command definitions.
pub const DEFINITION_EXTENSIONS: [&str; 3] = ["yaml", "yml", "json"];

#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Arc<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the registry from every definition file in `dir`.
    /// Files are registered in filename order, so on duplicate names the last file wins.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut registry = Self::new();

        for path in definition_files(dir)? {
            let definition = read_definition(&path)?;
            let command = commands::build(definition)
                .with_context(|| format!("Invalid command definition {}", path.display()))?;
            tracing::debug!("{}", logs::command_loaded(command.name(), &path.display().to_string()));
            registry.register(command);
        }

        tracing::info!("{}", logs::registry_built(registry.len(), &dir.display().to_string()));
        Ok(registry)
    }

    /// Inserts a command, returning the one it replaced.
    pub fn register(&mut self, command: Arc<dyn Command>) -> Option<Arc<dyn Command>> {
        let name = command.name().to_string();
        let previous = self.commands.insert(name.clone(), command);
        if previous.is_some() {
            tracing::warn!("{}", logs::command_overridden(&name));
        }
        previous
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

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn summaries(&self) -> Vec<CommandSummary> {
        self.names()
            .into_iter()
            .filter_map(|name| self.commands.get(name))
            .map(|cmd| CommandSummary {
                name: cmd.name().to_string(),
                description: cmd.description().to_string(),
            })
            .collect()
    }
}

/// Lists definition files directly inside `dir`, sorted by file name.
pub fn definition_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read command directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to read entry in {}", dir.display()))?
            .path();
        if path.is_file() && has_definition_extension(&path) {
            files.push(path);
        } else {
            tracing::trace!("Skipping {}", path.display());
        }
    }
    files.sort();
    Ok(files)
}

fn has_definition_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| DEFINITION_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// Reads and validates a single definition file. JSON is picked by extension,
/// everything else is parsed as YAML.
pub fn read_definition(path: &Path) -> Result<CommandDefinition> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let mut definition: CommandDefinition = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?
    } else {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?
    };

    definition.name = definition.name.trim().to_lowercase();
    if !is_valid_command_name(&definition.name) {
        anyhow::bail!(
            "Invalid command name {:?} in {}",
            definition.name,
            path.display()
        );
    }
    Ok(definition)
}
