// file: src/filer/paths.rs
// description: named file path registry seeded from a fixed table
// reference: internal path constants

use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::error::{DaylogError, Result};

/// Fixed seed table: symbolic name, directory, file name. Entries resolve
/// against the registry's base directory.
const DEFAULT_ENTRIES: &[(&str, &str, &str)] = &[("log", "../logs", "log")];

static NAMED: OnceLock<PathRegistry> = OnceLock::new();

/// Symbolic names mapped to resolved paths. Populated once; the process-wide
/// registry behind `named_paths` is never mutated after construction.
#[derive(Debug, Clone)]
pub struct PathRegistry {
    base: PathBuf,
    entries: HashMap<String, PathBuf>,
}

impl PathRegistry {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            entries: HashMap::new(),
        }
    }

    /// Registry seeded from the fixed default table.
    pub fn with_defaults(base: impl Into<PathBuf>) -> Self {
        let mut registry = Self::new(base);
        for (name, dir, file) in DEFAULT_ENTRIES {
            // the seed table carries no duplicate names
            let _ = registry.register(name, dir, file);
        }
        registry
    }

    /// Joins `dir`/`file` against the base directory under `name`.
    /// Registering an existing name is an error, not a redefinition.
    pub fn register(&mut self, name: &str, dir: &str, file: &str) -> Result<()> {
        if self.entries.contains_key(name) {
            return Err(DaylogError::DuplicateEntry(name.to_string()));
        }
        let path = self.base.join(dir).join(file);
        self.entries.insert(name.to_string(), path);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Path> {
        self.entries.get(name).map(PathBuf::as_path)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// The process-wide registry, rooted at the working directory and populated
/// on first access.
pub fn named_paths() -> &'static PathRegistry {
    NAMED.get_or_init(|| {
        let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        PathRegistry::with_defaults(cwd)
    })
}
