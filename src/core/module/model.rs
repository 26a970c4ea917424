use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Module-system metadata for a compilation/runtime unit.
///
/// Only `name` is consumed when composing a launch; the rest is carried
/// along so descriptors can round-trip through configuration files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModuleDescriptor {
    pub name: String,
    #[serde(default)]
    pub requires: Vec<String>,
    #[serde(default)]
    pub exports: Vec<String>,
    /// Derived from `Automatic-Module-Name` or the jar file name.
    #[serde(default)]
    pub automatic: bool,
}

impl ModuleDescriptor {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requires: Vec::new(),
            exports: Vec::new(),
            automatic: false,
        }
    }
}

/// A resolved path entry and the module it provides, if any.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PathElement {
    pub path: PathBuf,
    #[serde(default)]
    pub descriptor: Option<ModuleDescriptor>,
}

impl PathElement {
    pub fn new(path: impl Into<PathBuf>, descriptor: Option<ModuleDescriptor>) -> Self {
        Self {
            path: path.into(),
            descriptor,
        }
    }

    /// Module name, absent for plain (non-modular) jars.
    pub fn module_name(&self) -> Option<&str> {
        self.descriptor.as_ref().map(|d| d.name.as_str())
    }
}

/// Which discovered modules are worth passing to `--add-modules`.
///
/// Platform distributions ship placeholder jars (e.g. `javafx.baseEmpty`)
/// that only exist to carry an automatic module name; those are excluded by
/// suffix.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ModuleFilter {
    pub prefix: String,
    pub excluded_suffix: String,
}

pub const DEFAULT_MODULE_PREFIX: &str = "javafx";
pub const DEFAULT_EMPTY_SUFFIX: &str = "Empty";

impl Default for ModuleFilter {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_MODULE_PREFIX.into(),
            excluded_suffix: DEFAULT_EMPTY_SUFFIX.into(),
        }
    }
}

impl ModuleFilter {
    pub fn new(prefix: impl Into<String>, excluded_suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            excluded_suffix: excluded_suffix.into(),
        }
    }

    pub fn has_prefix(&self, module: &str) -> bool {
        module.starts_with(&self.prefix)
    }

    pub fn is_placeholder(&self, module: &str) -> bool {
        !self.excluded_suffix.is_empty() && module.ends_with(&self.excluded_suffix)
    }

    pub fn accepts(&self, module: &str) -> bool {
        self.has_prefix(module) && !self.is_placeholder(module)
    }
}
