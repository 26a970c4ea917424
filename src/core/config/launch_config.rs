use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::core::error::{LaunchError, LaunchResult};
use crate::core::launch::classpath::path_str;
use crate::core::launch::{
    compose, resolve_add_modules, resolve_path_mode, ArgumentVector, ComposeInput, MainClass,
    PathMode,
};
use crate::core::module::{ModuleDescriptor, ModuleFilter, PathElement};

const DEFAULT_EXECUTABLE: &str = "java";

/// Launch settings persisted as JSON.
///
/// Resolved paths and the legacy-runtime flag are supplied by the build
/// tooling that writes this file; nothing here is probed or resolved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LaunchConfig {
    /// Full path or a name looked up on `PATH`.
    pub executable: String,
    pub skip: bool,
    /// Target runtime predates the module system.
    pub legacy_runtime: bool,
    pub runtime_path_option: Option<PathMode>,
    /// Raw option strings, each tokenized separately. `null` entries are skipped.
    pub options: Vec<Option<String>>,
    /// Raw trailing program arguments.
    pub commandline_args: Option<String>,
    pub main_class: Option<String>,
    pub output_directory: Option<PathBuf>,
    pub classpath_elements: Vec<PathBuf>,
    pub modulepath_elements: Vec<PathBuf>,
    pub path_elements: Vec<PathElement>,
    /// The project's own `module-info` descriptor.
    pub module_descriptor: Option<ModuleDescriptor>,
    pub module_filter: ModuleFilter,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            executable: DEFAULT_EXECUTABLE.into(),
            skip: false,
            legacy_runtime: false,
            runtime_path_option: None,
            options: Vec::new(),
            commandline_args: None,
            main_class: None,
            output_directory: None,
            classpath_elements: Vec::new(),
            modulepath_elements: Vec::new(),
            path_elements: Vec::new(),
            module_descriptor: None,
            module_filter: ModuleFilter::default(),
        }
    }
}

impl LaunchConfig {
    /// Read and validate a config file.
    pub fn load(path: &Path) -> LaunchResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| LaunchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&raw)?;
        info!("Loaded launch config from {:?}", path);
        Ok(config)
    }

    pub fn from_json(raw: &str) -> LaunchResult<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> LaunchResult<()> {
        if self.executable.trim().is_empty() {
            return Err(LaunchError::MissingParameter("executable"));
        }

        if let Some(main_class) = &self.main_class {
            if main_class.trim().is_empty() {
                return Err(LaunchError::InvalidConfig(
                    "main_class is set but blank".into(),
                ));
            }
        }

        if let Some(descriptor) = &self.module_descriptor {
            if descriptor.name.trim().is_empty() {
                return Err(LaunchError::InvalidConfig(
                    "module_descriptor has a blank name".into(),
                ));
            }
        }

        Ok(())
    }

    /// Resolve path mode and module set, then compose the argument vector.
    pub fn compose(&self) -> ArgumentVector {
        let options: Vec<String> = self.options.iter().flatten().cloned().collect();
        let classpath: Vec<String> = self.classpath_elements.iter().map(|p| path_str(p)).collect();
        let modulepath: Vec<String> = self
            .modulepath_elements
            .iter()
            .map(|p| path_str(p))
            .collect();

        let selection = resolve_path_mode(
            self.legacy_runtime,
            self.runtime_path_option,
            !modulepath.is_empty(),
            !classpath.is_empty(),
        );
        debug!(
            "Path selection (legacy={}, preference={:?}): {:?}",
            self.legacy_runtime, self.runtime_path_option, selection
        );

        let add_modules = selection.use_module_path.then(|| {
            resolve_add_modules(
                self.module_descriptor.as_ref(),
                &self.path_elements,
                &self.module_filter,
            )
        });

        let main_class = self.main_class.as_deref().map(|class_name| {
            match &self.module_descriptor {
                Some(descriptor) => MainClass::in_module(class_name, descriptor.name.as_str()),
                None => MainClass::new(class_name),
            }
        });
        if self.legacy_runtime && self.module_descriptor.is_some() && main_class.is_some() {
            warn!("Launching with --module on a legacy runtime; the JVM will reject it");
        }

        let output_dir = self.output_directory.as_deref().map(path_str);

        compose(&ComposeInput {
            user_options: &options,
            selection,
            modulepath_entries: &modulepath,
            add_modules: add_modules.as_deref(),
            classpath_entries: &classpath,
            output_dir: output_dir.as_deref(),
            main_class: main_class.as_ref(),
            trailing_args: self.commandline_args.as_deref(),
        })
    }
}
