// ─── Path Mode ───
// Decides which of `--module-path` and `-classpath` a launch emits.

use serde::{Deserialize, Serialize};

/// Launch strategy requested by configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PathMode {
    Classpath,
    Modulepath,
}

/// Which path clauses to emit. Both may be set for mixed launches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PathSelection {
    pub use_module_path: bool,
    pub use_classpath: bool,
    /// Prepend the build output directory to the classpath value.
    pub prefix_output_dir: bool,
}

/// Resolve the path clauses for one launch.
///
/// A legacy runtime has no module system: module-path is suppressed and an
/// explicit classpath (prefixed with the output directory) is always emitted.
pub fn resolve_path_mode(
    legacy: bool,
    preference: Option<PathMode>,
    modulepath_non_empty: bool,
    classpath_non_empty: bool,
) -> PathSelection {
    if legacy {
        return PathSelection {
            use_module_path: false,
            use_classpath: true,
            prefix_output_dir: true,
        };
    }

    let (use_module_path, classpath_requested) = match preference {
        Some(PathMode::Modulepath) => (true, false),
        Some(PathMode::Classpath) => (modulepath_non_empty, true),
        None => (modulepath_non_empty, false),
    };

    PathSelection {
        use_module_path,
        use_classpath: classpath_non_empty || classpath_requested,
        prefix_output_dir: classpath_requested,
    }
}
