// ─── Classpath Builder ───
// Joins resolved path entries into `-classpath` / `--module-path` values.

use std::path::Path;

/// Platform-specific Java path separator.
///
/// Uses `;` on Windows, `:` on Linux/macOS.
pub fn get_classpath_separator() -> &'static str {
    if cfg!(target_os = "windows") {
        ";"
    } else {
        ":"
    }
}

/// Join entries with the platform separator, preserving order and duplicates.
pub fn join_path_entries<S: AsRef<str>>(entries: &[S]) -> String {
    let parts: Vec<&str> = entries.iter().map(|entry| entry.as_ref()).collect();
    parts.join(get_classpath_separator())
}

/// Builds the `-classpath` value.
///
/// When `prefix_output_dir` is set and an output directory is known, the
/// directory is prepended followed by a separator. That separator is kept
/// even when `entries` is empty, so a legacy launch with no dependencies
/// yields `<outputDir><sep>`.
pub fn build_classpath<S: AsRef<str>>(
    entries: &[S],
    output_dir: Option<&str>,
    prefix_output_dir: bool,
) -> String {
    let joined = join_path_entries(entries);
    match output_dir {
        Some(dir) if prefix_output_dir => {
            format!("{}{}{}", dir, get_classpath_separator(), joined)
        }
        _ => joined,
    }
}

/// Convert a path to a launch argument string.
pub fn path_str(path: &Path) -> String {
    let text = path.to_string_lossy().to_string();

    #[cfg(target_os = "windows")]
    {
        // Java reports `ClassNotFoundException` for extended-length paths
        // (`\\?\C:\...`) even when the jars exist.
        if let Some(stripped) = text.strip_prefix(r"\\?\") {
            return stripped.to_string();
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sep() -> &'static str {
        get_classpath_separator()
    }

    #[test]
    fn output_dir_is_prefixed_when_requested() {
        let classpath = build_classpath(&["a.jar", "b.jar"], Some("build/classes"), true);
        assert_eq!(classpath, format!("build/classes{0}a.jar{0}b.jar", sep()));
    }

    #[test]
    fn output_dir_is_ignored_without_prefix_request() {
        let classpath = build_classpath(&["a.jar", "b.jar"], Some("build/classes"), false);
        assert_eq!(classpath, format!("a.jar{}b.jar", sep()));
    }

    #[test]
    fn missing_output_dir_yields_bare_entries() {
        assert_eq!(build_classpath(&["x.jar"], None, true), "x.jar");
    }

    #[test]
    fn empty_entries_keep_trailing_separator_after_prefix() {
        let entries: [&str; 0] = [];
        assert_eq!(
            build_classpath(&entries, Some("target/classes"), true),
            format!("target/classes{}", sep())
        );
    }

    #[test]
    fn join_keeps_order_and_duplicates() {
        assert_eq!(
            join_path_entries(&["b.jar", "a.jar", "b.jar"]),
            format!("b.jar{0}a.jar{0}b.jar", sep())
        );
    }
}
