// ─── Module Set ───
// Computes the `--add-modules` value.

use tracing::debug;

use crate::core::module::{ModuleDescriptor, ModuleFilter, PathElement};

/// The project's own descriptor wins outright. Otherwise every discovered
/// module accepted by `filter` is listed, comma-joined, in encounter order.
/// Entries without a module name are skipped.
pub fn resolve_add_modules(
    main_module: Option<&ModuleDescriptor>,
    discovered: &[PathElement],
    filter: &ModuleFilter,
) -> String {
    if let Some(descriptor) = main_module {
        return descriptor.name.clone();
    }

    let modules: Vec<&str> = discovered
        .iter()
        .filter_map(PathElement::module_name)
        .filter(|name| filter.accepts(name))
        .collect();

    debug!(
        "Resolved {} of {} path elements into --add-modules",
        modules.len(),
        discovered.len()
    );

    modules.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(path: &str, module: Option<&str>) -> PathElement {
        PathElement::new(path, module.map(ModuleDescriptor::named))
    }

    #[test]
    fn explicit_descriptor_is_used_verbatim() {
        let discovered = vec![element("javafx-base.jar", Some("javafx.base"))];
        let main = ModuleDescriptor::named("com.example.app");

        assert_eq!(
            resolve_add_modules(Some(&main), &discovered, &ModuleFilter::default()),
            "com.example.app"
        );
    }

    #[test]
    fn placeholder_and_foreign_modules_are_filtered_out() {
        let discovered = vec![
            element("javafx-base.jar", Some("javafx.base")),
            element("javafx-base-empty.jar", Some("javafx.baseEmpty")),
            element("other.jar", Some("other.lib")),
        ];

        assert_eq!(
            resolve_add_modules(None, &discovered, &ModuleFilter::default()),
            "javafx.base"
        );
    }

    #[test]
    fn unnamed_entries_are_skipped_and_order_is_kept() {
        let discovered = vec![
            element("javafx-graphics.jar", Some("javafx.graphics")),
            element("plain.jar", None),
            element("javafx-base.jar", Some("javafx.base")),
            element("javafx-controls.jar", Some("javafx.controls")),
        ];

        assert_eq!(
            resolve_add_modules(None, &discovered, &ModuleFilter::default()),
            "javafx.graphics,javafx.base,javafx.controls"
        );
    }

    #[test]
    fn nothing_discovered_yields_empty_value() {
        assert_eq!(resolve_add_modules(None, &[], &ModuleFilter::default()), "");
    }

    #[test]
    fn duplicates_are_not_collapsed() {
        let discovered = vec![
            element("a/javafx-base.jar", Some("javafx.base")),
            element("b/javafx-base.jar", Some("javafx.base")),
        ];

        assert_eq!(
            resolve_add_modules(None, &discovered, &ModuleFilter::default()),
            "javafx.base,javafx.base"
        );
    }
}
