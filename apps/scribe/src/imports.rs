//! Import formatter — renders relevant imports as TypeScript-style import
//! lines embedded into the diagram prompt.

use tracing::warn;

use crate::catalog::RelevantImports;

/// Renders one import line per category, newline-joined in category order.
///
/// The dotted category path contributes everything before its last segment
/// as the module path: `"a.b.ClassName"` with components `["A", "B"]` yields
/// `import { A, B } from 'a.b';`.
///
/// A category with no dot would yield an empty module path; such categories
/// are skipped with a diagnostic rather than emitting a malformed line.
pub fn format_imports(relevant: &RelevantImports) -> String {
    let mut lines = Vec::with_capacity(relevant.len());

    for (category, components) in relevant {
        let segments: Vec<&str> = category.split('.').collect();
        if segments.len() < 2 {
            warn!(
                %category,
                "Skipping category with no module path (expected at least one '.')"
            );
            continue;
        }
        let module_path = segments[..segments.len() - 1].join(".");
        lines.push(format!(
            "import {{ {} }} from '{}';",
            components.join(", "),
            module_path
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RelevantImports;

    #[test]
    fn test_format_single_category() {
        let mut relevant = RelevantImports::new();
        relevant.insert("x.y.Z".to_string(), vec!["A".to_string(), "B".to_string()]);

        assert_eq!(format_imports(&relevant), "import { A, B } from 'x.y';");
    }

    #[test]
    fn test_format_multiple_categories_in_order() {
        let mut relevant = RelevantImports::new();
        relevant.insert(
            "cloud.compute.Compute".to_string(),
            vec!["Server".to_string()],
        );
        relevant.insert(
            "cloud.storage.Storage".to_string(),
            vec!["Bucket".to_string(), "Database".to_string()],
        );

        assert_eq!(
            format_imports(&relevant),
            "import { Server } from 'cloud.compute';\n\
             import { Bucket, Database } from 'cloud.storage';"
        );
    }

    #[test]
    fn test_dotless_category_is_skipped() {
        let mut relevant = RelevantImports::new();
        relevant.insert("Standalone".to_string(), vec!["A".to_string()]);
        relevant.insert("x.y.Z".to_string(), vec!["B".to_string()]);

        assert_eq!(format_imports(&relevant), "import { B } from 'x.y';");
    }

    #[test]
    fn test_empty_mapping_formats_to_empty_string() {
        assert_eq!(format_imports(&RelevantImports::new()), "");
    }
}
