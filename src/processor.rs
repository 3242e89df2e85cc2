use crate::merger::TailwindMerge;

/// Trait for merging class strings that sit inside surrounding text.
///
/// Class lists cut out of templates or string concatenations often carry
/// leading or trailing whitespace that the surrounding code depends on.
/// The default method merges the classes and puts that whitespace back.
pub trait ClassListProcessor {
    /// The merger doing the actual work
    fn merger(&self) -> &TailwindMerge;

    /// Merge a class list that has no surrounding whitespace
    fn merge_classes(&self, classes: &str) -> String {
        self.merger().merge(classes)
    }

    /// Merge the classes in `class_string`, keeping its leading and trailing
    /// whitespace as-is.
    ///
    /// A string made only of whitespace is returned unchanged.
    fn process_preserving_whitespace(&self, class_string: &str) -> String {
        let trimmed_start = class_string.trim_start();
        let leading = &class_string[..class_string.len() - trimmed_start.len()];
        let classes = trimmed_start.trim_end();
        if classes.is_empty() {
            return class_string.to_string();
        }
        let trailing = &trimmed_start[classes.len()..];

        let merged = self.merge_classes(classes);
        let mut result = String::with_capacity(leading.len() + merged.len() + trailing.len());
        result.push_str(leading);
        result.push_str(&merged);
        result.push_str(trailing);
        result
    }
}

impl ClassListProcessor for TailwindMerge {
    fn merger(&self) -> &TailwindMerge {
        self
    }
}
