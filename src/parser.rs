//! Splitting raw class tokens into modifiers and a base class name.

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::config::MergeConfig;

/// One class token taken apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedClassName {
    /// Variants in the order they were written, e.g. `["hover", "md"]`
    pub modifiers: Vec<String>,

    /// Whether the token carried the important marker, leading or trailing
    pub has_important_modifier: bool,

    /// The utility itself with modifiers and the important marker removed
    pub base_class_name: String,

    /// Byte offset into `base_class_name` of a top-level `/` that may start a
    /// postfix modifier, as in `text-lg/7`
    pub maybe_postfix_modifier_position: Option<usize>,

    /// Tokens that bypass conflict resolution entirely
    pub is_external: bool,
}

impl ParsedClassName {
    /// A token kept as-is, without looking inside it
    pub fn external(class_name: &str) -> Self {
        Self {
            modifiers: Vec::new(),
            has_important_modifier: false,
            base_class_name: class_name.to_string(),
            maybe_postfix_modifier_position: None,
            is_external: true,
        }
    }
}

type ParseFn = dyn Fn(&str, &dyn Fn(&str) -> ParsedClassName) -> ParsedClassName + Send + Sync;

/// Custom parsing wrapped around the built-in parser.
///
/// The hook receives the raw token and the default parse function and returns
/// whatever it decides the token is. Setting `is_external` on the result makes
/// the merger keep the token untouched.
#[derive(Clone)]
pub struct ParseHook(Arc<ParseFn>);

impl ParseHook {
    pub fn new<F>(hook: F) -> Self
    where
        F: Fn(&str, &dyn Fn(&str) -> ParsedClassName) -> ParsedClassName + Send + Sync + 'static,
    {
        Self(Arc::new(hook))
    }
}

impl fmt::Debug for ParseHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ParseHook(..)")
    }
}

/// Parses tokens according to the separator, important marker and prefix of a
/// configuration, and puts modifiers into canonical order.
#[derive(Debug, Clone)]
pub struct ClassNameParser {
    separator: char,
    important_modifier: char,
    full_prefix: Option<String>,
    order_sensitive_modifiers: HashSet<String>,
    hook: Option<ParseHook>,
}

impl ClassNameParser {
    pub fn new(config: &MergeConfig) -> Self {
        Self {
            separator: config.separator,
            important_modifier: config.important_modifier,
            full_prefix: config
                .prefix
                .as_ref()
                .filter(|prefix| !prefix.is_empty())
                .map(|prefix| format!("{}{}", prefix, config.separator)),
            order_sensitive_modifiers: config.order_sensitive_modifiers.iter().cloned().collect(),
            hook: config.parse_hook.clone(),
        }
    }

    pub fn parse(&self, class_name: &str) -> ParsedClassName {
        match &self.hook {
            Some(hook) => (hook.0)(class_name, &|name| self.parse_prefixed(name)),
            None => self.parse_prefixed(class_name),
        }
    }

    fn parse_prefixed(&self, class_name: &str) -> ParsedClassName {
        match &self.full_prefix {
            Some(prefix) => match class_name.strip_prefix(prefix.as_str()) {
                Some(rest) => parse_class_name(rest, self.separator, self.important_modifier),
                None => ParsedClassName::external(class_name),
            },
            None => parse_class_name(class_name, self.separator, self.important_modifier),
        }
    }

    /// Sorts modifiers so that equivalent variant stacks compare equal.
    ///
    /// Plain modifiers are sorted alphabetically. Arbitrary variants and the
    /// configured order-sensitive modifiers stay where they are and only the
    /// runs between them get sorted.
    pub fn sort_modifiers(&self, modifiers: &[String]) -> Vec<String> {
        if modifiers.len() <= 1 {
            return modifiers.to_vec();
        }

        let mut sorted = Vec::with_capacity(modifiers.len());
        let mut run: Vec<&String> = Vec::new();

        for modifier in modifiers {
            if modifier.starts_with('[') || self.order_sensitive_modifiers.contains(modifier) {
                run.sort();
                sorted.extend(run.drain(..).cloned());
                sorted.push(modifier.clone());
            } else {
                run.push(modifier);
            }
        }

        run.sort();
        sorted.extend(run.into_iter().cloned());
        sorted
    }
}

/// Splits a token on top-level separators.
///
/// Separators inside `[...]` or `(...)` belong to arbitrary values and are not
/// split on. Unbalanced brackets never fail, whatever follows the last
/// top-level separator becomes the base class name.
pub fn parse_class_name(class_name: &str, separator: char, important_modifier: char) -> ParsedClassName {
    let mut modifiers = Vec::new();
    let mut bracket_depth = 0i32;
    let mut paren_depth = 0i32;
    let mut modifier_start = 0usize;
    let mut postfix_position: Option<usize> = None;

    for (index, ch) in class_name.char_indices() {
        if bracket_depth == 0 && paren_depth == 0 {
            if ch == separator {
                modifiers.push(class_name[modifier_start..index].to_string());
                modifier_start = index + separator.len_utf8();
                continue;
            }
            if ch == '/' {
                postfix_position = Some(index);
                continue;
            }
        }

        match ch {
            '[' => bracket_depth += 1,
            ']' => bracket_depth -= 1,
            '(' => paren_depth += 1,
            ')' => paren_depth -= 1,
            _ => {}
        }
    }

    let with_important = &class_name[modifier_start..];

    // v4 puts the marker at the end, the leading form is kept for v3 class names
    let (base_class_name, stripped_leading) =
        if let Some(stripped) = with_important.strip_suffix(important_modifier) {
            (stripped, false)
        } else if let Some(stripped) = with_important.strip_prefix(important_modifier) {
            (stripped, true)
        } else {
            (with_important, false)
        };

    let leading_offset = if stripped_leading { important_modifier.len_utf8() } else { 0 };
    let maybe_postfix_modifier_position = postfix_position
        .filter(|position| *position > modifier_start)
        .map(|position| position - modifier_start)
        .and_then(|position| position.checked_sub(leading_offset))
        .filter(|position| *position > 0 && *position < base_class_name.len());

    ParsedClassName {
        modifiers,
        has_important_modifier: base_class_name.len() != with_important.len(),
        base_class_name: base_class_name.to_string(),
        maybe_postfix_modifier_position,
        is_external: false,
    }
}
