//! Classification of base class names into class groups.
//!
//! The class groups of a configuration are compiled into a tree keyed by the
//! `-` separated parts of a class name. `grid-cols-2` walks `grid` -> `cols`
//! and then asks the validators registered at that node about `2`.

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace, warn};

use crate::config::{ClassDefinition, ConflictMap, MergeConfig};
use crate::errors::{MergeError, Result};
use crate::validators::Validator;

const CLASS_PART_SEPARATOR: char = '-';
const ARBITRARY_PROPERTY_PREFIX: &str = "arbitrary..";

#[derive(Debug)]
struct ClassValidator {
    class_group_id: String,
    validator: Validator,
}

#[derive(Debug, Default)]
struct ClassPart {
    next_part: HashMap<String, ClassPart>,
    validators: Vec<ClassValidator>,
    class_group_id: Option<String>,
}

impl ClassPart {
    fn part_mut(&mut self, path: &str) -> &mut ClassPart {
        path.split(CLASS_PART_SEPARATOR).fold(self, |node, part| {
            node.next_part.entry(part.to_string()).or_default()
        })
    }

    /// `rest` is `None` once every part has been consumed. Deeper matches win
    /// over the validators of the current node.
    fn group_recursive(&self, rest: Option<&str>) -> Option<&str> {
        let rest = match rest {
            Some(rest) => rest,
            None => return self.class_group_id.as_deref(),
        };

        let (head, tail) = match rest.split_once(CLASS_PART_SEPARATOR) {
            Some((head, tail)) => (head, Some(tail)),
            None => (rest, None),
        };

        if let Some(next) = self.next_part.get(head) {
            if let Some(class_group_id) = next.group_recursive(tail) {
                return Some(class_group_id);
            }
        }

        self.validators
            .iter()
            .find(|entry| entry.validator.test(rest))
            .map(|entry| entry.class_group_id.as_str())
    }
}

/// Compiled, read-only form of the class groups of a [`MergeConfig`]
#[derive(Debug)]
pub struct ClassMap {
    root: ClassPart,
    conflicting_class_groups: ConflictMap,
    conflicting_class_group_modifiers: ConflictMap,
    group_count: usize,
}

impl ClassMap {
    /// Builds the tree, resolving theme references on the way.
    ///
    /// Fails when a theme reference names a scale that does not exist or when
    /// scales reference each other in a loop.
    pub fn new(config: &MergeConfig) -> Result<Self> {
        let mut builder = Builder {
            theme: &config.theme,
            theme_stack: Vec::new(),
            validator_count: 0,
        };
        let mut root = ClassPart::default();

        for (class_group_id, definitions) in &config.class_groups {
            builder.process(definitions, &mut root, class_group_id)?;
        }

        warn_unknown_groups(config, "conflicting_class_groups", &config.conflicting_class_groups);
        warn_unknown_groups(
            config,
            "conflicting_class_group_modifiers",
            &config.conflicting_class_group_modifiers,
        );

        debug!(
            groups = config.class_groups.len(),
            validators = builder.validator_count,
            "Built class map"
        );

        Ok(Self {
            root,
            conflicting_class_groups: config.conflicting_class_groups.clone(),
            conflicting_class_group_modifiers: config.conflicting_class_group_modifiers.clone(),
            group_count: config.class_groups.len(),
        })
    }

    /// Class group of a base class name (modifiers and important marker removed)
    pub fn class_group_id<'a>(&'a self, class_name: &str) -> Option<Cow<'a, str>> {
        // `-inset-1` is the negative form of `inset-1`
        let rest = match class_name.strip_prefix(CLASS_PART_SEPARATOR) {
            Some(rest) => rest,
            None => class_name,
        };

        let found = self
            .root
            .group_recursive(Some(rest))
            .map(Cow::Borrowed)
            .or_else(|| arbitrary_property_group(class_name).map(Cow::Owned));

        trace!(class_name, class_group_id = ?found, "Classified");
        found
    }

    /// Groups overridden by a class of `class_group_id`.
    ///
    /// A postfix modifier like the `/7` in `text-lg/7` sets more properties
    /// than the bare class, so it overrides the postfix conflicts as well.
    pub fn conflicting_class_group_ids<'a>(
        &'a self,
        class_group_id: &str,
        has_postfix_modifier: bool,
    ) -> impl Iterator<Item = &'a str> + 'a {
        let conflicts = self
            .conflicting_class_groups
            .get(class_group_id)
            .into_iter()
            .flatten();
        let postfix_conflicts = self
            .conflicting_class_group_modifiers
            .get(class_group_id)
            .filter(|_| has_postfix_modifier)
            .into_iter()
            .flatten();

        conflicts.chain(postfix_conflicts).map(String::as_str)
    }

    pub fn group_count(&self) -> usize {
        self.group_count
    }
}

struct Builder<'c> {
    theme: &'c indexmap::IndexMap<String, Vec<ClassDefinition>>,
    theme_stack: Vec<String>,
    validator_count: usize,
}

impl<'c> Builder<'c> {
    fn process(&mut self, definitions: &[ClassDefinition], node: &mut ClassPart, class_group_id: &str) -> Result<()> {
        for definition in definitions {
            self.process_definition(definition, node, class_group_id)?;
        }
        Ok(())
    }

    fn process_definition(
        &mut self,
        definition: &ClassDefinition,
        node: &mut ClassPart,
        class_group_id: &str,
    ) -> Result<()> {
        match definition {
            ClassDefinition::Literal(literal) => {
                let target = if literal.is_empty() { node } else { node.part_mut(literal) };
                target.class_group_id = Some(class_group_id.to_string());
            }
            ClassDefinition::Validator(validator) => {
                self.validator_count += 1;
                node.validators.push(ClassValidator {
                    class_group_id: class_group_id.to_string(),
                    validator: *validator,
                });
            }
            ClassDefinition::Theme(scale) => {
                if self.theme_stack.iter().any(|active| active == scale) {
                    return Err(MergeError::ThemeCycle(scale.clone()));
                }
                let theme = self.theme;
                let values = theme.get(scale).ok_or_else(|| MergeError::UnknownTheme {
                    group: class_group_id.to_string(),
                    theme: scale.clone(),
                })?;

                self.theme_stack.push(scale.clone());
                let processed = self.process(values, node, class_group_id);
                self.theme_stack.pop();
                processed?;
            }
            ClassDefinition::Object(entries) => {
                for (path, definitions) in entries {
                    self.process(definitions, node.part_mut(path), class_group_id)?;
                }
            }
        }
        Ok(())
    }
}

/// `[mask-type:luminance]` belongs to the group `arbitrary..mask-type`
fn arbitrary_property_group(class_name: &str) -> Option<String> {
    let inner = class_name.strip_prefix('[')?.strip_suffix(']')?;
    let (property, _) = inner.split_once(':')?;

    if property.is_empty() {
        return None;
    }
    Some(format!("{}{}", ARBITRARY_PROPERTY_PREFIX, property))
}

fn warn_unknown_groups(config: &MergeConfig, table: &str, conflicts: &ConflictMap) {
    let known: HashSet<&str> = config.class_groups.keys().map(String::as_str).collect();
    let is_known = |group: &str| known.contains(group) || group.starts_with(ARBITRARY_PROPERTY_PREFIX);

    for (group, targets) in conflicts {
        if !is_known(group) {
            warn!(table, group = %group, "Conflict declared for unknown class group");
        }
        for target in targets.iter().filter(|target| !is_known(target)) {
            warn!(table, group = %group, target = %target, "Conflict targets unknown class group");
        }
    }
}
