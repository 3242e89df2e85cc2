//! Conflict resolution over a whole class list.

use std::collections::HashMap;
use tracing::{debug, trace};

use crate::cache::{CacheStats, ResultCache};
use crate::class_map::ClassMap;
use crate::config::{ConfigExtension, MergeConfig};
use crate::errors::Result;
use crate::parser::{ClassNameParser, ParsedClassName};
use crate::report::{MergeReport, TokenFate, TokenReport};

/// A configured merger.
///
/// Owns the compiled class map and a result cache. Sharing one instance
/// between threads is fine, `merge` only needs `&self`.
#[derive(Debug)]
pub struct TailwindMerge {
    config: MergeConfig,
    class_map: ClassMap,
    parser: ClassNameParser,
    cache: ResultCache,
}

/// Classification of one token, filled in by [`TailwindMerge::resolve`]
struct Resolved<'a> {
    token: &'a str,
    parsed: ParsedClassName,
    modifiers: Vec<String>,
    modifier_id: String,
    has_postfix_modifier: bool,
    class_group_id: Option<String>,
    conflict_key: Option<String>,
    fate: TokenFate,
    superseded_by: Option<usize>,
}

impl TailwindMerge {
    /// Validates `config`, compiles its class groups and sets up an empty cache.
    pub fn new(config: MergeConfig) -> Result<Self> {
        config.validate()?;
        let class_map = ClassMap::new(&config)?;
        let parser = ClassNameParser::new(&config);
        let cache = ResultCache::new(config.cache_size);

        debug!(
            cache_size = config.cache_size,
            prefix = ?config.prefix,
            separate_important_scope = config.separate_important_scope,
            "Created merger"
        );

        Ok(Self {
            config,
            class_map,
            parser,
            cache,
        })
    }

    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    pub fn class_map(&self) -> &ClassMap {
        &self.class_map
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// A new merger for this configuration with `extension` applied. The
    /// cache is not shared.
    pub fn extend(&self, extension: &ConfigExtension) -> Result<Self> {
        Self::new(self.config.extend(extension))
    }

    /// Removes the classes overridden by later classes and returns the
    /// survivors joined by single spaces.
    ///
    /// ```
    /// use tw_merge::TailwindMerge;
    ///
    /// let merger = TailwindMerge::default();
    /// assert_eq!(merger.merge("px-2 py-1 p-3"), "p-3");
    /// assert_eq!(merger.merge("bg-red-500 hover:bg-blue-500"), "bg-red-500 hover:bg-blue-500");
    /// ```
    pub fn merge(&self, classes: &str) -> String {
        self.cache.get_or_compute(classes, |classes| self.merge_uncached(classes))
    }

    /// [`merge`](Self::merge) without reading or filling the cache. The cache
    /// lock is held while a result is computed, so parallel batches go
    /// through here.
    pub fn merge_uncached(&self, classes: &str) -> String {
        let merged = self
            .resolve(classes)
            .iter()
            .filter(|entry| entry.fate == TokenFate::Kept)
            .map(|entry| entry.token)
            .collect::<Vec<_>>()
            .join(" ");
        trace!(input = classes, output = %merged, "Merged");
        merged
    }

    /// Drops every cached result. Counters are kept.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Same decisions as [`merge`](Self::merge), reported per token. Never
    /// touches the cache.
    pub fn explain(&self, classes: &str) -> MergeReport {
        let resolved = self.resolve(classes);
        let tokens = resolved
            .iter()
            .map(|entry| TokenReport {
                class: entry.token.to_string(),
                modifiers: entry.modifiers.clone(),
                important: entry.parsed.has_important_modifier,
                base_class_name: entry.parsed.base_class_name.clone(),
                postfix: entry.has_postfix_modifier,
                external: entry.parsed.is_external,
                class_group: entry.class_group_id.clone(),
                conflict_key: entry.conflict_key.clone(),
                fate: entry.fate,
                superseded_by: entry.superseded_by.map(|index| resolved[index].token.to_string()),
            })
            .collect();

        MergeReport::new(classes, tokens)
    }

    fn resolve<'a>(&self, classes: &'a str) -> Vec<Resolved<'a>> {
        let mut resolved: Vec<Resolved<'a>> = classes
            .split_whitespace()
            .map(|token| self.classify(token))
            .collect();

        // Later classes win, so walk backwards and let each kept class claim
        // its own scope key and the keys of the groups it overrides.
        let mut claimed: HashMap<String, usize> = HashMap::new();
        for index in (0..resolved.len()).rev() {
            let entry = &mut resolved[index];
            let class_group_id = match entry.class_group_id.as_deref() {
                Some(class_group_id) => class_group_id,
                None => continue,
            };

            let key = self.scope_key(&entry.modifier_id, class_group_id);
            if let Some(&winner) = claimed.get(&key) {
                entry.fate = TokenFate::Overridden;
                entry.superseded_by = Some(winner);
                entry.conflict_key = Some(key);
                continue;
            }

            for conflict in self
                .class_map
                .conflicting_class_group_ids(class_group_id, entry.has_postfix_modifier)
            {
                claimed
                    .entry(self.scope_key(&entry.modifier_id, conflict))
                    .or_insert(index);
            }
            claimed.insert(key.clone(), index);
            entry.conflict_key = Some(key);
        }

        // Unrecognized classes have nothing to conflict with, only exact
        // repeats are dropped.
        let mut first_seen: HashMap<&'a str, usize> = HashMap::new();
        for (index, entry) in resolved.iter_mut().enumerate() {
            if entry.class_group_id.is_some() {
                continue;
            }
            match first_seen.get(entry.token) {
                Some(&first) => {
                    entry.fate = TokenFate::Duplicate;
                    entry.superseded_by = Some(first);
                }
                None => {
                    first_seen.insert(entry.token, index);
                }
            }
        }

        resolved
    }

    fn classify<'a>(&self, token: &'a str) -> Resolved<'a> {
        let parsed = self.parser.parse(token);
        let mut resolved = Resolved {
            token,
            modifiers: Vec::new(),
            modifier_id: String::new(),
            has_postfix_modifier: false,
            class_group_id: None,
            conflict_key: None,
            fate: TokenFate::Kept,
            superseded_by: None,
            parsed,
        };
        if resolved.parsed.is_external {
            return resolved;
        }

        let base_class_name = resolved.parsed.base_class_name.as_str();
        let without_postfix = resolved
            .parsed
            .maybe_postfix_modifier_position
            .and_then(|position| base_class_name.get(..position));

        // `text-lg/7` is `text-lg` with a line height, but `aspect-16/9` is a
        // class of its own: fall back to the whole name.
        let mut has_postfix_modifier = without_postfix.is_some();
        let class_group_id = match without_postfix {
            Some(name) => self.class_map.class_group_id(name).or_else(|| {
                has_postfix_modifier = false;
                self.class_map.class_group_id(base_class_name)
            }),
            None => self.class_map.class_group_id(base_class_name),
        };

        let class_group_id = match class_group_id {
            Some(class_group_id) => class_group_id.into_owned(),
            None => return resolved,
        };

        let modifiers = self.parser.sort_modifiers(&resolved.parsed.modifiers);
        let mut modifier_id = modifiers.join(&self.config.separator.to_string());
        if self.config.separate_important_scope && resolved.parsed.has_important_modifier {
            modifier_id.push(self.config.important_modifier);
        }

        resolved.modifiers = modifiers;
        resolved.modifier_id = modifier_id;
        resolved.has_postfix_modifier = has_postfix_modifier;
        resolved.class_group_id = Some(class_group_id);
        resolved
    }

    fn scope_key(&self, modifier_id: &str, class_group_id: &str) -> String {
        if modifier_id.is_empty() {
            class_group_id.to_string()
        } else {
            format!("{}{}{}", modifier_id, self.config.separator, class_group_id)
        }
    }
}

impl Default for TailwindMerge {
    /// Merger for the default Tailwind CSS v4 configuration
    fn default() -> Self {
        Self::new(crate::default_config::get_default_config())
            .unwrap_or_else(|e| panic!("BUG: default configuration is invalid: {}", e))
    }
}
