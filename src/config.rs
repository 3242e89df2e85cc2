use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::{MergeError, Result};
use crate::parser::ParseHook;
use crate::validators::Validator;

/// Definitions making up one class group or theme scale. Order matters: the
/// class map tries validators in the order they are declared.
pub type ClassGroup = Vec<ClassDefinition>;

/// Group id -> group ids it overrides
pub type ConflictMap = IndexMap<String, Vec<String>>;

/// One entry of a class group definition.
///
/// In configuration files a literal is a plain string, a validator is
/// `{"validator": "<name>"}`, a theme reference is `{"theme": "<scale>"}` and
/// anything else is an object mapping further class-name parts to definitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DefinitionRepr", into = "DefinitionRepr")]
pub enum ClassDefinition {
    /// A literal class-name part. The empty string marks the node itself.
    Literal(String),
    /// A predicate over the remaining class-name parts
    Validator(Validator),
    /// All definitions of a theme scale, resolved when the class map is built
    Theme(String),
    /// Nested definitions under further class-name parts
    Object(IndexMap<String, ClassGroup>),
}

impl ClassDefinition {
    pub fn theme(scale: &str) -> Self {
        Self::Theme(scale.to_string())
    }

    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, ClassGroup)>,
    {
        Self::Object(entries.into_iter().map(|(key, group)| (key.into(), group)).collect())
    }
}

impl From<&str> for ClassDefinition {
    fn from(literal: &str) -> Self {
        Self::Literal(literal.to_string())
    }
}

impl From<String> for ClassDefinition {
    fn from(literal: String) -> Self {
        Self::Literal(literal)
    }
}

impl From<Validator> for ClassDefinition {
    fn from(validator: Validator) -> Self {
        Self::Validator(validator)
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum DefinitionRepr {
    Literal(String),
    Validator { validator: String },
    Theme { theme: String },
    Object(IndexMap<String, ClassGroup>),
}

impl TryFrom<DefinitionRepr> for ClassDefinition {
    type Error = String;

    fn try_from(repr: DefinitionRepr) -> std::result::Result<Self, Self::Error> {
        Ok(match repr {
            DefinitionRepr::Literal(literal) => Self::Literal(literal),
            DefinitionRepr::Validator { validator } => Self::Validator(
                Validator::from_name(&validator)
                    .ok_or_else(|| format!("unknown validator '{}'", validator))?,
            ),
            DefinitionRepr::Theme { theme } => Self::Theme(theme),
            DefinitionRepr::Object(entries) => Self::Object(entries),
        })
    }
}

impl From<ClassDefinition> for DefinitionRepr {
    fn from(definition: ClassDefinition) -> Self {
        match definition {
            ClassDefinition::Literal(literal) => Self::Literal(literal),
            ClassDefinition::Validator(validator) => Self::Validator {
                validator: validator.name().to_string(),
            },
            ClassDefinition::Theme(theme) => Self::Theme { theme },
            ClassDefinition::Object(entries) => Self::Object(entries),
        }
    }
}

/// Everything a merger needs to know about the class vocabulary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Maximum number of cached merge results, 0 disables the cache
    pub cache_size: usize,

    /// Optional prefix every utility must carry, written as `<prefix><separator>`
    pub prefix: Option<String>,

    /// Character between modifiers and the base class name
    pub separator: char,

    /// Character that marks a class as important
    pub important_modifier: char,

    /// Resolve important and regular classes independently of each other
    pub separate_important_scope: bool,

    /// Named scales that class groups can pull in with a theme reference
    pub theme: IndexMap<String, ClassGroup>,

    /// Class group id -> definitions
    pub class_groups: IndexMap<String, ClassGroup>,

    /// Groups that a later class of the key group overrides
    pub conflicting_class_groups: ConflictMap,

    /// Extra overrides applied when a class has a postfix modifier, e.g. `text-lg/7`
    pub conflicting_class_group_modifiers: ConflictMap,

    /// Modifiers whose position relative to other modifiers is significant
    pub order_sensitive_modifiers: Vec<String>,

    /// Custom parsing wrapped around the built-in parser
    #[serde(skip)]
    pub parse_hook: Option<ParseHook>,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            cache_size: 500,
            prefix: None,
            separator: ':',
            important_modifier: '!',
            separate_important_scope: false,
            theme: IndexMap::new(),
            class_groups: IndexMap::new(),
            conflicting_class_groups: IndexMap::new(),
            conflicting_class_group_modifiers: IndexMap::new(),
            order_sensitive_modifiers: Vec::new(),
            parse_hook: None,
        }
    }
}

/// Changes applied on top of an existing configuration.
///
/// Values under `override` replace whole entries, values under `extend` are
/// appended to the existing entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigExtension {
    pub cache_size: Option<usize>,
    pub prefix: Option<String>,
    pub separator: Option<char>,
    pub important_modifier: Option<char>,
    pub separate_important_scope: Option<bool>,

    #[serde(rename = "override")]
    pub overrides: ConfigPatch,

    pub extend: ConfigPatch,

    #[serde(skip)]
    pub parse_hook: Option<ParseHook>,
}

/// Table-valued parts of a configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigPatch {
    pub theme: IndexMap<String, ClassGroup>,
    pub class_groups: IndexMap<String, ClassGroup>,
    pub conflicting_class_groups: ConflictMap,
    pub conflicting_class_group_modifiers: ConflictMap,
    pub order_sensitive_modifiers: Option<Vec<String>>,
}

impl MergeConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        read_yaml(path)
    }

    /// Load configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        read_json(path)
    }

    /// Load configuration from a file (auto-detect format)
    pub fn from_file(path: &Path) -> Result<Self> {
        read_any(path)
    }

    /// Returns a new configuration with `extension` applied. `self` is left as is.
    pub fn extend(&self, extension: &ConfigExtension) -> MergeConfig {
        let mut config = self.clone();

        if let Some(cache_size) = extension.cache_size {
            config.cache_size = cache_size;
        }
        if let Some(prefix) = &extension.prefix {
            config.prefix = Some(prefix.clone());
        }
        if let Some(separator) = extension.separator {
            config.separator = separator;
        }
        if let Some(important_modifier) = extension.important_modifier {
            config.important_modifier = important_modifier;
        }
        if let Some(separate) = extension.separate_important_scope {
            config.separate_important_scope = separate;
        }
        if let Some(hook) = &extension.parse_hook {
            config.parse_hook = Some(hook.clone());
        }

        let overrides = &extension.overrides;
        override_entries(&mut config.theme, &overrides.theme);
        override_entries(&mut config.class_groups, &overrides.class_groups);
        override_entries(&mut config.conflicting_class_groups, &overrides.conflicting_class_groups);
        override_entries(
            &mut config.conflicting_class_group_modifiers,
            &overrides.conflicting_class_group_modifiers,
        );
        if let Some(modifiers) = &overrides.order_sensitive_modifiers {
            config.order_sensitive_modifiers = modifiers.clone();
        }

        let extend = &extension.extend;
        extend_entries(&mut config.theme, &extend.theme);
        extend_entries(&mut config.class_groups, &extend.class_groups);
        extend_entries(&mut config.conflicting_class_groups, &extend.conflicting_class_groups);
        for (group, modifiers) in &extend.conflicting_class_group_modifiers {
            let existing = config
                .conflicting_class_group_modifiers
                .entry(group.clone())
                .or_default();
            for modifier in modifiers {
                if !existing.contains(modifier) {
                    existing.push(modifier.clone());
                }
            }
        }
        if let Some(modifiers) = &extend.order_sensitive_modifiers {
            config.order_sensitive_modifiers.extend(modifiers.iter().cloned());
        }

        config
    }

    /// Checks the scalar settings, table consistency is checked when the class map is built
    pub fn validate(&self) -> Result<()> {
        let reserved = ['[', ']', '(', ')', '/', '-'];

        if self.separator.is_whitespace() || reserved.contains(&self.separator) {
            return Err(MergeError::ConfigError {
                message: format!("'{}' cannot be used as modifier separator", self.separator),
            });
        }
        if self.important_modifier.is_whitespace() || reserved.contains(&self.important_modifier) {
            return Err(MergeError::ConfigError {
                message: format!("'{}' cannot be used as important marker", self.important_modifier),
            });
        }
        if self.separator == self.important_modifier {
            return Err(MergeError::ConfigError {
                message: "modifier separator and important marker must differ".to_string(),
            });
        }
        if let Some(prefix) = &self.prefix {
            if prefix.chars().any(|c| c.is_whitespace() || c == self.separator) {
                return Err(MergeError::ConfigError {
                    message: format!("invalid prefix '{}'", prefix),
                });
            }
        }

        Ok(())
    }
}

impl ConfigExtension {
    /// Load an extension from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        read_yaml(path)
    }

    /// Load an extension from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        read_json(path)
    }

    /// Load an extension from a file (auto-detect format)
    pub fn from_file(path: &Path) -> Result<Self> {
        read_any(path)
    }
}

fn override_entries<V: Clone>(base: &mut IndexMap<String, Vec<V>>, overrides: &IndexMap<String, Vec<V>>) {
    for (key, value) in overrides {
        base.insert(key.clone(), value.clone());
    }
}

fn extend_entries<V: Clone>(base: &mut IndexMap<String, Vec<V>>, extra: &IndexMap<String, Vec<V>>) {
    for (key, value) in extra {
        base.entry(key.clone()).or_default().extend(value.iter().cloned());
    }
}

fn read_config_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| MergeError::ConfigError {
        message: format!("Failed to read config file {}: {}", path.display(), e),
    })
}

fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = read_config_file(path)?;
    serde_yaml::from_str(&content).map_err(|e| MergeError::ConfigError {
        message: format!("Failed to parse YAML config: {}", e),
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = read_config_file(path)?;
    serde_json::from_str(&content).map_err(|e| MergeError::ConfigError {
        message: format!("Failed to parse JSON config: {}", e),
    })
}

fn read_any<T: DeserializeOwned>(path: &Path) -> Result<T> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("yaml") | Some("yml") => read_yaml(path),
        Some("json") => read_json(path),
        _ => Err(MergeError::ConfigError {
            message: format!(
                "Unsupported config file format: {}. Use .yaml, .yml, or .json",
                path.display()
            ),
        }),
    }
}
