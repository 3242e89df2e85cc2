use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::{ConfigExtension, MergeConfig};
use crate::default_config::get_default_config;
use crate::errors::Result;

/// Tailwind CSS class merging CLI - Removes conflicting utility classes from class lists
#[derive(Parser, Debug)]
#[command(name = "tw-merge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub config: ConfigArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge class lists given as arguments, or one list per stdin line
    Merge(MergeArgs),
    /// Show how each class of a list was classified and resolved
    Explain(ExplainArgs),
    /// Print the effective configuration
    Config(ConfigCommandArgs),
}

/// Options selecting the configuration, shared by all commands
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Full configuration file (JSON or YAML)
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        global = true,
        help = "Path to a configuration file replacing the default one (JSON or YAML)"
    )]
    pub config: Option<PathBuf>,

    /// Extension applied on top of the configuration
    #[arg(
        short = 'x',
        long = "extend",
        value_name = "PATH",
        global = true,
        help = "Path to a configuration extension with override/extend sections (JSON or YAML)"
    )]
    pub extend: Option<PathBuf>,

    /// Cache size override
    #[arg(
        long = "cache-size",
        value_name = "NUM",
        global = true,
        env = "TW_MERGE_CACHE_SIZE",
        help = "Number of merge results to cache (0 disables the cache)"
    )]
    pub cache_size: Option<usize>,

    /// Prefix override
    #[arg(
        short = 'p',
        long = "prefix",
        value_name = "PREFIX",
        global = true,
        help = "Prefix every utility class carries, e.g. 'tw' for 'tw:p-2'"
    )]
    pub prefix: Option<String>,
}

/// Arguments for the merge command
#[derive(Args, Debug, Clone)]
pub struct MergeArgs {
    /// Class lists to merge; read from stdin when empty
    #[arg(
        value_name = "CLASSES",
        num_args = 0..,
        help = "Class lists to merge as one list; stdin is read line by line when omitted"
    )]
    pub classes: Vec<String>,

    /// Number of parallel threads to use
    #[arg(
        short = 'j',
        long = "jobs",
        value_name = "NUM",
        help = "Number of parallel threads for stdin input (defaults to number of CPU cores)"
    )]
    pub jobs: Option<usize>,
}

/// Arguments for the explain command
#[derive(Args, Debug, Clone)]
pub struct ExplainArgs {
    /// Class lists to explain
    #[arg(
        value_name = "CLASSES",
        required = true,
        num_args = 1..,
        help = "Class lists to explain as one list"
    )]
    pub classes: Vec<String>,

    /// Compact JSON output
    #[arg(
        long = "compact",
        default_value_t = false,
        help = "Print the report as a single JSON line"
    )]
    pub compact: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
}

/// Arguments for the config command
#[derive(Args, Debug, Clone)]
pub struct ConfigCommandArgs {
    /// Dump format
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        help = "Print the whole configuration in this format instead of a summary"
    )]
    pub format: Option<OutputFormat>,
}

impl ConfigArgs {
    /// Validate that the arguments are consistent
    pub fn validate(&self) -> std::result::Result<(), String> {
        for path in self.config.iter().chain(self.extend.iter()) {
            if !path.is_file() {
                return Err(format!("Configuration file '{}' does not exist", path.display()));
            }
        }

        if let Some(prefix) = &self.prefix {
            if prefix.is_empty() {
                return Err("Prefix must not be empty".to_string());
            }
        }

        Ok(())
    }

    /// Build the effective configuration: the config file or the default one,
    /// then the extension, then the scalar overrides.
    pub fn load(&self) -> Result<MergeConfig> {
        let mut config = match &self.config {
            Some(path) => MergeConfig::from_file(path)?,
            None => get_default_config(),
        };

        if let Some(path) = &self.extend {
            config = config.extend(&ConfigExtension::from_file(path)?);
        }

        if let Some(cache_size) = self.cache_size {
            config.cache_size = cache_size;
        }
        if let Some(prefix) = &self.prefix {
            config.prefix = Some(prefix.clone());
        }

        config.validate()?;
        Ok(config)
    }
}

impl MergeArgs {
    /// Validate that the arguments are consistent
    pub fn validate(&self) -> std::result::Result<(), String> {
        if let Some(jobs) = self.jobs {
            if jobs == 0 {
                return Err("Number of jobs must be at least 1".to_string());
            }
        }

        Ok(())
    }

    /// The arguments as one class list, `None` when stdin should be read
    pub fn joined_classes(&self) -> Option<String> {
        if self.classes.is_empty() {
            None
        } else {
            Some(self.classes.join(" "))
        }
    }
}
