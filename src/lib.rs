//! Merge Tailwind CSS class lists without style conflicts.
//!
//! ```
//! use tw_merge::tw_merge;
//!
//! assert_eq!(tw_merge("px-2 py-1 bg-red hover:bg-dark-red p-3 bg-[#B91C1C]"), "hover:bg-dark-red p-3 bg-[#B91C1C]");
//! ```

pub mod cache;
pub mod class_map;
pub mod config;
pub mod default_config;
pub mod errors;
pub mod join;
pub mod merger;
pub mod parser;
pub mod processor;
pub mod report;
pub mod validators;

#[cfg(feature = "cli")]
pub mod args;
#[cfg(feature = "cli")]
pub mod commands;

pub use cache::{CacheStats, ResultCache};
pub use class_map::ClassMap;
pub use config::{ClassDefinition, ClassGroup, ConfigExtension, ConfigPatch, ConflictMap, MergeConfig};
pub use default_config::get_default_config;
pub use errors::{MergeError, Result};
pub use join::{default_merger, tw_join, tw_merge, ClassValue};
pub use merger::TailwindMerge;
pub use parser::{parse_class_name, ClassNameParser, ParseHook, ParsedClassName};
pub use processor::ClassListProcessor;
pub use report::{MergeReport, ReportStatistics, TokenFate, TokenReport};
pub use validators::Validator;

#[cfg(feature = "cli")]
pub use args::{Cli, Commands, ConfigArgs, ExplainArgs, MergeArgs};
