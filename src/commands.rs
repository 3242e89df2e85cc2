//! Command handlers of the `tw-merge` binary

use rayon::prelude::*;
use serde::Serialize;
use std::io::Write;
use tracing::{debug, warn};

use crate::args::{ConfigCommandArgs, ExplainArgs, MergeArgs, OutputFormat};
use crate::config::MergeConfig;
use crate::errors::{MergeError, Result};
use crate::merger::TailwindMerge;
use crate::processor::ClassListProcessor;

/// Batch lines skip the result cache, whose lock would serialize the workers.
struct UncachedLines<'a>(&'a TailwindMerge);

impl ClassListProcessor for UncachedLines<'_> {
    fn merger(&self) -> &TailwindMerge {
        self.0
    }

    fn merge_classes(&self, classes: &str) -> String {
        self.0.merge_uncached(classes)
    }
}

/// Merge every line of `input` on its own, in parallel. Output lines keep
/// the input order and the whitespace around each class list.
pub fn merge_lines(merger: &TailwindMerge, input: &str, jobs: Option<usize>) -> Result<Vec<String>> {
    let lines: Vec<&str> = input.lines().collect();
    let processor = UncachedLines(merger);
    let merge_all = || -> Vec<String> {
        lines
            .par_iter()
            .map(|line| processor.process_preserving_whitespace(line))
            .collect()
    };

    let merged = match jobs {
        Some(num_jobs) => rayon::ThreadPoolBuilder::new()
            .num_threads(num_jobs)
            .build()
            .map_err(|e| MergeError::InvalidInput(format!("Failed to start {} worker threads: {}", num_jobs, e)))?
            .install(merge_all),
        None => merge_all(),
    };

    debug!(lines = merged.len(), "Merged stdin lines");
    Ok(merged)
}

/// Handle the merge command. `stdin` is only read when no classes were given.
pub fn handle_merge_command<R, W>(merger: &TailwindMerge, args: &MergeArgs, stdin: R, out: &mut W) -> Result<()>
where
    R: std::io::Read,
    W: Write,
{
    args.validate().map_err(MergeError::InvalidInput)?;

    if let Some(classes) = args.joined_classes() {
        writeln!(out, "{}", merger.merge(&classes))?;
        return Ok(());
    }

    let mut input = String::new();
    let mut stdin = stdin;
    stdin.read_to_string(&mut input)?;
    if input.is_empty() {
        warn!("No classes given and stdin is empty");
        return Ok(());
    }

    for line in merge_lines(merger, &input, args.jobs)? {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(())
}

/// Handle the explain command
pub fn handle_explain_command<W: Write>(merger: &TailwindMerge, args: &ExplainArgs, out: &mut W) -> Result<()> {
    let report = merger.explain(&args.classes.join(" "));
    let json = if args.compact {
        serde_json::to_string(&report)?
    } else {
        report.to_json()?
    };
    writeln!(out, "{}", json)?;
    Ok(())
}

/// Short description of a configuration
#[derive(Debug, Serialize)]
pub struct ConfigSummary {
    pub cache_size: usize,
    pub prefix: Option<String>,
    pub separator: char,
    pub important_modifier: char,
    pub separate_important_scope: bool,
    pub theme_scales: usize,
    pub class_groups: usize,
    pub conflicting_class_groups: usize,
    pub conflicting_class_group_modifiers: usize,
    pub order_sensitive_modifiers: Vec<String>,
}

impl ConfigSummary {
    pub fn new(config: &MergeConfig) -> Self {
        Self {
            cache_size: config.cache_size,
            prefix: config.prefix.clone(),
            separator: config.separator,
            important_modifier: config.important_modifier,
            separate_important_scope: config.separate_important_scope,
            theme_scales: config.theme.len(),
            class_groups: config.class_groups.len(),
            conflicting_class_groups: config.conflicting_class_groups.len(),
            conflicting_class_group_modifiers: config.conflicting_class_group_modifiers.len(),
            order_sensitive_modifiers: config.order_sensitive_modifiers.clone(),
        }
    }
}

/// Handle the config command
pub fn handle_config_command<W: Write>(config: &MergeConfig, args: &ConfigCommandArgs, out: &mut W) -> Result<()> {
    match args.format {
        Some(OutputFormat::Json) => writeln!(out, "{}", serde_json::to_string_pretty(config)?)?,
        Some(OutputFormat::Yaml) => write!(out, "{}", serde_yaml::to_string(config)?)?,
        None => {
            let summary = ConfigSummary::new(config);
            writeln!(out, "Cache size: {}", summary.cache_size)?;
            writeln!(out, "Prefix: {}", summary.prefix.as_deref().unwrap_or("(none)"))?;
            writeln!(out, "Separator: {}", summary.separator)?;
            writeln!(out, "Important modifier: {}", summary.important_modifier)?;
            writeln!(out, "Separate important scope: {}", summary.separate_important_scope)?;
            writeln!(out, "Theme scales: {}", summary.theme_scales)?;
            writeln!(out, "Class groups: {}", summary.class_groups)?;
            writeln!(out, "Conflicting class groups: {}", summary.conflicting_class_groups)?;
            writeln!(
                out,
                "Conflicting class group modifiers: {}",
                summary.conflicting_class_group_modifiers
            )?;
            writeln!(
                out,
                "Order-sensitive modifiers: {}",
                summary.order_sensitive_modifiers.join(" ")
            )?;
        }
    }
    Ok(())
}
