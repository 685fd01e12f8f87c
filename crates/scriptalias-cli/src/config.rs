//! `scriptalias.json` loading and command-line overrides.
//!
//! ```json
//! { "indentWidth": 2, "newLine": "crlf", "useTypeKeywords": true, "cache": false }
//! ```
//!
//! Every key is optional. Command-line flags win over the file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use scriptalias_common::NewLineKind;
use scriptalias_emitter::GeneratorOptions;
use serde::Deserialize;

use crate::args::CliArgs;

pub const CONFIG_FILE_NAME: &str = "scriptalias.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScriptAliasConfig {
    #[serde(flatten)]
    pub generator: GeneratorOptions,
    /// Reuse rendered text for repeated descriptors.
    pub cache: bool,
}

impl Default for ScriptAliasConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorOptions::default(),
            cache: true,
        }
    }
}

impl ScriptAliasConfig {
    pub fn parse(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid scriptalias config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn apply_args(&mut self, args: &CliArgs) {
        if let Some(indent) = args.indent {
            self.generator.indent_width = indent;
        }
        if args.crlf {
            self.generator.new_line = NewLineKind::CarriageReturnLineFeed;
        }
        if args.type_keywords {
            self.generator.use_type_keywords = true;
        }
        if args.no_cache {
            self.cache = false;
        }
    }
}

/// The config file to use: `explicit` if given, else `scriptalias.json` in
/// `search_dir` when present.
pub fn find_config(explicit: Option<&Path>, search_dir: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let candidate = search_dir.join(CONFIG_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

/// Load the effective configuration for a run.
pub fn resolve_config(args: &CliArgs, search_dir: &Path) -> Result<ScriptAliasConfig> {
    let mut config = match find_config(args.config.as_deref(), search_dir) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            ScriptAliasConfig::load(&path)?
        }
        None => ScriptAliasConfig::default(),
    };
    config.apply_args(args);
    Ok(config)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
