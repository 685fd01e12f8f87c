//! Batch driver: descriptors in, alias definitions out.

use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use scriptalias_common::{AliasDescriptor, GenerateError};
use scriptalias_emitter::{
    CachingAliasGenerator, ScriptAliasGenerator, generate_all, join_definitions,
};

use crate::args::CliArgs;
use crate::config::{ScriptAliasConfig, resolve_config};

/// Parse a JSON array of descriptors. A `null` entry is an invalid argument.
pub fn parse_descriptors(text: &str) -> Result<Vec<AliasDescriptor>> {
    let entries: Vec<Option<AliasDescriptor>> =
        serde_json::from_str(text).context("input is not a JSON array of alias descriptors")?;

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            entry.ok_or_else(|| {
                anyhow::Error::new(GenerateError::missing("alias"))
                    .context(format!("descriptor #{index}"))
            })
        })
        .collect()
}

/// Read descriptors from `input`; `-` reads stdin.
pub fn read_descriptors(input: &Path) -> Result<Vec<AliasDescriptor>> {
    let text = if input == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read descriptors from stdin")?;
        text
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("failed to read {}", input.display()))?
    };
    parse_descriptors(&text)
}

/// Render every alias and join the definitions into one source unit.
pub fn render_aliases(aliases: &[AliasDescriptor], config: &ScriptAliasConfig) -> Result<String> {
    let options = &config.generator;
    let generator = ScriptAliasGenerator::new(options);

    let definitions = if config.cache {
        let caching = CachingAliasGenerator::new(generator);
        let definitions = generate_all(&caching, aliases, options)?;
        tracing::debug!(
            distinct = caching.cached_len(),
            hits = caching.hits(),
            "alias cache"
        );
        definitions
    } else {
        generate_all(&generator, aliases, options)?
    };

    Ok(join_definitions(&definitions, options.new_line))
}

/// Run one CLI invocation, resolving the config relative to `search_dir`.
pub fn run_in(args: &CliArgs, search_dir: &Path) -> Result<()> {
    let config = resolve_config(args, search_dir)?;
    let aliases = read_descriptors(&args.input)?;
    tracing::debug!(count = aliases.len(), "read alias descriptors");

    let output = render_aliases(&aliases, &config)?;

    match &args.out {
        Some(path) => std::fs::write(path, output)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .and_then(|()| stdout.flush())
                .context("failed to write to stdout")?;
        }
    }
    Ok(())
}

pub fn run(args: &CliArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    run_in(args, &cwd)
}
