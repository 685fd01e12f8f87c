//! Memoizing alias generator.
//!
//! Generation is a pure function of the descriptor and the writer's indent
//! width, so the rendered text can be cached on that pair and replayed into
//! any writer. Cached text is rendered at indentation level zero with the
//! target writer's width, then re-indented and re-terminated on replay, so a
//! hit produces exactly what a miss would.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use scriptalias_common::{AliasDescriptor, GenerateError, NewLineKind};

use crate::generators::AliasGenerator;
use crate::source_writer::SourceWriter;

/// Rendered text per indent width.
type Renderings = Vec<(u32, Arc<str>)>;

pub struct CachingAliasGenerator<G> {
    inner: G,
    cache: DashMap<AliasDescriptor, Renderings, FxBuildHasher>,
    hits: AtomicUsize,
}

impl<G: AliasGenerator> CachingAliasGenerator<G> {
    pub fn new(inner: G) -> Self {
        Self {
            inner,
            cache: DashMap::with_hasher(FxBuildHasher),
            hits: AtomicUsize::new(0),
        }
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }

    /// Number of distinct descriptors rendered so far.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn clear(&self) {
        self.cache.clear();
    }

    fn render(&self, alias: &AliasDescriptor, indent_width: u32) -> Result<Arc<str>, GenerateError> {
        if let Some(renderings) = self.cache.get(alias)
            && let Some((_, text)) = renderings.iter().find(|(width, _)| *width == indent_width)
        {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(alias = %alias.name, indent_width, "alias cache hit");
            return Ok(Arc::clone(text));
        }

        // Line terminators are rewritten on replay, so only the width is part of the key.
        let mut scratch = SourceWriter::with_format(indent_width, NewLineKind::LineFeed);
        self.inner.generate(&mut scratch, alias)?;
        let text: Arc<str> = Arc::from(scratch.finish());

        // A concurrent miss on the same key produced identical text; keep
        // whichever landed first.
        let mut renderings = self.cache.entry(alias.clone()).or_default();
        if let Some((_, existing)) = renderings.iter().find(|(width, _)| *width == indent_width) {
            return Ok(Arc::clone(existing));
        }
        renderings.push((indent_width, Arc::clone(&text)));
        Ok(text)
    }
}

impl<G: AliasGenerator> AliasGenerator for CachingAliasGenerator<G> {
    fn generate(
        &self,
        writer: &mut SourceWriter,
        alias: &AliasDescriptor,
    ) -> Result<(), GenerateError> {
        let text = self.render(alias, writer.indent_width())?;
        writer.write_lines(&text);
        Ok(())
    }
}
