//! Alias discovery and its memoizing decorator.
//!
//! Discovery itself (reflecting over an assembly for alias targets) lives
//! outside this workspace; only its contract is defined here.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use scriptalias_common::AliasDescriptor;

/// Finds the aliases an assembly exposes.
pub trait ScriptAliasFinder: Send + Sync {
    fn find_aliases(&self, assembly: &Path) -> Result<Vec<AliasDescriptor>>;
}

/// Runs discovery once per assembly path.
pub struct CachingScriptAliasFinder<F> {
    inner: F,
    cache: DashMap<PathBuf, Arc<[AliasDescriptor]>, FxBuildHasher>,
}

impl<F: ScriptAliasFinder> CachingScriptAliasFinder<F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            cache: DashMap::with_hasher(FxBuildHasher),
        }
    }

    pub fn inner(&self) -> &F {
        &self.inner
    }

    /// Shared view of the aliases for `assembly`, discovering them on first use.
    pub fn find_shared(&self, assembly: &Path) -> Result<Arc<[AliasDescriptor]>> {
        if let Some(aliases) = self.cache.get(assembly) {
            return Ok(Arc::clone(&aliases));
        }

        tracing::debug!(assembly = %assembly.display(), "discovering aliases");
        let aliases: Arc<[AliasDescriptor]> = self.inner.find_aliases(assembly)?.into();
        self.cache
            .insert(assembly.to_path_buf(), Arc::clone(&aliases));
        Ok(aliases)
    }
}

impl<F: ScriptAliasFinder> ScriptAliasFinder for CachingScriptAliasFinder<F> {
    fn find_aliases(&self, assembly: &Path) -> Result<Vec<AliasDescriptor>> {
        Ok(self.find_shared(assembly)?.to_vec())
    }
}
