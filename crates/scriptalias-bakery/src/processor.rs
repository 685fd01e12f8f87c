//! Addin installation and its memoizing decorator.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use dashmap::DashMap;
use rustc_hash::FxBuildHasher;

use crate::package::PackageReference;

/// Package name of the host itself; it is always present and never installed.
const HOST_PACKAGE: &str = "Cake";

/// Installs the packages a build script references.
pub trait ScriptProcessor: Send + Sync {
    /// Install addins and return the assemblies they provide.
    fn install_addins(
        &self,
        addins: &[PackageReference],
        install_path: &Path,
    ) -> Result<Vec<PathBuf>>;

    fn install_modules(&self, modules: &[PackageReference], install_path: &Path) -> Result<()>;

    fn install_tools(&self, tools: &[PackageReference], install_path: &Path) -> Result<()>;
}

/// Installs each addin once for the lifetime of the processor.
///
/// Addins are installed one at a time through the inner processor so every
/// package gets its own cache entry. Modules and tools are not needed for
/// alias generation and are ignored.
pub struct CachingScriptProcessor<P> {
    inner: P,
    cache: DashMap<PackageReference, Arc<[PathBuf]>, FxBuildHasher>,
}

impl<P: ScriptProcessor> CachingScriptProcessor<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            cache: DashMap::with_hasher(FxBuildHasher),
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}

impl<P: ScriptProcessor> ScriptProcessor for CachingScriptProcessor<P> {
    fn install_addins(
        &self,
        addins: &[PackageReference],
        install_path: &Path,
    ) -> Result<Vec<PathBuf>> {
        let mut assemblies = Vec::new();
        for addin in addins {
            if addin.package().eq_ignore_ascii_case(HOST_PACKAGE) {
                continue;
            }

            let cached = self.cache.get(addin).map(|entry| Arc::clone(&entry));
            let paths = match cached {
                Some(paths) => paths,
                None => {
                    tracing::debug!(addin = %addin, "installing addin");
                    let installed: Arc<[PathBuf]> = self
                        .inner
                        .install_addins(std::slice::from_ref(addin), install_path)?
                        .into();
                    self.cache.insert(addin.clone(), Arc::clone(&installed));
                    installed
                }
            };
            assemblies.extend(paths.iter().cloned());
        }
        Ok(assemblies)
    }

    fn install_modules(&self, _modules: &[PackageReference], _install_path: &Path) -> Result<()> {
        Ok(())
    }

    fn install_tools(&self, _tools: &[PackageReference], _install_path: &Path) -> Result<()> {
        Ok(())
    }
}
