//! Wiring for the cached script-server services.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use scriptalias_common::{AliasDescriptor, BufferedFile};
use scriptalias_emitter::{
    AliasGenerator, CachingAliasGenerator, GeneratorOptions, generate_all, join_definitions,
};

use crate::alias_finder::{CachingScriptAliasFinder, ScriptAliasFinder};
use crate::load_directive::{CachingLoadDirectiveProvider, LoadDirectiveProvider};
use crate::package::PackageReference;
use crate::processor::{CachingScriptProcessor, ScriptProcessor};

/// Collects the uncached services and registers their caching decorators.
pub struct CacheModule<F, P, G> {
    finder: F,
    processor: P,
    generator: G,
    load_providers: Vec<Box<dyn LoadDirectiveProvider>>,
    options: GeneratorOptions,
}

impl<F, P, G> CacheModule<F, P, G>
where
    F: ScriptAliasFinder,
    P: ScriptProcessor,
    G: AliasGenerator,
{
    pub fn new(finder: F, processor: P, generator: G, options: GeneratorOptions) -> Self {
        Self {
            finder,
            processor,
            generator,
            load_providers: Vec::new(),
            options,
        }
    }

    /// Add a `#load` provider. Providers are consulted in registration order.
    pub fn with_load_provider(mut self, provider: impl LoadDirectiveProvider + 'static) -> Self {
        self.load_providers.push(Box::new(provider));
        self
    }

    pub fn register(self) -> CachedServices<F, P, G> {
        tracing::debug!("registering cached script services");
        CachedServices {
            finder: Arc::new(CachingScriptAliasFinder::new(self.finder)),
            processor: Arc::new(CachingScriptProcessor::new(self.processor)),
            generator: Arc::new(CachingAliasGenerator::new(self.generator)),
            load_directives: Arc::new(CachingLoadDirectiveProvider::new(self.load_providers)),
            options: self.options,
        }
    }
}

/// The registered services. Cloning shares the underlying caches.
pub struct CachedServices<F, P, G> {
    finder: Arc<CachingScriptAliasFinder<F>>,
    processor: Arc<CachingScriptProcessor<P>>,
    generator: Arc<CachingAliasGenerator<G>>,
    load_directives: Arc<CachingLoadDirectiveProvider>,
    options: GeneratorOptions,
}

impl<F, P, G> Clone for CachedServices<F, P, G> {
    fn clone(&self) -> Self {
        Self {
            finder: Arc::clone(&self.finder),
            processor: Arc::clone(&self.processor),
            generator: Arc::clone(&self.generator),
            load_directives: Arc::clone(&self.load_directives),
            options: self.options.clone(),
        }
    }
}

impl<F, P, G> CachedServices<F, P, G>
where
    F: ScriptAliasFinder,
    P: ScriptProcessor,
    G: AliasGenerator,
{
    pub fn finder(&self) -> &CachingScriptAliasFinder<F> {
        &self.finder
    }

    pub fn processor(&self) -> &CachingScriptProcessor<P> {
        &self.processor
    }

    pub fn generator(&self) -> &CachingAliasGenerator<G> {
        &self.generator
    }

    pub fn load_directives(&self) -> &CachingLoadDirectiveProvider {
        &self.load_directives
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Aliases exposed by every assembly the addins install, in install order.
    pub fn find_addin_aliases(
        &self,
        addins: &[PackageReference],
        install_path: &Path,
    ) -> Result<Vec<AliasDescriptor>> {
        let assemblies = self
            .processor
            .install_addins(addins, install_path)
            .context("failed to install addins")?;

        let mut aliases = Vec::new();
        for assembly in &assemblies {
            let found = self
                .finder
                .find_shared(assembly)
                .with_context(|| format!("failed to load aliases from {}", assembly.display()))?;
            aliases.extend(found.iter().cloned());
        }
        Ok(aliases)
    }

    /// Render the aliases of `addins` as a virtual script file at `file_path`.
    pub fn alias_file(
        &self,
        addins: &[PackageReference],
        install_path: &Path,
        file_path: impl Into<PathBuf>,
    ) -> Result<BufferedFile> {
        let aliases = self.find_addin_aliases(addins, install_path)?;
        let definitions = generate_all(self.generator.as_ref(), &aliases, &self.options)
            .context("failed to generate alias definitions")?;
        let source = join_definitions(&definitions, self.options.new_line);

        let file_path = file_path.into();
        tracing::debug!(
            path = %file_path.display(),
            aliases = aliases.len(),
            "built alias file"
        );
        Ok(BufferedFile::new(file_path, &source))
    }
}
