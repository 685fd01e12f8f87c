//! `#load` directive resolution and its memoizing decorator.
//!
//! A directive names the scripts to pull into a build script:
//!
//! ```text
//! #load "local:?path=build/tasks.cake"
//! #load "nuget:?package=Cake.Recipe&version=3.0.0"
//! #load "build/helpers.cake"
//! ```
//!
//! A reference without a scheme is a local path.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Result, bail};
use dashmap::DashMap;
use rustc_hash::FxBuildHasher;

use crate::package::{Parameters, first_parameter, hash_ignore_ascii_case, parse_parameters};

const LOCAL_SCHEME: &str = "local";

#[derive(Clone, Debug)]
pub struct LoadReference {
    original: String,
    scheme: String,
    address: Option<String>,
    parameters: Parameters,
}

impl LoadReference {
    pub fn parse(uri: &str) -> Result<Self> {
        let uri = uri.trim();
        if uri.is_empty() {
            bail!("load directive is empty");
        }

        let Some((scheme, rest)) = uri.split_once(':').filter(|(scheme, _)| scheme.len() > 1)
        else {
            // Bare paths (including `C:\...`) load a local script.
            let mut parameters = Parameters::new();
            parameters.insert("path".to_string(), vec![uri.to_string()]);
            return Ok(Self {
                original: uri.to_string(),
                scheme: LOCAL_SCHEME.to_string(),
                address: None,
                parameters,
            });
        };

        let (address, query) = rest.split_once('?').unwrap_or((rest, ""));
        Ok(Self {
            original: uri.to_string(),
            scheme: scheme.to_ascii_lowercase(),
            address: (!address.is_empty()).then(|| address.to_string()),
            parameters: parse_parameters(query),
        })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn parameter(&self, key: &str) -> Option<&str> {
        first_parameter(&self.parameters, key)
    }

    /// The `path=` parameter, set for local loads.
    pub fn path(&self) -> Option<&Path> {
        self.parameter("path").map(Path::new)
    }

    pub fn original(&self) -> &str {
        &self.original
    }
}

impl FromStr for LoadReference {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for LoadReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl PartialEq for LoadReference {
    fn eq(&self, other: &Self) -> bool {
        self.original.eq_ignore_ascii_case(&other.original)
    }
}

impl Eq for LoadReference {}

impl Hash for LoadReference {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_ignore_ascii_case(&self.original, state);
    }
}

/// Resolves `#load` directives of one scheme to the scripts they load.
pub trait LoadDirectiveProvider: Send + Sync {
    fn can_load(&self, reference: &LoadReference) -> bool;

    /// Script files the directive pulls in, in load order.
    fn load(&self, reference: &LoadReference) -> Result<Vec<PathBuf>>;
}

/// Routes each directive to the first provider that accepts it and resolves
/// every directive once.
pub struct CachingLoadDirectiveProvider {
    providers: Vec<Box<dyn LoadDirectiveProvider>>,
    cache: DashMap<LoadReference, Arc<[PathBuf]>, FxBuildHasher>,
}

impl CachingLoadDirectiveProvider {
    pub fn new(providers: Vec<Box<dyn LoadDirectiveProvider>>) -> Self {
        Self {
            providers,
            cache: DashMap::with_hasher(FxBuildHasher),
        }
    }

    pub fn providers(&self) -> &[Box<dyn LoadDirectiveProvider>] {
        &self.providers
    }

    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// Shared view of the scripts for `reference`, resolving it on first use.
    pub fn load_shared(&self, reference: &LoadReference) -> Result<Arc<[PathBuf]>> {
        if let Some(scripts) = self.cache.get(reference) {
            return Ok(Arc::clone(&scripts));
        }

        let Some(provider) = self
            .providers
            .iter()
            .find(|provider| provider.can_load(reference))
        else {
            bail!("no provider can load `{reference}`");
        };

        tracing::debug!(reference = %reference, "resolving load directive");
        let scripts: Arc<[PathBuf]> = provider.load(reference)?.into();
        self.cache.insert(reference.clone(), Arc::clone(&scripts));
        Ok(scripts)
    }
}

impl LoadDirectiveProvider for CachingLoadDirectiveProvider {
    fn can_load(&self, reference: &LoadReference) -> bool {
        self.cache.contains_key(reference)
            || self
                .providers
                .iter()
                .any(|provider| provider.can_load(reference))
    }

    fn load(&self, reference: &LoadReference) -> Result<Vec<PathBuf>> {
        Ok(self.load_shared(reference)?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_local_reference() {
        let reference = LoadReference::parse("local:?path=build/tasks.cake").unwrap();
        assert_eq!(reference.scheme(), "local");
        assert_eq!(reference.path(), Some(Path::new("build/tasks.cake")));
    }

    #[test]
    fn test_bare_path_is_local() {
        for uri in ["build/helpers.cake", r"C:\build\helpers.cake"] {
            let reference = LoadReference::parse(uri).unwrap();
            assert_eq!(reference.scheme(), "local");
            assert_eq!(reference.path(), Some(Path::new(uri)));
        }
    }

    #[test]
    fn test_parse_nuget_reference() {
        let reference: LoadReference = "NuGet:?package=Cake.Recipe&Version=3.0.0".parse().unwrap();
        assert_eq!(reference.scheme(), "nuget");
        assert_eq!(reference.parameter("package"), Some("Cake.Recipe"));
        assert_eq!(reference.parameter("version"), Some("3.0.0"));
        assert_eq!(reference.path(), None);
    }

    #[test]
    fn test_empty_reference_is_rejected() {
        assert!(LoadReference::parse("   ").is_err());
    }

    #[test]
    fn test_equality_ignores_case() {
        let a = LoadReference::parse("local:?path=Build.cake").unwrap();
        let b = LoadReference::parse("LOCAL:?PATH=build.cake").unwrap();
        assert_eq!(a, b);

        let set: std::collections::HashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }
}
