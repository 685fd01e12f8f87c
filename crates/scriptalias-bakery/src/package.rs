//! Package references from `#addin` directives.
//!
//! References are URIs of the form `scheme:[address]?key=value&key=value`:
//!
//! ```text
//! nuget:?package=Cake.Git&version=2.0.0
//! nuget:https://example.org/feed/?package=Cake.Docker
//! ```
//!
//! Two references are equal when their URIs match ignoring ASCII case.

use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use anyhow::{Result, bail};

#[derive(Clone, Debug)]
pub struct PackageReference {
    original: String,
    scheme: String,
    address: Option<String>,
    parameters: Parameters,
}

impl PackageReference {
    pub fn parse(uri: &str) -> Result<Self> {
        let uri = uri.trim();
        let Some((scheme, rest)) = uri.split_once(':') else {
            bail!("package reference `{uri}` has no scheme");
        };
        if scheme.is_empty() {
            bail!("package reference `{uri}` has an empty scheme");
        }

        let (address, query) = rest.split_once('?').unwrap_or((rest, ""));
        let parameters = parse_parameters(query);

        let has_package =
            first_parameter(&parameters, "package").is_some_and(|name| !name.is_empty());
        if !has_package {
            bail!("package reference `{uri}` does not name a package");
        }

        Ok(Self {
            original: uri.to_string(),
            scheme: scheme.to_ascii_lowercase(),
            address: (!address.is_empty()).then(|| address.to_string()),
            parameters,
        })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// The package name (`package=` parameter).
    pub fn package(&self) -> &str {
        self.parameter("package").unwrap_or_default()
    }

    /// First value of a query parameter; keys are case-insensitive.
    pub fn parameter(&self, key: &str) -> Option<&str> {
        first_parameter(&self.parameters, key)
    }

    pub fn original(&self) -> &str {
        &self.original
    }
}

impl FromStr for PackageReference {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for PackageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl PartialEq for PackageReference {
    fn eq(&self, other: &Self) -> bool {
        self.original.eq_ignore_ascii_case(&other.original)
    }
}

impl Eq for PackageReference {}

impl Hash for PackageReference {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_ignore_ascii_case(&self.original, state);
    }
}

/// Query parameters keyed by lowercased name; repeated keys keep every value.
pub(crate) type Parameters = BTreeMap<String, Vec<String>>;

pub(crate) fn parse_parameters(query: &str) -> Parameters {
    let mut parameters = Parameters::new();
    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        parameters
            .entry(key.to_ascii_lowercase())
            .or_default()
            .push(value.to_string());
    }
    parameters
}

pub(crate) fn first_parameter<'a>(parameters: &'a Parameters, key: &str) -> Option<&'a str> {
    parameters
        .get(&key.to_ascii_lowercase())
        .and_then(|values| values.first())
        .map(String::as_str)
}

/// Hash consistent with `eq_ignore_ascii_case`.
pub(crate) fn hash_ignore_ascii_case<H: Hasher>(text: &str, state: &mut H) {
    for byte in text.bytes() {
        state.write_u8(byte.to_ascii_lowercase());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nuget_reference() {
        let reference = PackageReference::parse("nuget:?package=Cake.Git&version=2.0.0").unwrap();
        assert_eq!(reference.scheme(), "nuget");
        assert_eq!(reference.address(), None);
        assert_eq!(reference.package(), "Cake.Git");
        assert_eq!(reference.parameter("Version"), Some("2.0.0"));
    }

    #[test]
    fn test_parse_reference_with_feed_address() {
        let reference: PackageReference = "nuget:https://example.org/feed/?package=Cake.Docker"
            .parse()
            .unwrap();
        assert_eq!(reference.address(), Some("https://example.org/feed/"));
        assert_eq!(reference.package(), "Cake.Docker");
    }

    #[test]
    fn test_invalid_references() {
        assert!(PackageReference::parse("Cake.Git").is_err());
        assert!(PackageReference::parse(":?package=x").is_err());
        assert!(PackageReference::parse("nuget:?version=1.0").is_err());
        assert!(PackageReference::parse("nuget:?package=").is_err());
    }

    #[test]
    fn test_equality_ignores_case() {
        let a = PackageReference::parse("nuget:?package=Cake.Git").unwrap();
        let b = PackageReference::parse("NuGet:?Package=cake.git").unwrap();
        let c = PackageReference::parse("nuget:?package=Cake.Npm").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: std::collections::HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
