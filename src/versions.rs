//! Bible version registry
//!
//! A flat, read-only list of translation records loaded once from static
//! configuration. Filtering is simple equality/membership: a name filter
//! wins outright; otherwise language and server predicates are ANDed.
//! The reference parser never consults this registry.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::books::ConfigError;

/// The registry shipped with the crate.
const BUNDLED_VERSIONS: &str = include_str!("../data/versions.json");

/// One Bible translation and where it is hosted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VersionRecord {
    pub name: String,
    pub fullname: String,
    pub language: String,
    /// Content kind, e.g. "bible" or "nt".
    pub content: String,
    /// Display name of the hosting server.
    pub servername: String,
    /// Registry key of the hosting server.
    pub server: String,
    /// Extra content tags, e.g. apocrypha.
    #[serde(default)]
    pub extracontent: Option<Vec<String>>,
}

/// Read-only list of known versions, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRegistry {
    versions: Vec<VersionRecord>,
}

impl VersionRegistry {
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_json(BUNDLED_VERSIONS)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_json(&source)
    }

    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let versions: Vec<VersionRecord> =
            serde_json::from_str(source).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        Ok(Self { versions })
    }

    /// The whole list, in file order.
    pub fn versions(&self) -> &[VersionRecord] {
        &self.versions
    }

    /// Look up a version by case-insensitive name.
    pub fn get(&self, name: &str) -> Option<&VersionRecord> {
        let wanted = name.to_lowercase();
        self.versions
            .iter()
            .find(|v| v.name.to_lowercase() == wanted)
    }

    /// Filter the list. An empty slice means "no filter" for that argument.
    /// If a name filter is given it wins and no other predicate is consulted;
    /// otherwise language and server must both match. Comparisons are
    /// case-insensitive.
    pub fn filter(
        &self,
        names: &[String],
        languages: &[String],
        server: Option<&str>,
    ) -> Vec<&VersionRecord> {
        let by_name: Vec<String> = names.iter().map(|s| s.to_lowercase()).collect();
        let by_language: Vec<String> = languages.iter().map(|s| s.to_lowercase()).collect();
        let by_server = server.map(|s| s.to_lowercase());

        if by_name.is_empty() && by_language.is_empty() && by_server.is_none() {
            return self.versions.iter().collect();
        }

        self.versions
            .iter()
            .filter(|v| {
                if !by_name.is_empty() {
                    return by_name.contains(&v.name.to_lowercase());
                }
                let language_match = by_language.is_empty()
                    || by_language.contains(&v.language.to_lowercase());
                let server_match = match &by_server {
                    Some(s) => v.server.to_lowercase() == *s,
                    None => true,
                };
                language_match && server_match
            })
            .collect()
    }

    pub fn language_of(&self, name: &str) -> Option<&str> {
        self.get(name).map(|v| v.language.as_str())
    }

    pub fn content_of(&self, name: &str) -> Option<&str> {
        self.get(name).map(|v| v.content.as_str())
    }

    pub fn extracontent_of(&self, name: &str) -> Option<&[String]> {
        self.get(name).and_then(|v| v.extracontent.as_deref())
    }

    /// Registry key of the server hosting the named version.
    pub fn server_of(&self, name: &str) -> Option<&str> {
        self.get(name).map(|v| v.server.as_str())
    }
}
