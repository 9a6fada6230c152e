//! Bible server registry
//!
//! A flat, read-only list of hosting servers loaded once from static
//! configuration. Each server lists the books it carries (with localized
//! display names) and a chapter-URL template. The reference parser never
//! consults this registry.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::books::ConfigError;

/// The registry shipped with the crate.
const BUNDLED_SERVERS: &str = include_str!("../data/servers.json");

fn default_status() -> String {
    "active".to_string()
}

/// One book as a server carries it. Localized names missing from the source
/// fall back to the primary (German) name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerBook {
    pub abbreviation: String,
    pub name_de: String,
    name_en: Option<String>,
    name_extra: Option<String>,
}

impl ServerBook {
    pub fn name_en(&self) -> &str {
        self.name_en.as_deref().unwrap_or(&self.name_de)
    }

    pub fn name_extra(&self) -> &str {
        self.name_extra.as_deref().unwrap_or(&self.name_de)
    }
}

/// One hosting server: base URL, chapter-URL template and supported books.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerRecord {
    pub name: String,
    pub url: String,
    /// URL template for one chapter, with `{version}`/`{book}`/`{chapter}`
    /// placeholders.
    pub chapterurl: String,
    #[serde(default = "default_status")]
    pub status: String,
    pub books: Vec<ServerBook>,
}

/// Read-only list of known servers, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerRegistry {
    servers: Vec<ServerRecord>,
}

impl ServerRegistry {
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_json(BUNDLED_SERVERS)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_json(&source)
    }

    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let servers: Vec<ServerRecord> =
            serde_json::from_str(source).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        Ok(Self { servers })
    }

    /// The whole list, in file order.
    pub fn servers(&self) -> &[ServerRecord] {
        &self.servers
    }

    /// Look up a server by case-insensitive name.
    pub fn get_by_name(&self, name: &str) -> Option<&ServerRecord> {
        let wanted = name.to_lowercase();
        self.servers
            .iter()
            .find(|s| s.name.to_lowercase() == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ServerRegistry {
        ServerRegistry::bundled().expect("bundled servers must load")
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let registry = registry();
        assert!(registry.get_by_name("BibleServer").is_some());
        assert!(registry.get_by_name("diebibel").is_some());
        assert!(registry.get_by_name("nope").is_none());
    }

    #[test]
    fn status_defaults_to_active() {
        let registry = registry();
        let server = registry.get_by_name("bibleserver").unwrap();
        assert_eq!(server.status, "active");
    }

    #[test]
    fn localized_names_fall_back_to_primary() {
        let registry = registry();
        let server = registry.get_by_name("diebibel").unwrap();
        let gen = server
            .books
            .iter()
            .find(|b| b.abbreviation == "GEN")
            .unwrap();
        assert_eq!(gen.name_en(), "Genesis");
        assert_eq!(gen.name_extra(), "Genesis");

        let ps = server.books.iter().find(|b| b.abbreviation == "PS").unwrap();
        assert_eq!(ps.name_en(), "Psalms");
        assert_eq!(ps.name_extra(), "Ps");
    }
}
