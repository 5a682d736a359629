//! Module coordinates and map-shaped notation validation.
//!
//! A [`Coordinate`] is the `(group, name, version)` triple identifying an
//! external module. Only `name` is mandatory; declarations routinely omit the
//! group (project-local modules) or the version (managed elsewhere, e.g. by a
//! platform).
//!
//! [`Coordinate::from_map`] is the validator for map-shaped notations, the
//! named-parameter idiom of declarative manifests:
//!
//! ```toml
//! [dependencies]
//! guava = { group = "com.google.guava", name = "guava", version = "33.0" }
//! ```
//!
//! Validation is purely structural. Whether the coordinate points at a module
//! that actually exists is the resolver's business, not ours.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::NotationError;

const GROUP_KEY: &str = "group";
const NAME_KEY: &str = "name";
const VERSION_KEY: &str = "version";

/// The complete set of keys a map-shaped notation may carry.
const LEGAL_MAP_KEYS: [&str; 3] = [GROUP_KEY, NAME_KEY, VERSION_KEY];

/// The `(group, name, version)` triple identifying an external module.
///
/// Absent optional fields are `None`, never the empty string; downstream
/// consumers rely on that distinction when merging coordinates with
/// platform-managed versions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    /// Organization or namespace segment, e.g. `com.google.guava`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    /// Module name. The one mandatory segment.
    pub name: String,

    /// Version constraint text, passed through uninterpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Coordinate {
    /// Coordinate with a name only.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            group: None,
            name: name.into(),
            version: None,
        }
    }

    /// Coordinate with all three segments present.
    pub fn full(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: Some(group.into()),
            name: name.into(),
            version: Some(version.into()),
        }
    }

    /// Validate a map-shaped notation and extract the coordinate it
    /// describes.
    ///
    /// The key set must be a subset of `{group, name, version}` and `name`
    /// must be present. Values are coerced to owned text; absent optional
    /// keys become `None`.
    ///
    /// # Errors
    ///
    /// - [`NotationError::IllegalMapKeys`] when the map carries keys outside
    ///   the legal set; every offending key is enumerated (the `BTreeMap`
    ///   input makes the order lexicographic and deterministic)
    /// - [`NotationError::MissingMapName`] when `name` is absent
    pub fn from_map<S: AsRef<str>>(map: &BTreeMap<String, S>) -> Result<Self, NotationError> {
        let illegal: Vec<String> = map
            .keys()
            .filter(|key| !LEGAL_MAP_KEYS.contains(&key.as_str()))
            .cloned()
            .collect();
        if !illegal.is_empty() {
            return Err(NotationError::IllegalMapKeys { keys: illegal });
        }

        let Some(name) = map.get(NAME_KEY) else {
            return Err(NotationError::MissingMapName);
        };

        Ok(Self {
            group: map.get(GROUP_KEY).map(|value| value.as_ref().to_string()),
            name: name.as_ref().to_string(),
            version: map.get(VERSION_KEY).map(|value| value.as_ref().to_string()),
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.group, &self.version) {
            (Some(group), Some(version)) => write!(f, "{group}:{}:{version}", self.name),
            (Some(group), None) => write!(f, "{group}:{}", self.name),
            // Group-less but versioned coordinates keep the empty segment so
            // the rendering stays parseable.
            (None, Some(version)) => write!(f, ":{}:{version}", self.name),
            (None, None) => f.write_str(&self.name),
        }
    }
}
