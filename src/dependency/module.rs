//! External module dependencies.

use std::any::Any;

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::dependency::{Dependency, ModuleDependency};

/// A dependency on an external module, identified by coordinate.
///
/// This is the canonical form every coordinate-shaped notation (string, map,
/// catalog reference) normalizes to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalModuleDependency {
    coordinate: Coordinate,
    #[serde(default = "transitive_default")]
    transitive: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

fn transitive_default() -> bool {
    true
}

impl ExternalModuleDependency {
    /// Dependency on the given coordinate, transitive by default.
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            transitive: true,
            reason: None,
        }
    }
}

impl Dependency for ExternalModuleDependency {
    fn display_name(&self) -> String {
        self.coordinate.to_string()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl ModuleDependency for ExternalModuleDependency {
    fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    fn coordinate_mut(&mut self) -> &mut Coordinate {
        &mut self.coordinate
    }

    fn is_transitive(&self) -> bool {
        self.transitive
    }

    fn set_transitive(&mut self, transitive: bool) {
        self.transitive = transitive;
    }

    fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    fn because(&mut self, reason: &str) {
        self.reason = Some(reason.to_string());
    }
}
