//! Construction of dependency values from validated notation parts.

use std::collections::BTreeMap;

use anyhow::Result;

use crate::coordinate::Coordinate;
use crate::core::NotationError;
use crate::dependency::{ExternalModuleDependency, FileDependency, FileSet};

/// Builds dependency values for the binding layer.
///
/// The factory owns the coordinate-string format. The bindings hand it the
/// raw text and propagate whatever error the implementation raises, without
/// wrapping or reinterpreting it.
pub trait DependencyFactory {
    /// Parse a coordinate string into a module dependency.
    fn from_coordinate(&self, notation: &str) -> Result<ExternalModuleDependency>;

    /// Build a module dependency from an already-validated coordinate.
    fn module(&self, coordinate: Coordinate) -> ExternalModuleDependency;

    /// Wrap a set of files as a file dependency.
    fn files(&self, files: FileSet) -> FileDependency;

    /// Validate a map-shaped notation and build the module dependency it
    /// describes.
    ///
    /// # Errors
    ///
    /// Fails with [`NotationError::IllegalMapKeys`] or
    /// [`NotationError::MissingMapName`] when the map is malformed; see
    /// [`Coordinate::from_map`].
    fn module_from_map<S: AsRef<str>>(
        &self,
        map: &BTreeMap<String, S>,
    ) -> Result<ExternalModuleDependency>
    where
        Self: Sized,
    {
        Ok(self.module(Coordinate::from_map(map)?))
    }
}

/// Factory accepting the conventional `group:name:version` coordinate forms.
///
/// Accepted shapes, by segment count:
/// - `name`
/// - `group:name`
/// - `group:name:version`
///
/// An empty `group` or `version` segment reads as "no value" (`":lib:1.0"`
/// is a group-less, versioned coordinate); an empty `name` segment is an
/// error, as is anything with more than three segments.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultDependencyFactory;

impl DependencyFactory for DefaultDependencyFactory {
    fn from_coordinate(&self, notation: &str) -> Result<ExternalModuleDependency> {
        let segments: Vec<&str> = notation.split(':').collect();
        let coordinate = match segments.as_slice() {
            [name] => Coordinate {
                group: None,
                name: name_segment(name, notation)?,
                version: None,
            },
            [group, name] => Coordinate {
                group: optional_segment(group),
                name: name_segment(name, notation)?,
                version: None,
            },
            [group, name, version] => Coordinate {
                group: optional_segment(group),
                name: name_segment(name, notation)?,
                version: optional_segment(version),
            },
            _ => {
                return Err(NotationError::InvalidCoordinate {
                    notation: notation.to_string(),
                    reason: "expected at most group:name:version".to_string(),
                }
                .into());
            }
        };
        Ok(ExternalModuleDependency::new(coordinate))
    }

    fn module(&self, coordinate: Coordinate) -> ExternalModuleDependency {
        ExternalModuleDependency::new(coordinate)
    }

    fn files(&self, files: FileSet) -> FileDependency {
        FileDependency::new(files)
    }
}

fn optional_segment(segment: &str) -> Option<String> {
    (!segment.is_empty()).then(|| segment.to_string())
}

fn name_segment(segment: &str, notation: &str) -> Result<String> {
    if segment.is_empty() {
        return Err(NotationError::InvalidCoordinate {
            notation: notation.to_string(),
            reason: "name segment must not be empty".to_string(),
        }
        .into());
    }
    Ok(segment.to_string())
}
