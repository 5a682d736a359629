//! Shared fixtures for binding tests.
//!
//! Available to unit tests and, through the `test-utils` feature, to the
//! integration suite.

use crate::binding::DependencyCollection;
use crate::coordinate::Coordinate;
use crate::dependency::{Dependency, ExternalModuleDependency};
use crate::provider::{IntoProvider, Provider};

/// Collection recording realized and pending appends separately, standing in
/// for the build-configuration context's real collection.
#[derive(Default)]
pub struct RecordingCollection {
    realized: Vec<Box<dyn Dependency>>,
    pending: Vec<Provider<Box<dyn Dependency>>>,
}

impl RecordingCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn realized(&self) -> &[Box<dyn Dependency>] {
        &self.realized
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Total appends, realized and pending.
    pub fn len(&self) -> usize {
        self.realized.len() + self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drive every pending value, as the collection owner eventually would.
    pub fn resolve_pending(&mut self) -> Vec<Box<dyn Dependency>> {
        self.pending.drain(..).map(Provider::get).collect()
    }
}

impl DependencyCollection for RecordingCollection {
    fn push(&mut self, dependency: Box<dyn Dependency>) {
        self.realized.push(dependency);
    }

    fn push_pending(&mut self, dependency: Provider<Box<dyn Dependency>>) {
        self.pending.push(dependency);
    }
}

/// Stand-in for an externally-resolved module reference, shaped like a
/// version-catalog accessor: it knows how to become a provider but is not
/// one yet.
pub struct CatalogEntry(pub Coordinate);

impl IntoProvider for CatalogEntry {
    type Value = ExternalModuleDependency;

    fn into_provider(self) -> Provider<ExternalModuleDependency> {
        Provider::of(ExternalModuleDependency::new(self.0))
    }
}
