//! The write-side binding: normalize, optionally configure, register.

use anyhow::Result;

use crate::binding::{DependencyCollection, configure};
use crate::dependency::{
    Dependency, DependencyFactory, ExternalModuleDependency, FileDependency, FileSet,
};
use crate::provider::{IntoProvider, Provider};

/// Normalizes dependency notations and appends them to a collection.
///
/// The adder accepts every notation shape. Each call appends exactly one
/// dependency, in declaration order, and the ordering within a call is fixed:
/// normalize, then configure, then register. Configuration never sees a
/// half-normalized value and the collection never sees an unconfigured one.
///
/// Lazy notations are appended as the lazy handle itself via
/// [`DependencyCollection::push_pending`]; when they contribute an actual
/// value to the collection is decided by whoever resolves them, not here.
pub struct DependencyAdder<F, C> {
    factory: F,
    collection: C,
}

impl<F, C> DependencyAdder<F, C>
where
    F: DependencyFactory,
    C: DependencyCollection,
{
    pub fn new(factory: F, collection: C) -> Self {
        Self {
            factory,
            collection,
        }
    }

    pub fn collection(&self) -> &C {
        &self.collection
    }

    /// Hand the collection back to its owner.
    pub fn into_collection(self) -> C {
        self.collection
    }

    /// Add a dependency from a coordinate string.
    ///
    /// # Errors
    ///
    /// Propagates the factory's parse error unchanged; nothing is appended
    /// on failure.
    pub fn add(&mut self, notation: impl AsRef<str>) -> Result<()> {
        self.add_coordinate(notation.as_ref(), None::<fn(&mut ExternalModuleDependency)>)
    }

    /// Add a dependency from a coordinate string and configure it.
    ///
    /// # Errors
    ///
    /// Propagates the factory's parse error unchanged; the configuration
    /// step is not invoked on failure.
    pub fn add_with(
        &mut self,
        notation: impl AsRef<str>,
        configure: impl FnOnce(&mut ExternalModuleDependency),
    ) -> Result<()> {
        self.add_coordinate(notation.as_ref(), Some(configure))
    }

    fn add_coordinate<A>(&mut self, notation: &str, action: Option<A>) -> Result<()>
    where
        A: FnOnce(&mut ExternalModuleDependency),
    {
        let mut dependency = self.factory.from_coordinate(notation)?;
        configure::apply(&mut dependency, action);
        tracing::debug!(dependency = %dependency.display_name(), "adding coordinate dependency");
        self.collection.push(Box::new(dependency));
        Ok(())
    }

    /// Add a set of files as a dependency.
    pub fn add_files(&mut self, files: FileSet) {
        self.add_file_set(files, None::<fn(&mut FileDependency)>);
    }

    /// Add a set of files as a dependency and configure it.
    pub fn add_files_with(&mut self, files: FileSet, configure: impl FnOnce(&mut FileDependency)) {
        self.add_file_set(files, Some(configure));
    }

    fn add_file_set<A>(&mut self, files: FileSet, action: Option<A>)
    where
        A: FnOnce(&mut FileDependency),
    {
        let mut dependency = self.factory.files(files);
        configure::apply(&mut dependency, action);
        tracing::debug!(dependency = %dependency.display_name(), "adding file dependency");
        self.collection.push(Box::new(dependency));
    }

    /// Add an already-constructed dependency.
    pub fn add_dependency<D: Dependency>(&mut self, dependency: D) {
        self.add_direct(dependency, None::<fn(&mut D)>);
    }

    /// Add an already-constructed dependency and configure it. The
    /// configuration step sees the concrete type the caller passed in.
    pub fn add_dependency_with<D: Dependency>(
        &mut self,
        dependency: D,
        configure: impl FnOnce(&mut D),
    ) {
        self.add_direct(dependency, Some(configure));
    }

    fn add_direct<D, A>(&mut self, mut dependency: D, action: Option<A>)
    where
        D: Dependency,
        A: FnOnce(&mut D),
    {
        configure::apply(&mut dependency, action);
        tracing::debug!(dependency = %dependency.display_name(), "adding direct dependency");
        self.collection.push(Box::new(dependency));
    }

    /// Add a lazily-computed dependency. The handle is appended as-is;
    /// resolution is never forced here.
    pub fn add_lazy<D: Dependency>(&mut self, dependency: Provider<D>) {
        self.add_pending(dependency, None::<fn(&mut D)>);
    }

    /// Add a lazily-computed dependency with a configuration step. The step
    /// is attached to the pending computation and runs exactly once, when
    /// the value is eventually resolved - or never, if it never is.
    pub fn add_lazy_with<D, A>(&mut self, dependency: Provider<D>, configure: A)
    where
        D: Dependency,
        A: FnOnce(&mut D) + 'static,
    {
        self.add_pending(dependency, Some(configure));
    }

    fn add_pending<D, A>(&mut self, dependency: Provider<D>, action: Option<A>)
    where
        D: Dependency,
        A: FnOnce(&mut D) + 'static,
    {
        let configured = configure::apply_later(dependency, action);
        tracing::debug!("adding pending dependency");
        self.collection
            .push_pending(configured.map(|dependency| Box::new(dependency) as Box<dyn Dependency>));
    }

    /// Add an externally-resolved module reference, e.g. a version-catalog
    /// entry.
    pub fn add_module(&mut self, reference: impl IntoProvider<Value = ExternalModuleDependency>) {
        self.add_pending(
            reference.into_provider(),
            None::<fn(&mut ExternalModuleDependency)>,
        );
    }

    /// Add an externally-resolved module reference with a configuration
    /// step, deferred like [`DependencyAdder::add_lazy_with`].
    pub fn add_module_with(
        &mut self,
        reference: impl IntoProvider<Value = ExternalModuleDependency>,
        configure: impl FnOnce(&mut ExternalModuleDependency) + 'static,
    ) {
        self.add_pending(reference.into_provider(), Some(configure));
    }
}
