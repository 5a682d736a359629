//! The read-side binding: normalize, transform, optionally configure,
//! return.

use std::fmt;
use std::sync::Arc;

use anyhow::Result;

use crate::binding::configure;
use crate::dependency::{DependencyFactory, ExternalModuleDependency, ModuleDependency};
use crate::provider::{IntoProvider, Provider};

/// Normalizes dependency notations, applies a transformation and hands the
/// result back to the caller.
///
/// A modifier carries one intrinsic transformation - "mark as platform",
/// "redirect to test fixtures" - applied to every dependency it normalizes,
/// before any caller-supplied configuration step. [`DependencyModifier::identity`]
/// builds a modifier with no transformation of its own, for call sites where
/// only the configuration step matters.
///
/// Modifiers hold no collection and register nothing; ownership of every
/// result transfers to the caller. Only dependency-shaped notations are
/// accepted: the entry points require [`ModuleDependency`], so file-based
/// dependencies (which do not implement it) cannot be presented at all.
///
/// For eager shapes the transformation and configuration run synchronously
/// before return. For lazy shapes both are fused into a single computation
/// attached to the provider, run exactly once at resolution.
pub struct DependencyModifier<F> {
    factory: F,
    transformation: Arc<dyn Fn(&mut dyn ModuleDependency)>,
}

impl<F: DependencyFactory> DependencyModifier<F> {
    /// Modifier applying `transformation` to every dependency it returns.
    pub fn new(factory: F, transformation: impl Fn(&mut dyn ModuleDependency) + 'static) -> Self {
        Self {
            factory,
            transformation: Arc::new(transformation),
        }
    }

    /// Modifier with no transformation of its own.
    pub fn identity(factory: F) -> Self {
        Self::new(factory, |_| {})
    }

    /// Modify an already-constructed dependency. The result is the same
    /// concrete type - and the same instance - the caller passed in.
    pub fn modify<D: ModuleDependency>(&self, dependency: D) -> D {
        self.modify_direct(dependency, None::<fn(&mut D)>)
    }

    /// Modify an already-constructed dependency, then run `configure` on it.
    pub fn modify_with<D: ModuleDependency>(
        &self,
        dependency: D,
        configure: impl FnOnce(&mut D),
    ) -> D {
        self.modify_direct(dependency, Some(configure))
    }

    fn modify_direct<D, A>(&self, mut dependency: D, action: Option<A>) -> D
    where
        D: ModuleDependency,
        A: FnOnce(&mut D),
    {
        (self.transformation)(&mut dependency);
        configure::apply(&mut dependency, action);
        dependency
    }

    /// Normalize a coordinate string and modify the resulting dependency.
    ///
    /// # Errors
    ///
    /// Propagates the factory's parse error unchanged; the transformation
    /// and configuration step are not invoked on failure.
    pub fn modify_coordinate(&self, notation: impl AsRef<str>) -> Result<ExternalModuleDependency> {
        let dependency = self.factory.from_coordinate(notation.as_ref())?;
        Ok(self.modify_direct(dependency, None::<fn(&mut ExternalModuleDependency)>))
    }

    /// Normalize a coordinate string, modify and configure the result.
    ///
    /// # Errors
    ///
    /// Propagates the factory's parse error unchanged.
    pub fn modify_coordinate_with(
        &self,
        notation: impl AsRef<str>,
        configure: impl FnOnce(&mut ExternalModuleDependency),
    ) -> Result<ExternalModuleDependency> {
        let dependency = self.factory.from_coordinate(notation.as_ref())?;
        Ok(self.modify_direct(dependency, Some(configure)))
    }

    /// Modify a lazily-computed dependency. The transformation is attached
    /// to the pending computation; nothing runs until the provider is
    /// resolved.
    pub fn modify_lazy<D: ModuleDependency>(&self, dependency: Provider<D>) -> Provider<D> {
        self.modify_pending(dependency, None::<fn(&mut D)>)
    }

    /// Modify a lazily-computed dependency with a configuration step.
    /// Transformation and step are fused into one attached computation, so
    /// both run exactly once at resolution - or never, if it never resolves.
    pub fn modify_lazy_with<D, A>(&self, dependency: Provider<D>, configure: A) -> Provider<D>
    where
        D: ModuleDependency,
        A: FnOnce(&mut D) + 'static,
    {
        self.modify_pending(dependency, Some(configure))
    }

    fn modify_pending<D, A>(&self, dependency: Provider<D>, action: Option<A>) -> Provider<D>
    where
        D: ModuleDependency,
        A: FnOnce(&mut D) + 'static,
    {
        let transformation = Arc::clone(&self.transformation);
        dependency.map(move |mut dependency| {
            transformation(&mut dependency);
            configure::apply(&mut dependency, action);
            dependency
        })
    }

    /// Modify an externally-resolved module reference, e.g. a
    /// version-catalog entry.
    pub fn modify_module(
        &self,
        reference: impl IntoProvider<Value = ExternalModuleDependency>,
    ) -> Provider<ExternalModuleDependency> {
        self.modify_pending(
            reference.into_provider(),
            None::<fn(&mut ExternalModuleDependency)>,
        )
    }

    /// Modify an externally-resolved module reference with a configuration
    /// step, deferred like [`DependencyModifier::modify_lazy_with`].
    pub fn modify_module_with(
        &self,
        reference: impl IntoProvider<Value = ExternalModuleDependency>,
        configure: impl FnOnce(&mut ExternalModuleDependency) + 'static,
    ) -> Provider<ExternalModuleDependency> {
        self.modify_pending(reference.into_provider(), Some(configure))
    }
}

impl<F: fmt::Debug> fmt::Debug for DependencyModifier<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependencyModifier")
            .field("factory", &self.factory)
            .finish_non_exhaustive()
    }
}
