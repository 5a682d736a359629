//! Lazy values at the boundary to the external evaluation engine.
//!
//! Lazy notations (a dependency computed later, or an externally-resolved
//! module reference) reach the binding layer as a [`Provider`]. The binding
//! layer never forces resolution; it only attaches pending computations via
//! [`Provider::map`] and hands the resulting handle to whoever drives
//! evaluation.
//!
//! Exactly-once execution is a type-system guarantee: the computation is an
//! `FnOnce` and both [`Provider::map`] and [`Provider::get`] consume the
//! handle. A provider that is dropped without being resolved never runs its
//! computation at all.

use std::fmt;

/// A value whose computation is deferred until an external scheduler asks
/// for it.
pub struct Provider<T> {
    compute: Box<dyn FnOnce() -> T>,
}

impl<T: 'static> Provider<T> {
    /// Provider backed by a deferred computation.
    pub fn new<F>(compute: F) -> Self
    where
        F: FnOnce() -> T + 'static,
    {
        Self {
            compute: Box::new(compute),
        }
    }

    /// Provider over an already-known value.
    pub fn of(value: T) -> Self {
        Self::new(move || value)
    }

    /// Chain a computation onto this provider.
    ///
    /// Nothing runs here; `transform` executes when the returned provider is
    /// eventually resolved, after this provider's own computation.
    pub fn map<U, F>(self, transform: F) -> Provider<U>
    where
        U: 'static,
        F: FnOnce(T) -> U + 'static,
    {
        Provider::new(move || transform((self.compute)()))
    }

    /// Resolve the value. Driver side only; the binding layer never calls
    /// this.
    pub fn get(self) -> T {
        (self.compute)()
    }
}

impl<T> fmt::Debug for Provider<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Provider(<pending>)")
    }
}

/// A producer of a lazy value.
///
/// Models notation sources that are not yet providers but know how to become
/// one, e.g. version-catalog accessors. The dispatch boundary collapses both
/// lazy flavors into a single normalization path by calling
/// [`IntoProvider::into_provider`] first.
pub trait IntoProvider {
    /// The value the produced provider eventually yields.
    type Value;

    /// Obtain the lazy value.
    fn into_provider(self) -> Provider<Self::Value>;
}

impl<T: 'static> IntoProvider for Provider<T> {
    type Value = T;

    fn into_provider(self) -> Provider<T> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn of_yields_the_value() {
        assert_eq!(Provider::of(41).get(), 41);
    }

    #[test]
    fn map_runs_only_at_resolution() {
        let calls = Rc::new(Cell::new(0u32));
        let seen = Rc::clone(&calls);
        let provider = Provider::of(1).map(move |value| {
            seen.set(seen.get() + 1);
            value + 1
        });
        assert_eq!(calls.get(), 0);
        assert_eq!(provider.get(), 2);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn dropped_provider_never_computes() {
        let calls = Rc::new(Cell::new(0u32));
        let seen = Rc::clone(&calls);
        let provider = Provider::new(move || {
            seen.set(seen.get() + 1);
            "unused"
        });
        drop(provider);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn chained_maps_run_in_order() {
        let provider = Provider::of(String::from("a"))
            .map(|mut text| {
                text.push('b');
                text
            })
            .map(|mut text| {
                text.push('c');
                text
            });
        assert_eq!(provider.get(), "abc");
    }
}
