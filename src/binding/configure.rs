//! Applies optional caller-supplied configuration to normalized
//! dependencies.
//!
//! Configuration steps are plain `FnOnce(&mut D)` values for the most
//! specific `D` the call site knows. They cannot return errors; a panicking
//! step unwinds through the bindings unchanged.

use crate::provider::Provider;

/// Run `configure` against the dependency, if a step was supplied.
///
/// With `None` the step is never invoked; "no configuration" and
/// "configuration that does nothing" stay distinguishable.
pub(crate) fn apply<D>(dependency: &mut D, configure: Option<impl FnOnce(&mut D)>) {
    if let Some(configure) = configure {
        configure(dependency);
    }
}

/// Attach `configure` to a pending dependency value.
///
/// Returns the provider untouched when no step was supplied. Otherwise
/// exactly one computation is chained, to run when the driving scheduler
/// resolves the value.
pub(crate) fn apply_later<D: 'static>(
    pending: Provider<D>,
    configure: Option<impl FnOnce(&mut D) + 'static>,
) -> Provider<D> {
    match configure {
        Some(configure) => pending.map(move |mut dependency| {
            configure(&mut dependency);
            dependency
        }),
        None => pending,
    }
}
