//! The two binding capabilities over dependency notations.
//!
//! - [`DependencyAdder`] normalizes a notation, optionally configures it and
//!   appends the result to a [`DependencyCollection`]. It accepts every
//!   notation shape, including file sets.
//! - [`DependencyModifier`] normalizes a notation, applies its transformation
//!   plus any caller configuration, and returns the result. It accepts only
//!   dependency-shaped notations; file sets cannot be modified.
//!
//! Dispatch over notation shapes is static: each shape has its own entry
//! point, and the supported sets per capability are fixed by the method
//! signatures. Presenting an unsupported shape (modifying a file dependency,
//! say) is a compile error, never a runtime branch in this layer.
//!
//! Every entry point comes in two forms, `op(notation)` and
//! `op_with(notation, configure)`. The distinction between "no
//! configuration" and "a configuration that does nothing" is preserved all
//! the way down: without `_with`, no action is ever attached or invoked.
//!
//! For lazy notations the configuration step is not run eagerly; it is
//! attached to the provider's pending computation, exactly once, and executes
//! when the external scheduler resolves the value. A provider that is never
//! resolved never runs it.

pub mod adder;
mod configure;
pub mod modifier;


pub use adder::DependencyAdder;
pub use modifier::DependencyModifier;

use crate::dependency::Dependency;
use crate::provider::Provider;

/// Append-only sink of declared dependencies.
///
/// Owned by the build-configuration context, not by this layer; the adder
/// only ever appends. Thread safety of appends, and when pending values are
/// resolved, are the implementor's concern.
pub trait DependencyCollection {
    /// Append an already-realized dependency.
    fn push(&mut self, dependency: Box<dyn Dependency>);

    /// Append a dependency whose value is computed later.
    ///
    /// The lazy handle itself is stored; nothing in this layer forces
    /// resolution.
    fn push_pending(&mut self, dependency: Provider<Box<dyn Dependency>>);
}
