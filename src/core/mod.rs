//! Core types shared across the binding layer.
//!
//! The error model follows a two-level pattern:
//! - [`NotationError`] - strongly-typed structural errors raised by this
//!   layer itself (malformed maps, malformed coordinate strings)
//! - [`anyhow::Result`] - the propagation currency of every fallible binding
//!   operation, so external [`crate::dependency::DependencyFactory`]
//!   implementations can surface their own error types through the bindings
//!   unchanged
//!
//! Every error here is local to the single declaration call that raised it.
//! The binding layer holds no state a failed call could corrupt, so there is
//! no rollback or compensation logic anywhere in this crate.

pub mod error;

pub use error::NotationError;
