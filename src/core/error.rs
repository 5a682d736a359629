//! Error types for notation validation and binding.
//!
//! All variants of [`NotationError`] are structural: they describe a malformed
//! declaration, never a resolution failure, and are raised synchronously
//! before any dependency value reaches a collection. None of them are retried
//! anywhere; a structural error is always a caller bug.
//!
//! Caller-supplied configuration steps cannot return errors (they are plain
//! `FnOnce(&mut D)` values). A panicking configuration step unwinds through
//! the binding layer unchanged; nothing here catches or reinterprets it.

use thiserror::Error;

/// Errors raised while validating or normalizing a dependency notation.
#[derive(Debug, Error)]
pub enum NotationError {
    /// A map-shaped notation carried keys outside `{group, name, version}`.
    ///
    /// Every offending key is listed, in lexicographic order, so a caller
    /// fixing a declaration sees the full extent of the mistake at once.
    #[error("dependency map must not contain the following keys: [{}]", .keys.join(", "))]
    IllegalMapKeys {
        /// The keys that are not part of the legal set.
        keys: Vec<String>,
    },

    /// A map-shaped notation lacked the mandatory `name` key.
    #[error("dependency map must contain a name key")]
    MissingMapName,

    /// A coordinate string did not match any accepted form.
    ///
    /// Raised by [`crate::dependency::DefaultDependencyFactory`]; external
    /// factory implementations own their coordinate format and surface their
    /// own errors instead.
    #[error("invalid dependency coordinate '{notation}': {reason}")]
    InvalidCoordinate {
        /// The coordinate string as the caller wrote it.
        notation: String,
        /// What made it unacceptable.
        reason: String,
    },
}
