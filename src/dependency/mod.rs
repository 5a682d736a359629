//! The dependency value model and construction factory.
//!
//! This module is the seam to the external dependency object model. The
//! binding layer only needs two capabilities from a dependency value:
//! - [`Dependency`] - anything that can be declared and appended to a
//!   collection
//! - [`ModuleDependency`] - the coordinate-addressed subset that can also be
//!   modified in place
//!
//! [`FileDependency`] deliberately implements only [`Dependency`]: a set of
//! files has no coordinate to rewrite, so file-based dependencies can be
//! added but never modified. That restriction is what makes the adder and
//! modifier shape sets asymmetric at the type level.
//!
//! Construction goes through a [`DependencyFactory`]. The coordinate-string
//! format belongs to the factory, not to the bindings; the bundled
//! [`DefaultDependencyFactory`] accepts the conventional
//! `group:name:version` forms, and callers with a different format supply
//! their own implementation.

pub mod factory;
pub mod files;
pub mod module;

pub use factory::{DefaultDependencyFactory, DependencyFactory};
pub use files::{FileDependency, FileSet};
pub use module::ExternalModuleDependency;

use std::any::Any;
use std::fmt;

use crate::coordinate::Coordinate;

/// A declared dependency value.
///
/// The `Any` supertrait (and [`Dependency::as_any`]) lets collection owners
/// recover the concrete type they appended; the binding layer itself never
/// downcasts.
pub trait Dependency: fmt::Debug + Any {
    /// Short rendering used in logs and messages.
    fn display_name(&self) -> String;

    /// Upcast for consumers that need the concrete type back.
    fn as_any(&self) -> &dyn Any;
}

/// A dependency addressed by module coordinate.
///
/// The mutator surface is what caller-supplied configuration steps and
/// modifier transformations operate on. All methods are object-safe so a
/// modifier's transformation can be stored as a single `dyn Fn` and applied
/// to any concrete module dependency type.
pub trait ModuleDependency: Dependency {
    /// The coordinate this dependency points at.
    fn coordinate(&self) -> &Coordinate;

    /// Mutable access to the coordinate, for configuration steps that pin or
    /// rewrite versions.
    fn coordinate_mut(&mut self) -> &mut Coordinate;

    /// Whether transitive dependencies of this module are brought in.
    /// Defaults to `true` for freshly normalized dependencies.
    fn is_transitive(&self) -> bool;

    fn set_transitive(&mut self, transitive: bool);

    /// The declared reason for this dependency, if one was recorded.
    fn reason(&self) -> Option<&str>;

    /// Record why this dependency exists.
    fn because(&mut self, reason: &str);
}
