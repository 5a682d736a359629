//! depbind - notation normalization and declarative binding for dependency
//! declarations.
//!
//! A build tool's dependency-declaration surface accepts references in several
//! literal shapes: a coordinate string (`"org:lib:1.0"`), a map of coordinate
//! fields, a set of files, an externally-resolved module reference (a version
//! catalog entry, say), a lazily-computed value, or an already-constructed
//! dependency. This crate normalizes each shape into a canonical dependency
//! value, optionally applies a caller-supplied configuration step, and either
//! registers the result into a dependency collection or returns it to the
//! caller.
//!
//! # Architecture Overview
//!
//! Two binding capabilities sit on top of a small notation model:
//! - [`binding::DependencyAdder`] - write-side: normalize, optionally
//!   configure, append to a [`binding::DependencyCollection`]
//! - [`binding::DependencyModifier`] - read-side: normalize, transform,
//!   optionally configure, and return; never touches a collection
//!
//! The two capabilities accept asymmetric shape sets on purpose: "modify"
//! presumes a dependency-shaped input, while "add" additionally accepts file
//! sets, which cannot meaningfully be modified in place. The asymmetry is
//! enforced at the type level, so presenting an unsupported shape is a compile
//! error rather than a runtime branch.
//!
//! # Core Modules
//!
//! - [`binding`] - the adder and modifier capabilities plus the collection
//!   trait they write to
//! - [`coordinate`] - module coordinates and map-shaped notation validation
//! - [`dependency`] - the dependency value model and construction factory
//! - [`provider`] - lazy values at the boundary to the external evaluation
//!   engine
//! - [`core`] - error types shared by the whole crate
//!
//! # What this crate does not do
//!
//! Nothing here resolves dependencies against repositories, computes
//! transitive graphs, caches notations, or checks that a module actually
//! exists. Validation is structural only: a well-shaped coordinate for a
//! module that was never published passes through untouched.
//!
//! # Example
//!
//! ```rust
//! use depbind::binding::{DependencyAdder, DependencyCollection};
//! use depbind::dependency::{DefaultDependencyFactory, Dependency, ModuleDependency};
//! use depbind::provider::Provider;
//!
//! #[derive(Default)]
//! struct Declared(Vec<Box<dyn Dependency>>);
//!
//! impl DependencyCollection for Declared {
//!     fn push(&mut self, dependency: Box<dyn Dependency>) {
//!         self.0.push(dependency);
//!     }
//!     fn push_pending(&mut self, dependency: Provider<Box<dyn Dependency>>) {
//!         self.0.push(dependency.get());
//!     }
//! }
//!
//! let mut adder = DependencyAdder::new(DefaultDependencyFactory, Declared::default());
//! adder.add("org.example:lib:1.0")?;
//! adder.add_with("org.example:other:2.0", |dependency| {
//!     dependency.set_transitive(false);
//! })?;
//! assert_eq!(adder.collection().0.len(), 2);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod binding;
pub mod coordinate;
pub mod core;
pub mod dependency;
pub mod provider;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
