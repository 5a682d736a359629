//! File-based dependencies.
//!
//! A [`FileSet`] is an opaque handle to a set of files; what the paths mean
//! (archives, directories, generated outputs) is the build's business. File
//! sets normalize to [`FileDependency`], which is addable but not modifiable:
//! it implements [`Dependency`] only, never
//! [`crate::dependency::ModuleDependency`].

use std::any::Any;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::dependency::Dependency;

/// An opaque, ordered set of file paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSet {
    paths: Vec<PathBuf>,
}

impl FileSet {
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for FileSet {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// A dependency on a set of files rather than an external module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDependency {
    files: FileSet,
}

impl FileDependency {
    pub fn new(files: FileSet) -> Self {
        Self { files }
    }

    pub fn files(&self) -> &FileSet {
        &self.files
    }
}

impl Dependency for FileDependency {
    fn display_name(&self) -> String {
        format!("files[{}]", self.files.len())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
