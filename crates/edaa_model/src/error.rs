//! Error types for project model mutation and traversal.

use std::path::PathBuf;

/// Errors raised when an operation would break a model invariant.
///
/// Every mutating operation validates its arguments before touching the
/// model, so a returned error means the project is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// Another fileset with the same name already exists in the same scope.
    #[error("fileset '{name}' already exists in '{scope}'")]
    DuplicateFileSet {
        /// The conflicting fileset name.
        name: String,
        /// The project or parent fileset that already holds the name.
        scope: String,
    },

    /// The fileset is already registered with the project.
    #[error("fileset '{0}' is already part of the project")]
    FileSetAlreadyRegistered(String),

    /// The fileset is already nested inside another fileset.
    #[error("fileset '{name}' is already nested in fileset '{parent}'")]
    FileSetAlreadyNested {
        /// The fileset being moved.
        name: String,
        /// Its current parent.
        parent: String,
    },

    /// Nesting the fileset would make it its own ancestor.
    #[error("fileset '{0}' cannot be nested inside itself")]
    FileSetCycle(String),

    /// The file already belongs to a fileset and cannot be re-homed implicitly.
    #[error("file '{path}' is already part of fileset '{file_set}' and can't be assigned to the default fileset")]
    FileAlreadyAttached {
        /// The file path.
        path: PathBuf,
        /// The fileset currently holding the file.
        file_set: String,
    },

    /// A named fileset does not exist in the searched scope.
    #[error("fileset '{requested}' is not a member of '{scope}'")]
    UnknownFileSet {
        /// The name that was looked up.
        requested: String,
        /// The project or fileset that was searched.
        scope: String,
    },

    /// The fileset exists but is not registered as a top-level fileset of the project.
    #[error("fileset '{0}' is not registered with the project")]
    FileSetNotRegistered(String),

    /// Another VHDL library with the same name already exists.
    #[error("VHDL library '{0}' already exists in the project")]
    DuplicateVhdlLibrary(String),

    /// The handle was issued by a different project or is out of range.
    #[error("{kind} handle #{index} does not belong to project '{project}'")]
    ForeignHandle {
        /// The entity kind named by the handle.
        kind: &'static str,
        /// The arena index of the handle.
        index: usize,
        /// The project that rejected the handle.
        project: String,
    },
}
