//! Opaque handles for entities owned by a [`Project`](crate::Project).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

/// Identifies one [`Project`](crate::Project) instance for the lifetime of the process.
///
/// Every handle issued by a project carries its `ProjectId`, so a handle
/// passed to the wrong project is detected instead of silently aliasing
/// an unrelated entity.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct ProjectId(u32);

impl ProjectId {
    /// Allocates a fresh, process-unique project id.
    pub(crate) fn fresh() -> Self {
        static NEXT: AtomicU32 = AtomicU32::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw `u32` value of this `ProjectId`.
    pub fn as_raw(self) -> u32 {
        self.0
    }
}

macro_rules! arena_handle {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
        pub struct $name {
            project: ProjectId,
            index: u32,
        }

        impl $name {
            pub(crate) fn new(project: ProjectId, index: usize) -> Self {
                Self {
                    project,
                    index: index as u32,
                }
            }

            /// Returns the id of the project that issued this handle.
            pub fn project(self) -> ProjectId {
                self.project
            }

            /// Returns the arena index of this handle within its project.
            pub fn index(self) -> usize {
                self.index as usize
            }

            /// Human-readable entity kind, used in error messages.
            pub const KIND: &'static str = $label;
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}#{}@{}", $label, self.index, self.project.0)
            }
        }
    };
}

arena_handle!(
    /// Handle to a [`File`](crate::File) stored in a project.
    FileId,
    "file"
);

arena_handle!(
    /// Handle to a [`FileSet`](crate::FileSet) stored in a project.
    FileSetId,
    "fileset"
);

arena_handle!(
    /// Handle to a [`VhdlLibrary`](crate::VhdlLibrary) stored in a project.
    VhdlLibraryId,
    "vhdl library"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ids_are_distinct() {
        let a = ProjectId::fresh();
        let b = ProjectId::fresh();
        assert_ne!(a, b);
    }

    #[test]
    fn handle_accessors() {
        let project = ProjectId::fresh();
        let id = FileSetId::new(project, 3);
        assert_eq!(id.project(), project);
        assert_eq!(id.index(), 3);
    }

    #[test]
    fn same_index_different_project_differs() {
        let a = FileId::new(ProjectId::fresh(), 0);
        let b = FileId::new(ProjectId::fresh(), 0);
        assert_ne!(a, b);
    }

    #[test]
    fn display_names_kind() {
        let project = ProjectId::fresh();
        let id = VhdlLibraryId::new(project, 1);
        assert!(id.to_string().starts_with("vhdl library#1@"));
    }

    #[test]
    fn serde_roundtrip() {
        let id = FileId::new(ProjectId::fresh(), 7);
        let json = serde_json::to_string(&id).unwrap();
        let back: FileId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
