//! VHDL libraries: named groupings of files orthogonal to filesets.

use crate::id::{FileId, ProjectId, VhdlLibraryId};
use crate::version::VhdlVersion;
use serde::Serialize;

/// A VHDL library such as `work` or `xil_defaultlib`.
///
/// A library groups design units for compilation independently of the
/// fileset hierarchy; the same file may belong to a fileset and a library.
#[derive(Debug, Clone, Serialize)]
pub struct VhdlLibrary {
    id: VhdlLibraryId,
    name: String,
    project: Option<ProjectId>,
    files: Vec<FileId>,
    vhdl_version: Option<VhdlVersion>,
}

impl VhdlLibrary {
    pub(crate) fn new(id: VhdlLibraryId, name: String) -> Self {
        Self {
            id,
            name,
            project: None,
            files: Vec::new(),
            vhdl_version: None,
        }
    }

    /// The handle of this library.
    pub fn id(&self) -> VhdlLibraryId {
        self.id
    }

    /// The library name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The project this library is registered with, if any.
    pub fn project(&self) -> Option<ProjectId> {
        self.project
    }

    /// Files compiled into this library, in insertion order.
    pub fn files(&self) -> &[FileId] {
        &self.files
    }

    /// The VHDL revision the library is compiled with, if one was set.
    pub fn vhdl_version(&self) -> Option<VhdlVersion> {
        self.vhdl_version
    }

    pub(crate) fn set_vhdl_version(&mut self, version: Option<VhdlVersion>) {
        self.vhdl_version = version;
    }

    pub(crate) fn set_project(&mut self, project: ProjectId) {
        self.project = Some(project);
    }

    pub(crate) fn push_file(&mut self, file: FileId) {
        self.files.push(file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_library_is_empty() {
        let library = VhdlLibrary::new(
            VhdlLibraryId::new(ProjectId::fresh(), 0),
            "library".to_string(),
        );
        assert_eq!(library.name(), "library");
        assert_eq!(library.project(), None);
        assert!(library.files().is_empty());
        assert_eq!(library.vhdl_version(), None);
    }

    #[test]
    fn version_can_be_set_and_cleared() {
        let mut library = VhdlLibrary::new(
            VhdlLibraryId::new(ProjectId::fresh(), 0),
            "lib".to_string(),
        );
        library.set_vhdl_version(Some(VhdlVersion::Vhdl2008));
        assert_eq!(library.vhdl_version(), Some(VhdlVersion::Vhdl2008));
        library.set_vhdl_version(None);
        assert_eq!(library.vhdl_version(), None);
    }
}
