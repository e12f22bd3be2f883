//! Files and their concrete kinds.

use crate::file_type::{ContentType, FileType};
use crate::id::{FileId, FileSetId};
use crate::version::{SystemVerilogVersion, VerilogVersion, VhdlVersion};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The concrete kind of a file together with its kind-specific attributes.
///
/// Each variant maps to exactly one [`FileType`] tag. HDL source kinds carry
/// their language revision.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum FileKind {
    /// A file with no further classification.
    Generic,
    /// A VHDL source file analysed under the given revision.
    VhdlSource {
        /// The VHDL revision this file is written in.
        version: VhdlVersion,
    },
    /// A Verilog source file.
    VerilogSource {
        /// The Verilog revision, if known.
        version: Option<VerilogVersion>,
    },
    /// A SystemVerilog source file.
    SystemVerilogSource {
        /// The SystemVerilog revision, if known.
        version: Option<SystemVerilogVersion>,
    },
    /// A Xilinx Design Constraints file.
    XdcConstraint,
    /// An IP core description document.
    IpCoreDescription,
    /// A Vivado IP core instantiation (`*.xci`).
    IpCoreInstantiation,
    /// A Vivado project file (`*.xpr`).
    VivadoProject,
}

impl FileKind {
    /// Shorthand for a VHDL source of the given revision.
    pub fn vhdl(version: VhdlVersion) -> Self {
        FileKind::VhdlSource { version }
    }

    /// Returns the type tag of this kind.
    pub fn file_type(self) -> FileType {
        match self {
            FileKind::Generic => FileType::File,
            FileKind::VhdlSource { .. } => FileType::VhdlSourceFile,
            FileKind::VerilogSource { .. } => FileType::VerilogSourceFile,
            FileKind::SystemVerilogSource { .. } => FileType::SystemVerilogSourceFile,
            FileKind::XdcConstraint => FileType::XdcConstraintFile,
            FileKind::IpCoreDescription => FileType::IpCoreDescriptionFile,
            FileKind::IpCoreInstantiation => FileType::IpCoreInstantiationFile,
            FileKind::VivadoProject => FileType::VivadoProjectFile,
        }
    }

    /// Returns the content format of this kind.
    pub fn content_type(self) -> ContentType {
        self.file_type().content_type()
    }

    /// Returns `true` for kinds that carry a language revision.
    pub fn has_language_version(self) -> bool {
        matches!(
            self,
            FileKind::VhdlSource { .. }
                | FileKind::VerilogSource { .. }
                | FileKind::SystemVerilogSource { .. }
        )
    }

    /// Returns the VHDL revision for VHDL sources.
    pub fn vhdl_version(self) -> Option<VhdlVersion> {
        match self {
            FileKind::VhdlSource { version } => Some(version),
            _ => None,
        }
    }

    /// Returns the Verilog revision for Verilog sources, when known.
    pub fn verilog_version(self) -> Option<VerilogVersion> {
        match self {
            FileKind::VerilogSource { version } => version,
            _ => None,
        }
    }

    /// Returns the SystemVerilog revision for SystemVerilog sources, when known.
    pub fn system_verilog_version(self) -> Option<SystemVerilogVersion> {
        match self {
            FileKind::SystemVerilogSource { version } => version,
            _ => None,
        }
    }
}

/// A single file in a project.
///
/// Files live in a [`Project`](crate::Project) arena. The owning fileset is
/// recorded as a handle; the owning project is derived from that fileset
/// through [`Project::file_project`](crate::Project::file_project).
#[derive(Debug, Clone, Serialize)]
pub struct File {
    id: FileId,
    path: PathBuf,
    kind: FileKind,
    file_set: Option<FileSetId>,
}

impl File {
    pub(crate) fn new(id: FileId, path: PathBuf, kind: FileKind) -> Self {
        Self {
            id,
            path,
            kind,
            file_set: None,
        }
    }

    /// The handle of this file.
    pub fn id(&self) -> FileId {
        self.id
    }

    /// The path as recorded in the project, relative or absolute.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The concrete kind, including kind-specific attributes.
    pub fn kind(&self) -> FileKind {
        self.kind
    }

    /// The type tag of this file.
    pub fn file_type(&self) -> FileType {
        self.kind.file_type()
    }

    /// The fileset this file was last attached to, if any.
    pub fn file_set(&self) -> Option<FileSetId> {
        self.file_set
    }

    /// Returns `true` if this file passes the given type filter.
    pub fn matches(&self, filter: FileType) -> bool {
        self.file_type().is_subtype_of(filter)
    }

    pub(crate) fn set_file_set(&mut self, file_set: FileSetId) {
        self.file_set = Some(file_set);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::ProjectId;

    fn make_file(kind: FileKind) -> File {
        File::new(FileId::new(ProjectId::fresh(), 0), PathBuf::from("a.vhd"), kind)
    }

    #[test]
    fn kind_maps_to_type() {
        assert_eq!(FileKind::Generic.file_type(), FileType::File);
        assert_eq!(
            FileKind::vhdl(VhdlVersion::Vhdl2008).file_type(),
            FileType::VhdlSourceFile
        );
        assert_eq!(FileKind::XdcConstraint.file_type(), FileType::XdcConstraintFile);
        assert_eq!(
            FileKind::IpCoreInstantiation.content_type(),
            ContentType::Xml
        );
    }

    #[test]
    fn language_version_capability() {
        assert!(FileKind::vhdl(VhdlVersion::Vhdl93).has_language_version());
        assert!(FileKind::VerilogSource { version: None }.has_language_version());
        assert!(!FileKind::XdcConstraint.has_language_version());
        assert_eq!(
            FileKind::vhdl(VhdlVersion::Vhdl2008).vhdl_version(),
            Some(VhdlVersion::Vhdl2008)
        );
        assert_eq!(FileKind::Generic.vhdl_version(), None);
        assert_eq!(
            FileKind::SystemVerilogSource {
                version: Some(SystemVerilogVersion::SystemVerilog2017)
            }
            .system_verilog_version(),
            Some(SystemVerilogVersion::SystemVerilog2017)
        );
    }

    #[test]
    fn new_file_is_detached() {
        let file = make_file(FileKind::Generic);
        assert_eq!(file.file_set(), None);
        assert_eq!(file.path(), Path::new("a.vhd"));
    }

    #[test]
    fn matches_filter() {
        let file = make_file(FileKind::vhdl(VhdlVersion::Vhdl93));
        assert!(file.matches(FileType::Any));
        assert!(file.matches(FileType::HdlSourceFile));
        assert!(!file.matches(FileType::ConstraintFile));
    }
}
