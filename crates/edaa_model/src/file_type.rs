//! The file type taxonomy used to classify and filter project files.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A canonical file type tag.
///
/// The taxonomy is closed: every concrete kind of file in a project maps to
/// exactly one tag, and tags form a single-inheritance hierarchy rooted at
/// [`FileType::File`]. [`FileType::Any`] is a wildcard that every tag is a
/// subtype of, used as the "no filter" value during traversal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum FileType {
    /// Wildcard matching every other tag.
    Any,
    /// A file with no further classification.
    File,
    /// Any kind of source code.
    SourceFile,
    /// Hardware description language source code.
    HdlSourceFile,
    /// VHDL source code.
    VhdlSourceFile,
    /// Verilog source code.
    VerilogSourceFile,
    /// SystemVerilog source code.
    SystemVerilogSourceFile,
    /// Any kind of design constraint file.
    ConstraintFile,
    /// Xilinx Design Constraints (`*.xdc`).
    XdcConstraintFile,
    /// A generic XML document.
    XmlFile,
    /// An IP core description (`*.xml` component descriptions).
    IpCoreDescriptionFile,
    /// A Vivado IP core instantiation (`*.xci`).
    IpCoreInstantiationFile,
    /// A tool project file.
    ProjectFile,
    /// A Vivado project file (`*.xpr`).
    VivadoProjectFile,
}

/// The format of a file's content, independent of its role in the project.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ContentType {
    /// The content format is not known.
    Unknown,
    /// Plain text, e.g. HDL sources.
    Text,
    /// Synopsys Design Constraints (TCL-derived) text, including XDC.
    Sdc,
    /// An XML document.
    Xml,
}

impl FileType {
    /// Every tag, wildcard first.
    pub const ALL: &'static [FileType] = &[
        FileType::Any,
        FileType::File,
        FileType::SourceFile,
        FileType::HdlSourceFile,
        FileType::VhdlSourceFile,
        FileType::VerilogSourceFile,
        FileType::SystemVerilogSourceFile,
        FileType::ConstraintFile,
        FileType::XdcConstraintFile,
        FileType::XmlFile,
        FileType::IpCoreDescriptionFile,
        FileType::IpCoreInstantiationFile,
        FileType::ProjectFile,
        FileType::VivadoProjectFile,
    ];

    /// Returns the canonical name of this tag.
    pub fn name(self) -> &'static str {
        match self {
            FileType::Any => "Any",
            FileType::File => "File",
            FileType::SourceFile => "SourceFile",
            FileType::HdlSourceFile => "HDLSourceFile",
            FileType::VhdlSourceFile => "VHDLSourceFile",
            FileType::VerilogSourceFile => "VerilogSourceFile",
            FileType::SystemVerilogSourceFile => "SystemVerilogSourceFile",
            FileType::ConstraintFile => "ConstraintFile",
            FileType::XdcConstraintFile => "XDCConstraintFile",
            FileType::XmlFile => "XMLFile",
            FileType::IpCoreDescriptionFile => "IPCoreDescriptionFile",
            FileType::IpCoreInstantiationFile => "IPCoreInstantiationFile",
            FileType::ProjectFile => "ProjectFile",
            FileType::VivadoProjectFile => "VivadoProjectFile",
        }
    }

    /// Looks up a tag by its canonical name.
    pub fn from_name(name: &str) -> Option<FileType> {
        Self::ALL.iter().copied().find(|t| t.name() == name)
    }

    /// Returns the direct supertype, or `None` for [`FileType::Any`].
    pub fn parent(self) -> Option<FileType> {
        match self {
            FileType::Any => None,
            FileType::File => Some(FileType::Any),
            FileType::SourceFile
            | FileType::ConstraintFile
            | FileType::XmlFile
            | FileType::ProjectFile => Some(FileType::File),
            FileType::HdlSourceFile => Some(FileType::SourceFile),
            FileType::VhdlSourceFile
            | FileType::VerilogSourceFile
            | FileType::SystemVerilogSourceFile => Some(FileType::HdlSourceFile),
            FileType::XdcConstraintFile => Some(FileType::ConstraintFile),
            FileType::IpCoreDescriptionFile | FileType::IpCoreInstantiationFile => {
                Some(FileType::XmlFile)
            }
            FileType::VivadoProjectFile => Some(FileType::ProjectFile),
        }
    }

    /// Iterates this tag followed by each of its supertypes up to [`FileType::Any`].
    pub fn ancestors(self) -> impl Iterator<Item = FileType> {
        std::iter::successors(Some(self), |t| t.parent())
    }

    /// Returns `true` if `self` is `target`, a subtype of `target`, or `target` is the wildcard.
    pub fn is_subtype_of(self, target: FileType) -> bool {
        target == FileType::Any || self.ancestors().any(|t| t == target)
    }

    /// Returns the content format shared by every file of this tag.
    pub fn content_type(self) -> ContentType {
        match self {
            FileType::VhdlSourceFile
            | FileType::VerilogSourceFile
            | FileType::SystemVerilogSourceFile => ContentType::Text,
            FileType::XdcConstraintFile => ContentType::Sdc,
            FileType::XmlFile
            | FileType::IpCoreDescriptionFile
            | FileType::IpCoreInstantiationFile
            | FileType::VivadoProjectFile => ContentType::Xml,
            _ => ContentType::Unknown,
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error type for parsing file type names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown file type '{input}'")]
pub struct ParseFileTypeError {
    /// The name that failed to resolve.
    pub input: String,
}

impl FromStr for FileType {
    type Err = ParseFileTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseFileTypeError {
            input: s.to_string(),
        })
    }
}
