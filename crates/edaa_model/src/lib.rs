//! An abstract model of EDA tool projects.
//!
//! A [`Project`] owns filesets, files and VHDL libraries and hands out
//! opaque handles to them. Files are classified by a closed [`FileType`]
//! taxonomy and carry a concrete [`FileKind`]; filesets nest and can be
//! traversed lazily with a type filter through [`Files`].

#![warn(missing_docs)]

pub mod error;
pub mod file;
pub mod file_set;
pub mod file_type;
pub mod id;
pub mod library;
pub mod project;
pub mod traverse;
pub mod version;

pub use error::ModelError;
pub use file::{File, FileKind};
pub use file_set::{FileSet, FileSetRef};
pub use file_type::{ContentType, FileType, ParseFileTypeError};
pub use id::{FileId, FileSetId, ProjectId, VhdlLibraryId};
pub use library::VhdlLibrary;
pub use project::{Project, DEFAULT_FILE_SET_NAME};
pub use traverse::Files;
pub use version::{ParseVersionError, SystemVerilogVersion, VerilogVersion, VhdlVersion};
