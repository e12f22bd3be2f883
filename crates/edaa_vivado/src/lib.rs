//! Importer for Xilinx Vivado project files (`*.xpr`).
//!
//! [`parse`] reads a project file and builds an [`edaa_model::Project`]:
//! every `<FileSet>` becomes a fileset and every `<File>` a typed file,
//! classified by extension. VHDL sources pick up their language revision
//! and, optionally, their library from the `<FileInfo>` element.

#![warn(missing_docs)]

pub mod error;
pub mod importer;
pub mod options;
mod xml;

pub use error::ImportError;
pub use importer::{parse, parse_str, parse_with};
pub use options::{load_options, load_options_from_str, FileSetLayout, ImportOptions};
