//! Translation of a Vivado project document into a [`Project`].

use crate::error::ImportError;
use crate::options::{FileSetLayout, ImportOptions};
use crate::xml::{self, Element};
use edaa_model::{FileKind, FileSetId, Project, VhdlVersion};
use std::path::{Component, Path, PathBuf};

/// `SFType` value marking a VHDL-2008 source.
const SF_TYPE_VHDL2008: &str = "VHDL2008";

/// `Attr` name carrying the VHDL library of a source.
const LIBRARY_ATTR: &str = "Library";

/// Imports a Vivado project file with default options.
///
/// The project is named after the file stem and rooted at the file's directory.
pub fn parse(path: &Path) -> Result<Project, ImportError> {
    parse_with(path, &ImportOptions::default())
}

/// Imports a Vivado project file with explicit options.
pub fn parse_with(path: &Path, options: &ImportOptions) -> Result<Project, ImportError> {
    if !path.exists() {
        return Err(ImportError::NotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path).map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let root_directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    tracing::debug!(path = %path.display(), "reading Vivado project");
    parse_str(&name, Some(root_directory), &content, options)
}

/// Imports a Vivado project from an in-memory document.
///
/// Useful for testing without filesystem dependencies.
pub fn parse_str(
    name: &str,
    root_directory: Option<PathBuf>,
    content: &str,
    options: &ImportOptions,
) -> Result<Project, ImportError> {
    let root = xml::parse_document(content)?;
    let mut project = Project::new(name);
    project.set_root_directory(root_directory);

    let mut importer = XprImporter {
        project: &mut project,
        options,
    };
    importer.import_root(&root)?;

    tracing::info!(
        project = %project.name(),
        files = project.file_count(),
        libraries = project.vhdl_libraries().count(),
        "imported Vivado project"
    );
    Ok(project)
}

/// Walks the element tree and populates the project.
struct XprImporter<'a> {
    project: &'a mut Project,
    options: &'a ImportOptions,
}

impl XprImporter<'_> {
    fn import_root(&mut self, root: &Element) -> Result<(), ImportError> {
        let file_sets = root
            .child("FileSets")
            .ok_or_else(|| ImportError::MissingElement {
                element: "FileSets",
                parent: root.name.clone(),
            })?;

        for node in &file_sets.children {
            if node.name == "FileSet" {
                self.import_file_set(node)?;
            } else {
                tracing::warn!(element = %node.name, "skipping unexpected element in <FileSets>");
            }
        }
        Ok(())
    }

    fn import_file_set(&mut self, node: &Element) -> Result<(), ImportError> {
        let name = node
            .attribute("Name")
            .ok_or(ImportError::MissingAttribute {
                element: "FileSet",
                attribute: "Name",
            })?;

        let file_set = self.project.new_file_set(name);
        match self.options.file_set_layout {
            FileSetLayout::Nested => {
                let default = self.project.default_file_set().id();
                self.project.add_child_file_set(default, file_set)?;
            }
            FileSetLayout::TopLevel => self.project.add_file_set(file_set)?,
        }
        tracing::debug!(fileset = %name, "imported fileset");

        for file in node.children_named("File") {
            self.import_file(file, file_set)?;
        }
        Ok(())
    }

    fn import_file(&mut self, node: &Element, file_set: FileSetId) -> Result<(), ImportError> {
        let recorded = node.attribute("Path").ok_or(ImportError::MissingAttribute {
            element: "File",
            attribute: "Path",
        })?;
        let recorded = Path::new(recorded);
        let path = if self.options.strip_root_alias {
            strip_root_alias(recorded)
        } else {
            recorded.to_path_buf()
        };

        let kind = match recorded.extension().and_then(|e| e.to_str()) {
            Some("vhd" | "vhdl") => FileKind::vhdl(vhdl_version(node)),
            Some("xdc") => FileKind::XdcConstraint,
            Some("v") => FileKind::VerilogSource { version: None },
            Some("xci") => FileKind::IpCoreInstantiation,
            _ => FileKind::Generic,
        };

        tracing::debug!(path = %path.display(), kind = %kind.file_type(), "imported file");
        let file = self.project.new_file_in(file_set, path, kind)?;

        if self.options.read_libraries && kind.vhdl_version().is_some() {
            if let Some(library) = library_name(node) {
                let library = self.project.vhdl_library_or_insert(library);
                self.project.vhdl_library_add_file(library, file)?;
            }
        }
        Ok(())
    }
}

/// VHDL-2008 when the first child is `<FileInfo SFType="VHDL2008">`, VHDL-93 otherwise.
fn vhdl_version(node: &Element) -> VhdlVersion {
    match node.first_child() {
        Some(info)
            if info.name == "FileInfo" && info.attribute("SFType") == Some(SF_TYPE_VHDL2008) =>
        {
            VhdlVersion::Vhdl2008
        }
        _ => VhdlVersion::Vhdl93,
    }
}

/// The value of `<FileInfo><Attr Name="Library" Val="…"/></FileInfo>`, if present.
fn library_name(node: &Element) -> Option<&str> {
    node.child("FileInfo")?
        .children_named("Attr")
        .find(|attr| attr.attribute("Name") == Some(LIBRARY_ATTR))?
        .attribute("Val")
}

/// Removes the first path segment, which Vivado uses for a symbolic root such as `$PSRCDIR`.
///
/// A leading `.` is not a segment.
fn strip_root_alias(path: &Path) -> PathBuf {
    let stripped: PathBuf = path
        .components()
        .skip_while(|c| matches!(c, Component::CurDir))
        .skip(1)
        .map(Component::as_os_str)
        .collect();
    if stripped.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        stripped
    }
}
