//! Serializable report views over an imported project.
//!
//! Both subcommands build one of these views first and then render it as
//! text or JSON, so the two formats always carry the same data.

use std::io::{self, Write};

use edaa_model::{File, FileKind, FileSetId, FileType, ModelError, Project};
use serde::Serialize;

use crate::ReportFormat;

/// One row of `edaa files`.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct FileRow {
    /// Path as recorded in the project.
    pub path: String,
    /// Name of the file's type in the taxonomy.
    pub file_type: &'static str,
    /// Language revision, for HDL sources that record one.
    pub version: Option<String>,
    /// Name of the owning fileset.
    pub file_set: Option<String>,
}

/// A fileset and its nested filesets, for `edaa summary`.
#[derive(Debug, Serialize)]
pub struct FileSetSummary {
    /// Fileset name, unique among its siblings.
    pub name: String,
    /// Files owned directly by this fileset.
    pub files: usize,
    /// Nested filesets in insertion order.
    pub children: Vec<FileSetSummary>,
}

/// A registered VHDL library, for `edaa summary`.
#[derive(Debug, Serialize)]
pub struct LibrarySummary {
    /// Library name.
    pub name: String,
    /// Number of files compiled into the library.
    pub files: usize,
    /// VHDL revision of the library, when one is set.
    pub vhdl_version: Option<String>,
}

/// The report printed by `edaa summary`.
#[derive(Debug, Serialize)]
pub struct ProjectSummary {
    /// Project name.
    pub name: String,
    /// Directory relative file paths are resolved against.
    pub root_directory: Option<String>,
    /// Name of the default fileset.
    pub default_file_set: String,
    /// Number of files in the project, attached or not.
    pub file_count: usize,
    /// Top-level filesets in registration order.
    pub file_sets: Vec<FileSetSummary>,
    /// Registered VHDL libraries in registration order.
    pub vhdl_libraries: Vec<LibrarySummary>,
    /// Libraries referenced but provided outside the project.
    pub external_vhdl_libraries: Vec<String>,
}

/// Collects the files selected by `filter` and an optional fileset name.
///
/// The name is looked up among the top-level filesets first and then among
/// the children of the default fileset, where imported filesets live.
pub fn select_files(
    project: &Project,
    filter: FileType,
    file_set: Option<&str>,
) -> Result<Vec<FileRow>, ModelError> {
    let files: Vec<&File> = match file_set {
        None => project.files(filter, None)?.collect(),
        Some(name) if project.file_set_by_name(name).is_some() => {
            project.files(filter, Some(name.into()))?.collect()
        }
        Some(name) => {
            let default = project.default_file_set().id();
            project
                .file_set_files(default, filter, Some(name.into()))?
                .collect()
        }
    };
    Ok(files.into_iter().map(|f| file_row(project, f)).collect())
}

fn file_row(project: &Project, file: &File) -> FileRow {
    FileRow {
        path: file.path().display().to_string(),
        file_type: file.file_type().name(),
        version: language_version(file.kind()),
        file_set: file
            .file_set()
            .and_then(|id| project.file_set(id))
            .map(|set| set.name().to_string()),
    }
}

fn language_version(kind: FileKind) -> Option<String> {
    kind.vhdl_version()
        .map(|v| v.to_string())
        .or_else(|| kind.verilog_version().map(|v| v.to_string()))
        .or_else(|| kind.system_verilog_version().map(|v| v.to_string()))
}

/// Builds the summary view of a project.
pub fn summarize(project: &Project) -> ProjectSummary {
    ProjectSummary {
        name: project.name().to_string(),
        root_directory: project.root_directory().map(|p| p.display().to_string()),
        default_file_set: project.default_file_set().name().to_string(),
        file_count: project.file_count(),
        file_sets: project
            .file_sets()
            .map(|set| summarize_file_set(project, set.id()))
            .collect(),
        vhdl_libraries: project
            .vhdl_libraries()
            .map(|lib| LibrarySummary {
                name: lib.name().to_string(),
                files: lib.files().len(),
                vhdl_version: lib.vhdl_version().map(|v| v.to_string()),
            })
            .collect(),
        external_vhdl_libraries: project.external_vhdl_libraries().to_vec(),
    }
}

fn summarize_file_set(project: &Project, id: FileSetId) -> FileSetSummary {
    match project.file_set(id) {
        Some(set) => FileSetSummary {
            name: set.name().to_string(),
            files: set.files().len(),
            children: set
                .children()
                .values()
                .map(|&child| summarize_file_set(project, child))
                .collect(),
        },
        None => FileSetSummary {
            name: String::new(),
            files: 0,
            children: Vec::new(),
        },
    }
}

/// Writes the rows of `edaa files`.
pub fn write_files(out: &mut impl Write, rows: &[FileRow], format: ReportFormat) -> io::Result<()> {
    match format {
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, rows)?;
            writeln!(out)
        }
        ReportFormat::Text => {
            for row in rows {
                writeln!(
                    out,
                    "{:<12} {:<22} {:<10} {}",
                    row.file_set.as_deref().unwrap_or("-"),
                    row.file_type,
                    row.version.as_deref().unwrap_or("-"),
                    row.path
                )?;
            }
            Ok(())
        }
    }
}

/// Writes the report of `edaa summary`.
pub fn write_summary(
    out: &mut impl Write,
    summary: &ProjectSummary,
    format: ReportFormat,
) -> io::Result<()> {
    match format {
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, summary)?;
            writeln!(out)
        }
        ReportFormat::Text => {
            writeln!(out, "project: {}", summary.name)?;
            if let Some(root) = &summary.root_directory {
                writeln!(out, "root:    {root}")?;
            }
            writeln!(out, "files:   {}", summary.file_count)?;
            writeln!(out, "filesets (default: {}):", summary.default_file_set)?;
            for set in &summary.file_sets {
                write_file_set(out, set, 1)?;
            }
            if !summary.vhdl_libraries.is_empty() {
                writeln!(out, "VHDL libraries:")?;
                for lib in &summary.vhdl_libraries {
                    match &lib.vhdl_version {
                        Some(version) => {
                            writeln!(out, "  {} ({} files, {version})", lib.name, lib.files)?
                        }
                        None => writeln!(out, "  {} ({} files)", lib.name, lib.files)?,
                    }
                }
            }
            if !summary.external_vhdl_libraries.is_empty() {
                writeln!(
                    out,
                    "external VHDL libraries: {}",
                    summary.external_vhdl_libraries.join(", ")
                )?;
            }
            Ok(())
        }
    }
}

fn write_file_set(out: &mut impl Write, set: &FileSetSummary, depth: usize) -> io::Result<()> {
    writeln!(
        out,
        "{:indent$}{} ({} files)",
        "",
        set.name,
        set.files,
        indent = depth * 2
    )?;
    for child in &set.children {
        write_file_set(out, child, depth + 1)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use edaa_model::{VhdlVersion, DEFAULT_FILE_SET_NAME};

    fn nested_project() -> Project {
        let mut project = Project::new("blinky");
        let default = project.default_file_set().id();
        let sources = project.new_file_set("sources_1");
        project.add_child_file_set(default, sources).unwrap();
        project
            .new_file_in(sources, "top.vhd", FileKind::vhdl(VhdlVersion::Vhdl2008))
            .unwrap();
        project
            .new_file_in(sources, "pins.xdc", FileKind::XdcConstraint)
            .unwrap();
        let sim = project.new_file_set("sim_1");
        project.add_child_file_set(default, sim).unwrap();
        project
            .new_file_in(sim, "tb.vhd", FileKind::vhdl(VhdlVersion::Vhdl93))
            .unwrap();
        project
    }

    #[test]
    fn select_all_files() {
        let project = nested_project();
        let rows = select_files(&project, FileType::Any, None).unwrap();
        let paths: Vec<_> = rows.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["top.vhd", "pins.xdc", "tb.vhd"]);
        assert_eq!(rows[0].version.as_deref(), Some("VHDL'08"));
        assert_eq!(rows[1].version, None);
        assert_eq!(rows[2].file_set.as_deref(), Some("sim_1"));
    }

    #[test]
    fn select_nested_file_set_by_name() {
        let project = nested_project();
        let rows = select_files(&project, FileType::VhdlSourceFile, Some("sim_1")).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].path, "tb.vhd");
    }

    #[test]
    fn select_top_level_file_set_by_name() {
        let project = nested_project();
        let rows = select_files(&project, FileType::ConstraintFile, Some(DEFAULT_FILE_SET_NAME))
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].file_type, "XDCConstraintFile");
    }

    #[test]
    fn select_unknown_file_set_fails() {
        let project = nested_project();
        let err = select_files(&project, FileType::Any, Some("impl_1")).unwrap_err();
        assert!(matches!(err, ModelError::UnknownFileSet { .. }));
    }

    #[test]
    fn summary_nests_file_sets() {
        let project = nested_project();
        let summary = summarize(&project);
        assert_eq!(summary.file_count, 3);
        assert_eq!(summary.file_sets.len(), 1);
        let default = &summary.file_sets[0];
        assert_eq!(default.name, DEFAULT_FILE_SET_NAME);
        assert_eq!(default.files, 0);
        assert_eq!(default.children.len(), 2);
        assert_eq!(default.children[0].files, 2);
    }

    #[test]
    fn text_summary_output() {
        let project = nested_project();
        let mut out = Vec::new();
        write_summary(&mut out, &summarize(&project), ReportFormat::Text).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("project: blinky"));
        assert!(text.contains("  default (0 files)"));
        assert!(text.contains("    sources_1 (2 files)"));
    }

    #[test]
    fn library_version_in_summary() {
        let mut project = nested_project();
        let lib = project.vhdl_library_or_insert("work");
        project
            .set_vhdl_library_version(lib, Some(VhdlVersion::Vhdl2008))
            .unwrap();
        project.vhdl_library_or_insert("unversioned");

        let summary = summarize(&project);
        assert_eq!(summary.vhdl_libraries[0].vhdl_version.as_deref(), Some("VHDL'08"));
        assert_eq!(summary.vhdl_libraries[1].vhdl_version, None);

        let mut out = Vec::new();
        write_summary(&mut out, &summary, ReportFormat::Text).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("  work (0 files, VHDL'08)"));
        assert!(text.contains("  unversioned (0 files)"));
    }

    #[test]
    fn json_files_output() {
        let project = nested_project();
        let rows = select_files(&project, FileType::Any, Some("sources_1")).unwrap();
        let mut out = Vec::new();
        write_files(&mut out, &rows, ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["path"], "top.vhd");
        assert_eq!(value[0]["file_type"], "VHDLSourceFile");
        assert_eq!(value[1]["version"], serde_json::Value::Null);
    }
}
