//! Import options and their TOML loader.

use crate::error::ImportError;
use serde::Deserialize;
use std::path::Path;

/// How `<FileSet>` elements of the project file are placed in the model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileSetLayout {
    /// Every imported fileset becomes a child of the project's default
    /// fileset, so the default fileset's traversal yields all files.
    #[default]
    Nested,
    /// Every imported fileset is registered as a top-level fileset of the project.
    TopLevel,
}

/// Options controlling how a project file is interpreted.
///
/// All fields are optional in TOML; missing fields take the defaults.
///
/// ```toml
/// file_set_layout = "top_level"
/// strip_root_alias = true
/// read_libraries = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImportOptions {
    /// Placement of imported filesets.
    pub file_set_layout: FileSetLayout,
    /// Drop the first segment (e.g. `$PSRCDIR`) of every recorded file path.
    pub strip_root_alias: bool,
    /// Assign VHDL files to the library named in their `FileInfo`.
    pub read_libraries: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            file_set_layout: FileSetLayout::Nested,
            strip_root_alias: true,
            read_libraries: true,
        }
    }
}

/// Loads import options from a TOML file.
pub fn load_options(path: &Path) -> Result<ImportOptions, ImportError> {
    let content = std::fs::read_to_string(path).map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_options_from_str(&content)
}

/// Parses import options from a TOML string.
pub fn load_options_from_str(content: &str) -> Result<ImportOptions, ImportError> {
    toml::from_str(content).map_err(|e| ImportError::Options(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let options = load_options_from_str("").unwrap();
        assert_eq!(options, ImportOptions::default());
        assert_eq!(options.file_set_layout, FileSetLayout::Nested);
        assert!(options.strip_root_alias);
        assert!(options.read_libraries);
    }

    #[test]
    fn all_fields() {
        let toml = r#"
file_set_layout = "top_level"
strip_root_alias = false
read_libraries = false
"#;
        let options = load_options_from_str(toml).unwrap();
        assert_eq!(options.file_set_layout, FileSetLayout::TopLevel);
        assert!(!options.strip_root_alias);
        assert!(!options.read_libraries);
    }

    #[test]
    fn layout_variants() {
        for (input, expected) in [
            ("nested", FileSetLayout::Nested),
            ("top_level", FileSetLayout::TopLevel),
        ] {
            let toml = format!("file_set_layout = \"{input}\"");
            let options = load_options_from_str(&toml).unwrap();
            assert_eq!(options.file_set_layout, expected);
        }
    }

    #[test]
    fn unknown_field_errors() {
        let err = load_options_from_str("layout = \"nested\"").unwrap_err();
        assert!(matches!(err, ImportError::Options(_)));
    }

    #[test]
    fn invalid_toml_errors() {
        let err = load_options_from_str("this is not valid toml {{{}}}").unwrap_err();
        assert!(matches!(err, ImportError::Options(_)));
    }

    #[test]
    fn io_error_from_nonexistent_file() {
        let err = load_options(Path::new("/nonexistent/dir/edaa.toml")).unwrap_err();
        assert!(matches!(err, ImportError::Io { .. }));
    }

    #[test]
    fn load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("edaa.toml");
        std::fs::write(&path, "read_libraries = false\n").unwrap();
        let options = load_options(&path).unwrap();
        assert!(!options.read_libraries);
        assert!(options.strip_root_alias);
    }
}
