//! Error types for importing Vivado project files.

use edaa_model::ModelError;
use std::path::PathBuf;

/// Errors that can occur while importing a Vivado project.
///
/// No partially built project is returned alongside any of these.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// The project file does not exist.
    #[error("project file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file exists but could not be opened or read.
    #[error("couldn't open '{}': {source}", .path.display())]
    Io {
        /// The file that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The content is not well-formed XML.
    #[error("malformed project file: {0}")]
    Malformed(String),

    /// A structurally required element is absent.
    #[error("missing <{element}> element in <{parent}>")]
    MissingElement {
        /// The element that was expected.
        element: &'static str,
        /// The element that should have contained it.
        parent: String,
    },

    /// A structurally required attribute is absent.
    #[error("<{element}> element is missing the '{attribute}' attribute")]
    MissingAttribute {
        /// The element lacking the attribute.
        element: &'static str,
        /// The attribute that was expected.
        attribute: &'static str,
    },

    /// Import options could not be parsed.
    #[error("invalid import options: {0}")]
    Options(String),

    /// Building the project model violated a model invariant.
    #[error(transparent)]
    Model(#[from] ModelError),
}
