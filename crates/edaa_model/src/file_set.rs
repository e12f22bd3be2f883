//! Named, ordered containers of files and nested filesets.

use crate::id::{FileId, FileSetId, ProjectId};
use indexmap::IndexMap;
use serde::Serialize;

/// A named container of files and nested child filesets.
///
/// Files keep their insertion order. Child filesets are keyed by name and
/// traversed in the order they were added.
#[derive(Debug, Clone, Serialize)]
pub struct FileSet {
    id: FileSetId,
    name: String,
    project: Option<ProjectId>,
    parent: Option<FileSetId>,
    children: IndexMap<String, FileSetId>,
    files: Vec<FileId>,
}

impl FileSet {
    pub(crate) fn new(id: FileSetId, name: String) -> Self {
        Self {
            id,
            name,
            project: None,
            parent: None,
            children: IndexMap::new(),
            files: Vec::new(),
        }
    }

    /// The handle of this fileset.
    pub fn id(&self) -> FileSetId {
        self.id
    }

    /// The fileset name, unique among its siblings.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The project this fileset is attached to, if any.
    pub fn project(&self) -> Option<ProjectId> {
        self.project
    }

    /// The enclosing fileset when this one is nested.
    pub fn parent(&self) -> Option<FileSetId> {
        self.parent
    }

    /// Direct child filesets by name, in insertion order.
    pub fn children(&self) -> &IndexMap<String, FileSetId> {
        &self.children
    }

    /// Files held directly by this fileset, in insertion order.
    pub fn files(&self) -> &[FileId] {
        &self.files
    }

    pub(crate) fn set_project(&mut self, project: Option<ProjectId>) {
        self.project = project;
    }

    pub(crate) fn set_parent(&mut self, parent: FileSetId) {
        self.parent = Some(parent);
    }

    pub(crate) fn push_file(&mut self, file: FileId) {
        self.files.push(file);
    }

    pub(crate) fn insert_child(&mut self, name: String, child: FileSetId) {
        self.children.insert(name, child);
    }
}

/// Names a fileset either by name or by handle.
///
/// Used wherever an operation accepts "a fileset name or a fileset", such as
/// scoped traversal and selecting the default fileset.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FileSetRef<'a> {
    /// Look the fileset up by name in the relevant scope.
    Name(&'a str),
    /// Refer to the fileset directly.
    Id(FileSetId),
}

impl<'a> From<&'a str> for FileSetRef<'a> {
    fn from(name: &'a str) -> Self {
        FileSetRef::Name(name)
    }
}

impl From<FileSetId> for FileSetRef<'_> {
    fn from(id: FileSetId) -> Self {
        FileSetRef::Id(id)
    }
}
