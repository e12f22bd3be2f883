//! The project aggregate: owner of every fileset, file and VHDL library.

use crate::error::ModelError;
use crate::file::{File, FileKind};
use crate::file_set::{FileSet, FileSetRef};
use crate::file_type::FileType;
use crate::id::{FileId, FileSetId, ProjectId, VhdlLibraryId};
use crate::library::VhdlLibrary;
use crate::traverse::Files;
use crate::version::VhdlVersion;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// Name of the fileset every project starts with.
pub const DEFAULT_FILE_SET_NAME: &str = "default";

/// An EDA tool project.
///
/// The project owns all of its entities in index arenas and hands out
/// [`FileId`], [`FileSetId`] and [`VhdlLibraryId`] handles. Allocation in
/// the arena is separate from attachment: a fileset may exist in the arena
/// without being registered, and a file may exist without a fileset.
///
/// A freshly created project always has one registered fileset named
/// [`DEFAULT_FILE_SET_NAME`], designated as the default fileset.
///
/// Projects are not `Clone`: a copy would share the [`ProjectId`] and accept
/// the other copy's handles.
#[derive(Debug)]
pub struct Project {
    id: ProjectId,
    name: String,
    root_directory: Option<PathBuf>,
    file_arena: Vec<File>,
    file_set_arena: Vec<FileSet>,
    library_arena: Vec<VhdlLibrary>,
    file_sets: IndexMap<String, FileSetId>,
    default_file_set: FileSetId,
    vhdl_libraries: IndexMap<String, VhdlLibraryId>,
    external_vhdl_libraries: Vec<String>,
}

impl Project {
    /// Creates a project with a registered `default` fileset.
    pub fn new(name: impl Into<String>) -> Self {
        let id = ProjectId::fresh();
        let default_file_set = FileSetId::new(id, 0);
        let mut default = FileSet::new(default_file_set, DEFAULT_FILE_SET_NAME.to_string());
        default.set_project(Some(id));

        let mut file_sets = IndexMap::new();
        file_sets.insert(DEFAULT_FILE_SET_NAME.to_string(), default_file_set);

        Self {
            id,
            name: name.into(),
            root_directory: None,
            file_arena: Vec::new(),
            file_set_arena: vec![default],
            library_arena: Vec::new(),
            file_sets,
            default_file_set,
            vhdl_libraries: IndexMap::new(),
            external_vhdl_libraries: Vec::new(),
        }
    }

    /// Sets the root directory, builder style.
    pub fn with_root_directory(mut self, root: impl Into<PathBuf>) -> Self {
        self.root_directory = Some(root.into());
        self
    }

    /// The process-unique id of this project.
    pub fn id(&self) -> ProjectId {
        self.id
    }

    /// The project name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The directory relative file paths are resolved against.
    pub fn root_directory(&self) -> Option<&Path> {
        self.root_directory.as_deref()
    }

    /// Replaces the root directory.
    pub fn set_root_directory(&mut self, root: Option<PathBuf>) {
        self.root_directory = root;
    }

    // ------------------------------------------------------------------
    // Files
    // ------------------------------------------------------------------

    /// Creates a file attached to the default fileset.
    pub fn new_file(&mut self, path: impl Into<PathBuf>, kind: FileKind) -> FileId {
        let id = self.alloc_file(path.into(), kind);
        self.attach(id, self.default_file_set);
        id
    }

    /// Creates a file attached to `file_set`.
    ///
    /// The file's project is derived from the fileset, so it has none while
    /// the fileset itself is unattached.
    pub fn new_file_in(
        &mut self,
        file_set: FileSetId,
        path: impl Into<PathBuf>,
        kind: FileKind,
    ) -> Result<FileId, ModelError> {
        self.check_file_set(file_set)?;
        let id = self.alloc_file(path.into(), kind);
        self.attach(id, file_set);
        Ok(id)
    }

    /// Creates a file that belongs to no fileset.
    pub fn new_detached_file(&mut self, path: impl Into<PathBuf>, kind: FileKind) -> FileId {
        self.alloc_file(path.into(), kind)
    }

    /// Appends `file` to `file_set` and records the back-reference.
    ///
    /// The file is not removed from the fileset it was previously attached
    /// to; moving a file this way leaves it listed in both.
    pub fn set_file_set(&mut self, file: FileId, file_set: FileSetId) -> Result<(), ModelError> {
        self.check_file(file)?;
        self.check_file_set(file_set)?;
        self.attach(file, file_set);
        Ok(())
    }

    /// Attaches a detached file to the default fileset.
    pub fn add_file(&mut self, file: FileId) -> Result<(), ModelError> {
        self.check_detached(file)?;
        self.attach(file, self.default_file_set);
        Ok(())
    }

    /// Attaches several detached files to the default fileset.
    ///
    /// All files are validated first; on error none is attached.
    pub fn add_files(&mut self, files: impl IntoIterator<Item = FileId>) -> Result<(), ModelError> {
        let files: Vec<FileId> = files.into_iter().collect();
        for &file in &files {
            self.check_detached(file)?;
        }
        for file in files {
            self.attach(file, self.default_file_set);
        }
        Ok(())
    }

    /// Looks up a file by handle.
    pub fn file(&self, id: FileId) -> Option<&File> {
        if id.project() != self.id {
            return None;
        }
        self.file_arena.get(id.index())
    }

    /// The project a file belongs to, derived from its fileset.
    pub fn file_project(&self, id: FileId) -> Option<ProjectId> {
        let file_set = self.file(id)?.file_set()?;
        self.file_set_entry(file_set).project()
    }

    /// Resolves a file's path against the root directory.
    ///
    /// Absolute paths, and all paths when no root directory is set, are
    /// returned unchanged.
    pub fn absolute_path(&self, id: FileId) -> Result<PathBuf, ModelError> {
        self.check_file(id)?;
        let path = self.file_entry(id).path();
        Ok(match &self.root_directory {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        })
    }

    /// Number of files allocated in this project, attached or not.
    pub fn file_count(&self) -> usize {
        self.file_arena.len()
    }

    // ------------------------------------------------------------------
    // Filesets
    // ------------------------------------------------------------------

    /// Allocates an unattached fileset.
    pub fn new_file_set(&mut self, name: impl Into<String>) -> FileSetId {
        let id = FileSetId::new(self.id, self.file_set_arena.len());
        self.file_set_arena.push(FileSet::new(id, name.into()));
        id
    }

    /// Registers a fileset as a top-level fileset of this project.
    ///
    /// Fails if the fileset is already registered, nested in another
    /// fileset, or if a top-level fileset with the same name exists.
    pub fn add_file_set(&mut self, file_set: FileSetId) -> Result<(), ModelError> {
        self.check_file_set(file_set)?;
        let set = self.file_set_entry(file_set);
        if self.file_sets.values().any(|&id| id == file_set) {
            return Err(ModelError::FileSetAlreadyRegistered(set.name().to_string()));
        }
        if let Some(parent) = set.parent() {
            return Err(ModelError::FileSetAlreadyNested {
                name: set.name().to_string(),
                parent: self.file_set_entry(parent).name().to_string(),
            });
        }
        if self.file_sets.contains_key(set.name()) {
            return Err(ModelError::DuplicateFileSet {
                name: set.name().to_string(),
                scope: self.name.clone(),
            });
        }

        let name = set.name().to_string();
        tracing::trace!(project = %self.name, fileset = %name, "registering fileset");
        self.file_sets.insert(name, file_set);
        self.propagate_project(file_set, Some(self.id));
        Ok(())
    }

    /// Nests `child` inside `parent`.
    ///
    /// The child and its subtree take on the parent's project. Fails on a
    /// duplicate sibling name, if the child is already registered or nested
    /// elsewhere, or if `parent` lies inside `child`.
    pub fn add_child_file_set(
        &mut self,
        parent: FileSetId,
        child: FileSetId,
    ) -> Result<(), ModelError> {
        self.check_file_set(parent)?;
        self.check_file_set(child)?;
        let child_set = self.file_set_entry(child);
        let child_name = child_set.name().to_string();

        if self.file_sets.values().any(|&id| id == child) {
            return Err(ModelError::FileSetAlreadyRegistered(child_name));
        }
        if let Some(current) = child_set.parent() {
            return Err(ModelError::FileSetAlreadyNested {
                name: child_name,
                parent: self.file_set_entry(current).name().to_string(),
            });
        }
        let mut ancestor = Some(parent);
        while let Some(id) = ancestor {
            if id == child {
                return Err(ModelError::FileSetCycle(child_name));
            }
            ancestor = self.file_set_entry(id).parent();
        }
        let parent_set = self.file_set_entry(parent);
        if parent_set.children().contains_key(&child_name) {
            return Err(ModelError::DuplicateFileSet {
                name: child_name,
                scope: parent_set.name().to_string(),
            });
        }

        tracing::trace!(parent = %parent_set.name(), child = %child_name, "nesting fileset");
        let project = parent_set.project();
        self.file_set_arena[parent.index()].insert_child(child_name, child);
        self.file_set_arena[child.index()].set_parent(parent);
        self.propagate_project(child, project);
        Ok(())
    }

    /// Appends a file to a fileset and records the back-reference.
    ///
    /// No duplicate check is made.
    pub fn file_set_add_file(&mut self, file_set: FileSetId, file: FileId) -> Result<(), ModelError> {
        self.set_file_set(file, file_set)
    }

    /// Appends several files to a fileset, validating every handle first.
    pub fn file_set_add_files(
        &mut self,
        file_set: FileSetId,
        files: impl IntoIterator<Item = FileId>,
    ) -> Result<(), ModelError> {
        self.check_file_set(file_set)?;
        let files: Vec<FileId> = files.into_iter().collect();
        for &file in &files {
            self.check_file(file)?;
        }
        for file in files {
            self.attach(file, file_set);
        }
        Ok(())
    }

    /// Looks up a fileset by handle, registered or not.
    pub fn file_set(&self, id: FileSetId) -> Option<&FileSet> {
        if id.project() != self.id {
            return None;
        }
        self.file_set_arena.get(id.index())
    }

    /// Looks up a registered top-level fileset by name.
    pub fn file_set_by_name(&self, name: &str) -> Option<&FileSet> {
        self.file_sets.get(name).map(|&id| self.file_set_entry(id))
    }

    /// Registered top-level filesets in registration order.
    pub fn file_sets(&self) -> impl Iterator<Item = &FileSet> {
        self.file_sets.values().map(|&id| self.file_set_entry(id))
    }

    /// The default fileset.
    pub fn default_file_set(&self) -> &FileSet {
        self.file_set_entry(self.default_file_set)
    }

    /// Selects the default fileset by name or handle.
    ///
    /// The fileset must already be registered as a top-level fileset of
    /// this project; otherwise the current default is kept.
    pub fn set_default_file_set<'a>(
        &mut self,
        file_set: impl Into<FileSetRef<'a>>,
    ) -> Result<(), ModelError> {
        let id = match file_set.into() {
            FileSetRef::Name(name) => {
                *self
                    .file_sets
                    .get(name)
                    .ok_or_else(|| ModelError::UnknownFileSet {
                        requested: name.to_string(),
                        scope: self.name.clone(),
                    })?
            }
            FileSetRef::Id(id) => {
                self.check_file_set(id)?;
                if !self.file_sets.values().any(|&registered| registered == id) {
                    return Err(ModelError::FileSetNotRegistered(
                        self.file_set_entry(id).name().to_string(),
                    ));
                }
                id
            }
        };
        self.default_file_set = id;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Traversal
    // ------------------------------------------------------------------

    /// Traverses the files of every top-level fileset, or of one selected fileset.
    ///
    /// Each top-level fileset is walked with its own recursive traversal
    /// (see [`Files`]). With a `scope`, only that top-level fileset is walked;
    /// an unknown name fails with [`ModelError::UnknownFileSet`].
    pub fn files<'a>(
        &self,
        filter: FileType,
        scope: Option<FileSetRef<'a>>,
    ) -> Result<Files<'_>, ModelError> {
        let roots = match scope {
            None => self.file_sets.values().copied().collect(),
            Some(FileSetRef::Name(name)) => {
                let id = self
                    .file_sets
                    .get(name)
                    .ok_or_else(|| ModelError::UnknownFileSet {
                        requested: name.to_string(),
                        scope: self.name.clone(),
                    })?;
                vec![*id]
            }
            Some(FileSetRef::Id(id)) => {
                self.check_file_set(id)?;
                if !self.file_sets.values().any(|&registered| registered == id) {
                    return Err(ModelError::UnknownFileSet {
                        requested: self.file_set_entry(id).name().to_string(),
                        scope: self.name.clone(),
                    });
                }
                vec![id]
            }
        };
        Ok(Files::new(self, filter, roots))
    }

    /// Traverses the files of a fileset, or of one of its direct children.
    ///
    /// Without a `scope`, child filesets are visited before the fileset's
    /// own files. With a `scope`, only that child's traversal is yielded;
    /// an unknown child fails with [`ModelError::UnknownFileSet`] naming
    /// both the requested child and `file_set`.
    pub fn file_set_files<'a>(
        &self,
        file_set: FileSetId,
        filter: FileType,
        scope: Option<FileSetRef<'a>>,
    ) -> Result<Files<'_>, ModelError> {
        self.check_file_set(file_set)?;
        let set = self.file_set_entry(file_set);
        let root = match scope {
            None => file_set,
            Some(FileSetRef::Name(name)) => {
                *set.children()
                    .get(name)
                    .ok_or_else(|| ModelError::UnknownFileSet {
                        requested: name.to_string(),
                        scope: set.name().to_string(),
                    })?
            }
            Some(FileSetRef::Id(id)) => {
                self.check_file_set(id)?;
                if self.file_set_entry(id).parent() != Some(file_set) {
                    return Err(ModelError::UnknownFileSet {
                        requested: self.file_set_entry(id).name().to_string(),
                        scope: set.name().to_string(),
                    });
                }
                id
            }
        };
        Ok(Files::new(self, filter, vec![root]))
    }

    // ------------------------------------------------------------------
    // VHDL libraries
    // ------------------------------------------------------------------

    /// Allocates an unregistered VHDL library.
    pub fn new_vhdl_library(&mut self, name: impl Into<String>) -> VhdlLibraryId {
        let id = VhdlLibraryId::new(self.id, self.library_arena.len());
        self.library_arena.push(VhdlLibrary::new(id, name.into()));
        id
    }

    /// Registers a VHDL library with this project.
    pub fn add_vhdl_library(&mut self, library: VhdlLibraryId) -> Result<(), ModelError> {
        self.check_library(library)?;
        let name = self.library_arena[library.index()].name().to_string();
        if self.vhdl_libraries.contains_key(&name) {
            return Err(ModelError::DuplicateVhdlLibrary(name));
        }
        self.library_arena[library.index()].set_project(self.id);
        self.vhdl_libraries.insert(name, library);
        Ok(())
    }

    /// Returns the registered library called `name`, creating and registering it if needed.
    pub fn vhdl_library_or_insert(&mut self, name: &str) -> VhdlLibraryId {
        if let Some(&id) = self.vhdl_libraries.get(name) {
            return id;
        }
        let id = self.new_vhdl_library(name);
        self.library_arena[id.index()].set_project(self.id);
        self.vhdl_libraries.insert(name.to_string(), id);
        id
    }

    /// Appends a file to a VHDL library.
    pub fn vhdl_library_add_file(
        &mut self,
        library: VhdlLibraryId,
        file: FileId,
    ) -> Result<(), ModelError> {
        self.check_library(library)?;
        self.check_file(file)?;
        self.library_arena[library.index()].push_file(file);
        Ok(())
    }

    /// Sets or clears the VHDL revision of a library.
    pub fn set_vhdl_library_version(
        &mut self,
        library: VhdlLibraryId,
        version: Option<VhdlVersion>,
    ) -> Result<(), ModelError> {
        self.check_library(library)?;
        self.library_arena[library.index()].set_vhdl_version(version);
        Ok(())
    }

    /// Looks up a VHDL library by handle, registered or not.
    pub fn vhdl_library(&self, id: VhdlLibraryId) -> Option<&VhdlLibrary> {
        if id.project() != self.id {
            return None;
        }
        self.library_arena.get(id.index())
    }

    /// Looks up a registered VHDL library by name.
    pub fn vhdl_library_by_name(&self, name: &str) -> Option<&VhdlLibrary> {
        self.vhdl_libraries
            .get(name)
            .map(|&id| &self.library_arena[id.index()])
    }

    /// Registered VHDL libraries in registration order.
    pub fn vhdl_libraries(&self) -> impl Iterator<Item = &VhdlLibrary> {
        self.vhdl_libraries
            .values()
            .map(|&id| &self.library_arena[id.index()])
    }

    /// Records a reference to a library provided outside the project.
    pub fn add_external_vhdl_library(&mut self, name: impl Into<String>) {
        self.external_vhdl_libraries.push(name.into());
    }

    /// Libraries provided outside the project.
    pub fn external_vhdl_libraries(&self) -> &[String] {
        &self.external_vhdl_libraries
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    pub(crate) fn file_entry(&self, id: FileId) -> &File {
        &self.file_arena[id.index()]
    }

    pub(crate) fn file_set_entry(&self, id: FileSetId) -> &FileSet {
        &self.file_set_arena[id.index()]
    }

    fn alloc_file(&mut self, path: PathBuf, kind: FileKind) -> FileId {
        let id = FileId::new(self.id, self.file_arena.len());
        self.file_arena.push(File::new(id, path, kind));
        id
    }

    fn attach(&mut self, file: FileId, file_set: FileSetId) {
        self.file_set_arena[file_set.index()].push_file(file);
        self.file_arena[file.index()].set_file_set(file_set);
    }

    fn propagate_project(&mut self, root: FileSetId, project: Option<ProjectId>) {
        let mut pending = vec![root];
        while let Some(id) = pending.pop() {
            let set = &mut self.file_set_arena[id.index()];
            set.set_project(project);
            pending.extend(set.children().values().copied());
        }
    }

    fn check_detached(&self, file: FileId) -> Result<(), ModelError> {
        self.check_file(file)?;
        let entry = self.file_entry(file);
        match entry.file_set() {
            Some(file_set) => Err(ModelError::FileAlreadyAttached {
                path: entry.path().to_path_buf(),
                file_set: self.file_set_entry(file_set).name().to_string(),
            }),
            None => Ok(()),
        }
    }

    fn check_file(&self, id: FileId) -> Result<(), ModelError> {
        self.check_handle(FileId::KIND, id.project(), id.index(), self.file_arena.len())
    }

    fn check_file_set(&self, id: FileSetId) -> Result<(), ModelError> {
        self.check_handle(
            FileSetId::KIND,
            id.project(),
            id.index(),
            self.file_set_arena.len(),
        )
    }

    fn check_library(&self, id: VhdlLibraryId) -> Result<(), ModelError> {
        self.check_handle(
            VhdlLibraryId::KIND,
            id.project(),
            id.index(),
            self.library_arena.len(),
        )
    }

    fn check_handle(
        &self,
        kind: &'static str,
        project: ProjectId,
        index: usize,
        len: usize,
    ) -> Result<(), ModelError> {
        if project == self.id && index < len {
            Ok(())
        } else {
            Err(ModelError::ForeignHandle {
                kind,
                index,
                project: self.name.clone(),
            })
        }
    }
}
