//! Lazy, type-filtered traversal over filesets.

use crate::file::File;
use crate::file_type::FileType;
use crate::id::FileSetId;
use crate::project::Project;
use std::iter::FusedIterator;

/// A single-pass iterator over the files of one or more filesets.
///
/// For each root fileset the iterator first descends into every child
/// fileset (depth-first, in insertion order) and only then yields the
/// fileset's own files, so nested files precede their container's files.
/// Only files whose type is a subtype of the filter are yielded.
///
/// The iterator borrows the [`Project`] immutably; the model cannot be
/// mutated while a traversal is alive. Once exhausted it stays exhausted.
pub struct Files<'p> {
    project: &'p Project,
    filter: FileType,
    roots: std::vec::IntoIter<FileSetId>,
    stack: Vec<Cursor>,
}

/// Position within one fileset: next child to descend into, next own file to yield.
struct Cursor {
    set: FileSetId,
    child: usize,
    file: usize,
}

impl Cursor {
    fn new(set: FileSetId) -> Self {
        Self {
            set,
            child: 0,
            file: 0,
        }
    }
}

impl<'p> Files<'p> {
    pub(crate) fn new(project: &'p Project, filter: FileType, roots: Vec<FileSetId>) -> Self {
        Self {
            project,
            filter,
            roots: roots.into_iter(),
            stack: Vec::new(),
        }
    }

    /// The type filter applied by this traversal.
    pub fn filter(&self) -> FileType {
        self.filter
    }
}

impl<'p> Iterator for Files<'p> {
    type Item = &'p File;

    fn next(&mut self) -> Option<&'p File> {
        loop {
            let Some(top) = self.stack.last_mut() else {
                let root = self.roots.next()?;
                self.stack.push(Cursor::new(root));
                continue;
            };
            let set = self.project.file_set_entry(top.set);

            if let Some((_, &child)) = set.children().get_index(top.child) {
                top.child += 1;
                self.stack.push(Cursor::new(child));
                continue;
            }

            if let Some(&file_id) = set.files().get(top.file) {
                top.file += 1;
                let file = self.project.file_entry(file_id);
                if file.matches(self.filter) {
                    return Some(file);
                }
                continue;
            }

            self.stack.pop();
        }
    }
}

impl FusedIterator for Files<'_> {}
