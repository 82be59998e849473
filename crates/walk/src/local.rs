use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::WalkError;

/// Breadth-first iterator over a local directory subtree.
///
/// Yields the root first, then every subdirectory discovered by listing
/// queued directories. Child names within one directory are sorted so the
/// sequence is deterministic across platforms. Unlike
/// [`RemoteWalker`](crate::RemoteWalker), no hidden-name filter is applied.
/// Symlinks are not followed: an entry counts as a directory only by its own
/// file type.
pub struct LocalWalker {
    root: Option<String>,
    queue: VecDeque<String>,
    discovered: VecDeque<String>,
    finished: bool,
}

impl LocalWalker {
    /// Creates a walker rooted at `root`.
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: Some(root.into()),
            queue: VecDeque::new(),
            discovered: VecDeque::new(),
            finished: false,
        }
    }

    fn scan(&mut self, current: &str) -> Result<(), WalkError> {
        let read_dir =
            fs::read_dir(current).map_err(|error| WalkError::read_dir(current, error))?;

        let mut names = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|error| WalkError::read_dir_entry(current, error))?;
            let file_type = entry.file_type().map_err(|error| {
                WalkError::file_type(entry.path().to_string_lossy().into_owned(), error)
            })?;
            if !file_type.is_dir() {
                continue;
            }
            let name = entry
                .file_name()
                .into_string()
                .map_err(|_| WalkError::non_unicode_name(current))?;
            names.push(name);
        }
        names.sort();

        for name in names {
            let child = Path::new(current).join(name).to_string_lossy().into_owned();
            debug!(path = %child, "discovered local directory");
            self.queue.push_back(child.clone());
            self.discovered.push_back(child);
        }
        Ok(())
    }
}

impl Iterator for LocalWalker {
    type Item = Result<String, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if let Some(root) = self.root.take() {
            self.queue.push_back(root.clone());
            return Some(Ok(root));
        }

        loop {
            if let Some(child) = self.discovered.pop_front() {
                return Some(Ok(child));
            }

            let current = self.queue.pop_front()?;
            if let Err(error) = self.scan(&current) {
                self.finished = true;
                return Some(Err(error));
            }
        }
    }
}
