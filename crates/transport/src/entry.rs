/// Classification of a remote directory entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    /// A regular file.
    File,
    /// A directory.
    Directory,
}

/// A `(name, kind)` pair produced by listing a remote directory.
///
/// Entries are ephemeral: they describe one listing of one directory and are
/// not kept across traversal steps.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RemoteEntry {
    name: String,
    kind: EntryKind,
}

impl RemoteEntry {
    /// Creates an entry from a name and kind.
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Returns the entry's name within its directory.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the entry's kind.
    #[must_use]
    pub const fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Reports whether the entry is a regular file.
    #[must_use]
    pub const fn is_file(&self) -> bool {
        matches!(self.kind, EntryKind::File)
    }

    /// Reports whether the entry is a directory.
    #[must_use]
    pub const fn is_directory(&self) -> bool {
        matches!(self.kind, EntryKind::Directory)
    }

    /// Reports whether the entry is hidden by the dot-file convention.
    ///
    /// ```
    /// use transport::{EntryKind, RemoteEntry};
    ///
    /// assert!(RemoteEntry::new(".git", EntryKind::Directory).is_hidden());
    /// assert!(!RemoteEntry::new("data.csv", EntryKind::File).is_hidden());
    /// ```
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}
