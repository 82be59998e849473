use std::error::Error;
use std::fmt;
use std::io;

/// Error returned when local traversal fails.
#[derive(Debug)]
pub struct WalkError {
    kind: WalkErrorKind,
}

impl WalkError {
    pub(crate) fn read_dir(path: impl Into<String>, source: io::Error) -> Self {
        Self {
            kind: WalkErrorKind::ReadDir {
                path: path.into(),
                source,
            },
        }
    }

    pub(crate) fn read_dir_entry(path: impl Into<String>, source: io::Error) -> Self {
        Self {
            kind: WalkErrorKind::ReadDirEntry {
                path: path.into(),
                source,
            },
        }
    }

    pub(crate) fn file_type(path: impl Into<String>, source: io::Error) -> Self {
        Self {
            kind: WalkErrorKind::FileType {
                path: path.into(),
                source,
            },
        }
    }

    pub(crate) fn non_unicode_name(path: impl Into<String>) -> Self {
        Self {
            kind: WalkErrorKind::NonUnicodeName { path: path.into() },
        }
    }

    /// Returns the specific failure that terminated traversal.
    #[must_use]
    pub const fn kind(&self) -> &WalkErrorKind {
        &self.kind
    }

    /// Returns the path associated with the failure.
    #[must_use]
    pub fn path(&self) -> &str {
        self.kind.path()
    }
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            WalkErrorKind::ReadDir { path, source } => {
                write!(f, "failed to read directory '{path}': {source}")
            }
            WalkErrorKind::ReadDirEntry { path, source } => {
                write!(f, "failed to read entry in '{path}': {source}")
            }
            WalkErrorKind::FileType { path, source } => {
                write!(f, "failed to inspect entry type of '{path}': {source}")
            }
            WalkErrorKind::NonUnicodeName { path } => {
                write!(f, "entry in '{path}' has a name that is not valid Unicode")
            }
        }
    }
}

impl Error for WalkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            WalkErrorKind::ReadDir { source, .. }
            | WalkErrorKind::ReadDirEntry { source, .. }
            | WalkErrorKind::FileType { source, .. } => Some(source),
            WalkErrorKind::NonUnicodeName { .. } => None,
        }
    }
}

/// Classification of local traversal failures.
#[derive(Debug)]
pub enum WalkErrorKind {
    /// Failed to read the contents of a directory.
    ReadDir {
        /// Directory whose contents could not be read.
        path: String,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// Failed to obtain a directory entry during iteration.
    ReadDirEntry {
        /// Directory containing the problematic entry.
        path: String,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// Failed to determine whether an entry is a directory.
    FileType {
        /// Entry whose type could not be inspected.
        path: String,
        /// Underlying error emitted by the operating system.
        source: io::Error,
    },
    /// An entry name is not valid Unicode and cannot participate in the
    /// textual path mapping this system is built on.
    NonUnicodeName {
        /// Directory containing the problematic entry.
        path: String,
    },
}

impl WalkErrorKind {
    /// Returns the path tied to the failure.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            WalkErrorKind::ReadDir { path, .. }
            | WalkErrorKind::ReadDirEntry { path, .. }
            | WalkErrorKind::FileType { path, .. }
            | WalkErrorKind::NonUnicodeName { path } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn io_error(message: &'static str) -> io::Error {
        io::Error::new(io::ErrorKind::Other, message)
    }

    #[test]
    fn display_is_specific_per_variant() {
        let read_dir = WalkError::read_dir("dir", io_error("boom"));
        assert_eq!(read_dir.to_string(), "failed to read directory 'dir': boom");

        let entry = WalkError::read_dir_entry("dir", io_error("boom"));
        assert_eq!(entry.to_string(), "failed to read entry in 'dir': boom");

        let file_type = WalkError::file_type("dir/entry", io_error("boom"));
        assert_eq!(
            file_type.to_string(),
            "failed to inspect entry type of 'dir/entry': boom"
        );

        let name = WalkError::non_unicode_name("dir");
        assert_eq!(
            name.to_string(),
            "entry in 'dir' has a name that is not valid Unicode"
        );
    }

    #[test]
    fn path_matches_variant_path() {
        let error = WalkError::read_dir("somewhere", io_error("x"));
        assert_eq!(error.path(), "somewhere");
        assert!(matches!(error.kind(), WalkErrorKind::ReadDir { .. }));
    }

    #[test]
    fn source_is_absent_for_non_unicode_names() {
        assert!(WalkError::non_unicode_name("dir").source().is_none());
        assert!(WalkError::read_dir("dir", io_error("x")).source().is_some());
    }
}
