use std::io;

use thiserror::Error;
use transport::TransportError;
use walk::WalkError;

/// Failure reported by the mirroring engines.
#[derive(Debug, Error)]
pub enum MirrorError {
    /// A session or remote operation failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Walking the local tree failed.
    #[error(transparent)]
    Walk(#[from] WalkError),

    /// A local filesystem operation failed.
    #[error("failed to {action} '{path}': {source}")]
    Local {
        /// Operation that failed.
        action: &'static str,
        /// Local path involved.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The upload walk reached a remote directory that does not exist while
    /// dry-run forbids creating it. There is no defined behavior for "would
    /// need to create a directory but must not mutate anything", so the
    /// operation aborts rather than guessing.
    #[error("remote directory '{path}' does not exist and dry-run forbids creating it")]
    DryRunMissingDirectory {
        /// Remote directory that would have been created.
        path: String,
    },
}

impl MirrorError {
    pub(crate) fn local(action: &'static str, path: &str, source: io::Error) -> Self {
        Self::Local {
            action,
            path: path.to_string(),
            source,
        }
    }
}
