use std::error::Error;

use thiserror::Error;

type BoxedSource = Box<dyn Error + Send + Sync>;

/// Failure reported by a [`Connector`](crate::Connector) or
/// [`Session`](crate::Session) operation.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The session could not be established because the server rejected the
    /// supplied credentials. Fatal: the session was never usable.
    #[error("authentication with '{host}' failed: {source}")]
    Authentication {
        /// Host the connection was aimed at.
        host: String,
        /// Underlying error reported by the transport stack.
        #[source]
        source: BoxedSource,
    },

    /// The remote side reported that a path does not exist or is not
    /// accessible. Recoverable only in the upload engine's
    /// directory-materialization step; everywhere else it aborts the
    /// operation like any other failure.
    #[error("remote path '{path}' not found")]
    PathNotFound {
        /// Path the remote side rejected.
        path: String,
    },

    /// Any other listing, read, write, or directory-change failure. Aborts
    /// the current operation; this crate never retries.
    #[error("{context}: {source}")]
    Transport {
        /// Description of the operation that failed.
        context: String,
        /// Underlying error reported by the transport stack.
        #[source]
        source: BoxedSource,
    },
}

impl TransportError {
    /// Builds an [`TransportError::Authentication`] for `host`.
    pub fn authentication(
        host: impl Into<String>,
        source: impl Error + Send + Sync + 'static,
    ) -> Self {
        Self::Authentication {
            host: host.into(),
            source: Box::new(source),
        }
    }

    /// Builds a [`TransportError::PathNotFound`] for `path`.
    pub fn path_not_found(path: impl Into<String>) -> Self {
        Self::PathNotFound { path: path.into() }
    }

    /// Wraps a generic transport failure with operation context.
    pub fn transport(
        context: impl Into<String>,
        source: impl Error + Send + Sync + 'static,
    ) -> Self {
        Self::Transport {
            context: context.into(),
            source: Box::new(source),
        }
    }

    /// Reports whether this error is the remote "path not found" signal.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }
}
