use std::io::Read;

use crate::entry::RemoteEntry;
use crate::error::TransportError;

/// An authenticated remote session with an implicit working directory.
///
/// The mirroring engines hold exactly one session for the duration of one
/// operation and drive it synchronously; implementations do not need to be
/// safe for concurrent use. Dropping a session releases the underlying
/// connection.
pub trait Session {
    /// Changes the session's working directory to `path`.
    ///
    /// Returns [`TransportError::PathNotFound`] when the remote side reports
    /// that the path does not exist or is not accessible. This is the one
    /// signal the upload engine treats as recoverable.
    fn change_directory(&mut self, path: &str) -> Result<(), TransportError>;

    /// Lists the entries of the current working directory.
    ///
    /// Only files and directories are surfaced; entries of other kinds are
    /// omitted.
    fn list_entries(&mut self) -> Result<Vec<RemoteEntry>, TransportError>;

    /// Creates the directory named by `path` on the remote side.
    fn make_directory(&mut self, path: &str) -> Result<(), TransportError>;

    /// Retrieves the full contents of `name`, resolved against the current
    /// working directory when relative.
    fn retrieve(&mut self, name: &str) -> Result<Vec<u8>, TransportError>;

    /// Stores `contents` under `name` in the current working directory,
    /// creating or replacing the remote file.
    fn store(&mut self, name: &str, contents: &mut dyn Read) -> Result<(), TransportError>;
}

/// Opens authenticated sessions.
///
/// Each public mirroring or transfer operation calls [`Connector::connect`]
/// exactly once at entry and drops the returned session when it finishes, so
/// the connector owns every connect-time concern: dialing, securing the
/// control and data channels, logging in, and selecting the transfer mode.
pub trait Connector {
    /// Concrete session type produced by this connector.
    type Session: Session;

    /// Opens a new session.
    fn connect(&self) -> Result<Self::Session, TransportError>;
}
