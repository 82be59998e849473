#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `transport` provides the remote-session collaborator consumed by the
//! mirroring engines. The crate defines two narrow traits — [`Connector`] for
//! opening an authenticated session and [`Session`] for the handful of remote
//! operations the engines need — together with the production implementation
//! backed by FTPS ([`FtpsConnector`] and [`FtpsSession`]).
//!
//! # Design
//!
//! - [`Session`] exposes exactly the surface the traversal and mirroring code
//!   requires: change the working directory, list the current directory,
//!   create a directory, retrieve a file, and store a file. Everything else
//!   (securing the data channel, transfer mode, greeting exchange) is a
//!   connect-time concern owned by the [`Connector`] implementation.
//! - Sessions are scoped resources. A session is opened at operation entry and
//!   released when the handle is dropped, so every exit path — including error
//!   paths — closes the control connection.
//! - [`RemoteEntry`] carries the `(name, kind)` pair produced by directory
//!   listings. Entries that are neither files nor directories (for example
//!   symlinks) are not surfaced.
//!
//! # Errors
//!
//! All operations report [`TransportError`]. The error distinguishes
//! authentication failures, the remote "path not found" signal that the
//! upload engine treats as recoverable, and generic transport failures that
//! abort the current operation.

mod entry;
mod error;
mod ftps;
mod session;

pub use entry::{EntryKind, RemoteEntry};
pub use error::TransportError;
pub use ftps::{FtpsConnector, FtpsSession};
pub use session::{Connector, Session};
