#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `ftps-sync` synchronizes files between a local filesystem and a remote
//! server reachable over FTPS. It supports one-shot single-file transfers in
//! either direction and recursive, breadth-first directory-tree mirroring in
//! either direction, with a configurable overwrite policy, file-type
//! filtering, and a non-mutating dry-run mode.
//!
//! The crate is a facade over three workspace members:
//!
//! - `transport` — the session collaborator: the [`Session`] and
//!   [`Connector`] traits and the FTPS-backed implementation.
//! - `walk` — breadth-first tree walkers for both sides.
//! - `engine` — the mirroring and transfer engines.
//!
//! # Examples
//!
//! Mirror a remote tree into a local directory. The example drives the
//! engine through the in-memory remote used by the test suite; production
//! callers construct an [`FtpsConnector`] instead.
//!
//! ```
//! use ftps_sync::{download_tree, MirrorOptions};
//! use test_support::ScriptedRemote;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let remote = ScriptedRemote::new();
//! remote.add_file("/srv/data/metrics.csv", b"1,2,3");
//!
//! let destination = tempfile::tempdir()?;
//! let report = download_tree(
//!     &remote,
//!     "/srv/data",
//!     &destination.path().to_string_lossy(),
//!     &MirrorOptions::new(),
//! )?;
//!
//! assert_eq!(report.copied, 1);
//! assert!(destination.path().join("data/metrics.csv").exists());
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

pub use engine::{
    basename, download_file, download_tree, extension, map_tree_path, upload_file, upload_tree,
    MirrorError, MirrorOptions, MirrorReport,
};
pub use transport::{
    Connector, EntryKind, FtpsConnector, FtpsSession, RemoteEntry, Session, TransportError,
};
pub use walk::{LocalWalker, RemoteWalker, WalkError, WalkErrorKind};
