#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `walk` provides the breadth-first directory-tree walkers the mirroring
//! engines are built on. Both walkers yield every directory path in a subtree
//! exactly once, parent strictly before descendant, starting with the root
//! itself.
//!
//! # Design
//!
//! - [`RemoteWalker`] traverses a remote subtree through a
//!   [`Session`](transport::Session). Because the engine shares the session
//!   with the walker, the walker is a pump: each call to
//!   [`RemoteWalker::next_directory`] borrows the session just long enough to
//!   produce the next path. Directory entries whose names start with a dot
//!   are neither yielded nor descended into.
//! - [`LocalWalker`] traverses a local subtree through [`std::fs`] and
//!   implements [`Iterator`]. It applies no hidden-name filter; the asymmetry
//!   with the remote walker is deliberate and preserved from the observed
//!   behavior of the system this crate reimplements.
//! - Both walkers keep an explicit FIFO queue. Children discovered by listing
//!   one directory are buffered and handed out one per call, so traversal is
//!   lazy and finite, restartable only by constructing a new walker.
//!
//! # Invariants
//!
//! - Every yielded path is either the root or `parent + separator + name` for
//!   a previously yielded parent.
//! - The root is yielded before any listing is performed.
//!
//! # Errors
//!
//! Remote listing failures propagate as
//! [`TransportError`](transport::TransportError) and end the walk; there is
//! no retry. Local failures surface as [`WalkError`] with the offending path
//! attached.
//!
//! # Examples
//!
//! Walk a small local tree breadth-first:
//!
//! ```
//! use walk::LocalWalker;
//! use std::fs;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let root = temp.path().join("tree");
//! fs::create_dir_all(root.join("a/b"))?;
//! fs::create_dir_all(root.join("c"))?;
//!
//! let root = root.to_string_lossy().into_owned();
//! let directories: Vec<String> = LocalWalker::new(root.as_str()).collect::<Result<_, _>>()?;
//! assert_eq!(directories.len(), 4);
//! assert_eq!(directories[0], root);
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod error;
mod local;
mod remote;

pub use error::{WalkError, WalkErrorKind};
pub use local::LocalWalker;
pub use remote::RemoteWalker;
