#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `engine` implements the mirroring core: recursive directory-tree copies in
//! either direction between a local filesystem and a remote server reached
//! through the [`transport`] collaborator, plus one-shot single-file
//! transfers. The engines decide, per file, whether to create, skip, or
//! overwrite; they never compare content or modification times, and they
//! never delete.
//!
//! # Design
//!
//! - [`download_tree`] walks the remote subtree breadth-first and materializes
//!   the mapped directory and file structure locally.
//! - [`upload_tree`] walks the local subtree and materializes it remotely,
//!   creating missing remote directories as it encounters them.
//! - Both engines open exactly one session at entry and hold it until they
//!   return; the session closes on every exit path when it is dropped.
//! - [`upload_file`] and [`download_file`] each open their own short-lived
//!   session and deliberately swallow failures: they report through the log
//!   and return normally, so a failed one-shot transfer never aborts the
//!   caller.
//! - Source-to-destination path translation is a literal, global substring
//!   replacement ([`map_tree_path`]); see the function documentation for the
//!   known limitation this preserves.
//!
//! # Invariants
//!
//! - The destination root is always `destination + basename(source)`: a
//!   mirror operation copies the source root itself into the destination
//!   rather than flattening its contents.
//! - With `overwrite` disabled, an existing destination file is never
//!   replaced, and its content is never fetched or sent.
//! - With `dry_run` enabled, no destination mutation occurs anywhere.
//!   Enumeration still happens and is narrated, and a missing remote
//!   directory aborts the upload with
//!   [`MirrorError::DryRunMissingDirectory`] because the walk cannot safely
//!   continue without knowing whether it exists.

mod error;
mod mirror;
mod options;
mod path;
mod transfer;

pub use error::MirrorError;
pub use mirror::{download_tree, upload_tree, MirrorReport};
pub use options::MirrorOptions;
pub use path::{basename, extension, map_tree_path};
pub use transfer::{download_file, upload_file};
