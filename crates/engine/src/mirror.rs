use std::fs;
use std::path::Path;

use tracing::{debug, info};
use transport::{Connector, Session, TransportError};
use walk::{LocalWalker, RemoteWalker};

use crate::error::MirrorError;
use crate::options::MirrorOptions;
use crate::path::{basename, local_join, map_tree_path, remote_join};

/// Counters describing one mirror operation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MirrorReport {
    /// Directories visited on the source side.
    pub directories: u64,
    /// Files whose contents were transferred.
    pub copied: u64,
    /// Files skipped by the overwrite policy or the file-type restriction.
    pub skipped: u64,
    /// Files a dry run would have transferred.
    pub planned: u64,
}

/// Mirrors a remote subtree into a local directory.
///
/// The remote root itself is nested inside `local_root`: mirroring
/// `/srv/data` into `/tmp/mirror` materializes files under
/// `/tmp/mirror/data/...`. One session is held for the whole operation and
/// released on every exit path. Directories are created locally for every
/// visited remote directory (even ones contributing no copyable files)
/// unless this is a dry run.
pub fn download_tree<C: Connector>(
    connector: &C,
    remote_root: &str,
    local_root: &str,
    options: &MirrorOptions,
) -> Result<MirrorReport, MirrorError> {
    let mut session = connector.connect()?;
    if options.is_dry_run() {
        info!("dry run: no local changes will be made");
    }

    let local_root = local_join(local_root, basename(remote_root));
    let mut report = MirrorReport::default();

    let mut walker = RemoteWalker::new(remote_root);
    while let Some(remote_dir) = walker.next_directory(&mut session)? {
        report.directories += 1;
        let local_dir = map_tree_path(&remote_dir, remote_root, &local_root);
        debug!(remote = %remote_dir, local = %local_dir, "visiting directory");

        if !options.is_dry_run() {
            fs::create_dir_all(&local_dir)
                .map_err(|error| MirrorError::local("create directory", &local_dir, error))?;
        }

        session.change_directory(&remote_dir)?;
        for entry in session.list_entries()? {
            if !entry.is_file() || entry.is_hidden() {
                continue;
            }

            let target = local_join(&local_dir, entry.name());
            if !options.is_overwrite() && Path::new(&target).exists() {
                debug!(path = %target, "skipping existing file");
                report.skipped += 1;
                continue;
            }
            if !options.allows(entry.name()) {
                debug!(path = %target, "skipping file outside type restriction");
                report.skipped += 1;
                continue;
            }

            if options.is_verbose() {
                info!(path = %target, "copying file");
            }
            if options.is_dry_run() {
                report.planned += 1;
                continue;
            }

            let contents = session.retrieve(entry.name())?;
            fs::write(&target, contents)
                .map_err(|error| MirrorError::local("write file", &target, error))?;
            report.copied += 1;
        }
    }

    Ok(report)
}

/// Mirrors a local subtree into a remote directory.
///
/// The local root itself is nested inside `remote_root`. Missing remote
/// directories are created as the walk encounters them; under dry run a
/// missing remote directory aborts the operation with
/// [`MirrorError::DryRunMissingDirectory`] instead. A local file already
/// present remotely is skipped silently unless `overwrite` is set; a local
/// file absent remotely is always uploaded.
pub fn upload_tree<C: Connector>(
    connector: &C,
    local_root: &str,
    remote_root: &str,
    options: &MirrorOptions,
) -> Result<MirrorReport, MirrorError> {
    let mut session = connector.connect()?;
    if options.is_dry_run() {
        info!("dry run: no remote changes will be made");
    }

    let remote_root = remote_join(remote_root, basename(local_root));
    let mut report = MirrorReport::default();

    for local_dir in LocalWalker::new(local_root) {
        let local_dir = local_dir?;
        report.directories += 1;
        let remote_dir = map_tree_path(&local_dir, local_root, &remote_root);
        debug!(local = %local_dir, remote = %remote_dir, "visiting directory");

        match session.change_directory(&remote_dir) {
            Ok(()) => {}
            Err(TransportError::PathNotFound { .. }) => {
                if options.is_dry_run() {
                    return Err(MirrorError::DryRunMissingDirectory { path: remote_dir });
                }
                if options.is_verbose() {
                    info!(path = %remote_dir, "creating remote directory");
                }
                session.make_directory(&remote_dir)?;
                session.change_directory(&remote_dir)?;
            }
            Err(error) => return Err(error.into()),
        }

        let remote_files: Vec<String> = session
            .list_entries()?
            .iter()
            .filter(|entry| entry.is_file())
            .map(|entry| entry.name().to_string())
            .collect();

        for name in list_local_files(&local_dir)? {
            if !options.allows(&name) {
                debug!(name = %name, "skipping file outside type restriction");
                report.skipped += 1;
                continue;
            }
            if !options.is_overwrite() && remote_files.iter().any(|remote| remote == &name) {
                debug!(name = %name, "skipping file present on remote");
                report.skipped += 1;
                continue;
            }

            if options.is_verbose() {
                info!(path = %remote_join(&remote_dir, &name), "copying file");
            }
            if options.is_dry_run() {
                report.planned += 1;
                continue;
            }

            let source = local_join(&local_dir, &name);
            let mut file = fs::File::open(&source)
                .map_err(|error| MirrorError::local("open file", &source, error))?;
            session.store(&name, &mut file)?;
            report.copied += 1;
        }
    }

    Ok(report)
}

/// Lists the names of regular files directly inside `dir`, sorted.
fn list_local_files(dir: &str) -> Result<Vec<String>, MirrorError> {
    let read_dir =
        fs::read_dir(dir).map_err(|error| MirrorError::local("list directory", dir, error))?;

    let mut names = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|error| MirrorError::local("list directory", dir, error))?;
        let file_type = entry
            .file_type()
            .map_err(|error| MirrorError::local("inspect entry in", dir, error))?;
        if !file_type.is_file() {
            continue;
        }
        let name = entry.file_name().into_string().map_err(|_| {
            MirrorError::local(
                "decode entry name in",
                dir,
                std::io::Error::new(std::io::ErrorKind::InvalidData, "name is not valid Unicode"),
            )
        })?;
        names.push(name);
    }
    names.sort();
    Ok(names)
}
