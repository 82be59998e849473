use std::fs;

use tracing::{error, info};
use transport::{Connector, Session};

use crate::path::{basename, local_join};

/// Copies one local file into a remote directory.
///
/// Opens its own short-lived session. Any failure — connecting, changing to
/// the target directory, reading the file, storing it — is reported through
/// the log and the function returns normally. One-shot transfers never abort
/// the caller; this is deliberately different from the mirror engines, which
/// let failures propagate.
pub fn upload_file<C: Connector>(connector: &C, local_file: &str, remote_dir: &str) {
    info!(source = %local_file, destination = %remote_dir, "copying file to remote directory");

    let mut session = match connector.connect() {
        Ok(session) => session,
        Err(error) => {
            error!(%error, "unable to open session");
            return;
        }
    };

    if let Err(error) = session.change_directory(remote_dir) {
        error!(%error, path = %remote_dir, "unable to change to target remote directory");
        return;
    }

    let name = basename(local_file);
    let mut file = match fs::File::open(local_file) {
        Ok(file) => file,
        Err(error) => {
            error!(%error, path = %local_file, "unable to open local file");
            return;
        }
    };

    if let Err(error) = session.store(name, &mut file) {
        error!(%error, "unable to copy the file");
    }
}

/// Copies one remote file into a local directory, under its base name.
///
/// Opens its own short-lived session. Failures are reported through the log
/// and the function returns normally, exactly like [`upload_file`].
pub fn download_file<C: Connector>(connector: &C, remote_file: &str, local_dir: &str) {
    info!(source = %remote_file, destination = %local_dir, "copying file from remote directory");

    let mut session = match connector.connect() {
        Ok(session) => session,
        Err(error) => {
            error!(%error, "unable to open session");
            return;
        }
    };

    let contents = match session.retrieve(remote_file) {
        Ok(contents) => contents,
        Err(error) => {
            error!(%error, path = %remote_file, "unable to retrieve remote file");
            return;
        }
    };

    let target = local_join(local_dir, basename(remote_file));
    if let Err(error) = fs::write(&target, contents) {
        error!(%error, path = %target, "unable to write local file");
    }
}
