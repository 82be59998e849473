#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! In-memory remote server for exercising the mirroring engines.
//!
//! [`ScriptedRemote`] implements [`Connector`] against a shared in-memory
//! tree of directories and file contents. Every transport call a session
//! performs — connect, directory change, listing, mkdir, retrieve, store,
//! quit — is recorded so tests can assert exactly which operations ran (for
//! example, that `retrieve` was never invoked for a file skipped by the
//! overwrite policy, or that a dry run issued no mutating call at all).
//!
//! Paths are absolute, `/`-separated strings. The root directory `/` always
//! exists.

use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;
use std::sync::{Arc, Mutex, MutexGuard};

use transport::{Connector, EntryKind, RemoteEntry, Session, TransportError};

/// One recorded transport operation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Call {
    /// A session was opened.
    Connect,
    /// The working directory changed (or the change was attempted).
    ChangeDirectory(String),
    /// The named directory was listed.
    List(String),
    /// A remote directory was created.
    MakeDirectory(String),
    /// A file was retrieved; the value is the resolved absolute path.
    Retrieve(String),
    /// A file was stored; the value is the resolved absolute path.
    Store(String),
    /// A session was closed.
    Quit,
}

#[derive(Default)]
struct RemoteState {
    directories: BTreeSet<String>,
    files: BTreeMap<String, Vec<u8>>,
    calls: Vec<Call>,
    reject_login: bool,
}

/// Scripted in-memory remote implementing [`Connector`].
///
/// ```
/// use test_support::ScriptedRemote;
/// use transport::{Connector, Session};
///
/// let remote = ScriptedRemote::new();
/// remote.add_file("/data/report.csv", b"1,2,3");
///
/// let mut session = remote.connect().unwrap();
/// session.change_directory("/data").unwrap();
/// let entries = session.list_entries().unwrap();
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].name(), "report.csv");
/// ```
#[derive(Clone, Default)]
pub struct ScriptedRemote {
    state: Arc<Mutex<RemoteState>>,
}

impl ScriptedRemote {
    /// Creates an empty remote containing only the root directory.
    #[must_use]
    pub fn new() -> Self {
        let remote = Self::default();
        remote.lock().directories.insert("/".to_string());
        remote
    }

    fn lock(&self) -> MutexGuard<'_, RemoteState> {
        self.state.lock().expect("remote state mutex poisoned")
    }

    /// Adds a directory, creating missing ancestors.
    pub fn add_directory(&self, path: &str) {
        let mut state = self.lock();
        insert_with_ancestors(&mut state.directories, path);
    }

    /// Adds a file with the given contents, creating missing ancestor
    /// directories.
    pub fn add_file(&self, path: &str, contents: &[u8]) {
        let mut state = self.lock();
        insert_with_ancestors(&mut state.directories, parent(path));
        state.files.insert(path.to_string(), contents.to_vec());
    }

    /// Makes every subsequent login attempt fail.
    pub fn reject_login(&self) {
        self.lock().reject_login = true;
    }

    /// Returns the contents of the file at `path`, if present.
    #[must_use]
    pub fn file(&self, path: &str) -> Option<Vec<u8>> {
        self.lock().files.get(path).cloned()
    }

    /// Reports whether the directory at `path` exists.
    #[must_use]
    pub fn has_directory(&self, path: &str) -> bool {
        self.lock().directories.contains(path)
    }

    /// Returns every transport call recorded so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    /// Counts recorded calls matching `predicate`.
    #[must_use]
    pub fn count_calls(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.lock().calls.iter().filter(|call| predicate(call)).count()
    }
}

impl Connector for ScriptedRemote {
    type Session = ScriptedSession;

    fn connect(&self) -> Result<ScriptedSession, TransportError> {
        let mut state = self.lock();
        if state.reject_login {
            return Err(TransportError::authentication(
                "scripted-remote",
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "530 login incorrect"),
            ));
        }
        state.calls.push(Call::Connect);
        drop(state);
        Ok(ScriptedSession {
            state: Arc::clone(&self.state),
            cwd: "/".to_string(),
        })
    }
}

/// A live session against a [`ScriptedRemote`]. Records `Quit` when dropped.
pub struct ScriptedSession {
    state: Arc<Mutex<RemoteState>>,
    cwd: String,
}

impl ScriptedSession {
    fn lock(&self) -> MutexGuard<'_, RemoteState> {
        self.state.lock().expect("remote state mutex poisoned")
    }

    fn resolve(&self, name: &str) -> String {
        if name.starts_with('/') {
            name.to_string()
        } else {
            join(&self.cwd, name)
        }
    }
}

impl Session for ScriptedSession {
    fn change_directory(&mut self, path: &str) -> Result<(), TransportError> {
        let mut state = self.lock();
        state.calls.push(Call::ChangeDirectory(path.to_string()));
        if state.directories.contains(path) {
            drop(state);
            self.cwd = path.to_string();
            Ok(())
        } else {
            Err(TransportError::path_not_found(path))
        }
    }

    fn list_entries(&mut self) -> Result<Vec<RemoteEntry>, TransportError> {
        let mut state = self.lock();
        let cwd = self.cwd.clone();
        state.calls.push(Call::List(cwd.clone()));

        let mut entries = Vec::new();
        for dir in &state.directories {
            if dir != &cwd && parent(dir) == cwd {
                entries.push(RemoteEntry::new(leaf(dir), EntryKind::Directory));
            }
        }
        for path in state.files.keys() {
            if parent(path) == cwd {
                entries.push(RemoteEntry::new(leaf(path), EntryKind::File));
            }
        }
        Ok(entries)
    }

    fn make_directory(&mut self, path: &str) -> Result<(), TransportError> {
        let mut state = self.lock();
        state.calls.push(Call::MakeDirectory(path.to_string()));
        if !state.directories.contains(parent(path)) {
            return Err(TransportError::transport(
                format!("failed to create remote directory '{path}'"),
                std::io::Error::new(std::io::ErrorKind::NotFound, "550 parent missing"),
            ));
        }
        state.directories.insert(path.to_string());
        Ok(())
    }

    fn retrieve(&mut self, name: &str) -> Result<Vec<u8>, TransportError> {
        let resolved = self.resolve(name);
        let mut state = self.lock();
        state.calls.push(Call::Retrieve(resolved.clone()));
        state
            .files
            .get(&resolved)
            .cloned()
            .ok_or_else(|| TransportError::path_not_found(resolved))
    }

    fn store(&mut self, name: &str, contents: &mut dyn Read) -> Result<(), TransportError> {
        let mut buffer = Vec::new();
        contents
            .read_to_end(&mut buffer)
            .map_err(|error| TransportError::transport("failed to read upload stream", error))?;
        let resolved = self.resolve(name);
        let mut state = self.lock();
        state.calls.push(Call::Store(resolved.clone()));
        state.files.insert(resolved, buffer);
        Ok(())
    }
}

impl Drop for ScriptedSession {
    fn drop(&mut self) {
        self.lock().calls.push(Call::Quit);
    }
}

fn insert_with_ancestors(directories: &mut BTreeSet<String>, path: &str) {
    let mut current = path;
    loop {
        directories.insert(current.to_string());
        if current == "/" || current.is_empty() {
            break;
        }
        current = parent(current);
    }
    directories.insert("/".to_string());
}

fn parent(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) => "/",
        Some(index) => &path[..index],
        None => "",
    }
}

fn leaf(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

fn join(dir: &str, name: &str) -> String {
    if dir.ends_with('/') {
        format!("{dir}{name}")
    } else {
        format!("{dir}/{name}")
    }
}
