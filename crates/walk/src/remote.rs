use std::collections::VecDeque;

use tracing::debug;
use transport::{Session, TransportError};

/// Breadth-first walker over a remote directory subtree.
///
/// The walker is a pump rather than an [`Iterator`]: the session is borrowed
/// per call, so the caller can interleave its own session operations between
/// traversal steps. The first call yields the root without touching the
/// session; subsequent calls list queued directories and yield their
/// non-hidden subdirectories in discovery order.
pub struct RemoteWalker {
    root: Option<String>,
    queue: VecDeque<String>,
    discovered: VecDeque<String>,
}

impl RemoteWalker {
    /// Creates a walker rooted at `root`.
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: Some(root.into()),
            queue: VecDeque::new(),
            discovered: VecDeque::new(),
        }
    }

    /// Produces the next directory path, or `None` when the subtree is
    /// exhausted.
    ///
    /// Listing failures propagate as
    /// [`TransportError`](transport::TransportError) and leave the walker in
    /// an unspecified state; construct a new walker to restart.
    pub fn next_directory<S: Session>(
        &mut self,
        session: &mut S,
    ) -> Result<Option<String>, TransportError> {
        if let Some(root) = self.root.take() {
            self.queue.push_back(root.clone());
            return Ok(Some(root));
        }

        loop {
            if let Some(child) = self.discovered.pop_front() {
                return Ok(Some(child));
            }

            let Some(current) = self.queue.pop_front() else {
                return Ok(None);
            };

            session.change_directory(&current)?;
            for entry in session.list_entries()? {
                if !entry.is_directory() || entry.is_hidden() {
                    continue;
                }
                let child = join(&current, entry.name());
                debug!(path = %child, "discovered remote directory");
                self.queue.push_back(child.clone());
                self.discovered.push_back(child);
            }
        }
    }
}

fn join(dir: &str, name: &str) -> String {
    if dir.ends_with('/') {
        format!("{dir}{name}")
    } else {
        format!("{dir}/{name}")
    }
}
