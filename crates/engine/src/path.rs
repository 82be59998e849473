use std::path::Path;

/// Translates a path rooted at the source tree into the corresponding path
/// rooted at the destination tree.
///
/// This is a literal, global substring replacement, not a relative-path
/// computation. The behavior is preserved from the system this crate
/// reimplements: when `source_root` occurs in the path more than once, every
/// occurrence is replaced, which produces an incorrect mapping. Both roots
/// are caller-supplied and single-use per operation, so the hazard is
/// accepted and pinned by a test rather than fixed.
///
/// ```
/// use engine::map_tree_path;
///
/// assert_eq!(
///     map_tree_path("/srv/data/reports", "/srv/data", "/tmp/mirror/data"),
///     "/tmp/mirror/data/reports"
/// );
/// ```
#[must_use]
pub fn map_tree_path(path: &str, source_root: &str, destination_root: &str) -> String {
    path.replace(source_root, destination_root)
}

/// Returns the final component of a path, for either separator convention.
#[must_use]
pub fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Returns the substring after the last dot, or the whole input when no dot
/// is present.
#[must_use]
pub fn extension(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

/// Joins a remote directory and an entry name with `/`.
pub(crate) fn remote_join(dir: &str, name: &str) -> String {
    if dir.ends_with('/') {
        format!("{dir}{name}")
    } else {
        format!("{dir}/{name}")
    }
}

/// Joins a local directory and an entry name with the platform separator.
pub(crate) fn local_join(dir: &str, name: &str) -> String {
    Path::new(dir).join(name).to_string_lossy().into_owned()
}
