use crate::path::extension;

/// Policy flags shared by both mirroring directions.
///
/// ```
/// use engine::MirrorOptions;
///
/// let options = MirrorOptions::new()
///     .overwrite(true)
///     .restrict_file_types(["csv", "tsv"]);
/// assert!(options.allows("data.csv"));
/// assert!(!options.allows("report.txt"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct MirrorOptions {
    overwrite: bool,
    verbose: bool,
    dry_run: bool,
    file_types: Vec<String>,
}

impl MirrorOptions {
    /// Creates the default policy: no overwriting, no narration, no dry run,
    /// no file-type restriction.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allows replacing destination files that already exist (default
    /// `false`: an existing destination file of the same name is never
    /// replaced).
    #[must_use]
    pub const fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Emits per-file narration through the log. Has no behavioral effect.
    #[must_use]
    pub const fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Disables every destination mutation. Enumeration still happens and is
    /// narrated.
    #[must_use]
    pub const fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Restricts transfers to files whose extension is in `types`. An empty
    /// set (the default) means no restriction.
    #[must_use]
    pub fn restrict_file_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.file_types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Reports whether destination files may be replaced.
    #[must_use]
    pub const fn is_overwrite(&self) -> bool {
        self.overwrite
    }

    /// Reports whether narration is enabled.
    #[must_use]
    pub const fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Reports whether this is a non-mutating preview run.
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Reports whether a file named `name` passes the file-type restriction.
    ///
    /// The extension is the substring after the last dot; a name without a
    /// dot is compared wholesale.
    #[must_use]
    pub fn allows(&self, name: &str) -> bool {
        self.file_types.is_empty()
            || self
                .file_types
                .iter()
                .any(|allowed| allowed == extension(name))
    }
}
