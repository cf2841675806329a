use regex::Regex;
use serde::Serialize;
use std::path::Path;
use std::sync::LazyLock;

/// Interpreter directory name, e.g. `python3.11` or free-threaded `python3.13t`.
static INTERPRETER_DIR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^python\d+\.\d+t?$").expect("INTERPRETER_DIR_REGEX must compile")
});

/// Groups records by the interpreter they were installed for
///
/// Paths without an interpreter token (Debian's `python3/dist-packages`,
/// Windows-style `Lib/site-packages`) land in [`VersionBucket::UNKNOWN`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct VersionBucket(String);

impl VersionBucket {
    pub const UNKNOWN: &'static str = "unknown";

    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn unknown() -> Self {
        Self(Self::UNKNOWN.to_string())
    }

    /// Extracts the bucket from a matched metadata directory path
    ///
    /// The deepest ancestor component naming an interpreter wins; the
    /// metadata directory's own name is never considered.
    pub fn from_path(dist_info_dir: &Path) -> Self {
        Self::token_in(dist_info_dir)
            .map(Self::new)
            .unwrap_or_else(Self::unknown)
    }

    /// Returns the interpreter token of `path`, if any
    pub fn token_in(path: &Path) -> Option<String> {
        path.parent()?
            .components()
            .rev()
            .filter_map(|c| c.as_os_str().to_str())
            .find(|name| is_interpreter_dir(name))
            .map(str::to_string)
    }

    pub fn is_unknown(&self) -> bool {
        self.0 == Self::UNKNOWN
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VersionBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a single path component names an interpreter directory
pub fn is_interpreter_dir(name: &str) -> bool {
    INTERPRETER_DIR_REGEX.is_match(name)
}
