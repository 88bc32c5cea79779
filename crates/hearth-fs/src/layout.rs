//! Root resolution and the fixed directory tree beneath it.

use crate::error::Result;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable overriding the resolved root.
pub const ROOT_ENV: &str = "HEARTH_ROOT";
/// Directory name appended to the home directory.
const ROOT_DIR: &str = ".hearth";
/// Marker file kept directly under the chains directory.
const HEAD_FILE: &str = "HEAD";
/// Root of the state tree inside the hearth base container image.
pub const CONTAINER_ROOT: &str = "/home/hearth/.hearth";

/// Resolve the state root for this process.
///
/// `HEARTH_ROOT` wins when set and non-empty; otherwise the root is
/// `.hearth` under the user's home directory.
#[must_use]
pub fn resolve_root() -> PathBuf {
    root_from(env::var_os(ROOT_ENV), home_dir())
}

/// Pure core of [`resolve_root`], split out so the override rule is
/// testable without touching process environment.
fn root_from(override_var: Option<OsString>, home: Option<PathBuf>) -> PathBuf {
    match override_var {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        // A failed home lookup degrades to a relative `.hearth`; the
        // failure surfaces later, when the tree is created.
        _ => home.unwrap_or_default().join(ROOT_DIR),
    }
}

#[cfg(windows)]
fn home_dir() -> Option<PathBuf> {
    let mut home = env::var_os("HOMEDRIVE").unwrap_or_default();
    home.push(env::var_os("HOMEPATH").unwrap_or_default());
    if home.is_empty() {
        env::var_os("USERPROFILE").map(PathBuf::from)
    } else {
        Some(PathBuf::from(home))
    }
}

#[cfg(not(windows))]
fn home_dir() -> Option<PathBuf> {
    dirs::home_dir()
}

/// A deprecated directory and the directory that replaced it.
///
/// Exposed as data only; moving an old tree forward is the caller's
/// job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Migration {
    /// Deprecated location that may still exist on disk.
    pub from: PathBuf,
    /// Current location its contents belong under.
    pub to: PathBuf,
}

/// Resolved directory layout of a hearth state tree.
///
/// Constructed once at startup and passed by reference to everything
/// that touches the tree. Every path it hands out is a descendant of
/// the root.
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    /// Layout rooted at the process-resolved root.
    #[must_use]
    pub fn resolve() -> Self {
        Self {
            root: resolve_root(),
        }
    }

    /// Layout rooted at an explicit path.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The state root itself.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Installed applications.
    #[must_use]
    pub fn apps(&self) -> PathBuf {
        self.root.join("apps")
    }

    /// Action definitions.
    #[must_use]
    pub fn actions(&self) -> PathBuf {
        self.root.join("actions")
    }

    /// Chain state.
    #[must_use]
    pub fn chains(&self) -> PathBuf {
        self.root.join("chains")
    }

    /// Data exported from containers.
    #[must_use]
    pub fn data(&self) -> PathBuf {
        self.root.join("data")
    }

    /// Key storage.
    #[must_use]
    pub fn keys(&self) -> PathBuf {
        self.root.join("keys")
    }

    /// Raw key material.
    #[must_use]
    pub fn keys_data(&self) -> PathBuf {
        self.keys().join("data")
    }

    /// Human-readable key names.
    #[must_use]
    pub fn key_names(&self) -> PathBuf {
        self.keys().join("names")
    }

    /// Language tooling.
    #[must_use]
    pub fn languages(&self) -> PathBuf {
        self.root.join("languages")
    }

    /// Service definitions.
    #[must_use]
    pub fn services(&self) -> PathBuf {
        self.root.join("services")
    }

    /// Scratch area shared by the sub-tools.
    #[must_use]
    pub fn scratch(&self) -> PathBuf {
        self.root.join("scratch")
    }

    /// Package manager scratch space.
    #[must_use]
    pub fn pm_scratch(&self) -> PathBuf {
        self.scratch().join("pm")
    }

    /// sol compiler scratch space.
    #[must_use]
    pub fn sol_scratch(&self) -> PathBuf {
        self.scratch().join("sol")
    }

    /// lll compiler scratch space.
    #[must_use]
    pub fn lll_scratch(&self) -> PathBuf {
        self.scratch().join("lll")
    }

    /// ser compiler scratch space.
    #[must_use]
    pub fn ser_scratch(&self) -> PathBuf {
        self.scratch().join("ser")
    }

    /// Deprecated chain state location, replaced by [`Self::chains`].
    #[must_use]
    pub fn blockchains(&self) -> PathBuf {
        self.root.join("blockchains")
    }

    /// Deprecated application location, replaced by [`Self::apps`].
    #[must_use]
    pub fn dapps(&self) -> PathBuf {
        self.root.join("dapps")
    }

    /// Marker file recording the checked-out chain.
    #[must_use]
    pub fn head(&self) -> PathBuf {
        self.chains().join(HEAD_FILE)
    }

    /// Chain refs live next to HEAD; not part of the ensured tree.
    #[must_use]
    pub fn refs(&self) -> PathBuf {
        self.chains().join("refs")
    }

    /// The fixed creation list, root first.
    #[must_use]
    pub fn dirs(&self) -> Vec<PathBuf> {
        vec![
            self.root.clone(),
            self.actions(),
            self.chains(),
            self.data(),
            self.apps(),
            self.keys(),
            self.languages(),
            self.services(),
            self.keys_data(),
            self.key_names(),
            self.scratch(),
            self.pm_scratch(),
            self.sol_scratch(),
            self.lll_scratch(),
            self.ser_scratch(),
        ]
    }

    /// Deprecated directories mapped to their replacements, for
    /// callers that detect and move old layouts forward.
    #[must_use]
    pub fn migrations(&self) -> Vec<Migration> {
        vec![
            Migration {
                from: self.blockchains(),
                to: self.chains(),
            },
            Migration {
                from: self.dapps(),
                to: self.apps(),
            },
        ]
    }

    /// Create every directory in [`Self::dirs`] plus the HEAD marker
    /// file, skipping anything that already exists.
    ///
    /// Fail-fast: the first stat or create error aborts the remaining
    /// creations, with no rollback of what was already made.
    ///
    /// # Errors
    /// Returns the first underlying IO error.
    pub fn ensure(&self) -> Result<()> {
        for dir in self.dirs() {
            ensure_dir(&dir)?;
        }

        let head = self.head();
        if let Err(e) = fs::metadata(&head) {
            if e.kind() != io::ErrorKind::NotFound {
                return Err(e.into());
            }
            fs::File::create(&head)?;
            debug!(path = %head.display(), "Created HEAD marker");
        }

        info!(root = %self.root.display(), "Ensured directory tree");

        Ok(())
    }
}

/// Create `dir` and any missing parents; an existing directory is left
/// untouched.
fn ensure_dir(dir: &Path) -> Result<()> {
    match fs::metadata(dir) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            fs::create_dir_all(dir)?;
            debug!(path = %dir.display(), "Created directory");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_override_wins_verbatim() {
        let root = root_from(
            Some(OsString::from("/custom/state")),
            Some(PathBuf::from("/home/alice")),
        );
        assert_eq!(root, PathBuf::from("/custom/state"));
    }

    #[test]
    fn test_empty_override_falls_back_to_home() {
        let root = root_from(Some(OsString::new()), Some(PathBuf::from("/home/alice")));
        assert_eq!(root, PathBuf::from("/home/alice/.hearth"));
    }

    #[test]
    fn test_missing_home_degrades_to_relative_root() {
        let root = root_from(None, None);
        assert_eq!(root, PathBuf::from(".hearth"));
    }

    #[test]
    fn test_all_dirs_are_under_root() {
        let layout = Layout::with_root("/tmp/hearth-test");
        assert!(
            layout
                .dirs()
                .iter()
                .all(|d| d.starts_with(layout.root()))
        );
    }

    #[test]
    fn test_migrations_target_current_layout() {
        let layout = Layout::with_root("/tmp/hearth-test");
        let migrations = layout.migrations();

        assert_eq!(migrations.len(), 2);
        assert_eq!(migrations[0].from, layout.blockchains());
        assert_eq!(migrations[0].to, layout.chains());
        assert_eq!(migrations[1].from, layout.dapps());
        assert_eq!(migrations[1].to, layout.apps());
    }

    #[test]
    fn test_ensure_creates_tree_and_head() {
        let tmp = TempDir::new().unwrap();
        let layout = Layout::with_root(tmp.path().join("root"));

        layout.ensure().unwrap();

        for dir in layout.dirs() {
            assert!(dir.is_dir(), "missing {}", dir.display());
        }
        assert!(layout.head().is_file());
        assert_eq!(fs::read(layout.head()).unwrap(), b"");
    }

    #[test]
    fn test_ensure_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let layout = Layout::with_root(tmp.path().join("root"));

        layout.ensure().unwrap();

        // Seed a file so a second pass has something it must not touch.
        fs::write(layout.scratch().join("note.txt"), "keep me").unwrap();
        let entries_before = count_entries(layout.root());

        layout.ensure().unwrap();

        assert_eq!(count_entries(layout.root()), entries_before);
        assert_eq!(
            fs::read_to_string(layout.scratch().join("note.txt")).unwrap(),
            "keep me"
        );
    }

    fn count_entries(root: &Path) -> usize {
        walkdir::WalkDir::new(root).into_iter().count()
    }
}
