//! External text editor invocation.

use crate::error::{FsError, Result};
use std::env;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Environment variable naming the preferred editor.
pub const EDITOR_ENV: &str = "EDITOR";

/// Which command an `EDITOR` value dispatches to.
///
/// The value's basename decides the branch, but the fallback branch
/// launches the raw value untouched: `EDITOR=/usr/bin/nano` runs
/// `/usr/bin/nano`, while `EDITOR=/usr/local/bin/vim` runs plain
/// `vim`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorChoice {
    /// vim, also chosen for `vi` and an unset variable.
    Vim,
    /// emacs.
    Emacs,
    /// Anything else, launched as the raw `EDITOR` value.
    Other(String),
}

impl EditorChoice {
    /// Dispatch on a raw `EDITOR` value.
    #[must_use]
    pub fn from_value(raw: &str) -> Self {
        let name = if raw.contains('/') {
            Path::new(raw)
                .file_name()
                .map_or("", |n| n.to_str().unwrap_or(""))
        } else {
            raw
        };

        match name {
            "" | "vim" | "vi" => Self::Vim,
            "emacs" => Self::Emacs,
            _ => Self::Other(raw.to_string()),
        }
    }

    /// Command this choice launches.
    #[must_use]
    pub fn command(&self) -> &str {
        match self {
            Self::Vim => "vim",
            Self::Emacs => "emacs",
            Self::Other(raw) => raw,
        }
    }
}

/// Launch the user's editor on `file`, blocking until it exits.
///
/// The child inherits this process's stdin, stdout, and stderr, so
/// terminal editors take over the screen as usual.
///
/// # Errors
/// Propagates spawn failures; a non-zero exit becomes
/// [`FsError::Editor`].
pub fn open(file: &Path) -> Result<()> {
    let raw = env::var(EDITOR_ENV).unwrap_or_default();
    let choice = EditorChoice::from_value(&raw);

    debug!(editor = choice.command(), file = %file.display(), "Launching editor");

    let status = Command::new(choice.command()).arg(file).status()?;
    if status.success() {
        Ok(())
    } else {
        Err(FsError::Editor {
            editor: choice.command().to_string(),
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_and_vi_family_pick_vim() {
        assert_eq!(EditorChoice::from_value(""), EditorChoice::Vim);
        assert_eq!(EditorChoice::from_value("vim"), EditorChoice::Vim);
        assert_eq!(EditorChoice::from_value("vi"), EditorChoice::Vim);
    }

    #[test]
    fn test_emacs_picks_emacs() {
        assert_eq!(EditorChoice::from_value("emacs"), EditorChoice::Emacs);
    }

    #[test]
    fn test_basename_decides_known_editors() {
        // A full path to vim still launches the bare command name.
        let choice = EditorChoice::from_value("/usr/local/bin/vim");
        assert_eq!(choice, EditorChoice::Vim);
        assert_eq!(choice.command(), "vim");
    }

    #[test]
    fn test_other_branch_keeps_raw_value() {
        // Compared as "nano", launched as the untouched full path.
        let choice = EditorChoice::from_value("/usr/bin/nano");
        assert_eq!(
            choice,
            EditorChoice::Other("/usr/bin/nano".to_string())
        );
        assert_eq!(choice.command(), "/usr/bin/nano");
    }

    #[test]
    fn test_bare_unknown_editor() {
        assert_eq!(
            EditorChoice::from_value("nano"),
            EditorChoice::Other("nano".to_string())
        );
    }
}
