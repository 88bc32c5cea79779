//! CLI command implementations.

use crate::output::{self, LayoutView, OutputFormat};
use anyhow::{Context, Result};
use hearth_fs::{Layout, editor, ops};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Create the directory tree, reporting (or moving) deprecated
/// layouts.
pub fn init(layout: &Layout, migrate: bool, format: OutputFormat) -> Result<()> {
    layout
        .ensure()
        .context("Failed to create directory tree")?;

    for migration in layout.migrations() {
        if !migration.from.exists() {
            continue;
        }

        if migrate {
            ops::copy(&migration.from, &migration.to).with_context(|| {
                format!(
                    "Failed to migrate {} to {}",
                    migration.from.display(),
                    migration.to.display()
                )
            })?;
            fs::remove_dir_all(&migration.from).with_context(|| {
                format!("Failed to remove {}", migration.from.display())
            })?;
            output::print_success(
                &format!(
                    "Migrated {} to {}",
                    migration.from.display(),
                    migration.to.display()
                ),
                format,
            );
        } else {
            warn!(
                from = %migration.from.display(),
                to = %migration.to.display(),
                "Deprecated directory present; re-run with --migrate to move it"
            );
        }
    }

    output::print_success(
        &format!("Initialized hearth tree at {}", layout.root().display()),
        format,
    );
    Ok(())
}

/// Print the resolved layout.
pub fn paths(layout: &Layout, format: OutputFormat) -> Result<()> {
    output::print(&LayoutView::from(layout), format);
    Ok(())
}

/// Empty the scratch area, or a named subdirectory of the root.
pub fn clean(layout: &Layout, dir: Option<&str>, format: OutputFormat) -> Result<()> {
    let target = match dir {
        Some(name) => layout.root().join(name),
        None => layout.scratch(),
    };

    ops::clear_dir(&target)
        .with_context(|| format!("Failed to clear {}", target.display()))?;

    output::print_success(&format!("Cleared {}", target.display()), format);
    Ok(())
}

/// Copy a file or directory tree.
pub fn copy(src: &Path, dst: &Path, format: OutputFormat) -> Result<()> {
    ops::copy(src, dst).with_context(|| {
        format!("Failed to copy {} to {}", src.display(), dst.display())
    })?;

    output::print_success(
        &format!("Copied {} to {}", src.display(), dst.display()),
        format,
    );
    Ok(())
}

/// Open a file in the user's editor, resolving relative paths against
/// the root.
pub fn edit(layout: &Layout, file: &Path) -> Result<()> {
    let target = ops::abs_path(layout.root(), file);
    editor::open(&target)
        .with_context(|| format!("Failed to edit {}", target.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_migrates_deprecated_dirs() {
        let tmp = TempDir::new().unwrap();
        let layout = Layout::with_root(tmp.path().join("root"));

        // Old-style tree with content under the deprecated names.
        fs::create_dir_all(layout.blockchains()).unwrap();
        fs::write(layout.blockchains().join("genesis.json"), "{}").unwrap();
        fs::create_dir_all(layout.dapps().join("demo")).unwrap();
        fs::write(layout.dapps().join("demo/app.toml"), "name = \"demo\"").unwrap();

        init(&layout, true, OutputFormat::Human).unwrap();

        assert!(!layout.blockchains().exists());
        assert!(!layout.dapps().exists());
        assert_eq!(
            fs::read_to_string(layout.chains().join("genesis.json")).unwrap(),
            "{}"
        );
        assert_eq!(
            fs::read_to_string(layout.apps().join("demo/app.toml")).unwrap(),
            "name = \"demo\""
        );
    }

    #[test]
    fn test_init_without_migrate_leaves_old_dirs() {
        let tmp = TempDir::new().unwrap();
        let layout = Layout::with_root(tmp.path().join("root"));
        fs::create_dir_all(layout.dapps()).unwrap();

        init(&layout, false, OutputFormat::Human).unwrap();

        assert!(layout.dapps().exists());
    }

    #[test]
    fn test_clean_defaults_to_scratch() {
        let tmp = TempDir::new().unwrap();
        let layout = Layout::with_root(tmp.path().join("root"));
        layout.ensure().unwrap();
        fs::write(layout.pm_scratch().join("leftover"), "x").unwrap();

        clean(&layout, None, OutputFormat::Human).unwrap();

        assert!(layout.scratch().is_dir());
        assert_eq!(fs::read_dir(layout.scratch()).unwrap().count(), 0);
    }

    #[test]
    fn test_clean_named_subdirectory() {
        let tmp = TempDir::new().unwrap();
        let layout = Layout::with_root(tmp.path().join("root"));
        layout.ensure().unwrap();
        fs::write(layout.apps().join("stale.toml"), "x").unwrap();

        clean(&layout, Some("apps"), OutputFormat::Human).unwrap();

        assert!(layout.apps().is_dir());
        assert_eq!(fs::read_dir(layout.apps()).unwrap().count(), 0);
    }
}
