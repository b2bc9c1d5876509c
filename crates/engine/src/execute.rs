//! Best-effort rename execution.

use crate::error::{ErrorKind, Result};
use crate::plan::RenamePlan;
use std::fs;
use std::path::{Component, Path};
use tracing::{debug, warn};

/// Commits a [`RenamePlan`] to disk, one pair at a time.
///
/// Each pair is handled independently: the old path must still be an
/// existing regular file and the new name a bare, non-empty filename; the
/// destination is always the new name joined against the *original file's
/// directory*. Any validation or filesystem failure is logged at `warn` and
/// the pair is skipped — nothing aborts the remaining pairs.
///
/// Not transactional: a failure partway through leaves a mix of renamed and
/// un-renamed files with no rollback. There is deliberately no post-rename
/// check that the destination now exists, and no structured success/skip
/// report — the outcome is observable through logs (callers needing an
/// audit trail compare the plan against the filesystem themselves).
pub fn execute(plan: &RenamePlan) {
    for (old_path, new_filename) in plan.iter() {
        match rename_pair(old_path, new_filename) {
            Ok(()) => debug!(old = %old_path.display(), new = new_filename, "renamed"),
            Err(e) => warn!(old = %old_path.display(), new = new_filename, error = %e, "skipping rename pair"),
        }
    }
}

fn rename_pair(old_path: &Path, new_filename: &str) -> Result<()> {
    if !old_path.is_file() {
        exn::bail!(ErrorKind::FileNotValid(old_path.to_path_buf()));
    }
    validate_filename(new_filename)?;
    // parent() is None only for a root path, which can never be a file.
    let directory = old_path.parent().unwrap_or_else(|| Path::new(""));
    let destination = directory.join(new_filename);
    fs::rename(old_path, &destination).map_err(ErrorKind::Io)?;
    Ok(())
}

/// Enforces the plan invariant on a new-name value: non-empty, and a single
/// normal path component (no separators, no `.`/`..`, no root). Plans are
/// caller-mutable between planning and execution, so this cannot be assumed.
fn validate_filename(new_filename: &str) -> Result<()> {
    let mut components = Path::new(new_filename).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => exn::bail!(ErrorKind::InvalidFilename(new_filename.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs::File;

    fn touch(path: &Path) {
        File::create(path).unwrap();
    }

    #[test]
    fn test_renames_within_source_directory() {
        let dir = tempfile::tempdir().unwrap();
        let old = dir.path().join("a.tif");
        touch(&old);
        let plan: RenamePlan = [(old.clone(), "b.tif".to_string())].into_iter().collect();
        execute(&plan);
        assert!(!old.exists());
        assert!(dir.path().join("b.tif").is_file());
    }

    #[test]
    fn test_missing_source_does_not_block_valid_pair() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone.tif");
        let present = dir.path().join("here.tif");
        touch(&present);
        let plan: RenamePlan = [
            (missing.clone(), "gone-renamed.tif".to_string()),
            (present.clone(), "here-renamed.tif".to_string()),
        ]
        .into_iter()
        .collect();
        // No panic, no error escapes.
        execute(&plan);
        assert!(!dir.path().join("gone-renamed.tif").exists());
        assert!(dir.path().join("here-renamed.tif").is_file());
        assert!(!present.exists());
    }

    #[test]
    fn test_empty_new_name_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let old = dir.path().join("a.tif");
        touch(&old);
        let plan: RenamePlan = [(old.clone(), String::new())].into_iter().collect();
        execute(&plan);
        assert!(old.is_file());
    }

    #[rstest]
    #[case("sub/b.tif")]
    #[case("../b.tif")]
    #[case("/b.tif")]
    #[case("..")]
    #[case(".")]
    fn test_new_name_with_directory_component_is_skipped(#[case] hostile: &str) {
        let dir = tempfile::tempdir().unwrap();
        let old = dir.path().join("a.tif");
        touch(&old);
        let plan: RenamePlan = [(old.clone(), hostile.to_string())].into_iter().collect();
        execute(&plan);
        assert!(old.is_file(), "source must survive hostile name {hostile:?}");
    }

    #[test]
    fn test_destination_stays_in_original_directory() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("nested");
        std::fs::create_dir(&sub).unwrap();
        let old = sub.join("a.tif");
        touch(&old);
        let plan: RenamePlan = [(old, "b.tif".to_string())].into_iter().collect();
        execute(&plan);
        assert!(sub.join("b.tif").is_file());
        assert!(!dir.path().join("b.tif").exists());
    }

    #[test]
    fn test_directory_source_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("iam-a-dir");
        std::fs::create_dir(&sub).unwrap();
        let plan: RenamePlan = [(sub.clone(), "renamed".to_string())].into_iter().collect();
        execute(&plan);
        assert!(sub.is_dir());
        assert!(!dir.path().join("renamed").exists());
    }

    #[test]
    fn test_validate_filename() {
        assert!(validate_filename("a.tif").is_ok());
        assert!(validate_filename("Test-2003-09-03 12_52_43 -0400.tif").is_ok());
        assert!(validate_filename("").is_err());
        assert!(validate_filename("a/b").is_err());
        assert!(validate_filename("/a").is_err());
        assert!(validate_filename("..").is_err());
        assert!(validate_filename(".").is_err());
    }

    #[test]
    fn test_empty_plan_is_a_no_op() {
        execute(&RenamePlan::new());
    }
}
