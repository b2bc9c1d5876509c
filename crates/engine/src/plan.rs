//! Rename plans: the decoupling point between planning and execution.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A mapping from original file path (unique key) to a *bare* new filename.
///
/// Load-bearing invariant: the new value is a file name plus extension,
/// never a path — it carries no directory component. The executor joins it
/// against the original file's directory, so a plan can never move a file
/// anywhere else.
///
/// A plan is a plain value. Planning and execution are decoupled: callers
/// may inspect a plan, mutate it (the executor re-validates each entry), or
/// discard it without executing anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenamePlan {
    entries: BTreeMap<PathBuf, String>,
}
impl RenamePlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a pair, returning the previous new-name for `old_path` if the
    /// path was already planned.
    pub fn insert(&mut self, old_path: PathBuf, new_filename: impl Into<String>) -> Option<String> {
        self.entries.insert(old_path, new_filename.into())
    }

    /// The planned new filename for `old_path`, if any.
    pub fn get(&self, old_path: &Path) -> Option<&str> {
        self.entries.get(old_path).map(String::as_str)
    }

    /// Removes a pair from the plan.
    pub fn remove(&mut self, old_path: &Path) -> Option<String> {
        self.entries.remove(old_path)
    }

    /// Number of planned pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing was planned.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all `(old_path, new_filename)` pairs in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.entries.iter().map(|(path, name)| (path.as_path(), name.as_str()))
    }
}
impl FromIterator<(PathBuf, String)> for RenamePlan {
    fn from_iter<I: IntoIterator<Item = (PathBuf, String)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut plan = RenamePlan::new();
        assert!(plan.is_empty());
        plan.insert(PathBuf::from("/photos/a.tif"), "renamed.tif");
        assert_eq!(plan.get(Path::new("/photos/a.tif")), Some("renamed.tif"));
        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn test_insert_is_keyed_by_unique_path() {
        let mut plan = RenamePlan::new();
        plan.insert(PathBuf::from("a.tif"), "one.tif");
        let previous = plan.insert(PathBuf::from("a.tif"), "two.tif");
        assert_eq!(previous.as_deref(), Some("one.tif"));
        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn test_caller_may_mutate() {
        let mut plan: RenamePlan = [(PathBuf::from("a.tif"), "x.tif".to_string())].into_iter().collect();
        plan.remove(Path::new("a.tif"));
        assert!(plan.is_empty());
    }
}
