//! The engine: configuration, batch planning, and execution entry points.

use crate::error::{ErrorKind, Result};
use crate::execute;
use crate::generate;
use crate::plan::RenamePlan;
use remeta_extract::MetadataProvider;
use remeta_scheme::{ILLEGAL_CHARS, RawToken, Scheme};
use std::path::Path;
use tracing::warn;

/// Default substitution character for filesystem-illegal characters.
pub const DEFAULT_SUBSTITUTION: char = '_';

/// Scheme-based batch renamer.
///
/// Holds the engine's configuration — the default compiled [`Scheme`], the
/// substitution character, and the metadata provider — as explicit instance
/// state. Configuration is mutable between calls; the engine is fully
/// synchronous and not designed for concurrent mutation, so cross-thread
/// reuse needs external synchronization.
///
/// The three caller-facing operations are [`set_scheme`](Self::set_scheme),
/// [`plan`](Self::plan) (or [`plan_with`](Self::plan_with)) and
/// [`execute`](Self::execute). Planning and execution are decoupled through
/// the [`RenamePlan`] value.
///
/// # Example
///
/// ```no_run
/// use remeta_engine::Renamer;
/// use remeta_extract::ExtensionRouter;
/// use std::path::PathBuf;
///
/// let mut renamer = Renamer::new(ExtensionRouter::new());
/// renamer.set_scheme(["Test-", ":date_time"]);
/// let plan = renamer.plan([PathBuf::from("hs-2003-24-a-full.tif")]);
/// renamer.execute(&plan);
/// ```
pub struct Renamer<P> {
    provider: P,
    scheme: Scheme,
    substitution: char,
}
impl<P: MetadataProvider> Renamer<P> {
    /// Creates an engine with an empty default scheme and `_` substitution.
    pub fn new(provider: P) -> Self {
        Self { provider, scheme: Scheme::default(), substitution: DEFAULT_SUBSTITUTION }
    }

    /// The currently stored default scheme.
    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    /// Compiles `raw` and stores it as the default scheme, replacing the
    /// previous one. Invalid entries are dropped, never stored.
    pub fn set_scheme<I>(&mut self, raw: I)
    where
        I: IntoIterator,
        I::Item: Into<RawToken>,
    {
        self.scheme = Scheme::compile(raw);
    }

    /// The configured substitution character.
    pub fn substitution(&self) -> char {
        self.substitution
    }

    /// Sets the substitution character used by the sanitizer.
    ///
    /// # Errors
    /// [`ErrorKind::InvalidArgument`] if the replacement is itself a
    /// filesystem-illegal character, which would defeat sanitization.
    pub fn set_substitution(&mut self, substitution: char) -> Result<()> {
        if ILLEGAL_CHARS.contains(&substitution) {
            exn::bail!(ErrorKind::InvalidArgument(format!(
                "substitution character {substitution:?} is itself illegal in filenames"
            )));
        }
        self.substitution = substitution;
        Ok(())
    }

    /// Builds a [`RenamePlan`] for `paths` using the stored default scheme.
    ///
    /// Paths are processed strictly in input order. Every per-file failure
    /// (missing file, unsupported type, missing metadata key) is logged and
    /// the file omitted from the plan — no entry, no placeholder — without
    /// aborting the rest of the batch. Callers needing an audit trail
    /// compare input count against [`RenamePlan::len`].
    pub fn plan<I>(&self, paths: I) -> RenamePlan
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
    {
        self.plan_scheme(paths, &self.scheme)
    }

    /// Like [`plan`](Self::plan), but compiles `raw` into an override scheme
    /// used for this call only. The stored default scheme is not mutated.
    pub fn plan_with<I, R>(&self, paths: I, raw: R) -> RenamePlan
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
        R: IntoIterator,
        R::Item: Into<RawToken>,
    {
        let scheme = Scheme::compile(raw);
        self.plan_scheme(paths, &scheme)
    }

    fn plan_scheme<I>(&self, paths: I, scheme: &Scheme) -> RenamePlan
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
    {
        let mut plan = RenamePlan::new();
        for path in paths {
            let path = path.as_ref();
            match generate::resolve(&self.provider, path, scheme, self.substitution) {
                Ok(new_filename) => {
                    plan.insert(path.to_path_buf(), new_filename);
                },
                Err(e) => warn!(path = %path.display(), error = %e, "skipping file"),
            }
        }
        plan
    }

    /// Commits a plan to disk. Convenience for [`crate::execute`]; see there
    /// for the best-effort, non-transactional semantics.
    pub fn execute(&self, plan: &RenamePlan) {
        execute::execute(plan);
    }
}
