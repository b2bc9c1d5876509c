//! Per-file filename generation.

use crate::error::{ErrorKind, Result};
use remeta_extract::MetadataProvider;
use remeta_scheme::{Scheme, Token, sanitize};
use std::path::Path;
use tracing::instrument;

/// Resolves one file's new name from a compiled scheme and that file's
/// metadata.
///
/// Steps, in order:
/// 1. the path must refer to an existing regular file;
/// 2. metadata is looked up for the resolved absolute path;
/// 3. tokens concatenate left to right — a key whose value is absent or
///    empty aborts resolution of this file;
/// 4. the original extension is appended, case unchanged, with its leading
///    dot (files without an extension get nothing);
/// 5. the accumulated name is sanitized with `substitution`.
///
/// Returns a bare filename, never a path. Every failure here is scoped to
/// the one file; the planner logs it and moves on.
#[instrument(skip_all, fields(path = %path.display()))]
pub(crate) fn resolve<P: MetadataProvider>(
    provider: &P,
    path: &Path,
    scheme: &Scheme,
    substitution: char,
) -> Result<String> {
    if !path.is_file() {
        exn::bail!(ErrorKind::FileNotValid(path.to_path_buf()));
    }
    let absolute = std::path::absolute(path).map_err(|_| ErrorKind::FileNotValid(path.to_path_buf()))?;
    let metadata = provider.lookup(&absolute).map_err(|e| ErrorKind::metadata(path, e))?;

    let mut name = String::new();
    for token in scheme.tokens() {
        match token {
            Token::Literal(text) => name.push_str(text),
            Token::Key(key) => match metadata.get(key) {
                Some(value) if !value.is_empty() => name.push_str(value),
                _ => exn::bail!(ErrorKind::MissingKey { path: path.to_path_buf(), key: key.clone() }),
            },
        }
    }
    if let Some(extension) = path.extension() {
        name.push('.');
        name.push_str(&extension.to_string_lossy());
    }
    Ok(sanitize(&name, substitution))
}
