//! Scheme tokens and compilation.

use serde::Deserialize;
use tracing::debug;

/// One element of a compiled naming scheme.
///
/// These are the only two kinds a [`Scheme`] can hold; compilation drops
/// everything else. Order is significant — tokens concatenate left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Literal text, appended verbatim.
    Literal(String),
    /// Reference to a metadata key, resolved per file at generation time.
    Key(String),
}

/// Loosely-typed scheme input, before compilation.
///
/// Scheme definitions arrive from untrusted, weakly-structured sources
/// (command-line flags, JSON arrays in configuration), so the input type
/// admits more than the two valid token kinds and lets [`Scheme::compile`]
/// sort it out. Deserializes untagged, so a JSON array like
/// `["A-", ":date_time", 5, null]` maps directly onto a `Vec<RawToken>`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawToken {
    /// Text: compiles to [`Token::Key`] when prefixed with `:`, otherwise
    /// to [`Token::Literal`].
    Text(String),
    /// Numeric entry; dropped during compilation.
    Number(f64),
    /// Boolean entry; dropped during compilation.
    Bool(bool),
    /// Null entry; dropped during compilation.
    Null,
}
impl From<String> for RawToken {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}
impl From<&str> for RawToken {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// A compiled naming scheme: an ordered sequence of valid [`Token`]s.
///
/// Immutable once compiled; replace the whole value to change the scheme.
/// The default scheme is empty, which generates names consisting of nothing
/// but the original file extension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scheme {
    tokens: Vec<Token>,
}
impl Scheme {
    /// Compiles loosely-typed input into an ordered sequence of valid tokens.
    ///
    /// Text entries beginning with `:` become [`Token::Key`] references
    /// (`":date_time"` → key `date_time`); all other text becomes
    /// [`Token::Literal`]. Every other entry kind — numbers, booleans,
    /// nulls, a bare `":"` — is discarded, preserving the relative order of
    /// the survivors. A consequence of the `:` convention is that a literal
    /// cannot begin with a colon; a leading colon always reads as a key.
    ///
    /// Never fails: empty or fully-invalid input yields an empty scheme.
    ///
    /// ```
    /// use remeta_scheme::{RawToken, Scheme, Token};
    ///
    /// let scheme = Scheme::compile(["A-", ":key", "B"]);
    /// assert_eq!(
    ///     scheme.tokens(),
    ///     &[
    ///         Token::Literal("A-".to_string()),
    ///         Token::Key("key".to_string()),
    ///         Token::Literal("B".to_string()),
    ///     ],
    /// );
    ///
    /// let scheme = Scheme::compile([RawToken::Number(5.0), RawToken::Null]);
    /// assert!(scheme.is_empty());
    /// ```
    pub fn compile<I>(raw: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<RawToken>,
    {
        let tokens = raw
            .into_iter()
            .filter_map(|entry| match entry.into() {
                RawToken::Text(s) => match s.strip_prefix(':') {
                    Some("") => {
                        debug!("dropping scheme entry `:` with no key name");
                        None
                    },
                    Some(key) => Some(Token::Key(key.to_string())),
                    None => Some(Token::Literal(s)),
                },
                other => {
                    debug!(entry = ?other, "dropping non-token scheme entry");
                    None
                },
            })
            .collect();
        Self { tokens }
    }

    /// The compiled tokens, in scheme order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns `true` if compilation produced no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of compiled tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }
}
