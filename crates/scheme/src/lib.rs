//! Naming schemes for metadata-driven file renaming.
//!
//! A scheme is a flat, ordered sequence of tokens — literal text fragments
//! and references to metadata keys — that concatenate left to right into a
//! filename. This crate owns the scheme data model, the lenient compiler
//! that turns loosely-typed input into a clean token sequence, and the
//! sanitizer that scrubs generated names of filesystem-illegal characters.
//!
//! Deliberately not a templating language: no conditionals, no nesting, no
//! formatters. Anything that is not a literal or a key reference is dropped
//! at compile time.

mod sanitize;
mod token;

pub use crate::sanitize::{ILLEGAL_CHARS, sanitize};
pub use crate::token::{RawToken, Scheme, Token};
