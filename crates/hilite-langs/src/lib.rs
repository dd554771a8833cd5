//! Built-in hilite grammars.
//!
//! Each grammar is built once on first use and shared through an `Arc`.

use std::sync::Arc;

use hilite_core::Language;

pub mod builtin;
#[cfg(feature = "lang-pkl")]
pub mod pkl;

pub use builtin::*;

/// Shared handle to a registered grammar.
pub type Lang = Arc<Language>;
