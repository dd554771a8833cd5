//! Reference walker for hilite grammars.
//!
//! This crate runs a [`hilite_core::Language`] over text the way a hosting
//! highlighting engine would, producing classified tokens. It exists to test
//! grammars, not to replace a production highlighter.

pub mod engine;

pub use engine::{
    FuelLimits, Highlight, NoopTracer, PrintTracer, RuntimeError, Token, Tracer, Verbosity, Walker,
};
