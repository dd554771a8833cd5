//! Grammar execution engine.
//!
//! The walker keeps an explicit stack of open spans and scans the text left
//! to right, trying the innermost span's child rules, then its end.

mod error;
mod frame;
mod highlight;
mod trace;
mod walker;


pub use error::RuntimeError;
pub use highlight::{Highlight, Token};
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
pub use walker::{FuelLimits, Walker};
