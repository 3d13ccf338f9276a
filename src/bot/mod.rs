//! Bot module - dispatcher wiring and runners.

pub mod dispatcher;
mod runtime;
pub mod webhook;

pub use dispatcher::{ThrottledBot, build_dispatcher};
pub use runtime::run;
