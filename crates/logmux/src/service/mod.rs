//! Facade, dispatch, and timing services

mod debugger;
mod dispatcher;
mod stopwatch;

pub use debugger::*;
pub use dispatcher::*;
pub use stopwatch::*;
