//! A reference interpreter for subleq.
//!
//! It runs the same state machine as the generated dispatch loop, but every
//! memory access is checked against the image and reported as an error
//! instead of touching memory outside of it.

pub mod err;
pub mod eval;
pub mod syntax;

pub use err::{DynamicsError, Result};
pub use eval::{Exit, Step};
pub use syntax::{Memory, Runtime};
