//! File I/O for header generation.
//!
//! Inputs are read through a read-only memory mapping using `lightweight-mmap`. Outputs are
//! staged in a temporary file next to the destination and renamed over it, so an interrupted
//! run never leaves a truncated header behind.

mod error;
mod input;
mod output;

pub use error::*;
pub use input::*;
pub use output::*;
