//! Helpers used by the benchmark binary.
//!
//! - **`perf`**: reads the peak resident set size of the current process on Linux.

pub mod perf;
