//! Process-level I/O: signal handling.

pub mod signals;
