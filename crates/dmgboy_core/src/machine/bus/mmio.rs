//! CPU-visible address decoding.
//!
//! Reads and writes never fail: unmapped or locked regions read as 0xFF and
//! swallow writes.

mod read;
mod write;
