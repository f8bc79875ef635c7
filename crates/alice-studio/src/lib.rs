//! Shared pieces of the studio binaries.

pub mod sample;
