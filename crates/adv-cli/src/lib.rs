#![deny(unsafe_code)]

//! Library side of the `advcheck` binary.

pub mod logging;
pub mod pipeline;
pub mod report;
pub mod samples;
