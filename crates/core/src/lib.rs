//! Engine crate for `gen_ranges`: non-overlapping interval sampling plus the
//! JSON beautify/compare companions. The binary crate owns argument parsing
//! and presentation; everything observable about the tools' behavior lives
//! here.

pub mod config;
pub mod error;
pub mod interval;
pub mod json;
pub mod options;
pub mod output;
pub mod sampler;
