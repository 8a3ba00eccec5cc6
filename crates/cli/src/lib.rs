// File: crates/cli/src/lib.rs
// Summary: CLI library: argument model, font discovery and the run driver used by the binary.

pub mod cli;
pub mod fonts;
pub mod run;
