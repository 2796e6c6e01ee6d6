//! Library crate root re-exporting the checklist, reporter and CLI modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod checks;
pub mod cli;
pub mod config;
pub mod report;
pub mod runtime;
