//! CLI entrypoint module structure.

pub mod args;
pub mod profile;

pub use args::AuditArgs;
pub use profile::{resolve_format, resolve_root, AuditProfile};
