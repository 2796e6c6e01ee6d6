pub mod checklist;
pub mod preflight;
