// src/lib.rs — Library root for athenagen

pub mod cli;
pub mod infra;
pub mod scaffold;
