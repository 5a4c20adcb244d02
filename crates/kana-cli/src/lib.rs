pub mod commands;
pub mod trace;
