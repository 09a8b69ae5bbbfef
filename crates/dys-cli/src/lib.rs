pub mod commands;
pub mod render;
pub mod trace_init;
