pub mod cache;
pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod logging;
pub mod repl;
pub mod schemas;
