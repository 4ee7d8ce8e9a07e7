pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod export;
pub mod session;
pub mod stats;
pub mod ui;
pub mod validation;
