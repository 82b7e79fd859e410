pub mod backend;
pub mod checks;
pub mod ci;
pub mod cli;
pub mod config;
pub mod console;
pub mod formatters;
pub mod report;
pub mod types;
