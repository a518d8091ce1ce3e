pub mod cli;
pub mod config;
pub mod output;
pub mod search;
pub mod truncate;
