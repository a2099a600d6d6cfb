// src/lib.rs
// Library interface for ct-subfind
pub mod aggregate;
pub mod cli;
pub mod config;
pub mod crtsh;
pub mod error;
pub mod filter;
pub mod input;
pub mod output;
pub mod progress;
pub mod resolver;
pub mod retry;
pub mod scanner;
pub mod stats;
