// src/crtsh/mod.rs
pub mod client;
pub mod types;

pub use client::{CertSource, CrtShClient, DEFAULT_ENDPOINT};
pub use types::{extract_wildcard_names, CertEntry};
