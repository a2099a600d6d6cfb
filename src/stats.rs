//! Run statistics for a scan

use std::time::Instant;

use crate::resolver::{Resolution, ResolveStatus};

/// Counters collected while scanning the domain list
#[derive(Debug, Clone)]
pub struct ScanStats {
    domains_processed: u64,
    domains_retried: u64,
    domains_skipped: u64,
    in_scope_found: u64,
    start_time: Instant,
}

/// Snapshot of statistics at a point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub domains_processed: u64,
    pub domains_retried: u64,
    pub domains_skipped: u64,
    /// In-scope names before cross-domain deduplication
    pub in_scope_found: u64,
    pub elapsed_secs: u64,
}

impl ScanStats {
    pub fn new() -> Self {
        Self {
            domains_processed: 0,
            domains_retried: 0,
            domains_skipped: 0,
            in_scope_found: 0,
            start_time: Instant::now(),
        }
    }

    /// Account for one resolved domain
    pub fn record(&mut self, resolution: &Resolution) {
        self.domains_processed += 1;
        if resolution.retried() {
            self.domains_retried += 1;
        }
        if resolution.status == ResolveStatus::Exhausted {
            self.domains_skipped += 1;
        }
        self.in_scope_found += resolution.names.len() as u64;
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            domains_processed: self.domains_processed,
            domains_retried: self.domains_retried,
            domains_skipped: self.domains_skipped,
            in_scope_found: self.in_scope_found,
            elapsed_secs: self.start_time.elapsed().as_secs(),
        }
    }

    /// One-line summary; `unique` is the size of the final deduplicated set
    pub fn format_summary(&self, unique: usize) -> String {
        let snapshot = self.snapshot();
        format!(
            "{} domains processed | {} retried | {} skipped | {} unique subdomains | elapsed: {}",
            snapshot.domains_processed,
            snapshot.domains_retried,
            snapshot.domains_skipped,
            unique,
            Self::format_elapsed(snapshot.elapsed_secs)
        )
    }

    pub fn format_elapsed(secs: u64) -> String {
        let hours = secs / 3600;
        let minutes = (secs % 3600) / 60;
        let seconds = secs % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}

impl Default for ScanStats {
    fn default() -> Self {
        Self::new()
    }
}
