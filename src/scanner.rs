// src/scanner.rs
//! Sequential scan of the domain list into one deduplicated result set

use tracing::{debug, info};

use crate::aggregate::SubdomainSet;
use crate::crtsh::CertSource;
use crate::progress::ProgressIndicator;
use crate::resolver::DomainResolver;
use crate::retry::Sleeper;
use crate::stats::ScanStats;

/// Everything a finished scan produced
#[derive(Debug)]
pub struct ScanReport {
    pub subdomains: SubdomainSet,
    pub stats: ScanStats,
}

/// Drives a [`DomainResolver`] over the input domains one at a time
pub struct Scanner<S, Z> {
    resolver: DomainResolver<S, Z>,
    progress: ProgressIndicator,
}

impl<S, Z> Scanner<S, Z>
where
    S: CertSource,
    Z: Sleeper,
{
    pub fn new(resolver: DomainResolver<S, Z>, progress: ProgressIndicator) -> Self {
        Self { resolver, progress }
    }

    /// Resolve every domain in input order and union the results.
    ///
    /// A domain that yields nothing does not stop the scan. The pacing delay
    /// runs between consecutive domains regardless of the previous outcome.
    pub async fn scan(&self, domains: &[String]) -> ScanReport {
        let mut subdomains = SubdomainSet::new();
        let mut stats = ScanStats::new();
        let total = domains.len();

        info!("Scanning {} root domains", total);

        self.progress.start();

        for (index, domain) in domains.iter().enumerate() {
            self.progress.set_domain(index + 1, total, domain);

            let resolution = self.resolver.resolve(domain).await;
            stats.record(&resolution);

            let added = subdomains.extend(resolution.names);
            debug!(
                "{}: {} raw candidates, {} new subdomains ({} total)",
                resolution.domain,
                resolution.raw_count,
                added,
                subdomains.len()
            );

            if index + 1 < total {
                self.resolver.pace().await;
            }
        }

        self.progress.finish();
        info!("{}", stats.format_summary(subdomains.len()));

        ScanReport { subdomains, stats }
    }
}
