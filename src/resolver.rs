// src/resolver.rs
//! Per-domain lookup with a single fixed-delay retry and scope filtering

use tracing::{debug, warn};

use crate::crtsh::CertSource;
use crate::filter::ScopeFilter;
use crate::retry::{RetryPolicy, Sleeper};

/// How a domain lookup ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveStatus {
    /// An attempt returned at least one raw name
    Found,
    /// Every attempt failed or came back empty
    Exhausted,
}

/// Result of resolving one root domain
#[derive(Debug, Clone)]
pub struct Resolution {
    pub domain: String,
    /// In-scope names, possibly with duplicates
    pub names: Vec<String>,
    /// Raw candidate count before scope filtering
    pub raw_count: usize,
    pub attempts: u32,
    pub status: ResolveStatus,
}

impl Resolution {
    pub fn retried(&self) -> bool {
        self.attempts > 1
    }
}

/// Looks up root domains through a [`CertSource`], honoring a [`RetryPolicy`]
pub struct DomainResolver<S, Z> {
    source: S,
    sleeper: Z,
    policy: RetryPolicy,
}

impl<S, Z> DomainResolver<S, Z>
where
    S: CertSource,
    Z: Sleeper,
{
    pub fn new(source: S, sleeper: Z, policy: RetryPolicy) -> Self {
        Self {
            source,
            sleeper,
            policy,
        }
    }

    /// Resolve `domain` into its in-scope names.
    ///
    /// A transport failure and an empty result are handled alike: a notice is
    /// logged, the retry delay is waited out and the lookup is repeated. When
    /// attempts run out the domain contributes nothing.
    pub async fn resolve(&self, domain: &str) -> Resolution {
        let mut attempt = 1;

        loop {
            if let Some(delay) = self.policy.delay_before(attempt) {
                self.sleeper.sleep(delay).await;
            }

            debug!("Looking up {} (attempt {}/{})", domain, attempt, self.policy.max_attempts);

            match self.source.fetch_names(domain).await {
                Ok(raw) if !raw.is_empty() => {
                    let raw_count = raw.len();
                    let names = ScopeFilter::new(domain).apply(raw);
                    debug!("{}: {} candidates, {} in scope", domain, raw_count, names.len());

                    return Resolution {
                        domain: domain.to_string(),
                        names,
                        raw_count,
                        attempts: attempt,
                        status: ResolveStatus::Found,
                    };
                }
                Ok(_) => debug!("{}: empty result", domain),
                Err(e) => debug!("{}: lookup failed: {}", domain, e),
            }

            if !self.policy.should_retry(attempt) {
                warn!("Still no response for {} - skipping.", domain);
                return Resolution {
                    domain: domain.to_string(),
                    names: Vec::new(),
                    raw_count: 0,
                    attempts: attempt,
                    status: ResolveStatus::Exhausted,
                };
            }

            warn!(
                "No response for {} - retrying after {}s...",
                domain,
                self.policy.retry_delay.as_secs()
            );
            attempt += 1;
        }
    }

    /// Wait the inter-domain pacing delay
    pub async fn pace(&self) {
        if !self.policy.pace_delay.is_zero() {
            self.sleeper.sleep(self.policy.pace_delay).await;
        }
    }
}
