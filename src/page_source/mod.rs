// src/page_source/mod.rs
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::ScanConfig;
use crate::engine::{extract_signals, ClassifiedResult};

pub mod fetcher;
pub mod snapshot;

pub use fetcher::PageFetcher;
pub use snapshot::snapshot_from_html;

/// Outcome of one profile scan. A failed fetch is reported in-band with
/// `success = false` and an empty result so a batch of independent scans can
/// tolerate individual failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub id: String,
    pub url: String,
    pub success: bool,
    pub error_message: Option<String>,
    pub signals: ClassifiedResult,
    pub scan_duration_ms: u64,
    pub scanned_at: String,
}

pub struct ProfileScanner {
    fetcher: PageFetcher,
}

impl ProfileScanner {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            fetcher: PageFetcher::new(config),
        }
    }

    /// Fetches the page once, snapshots it, and runs the discovery engine.
    /// One attempt per call; retry and backoff belong to the caller.
    pub async fn scan(&self, url: &str) -> ScanReport {
        let start_time = Instant::now();
        info!("🔎 Scanning profile page: {}", url);

        let (success, error_message, signals) = match self.fetcher.fetch(url).await {
            Ok(html) => {
                let page = snapshot_from_html(&html, url);
                (true, None, extract_signals(&page))
            }
            Err(e) => {
                warn!("Failed to fetch {}: {}", url, e);
                (false, Some(e.to_string()), ClassifiedResult::default())
            }
        };

        let report = ScanReport {
            id: Uuid::new_v4().to_string(),
            url: url.to_string(),
            success,
            error_message,
            signals,
            scan_duration_ms: start_time.elapsed().as_millis() as u64,
            scanned_at: chrono::Utc::now().to_rfc3339(),
        };

        if report.success {
            info!(
                "🎯 Scan complete for {}: {} emails, {} social links, {} websites in {}ms",
                url,
                report.signals.emails.len(),
                report.signals.social_links_found,
                report.signals.websites.len(),
                report.scan_duration_ms
            );
        }

        report
    }
}
