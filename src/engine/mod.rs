// src/engine/mod.rs
pub mod classifier;
pub mod harvester;
pub mod types;

pub use classifier::SignalClassifier;
pub use types::{ClassifiedResult, PageSignal, Platform};

/// Runs the full discovery pass over one page snapshot: harvest the candidate
/// links, then classify them together with the page text. Stateless and
/// synchronous; safe to call concurrently for independent snapshots.
pub fn extract_signals(page: &PageSignal) -> ClassifiedResult {
    let links = harvester::harvest_links(page);
    SignalClassifier::new().classify(page, &links)
}
