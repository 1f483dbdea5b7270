// src/engine/harvester.rs
use serde_json::Value;
use std::collections::HashSet;
use tracing::debug;

use crate::engine::types::PageSignal;

/// Merges the three link sources into a single ordered candidate list.
///
/// Concatenation order matters: generic anchors first, then links from
/// platform-specific UI containers, then URLs recovered from structured-data
/// blocks. The classifier's first-wins rules key off this order. Exact string
/// duplicates are dropped, first occurrence kept; no canonicalization.
pub fn harvest_links(page: &PageSignal) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();
    merged.extend(page.anchor_links.iter().cloned());
    merged.extend(page.platform_links.iter().cloned());
    merged.extend(structured_data_links(&page.structured_blocks));

    let mut seen = HashSet::new();
    merged.retain(|link| seen.insert(link.clone()));

    debug!("Harvested {} candidate links", merged.len());
    merged
}

/// Pulls `sameAs` URLs out of each raw structured-data block. Blocks are
/// parsed independently: a malformed block is skipped without discarding
/// links already found in the others.
fn structured_data_links(blocks: &[String]) -> Vec<String> {
    let mut links = Vec::new();

    for block in blocks {
        let value: Value = match serde_json::from_str(block) {
            Ok(value) => value,
            Err(_) => continue,
        };

        // A block is either a single record or an array of records.
        match value {
            Value::Array(records) => {
                for record in &records {
                    collect_same_as(record, &mut links);
                }
            }
            record => collect_same_as(&record, &mut links),
        }
    }

    links
}

fn collect_same_as(record: &Value, links: &mut Vec<String>) {
    // "sameAs" may be a single URL or an ordered list of URLs.
    match record.get("sameAs") {
        Some(Value::String(url)) => links.push(url.clone()),
        Some(Value::Array(urls)) => {
            for url in urls {
                if let Value::String(url) = url {
                    links.push(url.clone());
                }
            }
        }
        _ => {}
    }
}
