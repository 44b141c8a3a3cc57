//! JSON snapshot file source

use super::{PriceQuote, PriceSnapshot, PriceSource, RawQuote};
use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Accepted file layouts: a bare list of quotes, or the `{"prices": [...]}`
/// shape served by the price API
///
/// Entries stay untyped here so one bad quote cannot fail the document.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SnapshotDocument {
    List(Vec<Value>),
    Wrapped { prices: Vec<Value> },
}

fn read_quote(entry: Value) -> Option<PriceQuote> {
    let exchange = entry
        .get("exchange")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let quote = serde_json::from_value::<RawQuote>(entry)
        .map_err(anyhow::Error::from)
        .and_then(|raw| PriceQuote::try_from(raw).map_err(anyhow::Error::from));

    match quote {
        Ok(quote) => Some(quote),
        Err(e) => {
            tracing::warn!(exchange = %exchange, error = %e, "Dropping unreadable quote");
            None
        }
    }
}

/// Parse a JSON snapshot document
///
/// Entries with missing or mistyped fields, non-finite or out-of-range
/// numbers, or an unparseable timestamp are dropped with a warning; a
/// malformed document is an error.
pub fn parse_snapshot(json: &str) -> anyhow::Result<PriceSnapshot> {
    let document: SnapshotDocument =
        serde_json::from_str(json).context("Malformed snapshot document")?;
    let entries = match document {
        SnapshotDocument::List(entries) => entries,
        SnapshotDocument::Wrapped { prices } => prices,
    };

    let total = entries.len();
    let snapshot: PriceSnapshot = entries.into_iter().filter_map(read_quote).collect();

    tracing::debug!(total, kept = snapshot.len(), "Parsed snapshot");
    Ok(snapshot)
}

/// Reads the snapshot from a JSON file on every fetch
///
/// Stands in for live venue polling: whatever last wrote the file
/// determines the next cycle's quotes.
#[derive(Debug, Clone)]
pub struct FileSnapshotSource {
    path: PathBuf,
}

impl FileSnapshotSource {
    /// Create a source for the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File being read
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PriceSource for FileSnapshotSource {
    async fn fetch_snapshot(&self) -> anyhow::Result<PriceSnapshot> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read snapshot {}", self.path.display()))?;
        parse_snapshot(&content)
    }
}
