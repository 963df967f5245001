//! Local game index over a CSV rank snapshot.
//!
//! The snapshot is parsed exactly once, lazily, on the first search. All
//! callers await the same in-flight load; a load failure is sticky and every
//! later search reports it until the process restarts.

mod types;

pub use types::*;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::{info, warn};

use crate::catalog::ItemKind;

/// Local index configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalIndexConfig {
    /// Path to the CSV rank snapshot.
    pub csv_path: PathBuf,
}

#[derive(Debug, Error)]
pub enum LocalIndexError {
    /// The one-time load failed; sticky until restart.
    #[error("local index unavailable: {0}")]
    Unavailable(String),
}

/// In-memory search over the rank snapshot.
pub struct LocalIndex {
    csv_path: PathBuf,
    // Load outcome, computed once. The error is kept as a message so every
    // later caller can report the same failure.
    records: OnceCell<Result<Arc<Vec<LocalIndexRecord>>, String>>,
}

impl LocalIndex {
    pub fn new(config: LocalIndexConfig) -> Self {
        Self {
            csv_path: config.csv_path,
            records: OnceCell::new(),
        }
    }

    async fn loaded(&self) -> Result<Arc<Vec<LocalIndexRecord>>, LocalIndexError> {
        let outcome = self
            .records
            .get_or_init(|| async {
                match load_snapshot(&self.csv_path).await {
                    Ok(records) => {
                        info!(
                            "Local index loaded {} valid games from {:?}",
                            records.len(),
                            self.csv_path
                        );
                        Ok(Arc::new(records))
                    }
                    Err(e) => {
                        warn!("Local index load failed, service unavailable until restart: {e}");
                        Err(e.to_string())
                    }
                }
            })
            .await;

        match outcome {
            Ok(records) => Ok(Arc::clone(records)),
            Err(msg) => Err(LocalIndexError::Unavailable(msg.clone())),
        }
    }

    /// Search the snapshot. An all-digit query matches at most the one record
    /// with exactly that id; any other query matches names containing it
    /// case-insensitively, in load order.
    pub async fn search(&self, query: &str) -> Result<Vec<LocalIndexRecord>, LocalIndexError> {
        let records = self.loaded().await?;

        let is_id_query = !query.is_empty() && query.chars().all(|c| c.is_ascii_digit());
        if is_id_query {
            return Ok(records
                .iter()
                .find(|r| r.id == query)
                .cloned()
                .into_iter()
                .collect());
        }

        let needle = query.to_lowercase();
        Ok(records
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    /// Number of loaded records, triggering the load if necessary.
    pub async fn len(&self) -> Result<usize, LocalIndexError> {
        Ok(self.loaded().await?.len())
    }
}

async fn load_snapshot(path: &Path) -> anyhow::Result<Vec<LocalIndexRecord>> {
    let data = tokio::fs::read(path).await?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data.as_slice());

    // Header names are trimmed and lowercased before access.
    let columns: HashMap<String, usize> = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, h)| (h.trim().to_lowercase(), i))
        .collect();

    let field = |record: &csv::StringRecord, name: &str| -> Option<String> {
        columns
            .get(name)
            .and_then(|&i| record.get(i))
            .map(|s| s.trim().to_string())
    };

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;

        // Rows without an id or a non-empty name are skipped, not errors.
        let Some(id) = field(&row, "id").filter(|s| !s.is_empty()) else {
            continue;
        };
        let Some(name) = field(&row, "name").filter(|s| !s.is_empty()) else {
            continue;
        };

        let year_published = field(&row, "yearpublished").and_then(|s| s.parse().ok());
        // Non-positive ranks mean "unranked".
        let rank = field(&row, "rank")
            .and_then(|s| s.parse::<i64>().ok())
            .filter(|&r| r > 0)
            .map(|r| r as u32);
        let average_rating = field(&row, "bayesaverage")
            .or_else(|| field(&row, "average"))
            .and_then(|s| s.parse().ok());
        let kind = if field(&row, "is_expansion").as_deref() == Some("1") {
            ItemKind::Expansion
        } else {
            ItemKind::BaseGame
        };

        records.push(LocalIndexRecord {
            id,
            name,
            year_published,
            rank,
            average_rating,
            kind,
        });
    }

    Ok(records)
}
