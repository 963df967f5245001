//! Types for the local rank-snapshot index.

use serde::{Deserialize, Serialize};

use crate::catalog::ItemKind;

/// One game from the local rank snapshot.
///
/// Loaded once from the CSV snapshot at startup; the in-memory set is
/// immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocalIndexRecord {
    /// External catalog identifier.
    pub id: String,
    /// Game name; rows without a non-empty name are dropped during load.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_published: Option<i32>,
    /// Popularity rank; `None` means unranked (absent or non-positive).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
    /// Bayesian average rating proxy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
    pub kind: ItemKind,
}
