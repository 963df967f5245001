//! Types for catalog API responses.

use serde::{Deserialize, Serialize};

/// Placeholder name used when the upstream record carries no usable name.
pub const UNKNOWN_GAME: &str = "Unknown Game";

/// Kind of catalog item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// A standalone base game.
    #[serde(rename = "base game", alias = "base_game")]
    BaseGame,
    /// An expansion to a base game.
    #[serde(rename = "expansion")]
    Expansion,
}

impl ItemKind {
    /// Parse from the upstream catalog's `type` attribute.
    pub fn from_upstream(s: &str) -> Option<Self> {
        match s {
            "boardgame" => Some(Self::BaseGame),
            "boardgameexpansion" => Some(Self::Expansion),
            _ => None,
        }
    }

    /// The upstream catalog's `type` parameter value for this kind.
    pub fn upstream_name(&self) -> &'static str {
        match self {
            Self::BaseGame => "boardgame",
            Self::Expansion => "boardgameexpansion",
        }
    }
}

/// A single search hit from the external catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    /// Stable identifier assigned by the external catalog.
    pub id: String,
    /// Display name (primary name when several are returned).
    pub name: String,
    /// Publication year, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_published: Option<i32>,
    /// Base game or expansion.
    pub kind: ItemKind,
}

/// Kind of relationship link attached to a catalog record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    Publisher,
    Designer,
    Expansion,
    Category,
    Mechanic,
    Family,
}

impl LinkKind {
    /// Parse from the upstream catalog's link `type` attribute.
    /// Link types outside this set are dropped at the decode boundary.
    pub fn from_upstream(s: &str) -> Option<Self> {
        match s {
            "boardgamepublisher" => Some(Self::Publisher),
            "boardgamedesigner" => Some(Self::Designer),
            "boardgameexpansion" => Some(Self::Expansion),
            "boardgamecategory" => Some(Self::Category),
            "boardgamemechanic" => Some(Self::Mechanic),
            "boardgamefamily" => Some(Self::Family),
            _ => None,
        }
    }
}

/// A typed relationship link on a catalog record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogLink {
    pub kind: LinkKind,
    /// Identifier of the linked record.
    pub id: String,
    /// Display value of the link (publisher name, expansion title, ...).
    pub value: String,
}

/// Full record for a single catalog item, fetched with statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogDetails {
    /// Stable identifier assigned by the external catalog.
    pub id: String,
    /// Display name (primary name when several are returned).
    pub name: String,
    /// Base game or expansion.
    pub kind: ItemKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_published: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_players: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_players: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playing_time_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_playtime_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_playtime_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_age: Option<u32>,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Aggregate rating on a 0-10 scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratings_count: Option<u64>,
    /// Overall rank; `None` means unranked (absent or non-positive upstream).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
    /// Typed relationship links (publisher, designer, expansion, ...).
    #[serde(default)]
    pub links: Vec<CatalogLink>,
}

impl CatalogDetails {
    /// Values of all links of the given kind, in upstream order.
    /// Empty values are already dropped at the decode boundary.
    pub fn link_values(&self, kind: LinkKind) -> Vec<&str> {
        self.links
            .iter()
            .filter(|l| l.kind == kind)
            .map(|l| l.value.as_str())
            .collect()
    }

    /// Identifiers of all links of the given kind, in upstream order.
    pub fn link_ids(&self, kind: LinkKind) -> Vec<String> {
        self.links
            .iter()
            .filter(|l| l.kind == kind)
            .map(|l| l.id.clone())
            .collect()
    }

    /// First publisher link value, when any.
    pub fn primary_publisher(&self) -> Option<&str> {
        self.link_values(LinkKind::Publisher).first().copied()
    }
}

/// Version metadata for a catalog item (localized printings, editions).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VersionRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_published: Option<i32>,
    /// First publisher link of the version, when any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
