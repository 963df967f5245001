//! Wire-format decoding for the BoardGameGeek XML API 2.
//!
//! All shape normalization happens here, once, at the API boundary:
//! `item`, `link`, `name` and `rank` always decode as collections even when a
//! single element is present, the primary name wins over alternates, wrapped
//! numeric values degrade to `None` on parse failure instead of erroring, and
//! relationship links with unknown types or empty values are dropped.

use serde::Deserialize;

use super::types::{
    CatalogDetails, CatalogItem, CatalogLink, ItemKind, LinkKind, VersionRecord, UNKNOWN_GAME,
};
use super::CatalogError;

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Deserialize)]
struct XmlItems {
    #[serde(rename = "item", default)]
    items: Vec<XmlItem>,
}

#[derive(Debug, Deserialize)]
struct XmlItem {
    #[serde(rename = "@id")]
    id: String,
    #[serde(rename = "@type", default)]
    kind: Option<String>,
    #[serde(rename = "name", default)]
    names: Vec<XmlName>,
    #[serde(rename = "yearpublished", default)]
    year_published: Option<XmlValue>,
    #[serde(default)]
    minplayers: Option<XmlValue>,
    #[serde(default)]
    maxplayers: Option<XmlValue>,
    #[serde(default)]
    playingtime: Option<XmlValue>,
    #[serde(default)]
    minplaytime: Option<XmlValue>,
    #[serde(default)]
    maxplaytime: Option<XmlValue>,
    #[serde(default)]
    minage: Option<XmlValue>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    thumbnail: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(rename = "link", default)]
    links: Vec<XmlLink>,
    #[serde(default)]
    statistics: Option<XmlStatistics>,
    #[serde(default)]
    versions: Option<XmlVersions>,
}

#[derive(Debug, Deserialize)]
struct XmlName {
    #[serde(rename = "@type", default)]
    kind: Option<String>,
    #[serde(rename = "@value", default)]
    value: Option<String>,
}

#[derive(Debug, Deserialize)]
struct XmlValue {
    #[serde(rename = "@value", default)]
    value: Option<String>,
}

#[derive(Debug, Deserialize)]
struct XmlLink {
    #[serde(rename = "@type", default)]
    kind: Option<String>,
    #[serde(rename = "@id", default)]
    id: Option<String>,
    #[serde(rename = "@value", default)]
    value: Option<String>,
}

#[derive(Debug, Deserialize)]
struct XmlStatistics {
    #[serde(default)]
    ratings: Option<XmlRatings>,
}

#[derive(Debug, Deserialize)]
struct XmlRatings {
    #[serde(default)]
    usersrated: Option<XmlValue>,
    #[serde(default)]
    average: Option<XmlValue>,
    #[serde(default)]
    ranks: Option<XmlRanks>,
}

#[derive(Debug, Deserialize)]
struct XmlRanks {
    #[serde(rename = "rank", default)]
    ranks: Vec<XmlRank>,
}

#[derive(Debug, Deserialize)]
struct XmlRank {
    #[serde(rename = "@name", default)]
    name: Option<String>,
    #[serde(rename = "@value", default)]
    value: Option<String>,
}

#[derive(Debug, Deserialize)]
struct XmlVersions {
    #[serde(rename = "item", default)]
    items: Vec<XmlVersionItem>,
}

#[derive(Debug, Deserialize)]
struct XmlVersionItem {
    #[serde(rename = "@id")]
    id: String,
    #[serde(rename = "name", default)]
    names: Vec<XmlName>,
    #[serde(rename = "yearpublished", default)]
    year_published: Option<XmlValue>,
    #[serde(rename = "link", default)]
    links: Vec<XmlLink>,
    #[serde(default)]
    thumbnail: Option<String>,
    #[serde(default)]
    image: Option<String>,
}

// ============================================================================
// Normalization helpers
// ============================================================================

/// Pick the display name: the entry flagged `primary` wins, else the first
/// entry, else the fixed placeholder.
fn display_name(names: &[XmlName]) -> String {
    names
        .iter()
        .find(|n| n.kind.as_deref() == Some("primary"))
        .or_else(|| names.first())
        .and_then(|n| n.value.clone())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| UNKNOWN_GAME.to_string())
}

/// Parse a wrapped numeric value; parse failure means "absent", not an error.
fn parse_wrapped<T: std::str::FromStr>(value: Option<&XmlValue>) -> Option<T> {
    value
        .and_then(|v| v.value.as_deref())
        .and_then(|s| s.trim().parse().ok())
}

/// Resolve the overall rank. The `boardgame` subtype rank is preferred over
/// family ranks; non-numeric values ("Not Ranked") and non-positive ranks
/// both mean unranked.
fn overall_rank(ranks: &[XmlRank]) -> Option<u32> {
    let rank = ranks
        .iter()
        .find(|r| r.name.as_deref() == Some("boardgame"))
        .or_else(|| ranks.first())?;
    let value: i64 = rank.value.as_deref()?.trim().parse().ok()?;
    if value > 0 {
        Some(value as u32)
    } else {
        None
    }
}

/// Decode relationship links, keeping only known types with non-empty values.
fn decode_links(links: Vec<XmlLink>) -> Vec<CatalogLink> {
    links
        .into_iter()
        .filter_map(|l| {
            let kind = LinkKind::from_upstream(l.kind.as_deref()?)?;
            let value = l.value.filter(|v| !v.is_empty())?;
            Some(CatalogLink {
                kind,
                id: l.id.unwrap_or_default(),
                value,
            })
        })
        .collect()
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|v| !v.trim().is_empty())
}

fn parse_error(context: &str, err: quick_xml::DeError) -> CatalogError {
    CatalogError::Parse(format!("{context}: {err}"))
}

// ============================================================================
// Decoders
// ============================================================================

/// Decode a `/search` response into catalog items, in response order.
/// Items whose type is outside the known kinds are dropped.
pub(crate) fn decode_search(xml: &str) -> Result<Vec<CatalogItem>, CatalogError> {
    let items: XmlItems =
        quick_xml::de::from_str(xml).map_err(|e| parse_error("search response", e))?;

    Ok(items
        .items
        .into_iter()
        .filter_map(|item| {
            let kind = ItemKind::from_upstream(item.kind.as_deref()?)?;
            Some(CatalogItem {
                name: display_name(&item.names),
                year_published: parse_wrapped(item.year_published.as_ref()),
                id: item.id,
                kind,
            })
        })
        .collect())
}

/// Decode a `/thing` response into full records, in response order.
pub(crate) fn decode_things(xml: &str) -> Result<Vec<CatalogDetails>, CatalogError> {
    let items: XmlItems =
        quick_xml::de::from_str(xml).map_err(|e| parse_error("thing response", e))?;

    Ok(items.items.into_iter().map(decode_details).collect())
}

fn decode_details(item: XmlItem) -> CatalogDetails {
    let ratings = item.statistics.and_then(|s| s.ratings);
    let (average_rating, ratings_count, rank) = match ratings {
        Some(r) => (
            parse_wrapped(r.average.as_ref()),
            parse_wrapped(r.usersrated.as_ref()),
            r.ranks.and_then(|ranks| overall_rank(&ranks.ranks)),
        ),
        None => (None, None, None),
    };

    CatalogDetails {
        name: display_name(&item.names),
        kind: item
            .kind
            .as_deref()
            .and_then(ItemKind::from_upstream)
            .unwrap_or(ItemKind::BaseGame),
        year_published: parse_wrapped(item.year_published.as_ref()),
        min_players: parse_wrapped(item.minplayers.as_ref()),
        max_players: parse_wrapped(item.maxplayers.as_ref()),
        playing_time_minutes: parse_wrapped(item.playingtime.as_ref()),
        min_playtime_minutes: parse_wrapped(item.minplaytime.as_ref()),
        max_playtime_minutes: parse_wrapped(item.maxplaytime.as_ref()),
        min_age: parse_wrapped(item.minage.as_ref()),
        description: non_empty(item.description),
        thumbnail: non_empty(item.thumbnail),
        image: non_empty(item.image),
        average_rating,
        ratings_count,
        rank,
        links: decode_links(item.links),
        id: item.id,
    }
}

/// Decode a `/thing?versions=1` response. `None` when the upstream reports
/// no matching item or the item carries no version block.
pub(crate) fn decode_versions(xml: &str) -> Result<Option<Vec<VersionRecord>>, CatalogError> {
    let items: XmlItems =
        quick_xml::de::from_str(xml).map_err(|e| parse_error("versions response", e))?;

    let Some(item) = items.items.into_iter().next() else {
        return Ok(None);
    };
    let Some(versions) = item.versions else {
        return Ok(None);
    };

    Ok(Some(
        versions
            .items
            .into_iter()
            .map(|v| {
                let links = decode_links(v.links);
                let publisher = links
                    .iter()
                    .find(|l| l.kind == LinkKind::Publisher)
                    .map(|l| l.value.clone());
                VersionRecord {
                    name: v
                        .names
                        .iter()
                        .find(|n| n.kind.as_deref() == Some("primary"))
                        .or_else(|| v.names.first())
                        .and_then(|n| n.value.clone())
                        .filter(|n| !n.is_empty()),
                    year_published: parse_wrapped(v.year_published.as_ref()),
                    publisher,
                    thumbnail: non_empty(v.thumbnail),
                    image: non_empty(v.image),
                    id: v.id,
                }
            })
            .collect(),
    ))
}
