//! Test doubles and fixtures for consumers of the core crate.

mod mock_catalog;

pub use mock_catalog::{MockGameCatalog, RecordedQuery};

/// Ready-made domain values for tests.
pub mod fixtures {
    use crate::catalog::{CatalogDetails, CatalogItem, CatalogLink, ItemKind, LinkKind};

    pub fn catalog_item(id: &str, name: &str, kind: ItemKind) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: name.to_string(),
            year_published: Some(2019),
            kind,
        }
    }

    pub fn catalog_details(id: &str, name: &str, kind: ItemKind) -> CatalogDetails {
        CatalogDetails {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            year_published: Some(2019),
            min_players: Some(1),
            max_players: Some(5),
            playing_time_minutes: Some(70),
            min_playtime_minutes: Some(40),
            max_playtime_minutes: Some(70),
            min_age: Some(10),
            description: Some("A test game.".to_string()),
            thumbnail: None,
            image: None,
            average_rating: Some(7.5),
            ratings_count: Some(1000),
            rank: Some(100),
            links: Vec::new(),
        }
    }

    /// A base game whose expansion links point at the given ids.
    pub fn catalog_details_with_expansions(
        id: &str,
        name: &str,
        expansion_ids: &[&str],
    ) -> CatalogDetails {
        let mut details = catalog_details(id, name, ItemKind::BaseGame);
        details.links = expansion_ids
            .iter()
            .map(|expansion_id| CatalogLink {
                kind: LinkKind::Expansion,
                id: expansion_id.to_string(),
                value: format!("Expansion {expansion_id}"),
            })
            .collect();
        details
    }
}
