pub mod catalog;
pub mod config;
pub mod local_index;
pub mod ranking;
pub mod testing;

pub use catalog::{
    BggClient, BggConfig, CatalogCache, CatalogDetails, CatalogError, CatalogItem, CatalogLink,
    GameCatalog, ItemKind, LinkKind, VersionRecord, UNKNOWN_GAME,
};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, SanitizedConfig,
    ServerConfig,
};
pub use local_index::{LocalIndex, LocalIndexConfig, LocalIndexError, LocalIndexRecord};
pub use ranking::{rank_records, MAX_RESULTS};
