pub mod catalog;
pub mod cli;
pub mod entity;
pub mod error;
pub mod ledger;
pub mod service;
pub mod store;
pub mod utils;

pub use catalog::{Catalog, CatalogSource, SearchResults};
pub use entity::prelude::*;
pub use error::{CatalogError, ShelfError, ShelfResult};
pub use ledger::{FavouritesLedger, RecencyLedger, SettingsLedger, most_recent_first};
pub use service::Shelf;
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreAdapter};
