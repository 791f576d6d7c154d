mod cache;
mod loader;
mod store;

pub use cache::CatalogCache;
pub use loader::{load_catalog, read_catalog, REQUIRED_COLUMNS};
pub use store::Catalog;
