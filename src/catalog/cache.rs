use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::catalog::{load_catalog, Catalog};
use crate::error::Result;

/// Loads the catalog on first use and hands out the same copy afterwards.
///
/// One cache lives for the whole interactive session, so regenerating a
/// plan never touches the file system again.
#[derive(Debug)]
pub struct CatalogCache {
    path: PathBuf,
    cell: OnceCell<Catalog>,
}

impl CatalogCache {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            cell: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Return the cached catalog, loading it if this is the first call.
    pub fn get_or_load(&self) -> Result<&Catalog> {
        if let Some(catalog) = self.cell.get() {
            debug!("catalog cache hit");
            return Ok(catalog);
        }

        let catalog = load_catalog(&self.path)?;
        Ok(self.cell.get_or_init(|| catalog))
    }
}
