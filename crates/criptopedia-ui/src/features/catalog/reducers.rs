//! Catalog store reducers.

use crate::core::error::ClientError;
use crate::core::store::{AppStore, notify};
use crate::models::{AlgorithmRecord, ToastKind};

/// Toast shown when the catalog fetch fails.
pub const CATALOG_LOAD_FAILED: &str = "Error cargando los algoritmos";

/// Mark the catalog as loading ahead of a fetch.
pub fn begin_catalog_load(store: &mut AppStore) {
    store.catalog.mark_loading();
}

/// Apply the outcome of a catalog fetch.
pub fn apply_catalog_loaded(
    store: &mut AppStore,
    result: Result<Vec<AlgorithmRecord>, ClientError>,
) {
    match result {
        Ok(records) => store.catalog.replace_snapshot(records),
        Err(err) => {
            store.catalog.mark_failed(err.to_string());
            notify(store, CATALOG_LOAD_FAILED, ToastKind::Error);
        }
    }
}
