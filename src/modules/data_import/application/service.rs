use std::path::Path;

use crate::modules::catalog::domain::repositories::CatalogStore;
use crate::modules::data_import::domain::services::importer::CatalogImporter;
use crate::modules::data_import::domain::types::{ImportSummary, MovieRecord};
use crate::shared::errors::{AppError, AppResult};
use crate::{log_debug, log_info};

/// File-level entry point for catalog seeding.
pub struct ImportService;

impl ImportService {
    /// Seed the store from a headered CSV file (`names`, `date_x`, `crew`
    /// columns).
    ///
    /// A missing or unreadable file is an error and leaves the store
    /// untouched; rows that fail to decode are skipped like any other
    /// malformed row.
    pub fn seed_from_csv<P, S>(path: P, store: &mut S) -> AppResult<ImportSummary>
    where
        P: AsRef<Path>,
        S: CatalogStore,
    {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AppError::NotFound(format!(
                "CSV file not found: {}",
                path.display()
            )));
        }

        let mut reader = csv::Reader::from_path(path)?;
        let rows = reader
            .deserialize::<MovieRecord>()
            .filter_map(|row| match row {
                Ok(record) => Some(record),
                Err(err) => {
                    log_debug!("Skipping undecodable CSV row: {}", err);
                    None
                }
            });

        let summary = CatalogImporter::import_movies(rows, store)?;
        log_info!("CSV import of {} finished: {}", path.display(), summary);
        Ok(summary)
    }
}
