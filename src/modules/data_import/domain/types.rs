use serde::{Deserialize, Serialize};

/// One raw row of the movie CSV.
///
/// Column names follow the source file: `names` is the title, `date_x` the
/// free-text release date, `crew` a comma-separated list of actor full
/// names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MovieRecord {
    #[serde(rename = "names")]
    pub title: String,
    #[serde(rename = "date_x")]
    pub date_text: String,
    #[serde(rename = "crew", default)]
    pub crew: String,
}

impl MovieRecord {
    pub fn new(title: &str, date_text: &str, crew: &str) -> Self {
        Self {
            title: title.to_string(),
            date_text: date_text.to_string(),
            crew: crew.to_string(),
        }
    }
}

/// Outcome of one import run.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub rows_read: usize,
    pub movies_imported: usize,
    pub rows_skipped_invalid: usize,
    pub rows_skipped_duplicate: usize,
    pub actors_created: usize,
    pub actors_reused: usize,
    pub links_created: usize,
}

impl std::fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} row(s) read, {} movie(s) imported, {} invalid, {} duplicate(s), \
             {} actor(s) created, {} reused, {} link(s)",
            self.rows_read,
            self.movies_imported,
            self.rows_skipped_invalid,
            self.rows_skipped_duplicate,
            self.actors_created,
            self.actors_reused,
            self.links_created
        )
    }
}
