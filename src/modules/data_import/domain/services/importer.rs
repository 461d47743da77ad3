use chrono::NaiveDate;

use crate::log_debug;
use crate::modules::catalog::domain::entities::{Actor, Movie};
use crate::modules::catalog::domain::repositories::CatalogStore;
use crate::modules::data_import::domain::types::{ImportSummary, MovieRecord};
use crate::shared::errors::AppResult;

const EXACT_DATE_FORMAT: &str = "%m/%d/%Y";
const FALLBACK_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y", "%d %B %Y"];

/// Idempotent catalog seeding from raw movie records.
///
/// Malformed rows are skipped, never fatal; a re-run over the same rows
/// changes nothing. All staged writes go out as one commit at the end.
pub struct CatalogImporter;

impl CatalogImporter {
    pub fn import_movies<I, S>(rows: I, store: &mut S) -> AppResult<ImportSummary>
    where
        I: IntoIterator<Item = MovieRecord>,
        S: CatalogStore + ?Sized,
    {
        let mut summary = ImportSummary::default();

        for record in rows {
            summary.rows_read += 1;

            if record.title.trim().is_empty() || record.date_text.trim().is_empty() {
                summary.rows_skipped_invalid += 1;
                continue;
            }

            let Some(date) = parse_release_date(record.date_text.trim()) else {
                log_debug!(
                    "Skipping '{}': unparsable date '{}'",
                    record.title,
                    record.date_text
                );
                summary.rows_skipped_invalid += 1;
                continue;
            };

            // Duplicate suppression is exact-match on (title, date)
            if store
                .find_movie_by_title_and_date(&record.title, date)
                .is_some()
            {
                summary.rows_skipped_duplicate += 1;
                continue;
            }

            let movie = Movie::new(record.title.clone(), date);
            let movie_id = movie.id;
            store.add_movie(movie);
            summary.movies_imported += 1;

            for full_name in record.crew.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                let Some((first_name, last_name)) = split_full_name(full_name) else {
                    log_debug!("Skipping crew entry without a last name: '{}'", full_name);
                    continue;
                };

                let actor_id = match store.find_actor_by_name(&first_name, &last_name) {
                    Some(existing) => {
                        summary.actors_reused += 1;
                        existing.id
                    }
                    None => {
                        let actor = Actor::new(first_name, last_name);
                        let id = actor.id;
                        store.add_actor(actor);
                        summary.actors_created += 1;
                        id
                    }
                };

                store.link(&movie_id, &actor_id);
                summary.links_created += 1;
            }
        }

        // One batch write for the whole run
        store.commit()?;
        Ok(summary)
    }
}

/// Exact `MM/dd/yyyy` first, then a short chain of invariant fallbacks.
fn parse_release_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, EXACT_DATE_FORMAT)
        .ok()
        .or_else(|| {
            FALLBACK_DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        })
}

/// Split a full name on the first whitespace into (first, rest-as-last).
fn split_full_name(full_name: &str) -> Option<(String, String)> {
    let (first, rest) = full_name.trim().split_once(char::is_whitespace)?;
    let last = rest.trim();
    if first.is_empty() || last.is_empty() {
        return None;
    }
    Some((first.to_string(), last.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::domain::repositories::MockCatalogStore;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn exact_format_is_tried_first() {
        assert_eq!(parse_release_date("09/23/1994"), Some(date(1994, 9, 23)));
        // 12/01 must read as December 1st, not January 12th
        assert_eq!(parse_release_date("12/01/2000"), Some(date(2000, 12, 1)));
    }

    #[test]
    fn fallback_formats_cover_common_variants() {
        assert_eq!(parse_release_date("1994-09-23"), Some(date(1994, 9, 23)));
        assert_eq!(
            parse_release_date("September 23, 1994"),
            Some(date(1994, 9, 23))
        );
        assert_eq!(parse_release_date("23 September 1994"), Some(date(1994, 9, 23)));
        assert_eq!(parse_release_date("not-a-date"), None);
        assert_eq!(parse_release_date("13/40/1994"), None);
    }

    #[test]
    fn full_names_split_on_first_whitespace() {
        assert_eq!(
            split_full_name("Tom Hanks"),
            Some(("Tom".to_string(), "Hanks".to_string()))
        );
        assert_eq!(
            split_full_name("  Robert Downey Jr.  "),
            Some(("Robert".to_string(), "Downey Jr.".to_string()))
        );
        assert_eq!(split_full_name("Cher"), None);
        assert_eq!(split_full_name("   "), None);
    }

    #[test]
    fn duplicate_rows_write_nothing_and_commit_once() {
        let mut store = MockCatalogStore::new();
        let existing = Movie::new("Heat".to_string(), date(1995, 12, 15));

        let expected_date = date(1995, 12, 15);
        store
            .expect_find_movie_by_title_and_date()
            .withf(move |title, date| title == "Heat" && *date == expected_date)
            .times(1)
            .return_const(Some(existing));
        store.expect_add_movie().never();
        store.expect_add_actor().never();
        store.expect_commit().times(1).returning(|| Ok(()));

        let rows = vec![MovieRecord::new("Heat", "12/15/1995", "Al Pacino")];
        let summary = CatalogImporter::import_movies(rows, &mut store).unwrap();

        assert_eq!(summary.rows_read, 1);
        assert_eq!(summary.rows_skipped_duplicate, 1);
        assert_eq!(summary.movies_imported, 0);
    }

    #[test]
    fn unparsable_rows_never_touch_the_store() {
        let mut store = MockCatalogStore::new();
        store.expect_find_movie_by_title_and_date().never();
        store.expect_add_movie().never();
        store.expect_commit().times(1).returning(|| Ok(()));

        let rows = vec![
            MovieRecord::new("Bad Date", "not-a-date", "Some Actor"),
            MovieRecord::new("", "01/01/2000", "Ghost Writer"),
            MovieRecord::new("No Date", "   ", ""),
        ];
        let summary = CatalogImporter::import_movies(rows, &mut store).unwrap();

        assert_eq!(summary.rows_skipped_invalid, 3);
        assert_eq!(summary.movies_imported, 0);
    }
}
