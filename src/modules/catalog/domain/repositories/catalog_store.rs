use chrono::NaiveDate;
use uuid::Uuid;

use crate::modules::catalog::domain::entities::{Actor, Movie};
use crate::shared::errors::AppResult;

/// Synchronous access to the movie/actor catalog.
///
/// Mutations accumulate as staged changes; `commit` persists everything
/// staged since the last commit as one logical batch. Implementations are
/// not required to be thread-safe; callers needing concurrent access must
/// serialize externally.
#[cfg_attr(test, mockall::automock)]
pub trait CatalogStore {
    fn count_movies(&self) -> usize;
    fn count_actors(&self) -> usize;

    /// Exact-match duplicate probe used by the importer.
    fn find_movie_by_title_and_date(&self, title: &str, date: NaiveDate) -> Option<Movie>;
    /// Exact-match lookup by (first name, last name).
    fn find_actor_by_name(&self, first_name: &str, last_name: &str) -> Option<Actor>;

    fn movie_by_id(&self, id: &Uuid) -> Option<Movie>;
    fn actor_by_id(&self, id: &Uuid) -> Option<Actor>;

    /// All movies ordered by title, then date.
    fn movies_by_title(&self) -> Vec<Movie>;
    /// All actors ordered by last name, then first name.
    fn actors_by_name(&self) -> Vec<Actor>;

    fn actors_of_movie(&self, movie_id: &Uuid) -> Vec<Actor>;
    fn movies_of_actor(&self, actor_id: &Uuid) -> Vec<Movie>;

    fn add_movie(&mut self, movie: Movie);
    fn add_actor(&mut self, actor: Actor);

    fn update_movie(&mut self, movie: Movie) -> AppResult<()>;
    fn update_actor(&mut self, actor: Actor) -> AppResult<()>;

    /// Remove the movie and its association pairs. Linked actors stay.
    fn remove_movie(&mut self, id: &Uuid) -> AppResult<()>;
    /// Remove the actor and its association pairs. Linked movies stay.
    fn remove_actor(&mut self, id: &Uuid) -> AppResult<()>;

    /// Record the symmetric movie/actor association. Idempotent.
    fn link(&mut self, movie_id: &Uuid, actor_id: &Uuid);

    fn is_dirty(&self) -> bool;

    /// Persist all staged changes as one batch.
    fn commit(&mut self) -> AppResult<()>;
}
