use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use uuid::Uuid;

use crate::log_debug;
use crate::modules::catalog::domain::entities::{Actor, Movie};
use crate::modules::catalog::domain::repositories::CatalogStore;
use crate::shared::errors::{AppError, AppResult};

/// Id-indexed catalog store.
///
/// Movies and actors live in arenas keyed by id; the many-to-many relation
/// is a separate set of `(movie_id, actor_id)` pairs, so neither entity owns
/// the other and removing one side drops only its pairs.
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    movies: HashMap<Uuid, Movie>,
    actors: HashMap<Uuid, Actor>,
    links: BTreeSet<(Uuid, Uuid)>,
    staged_changes: usize,
    commits: usize,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of commits performed, for verifying batch-write behavior.
    pub fn commit_count(&self) -> usize {
        self.commits
    }

    pub fn count_links(&self) -> usize {
        self.links.len()
    }

    pub fn is_linked(&self, movie_id: &Uuid, actor_id: &Uuid) -> bool {
        self.links.contains(&(*movie_id, *actor_id))
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn count_movies(&self) -> usize {
        self.movies.len()
    }

    fn count_actors(&self) -> usize {
        self.actors.len()
    }

    fn find_movie_by_title_and_date(&self, title: &str, date: NaiveDate) -> Option<Movie> {
        self.movies
            .values()
            .find(|m| m.title == title && m.date == date)
            .cloned()
    }

    fn find_actor_by_name(&self, first_name: &str, last_name: &str) -> Option<Actor> {
        self.actors
            .values()
            .find(|a| a.first_name == first_name && a.last_name == last_name)
            .cloned()
    }

    fn movie_by_id(&self, id: &Uuid) -> Option<Movie> {
        self.movies.get(id).cloned()
    }

    fn actor_by_id(&self, id: &Uuid) -> Option<Actor> {
        self.actors.get(id).cloned()
    }

    fn movies_by_title(&self) -> Vec<Movie> {
        let mut movies: Vec<Movie> = self.movies.values().cloned().collect();
        movies.sort_by(|a, b| a.title.cmp(&b.title).then(a.date.cmp(&b.date)));
        movies
    }

    fn actors_by_name(&self) -> Vec<Actor> {
        let mut actors: Vec<Actor> = self.actors.values().cloned().collect();
        actors.sort_by(|a, b| {
            a.last_name
                .cmp(&b.last_name)
                .then(a.first_name.cmp(&b.first_name))
        });
        actors
    }

    fn actors_of_movie(&self, movie_id: &Uuid) -> Vec<Actor> {
        let mut actors: Vec<Actor> = self
            .links
            .iter()
            .filter(|(m, _)| m == movie_id)
            .filter_map(|(_, a)| self.actors.get(a).cloned())
            .collect();
        actors.sort_by(|a, b| {
            a.last_name
                .cmp(&b.last_name)
                .then(a.first_name.cmp(&b.first_name))
        });
        actors
    }

    fn movies_of_actor(&self, actor_id: &Uuid) -> Vec<Movie> {
        let mut movies: Vec<Movie> = self
            .links
            .iter()
            .filter(|(_, a)| a == actor_id)
            .filter_map(|(m, _)| self.movies.get(m).cloned())
            .collect();
        movies.sort_by(|a, b| a.title.cmp(&b.title).then(a.date.cmp(&b.date)));
        movies
    }

    fn add_movie(&mut self, movie: Movie) {
        self.movies.insert(movie.id, movie);
        self.staged_changes += 1;
    }

    fn add_actor(&mut self, actor: Actor) {
        self.actors.insert(actor.id, actor);
        self.staged_changes += 1;
    }

    fn update_movie(&mut self, movie: Movie) -> AppResult<()> {
        match self.movies.get_mut(&movie.id) {
            Some(existing) => {
                *existing = movie;
                self.staged_changes += 1;
                Ok(())
            }
            None => Err(AppError::NotFound(format!("Movie {} not found", movie.id))),
        }
    }

    fn update_actor(&mut self, actor: Actor) -> AppResult<()> {
        match self.actors.get_mut(&actor.id) {
            Some(existing) => {
                *existing = actor;
                self.staged_changes += 1;
                Ok(())
            }
            None => Err(AppError::NotFound(format!("Actor {} not found", actor.id))),
        }
    }

    fn remove_movie(&mut self, id: &Uuid) -> AppResult<()> {
        if self.movies.remove(id).is_none() {
            return Err(AppError::NotFound(format!("Movie {} not found", id)));
        }
        self.links.retain(|(m, _)| m != id);
        self.staged_changes += 1;
        Ok(())
    }

    fn remove_actor(&mut self, id: &Uuid) -> AppResult<()> {
        if self.actors.remove(id).is_none() {
            return Err(AppError::NotFound(format!("Actor {} not found", id)));
        }
        self.links.retain(|(_, a)| a != id);
        self.staged_changes += 1;
        Ok(())
    }

    fn link(&mut self, movie_id: &Uuid, actor_id: &Uuid) {
        if self.links.insert((*movie_id, *actor_id)) {
            self.staged_changes += 1;
        }
    }

    fn is_dirty(&self) -> bool {
        self.staged_changes > 0
    }

    fn commit(&mut self) -> AppResult<()> {
        log_debug!(
            "Committing {} staged catalog change(s)",
            self.staged_changes
        );
        self.staged_changes = 0;
        self.commits += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn removing_a_movie_drops_its_links_but_not_its_actors() {
        let mut store = InMemoryCatalogStore::new();
        let movie = Movie::new("Cast Away".to_string(), date(2000, 12, 22));
        let actor = Actor::new("Tom".to_string(), "Hanks".to_string());
        let movie_id = movie.id;
        let actor_id = actor.id;

        store.add_movie(movie);
        store.add_actor(actor);
        store.link(&movie_id, &actor_id);
        store.commit().unwrap();

        store.remove_movie(&movie_id).unwrap();
        store.commit().unwrap();

        assert_eq!(store.count_movies(), 0);
        assert_eq!(store.count_actors(), 1);
        assert_eq!(store.count_links(), 0);
    }

    #[test]
    fn linking_twice_stages_only_one_change() {
        let mut store = InMemoryCatalogStore::new();
        let movie = Movie::new("Big".to_string(), date(1988, 6, 3));
        let actor = Actor::new("Tom".to_string(), "Hanks".to_string());
        let (movie_id, actor_id) = (movie.id, actor.id);

        store.add_movie(movie);
        store.add_actor(actor);
        store.commit().unwrap();
        assert!(!store.is_dirty());

        store.link(&movie_id, &actor_id);
        store.link(&movie_id, &actor_id);
        assert!(store.is_dirty());
        assert_eq!(store.count_links(), 1);
    }

    #[test]
    fn listings_are_ordered() {
        let mut store = InMemoryCatalogStore::new();
        store.add_movie(Movie::new("Zodiac".to_string(), date(2007, 3, 2)));
        store.add_movie(Movie::new("Alien".to_string(), date(1979, 5, 25)));
        store.add_actor(Actor::new("Meryl".to_string(), "Streep".to_string()));
        store.add_actor(Actor::new("Tom".to_string(), "Hanks".to_string()));
        store.commit().unwrap();

        let titles: Vec<String> = store.movies_by_title().into_iter().map(|m| m.title).collect();
        assert_eq!(titles, vec!["Alien".to_string(), "Zodiac".to_string()]);

        let names: Vec<String> = store
            .actors_by_name()
            .into_iter()
            .map(|a| a.full_name())
            .collect();
        assert_eq!(names, vec!["Tom Hanks".to_string(), "Meryl Streep".to_string()]);
    }

    #[test]
    fn update_of_a_missing_entity_is_not_found() {
        let mut store = InMemoryCatalogStore::new();
        let ghost = Movie::new("Ghost".to_string(), date(1990, 7, 13));
        assert!(matches!(
            store.update_movie(ghost),
            Err(AppError::NotFound(_))
        ));
    }
}
