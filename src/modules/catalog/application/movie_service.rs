use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::log_debug;
use crate::modules::catalog::domain::entities::{Actor, Movie};
use crate::modules::catalog::domain::repositories::CatalogStore;
use crate::shared::application::{paginate, PaginatedResult, PaginationParams};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMovie {
    pub title: String,
    pub date: NaiveDate,
}

/// Inline actor entry on the movie-creation form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewActorName {
    pub first_name: String,
    pub last_name: String,
}

/// A movie together with its linked actors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetails {
    pub movie: Movie,
    pub actors: Vec<Actor>,
}

/// Movie CRUD over a catalog store.
pub struct MovieService<'a, S: CatalogStore> {
    store: &'a mut S,
}

impl<'a, S: CatalogStore> MovieService<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Movies ordered by title, one page at a time.
    pub fn list(&self, params: &PaginationParams) -> AppResult<PaginatedResult<Movie>> {
        paginate(&self.store.movies_by_title(), params)
    }

    pub fn get(&self, id: &Uuid) -> AppResult<MovieDetails> {
        let movie = self
            .store
            .movie_by_id(id)
            .ok_or_else(|| AppError::NotFound(format!("Movie {} not found", id)))?;
        let actors = self.store.actors_of_movie(id);
        Ok(MovieDetails { movie, actors })
    }

    /// Create a movie, linking existing actors by id and creating any fully
    /// named new actors inline.
    ///
    /// Duplicate titles are rejected case-insensitively. Unknown actor ids
    /// and half-filled new-actor entries are skipped rather than rejected.
    pub fn create(
        &mut self,
        new_movie: NewMovie,
        actor_ids: &[Uuid],
        new_actors: &[NewActorName],
    ) -> AppResult<Movie> {
        Validator::validate_movie_title(&new_movie.title)?;

        if self.title_exists(&new_movie.title) {
            return Err(AppError::ValidationError(
                "A movie with this title already exists".to_string(),
            ));
        }

        let movie = Movie::new(new_movie.title, new_movie.date);
        let movie_id = movie.id;
        self.store.add_movie(movie.clone());

        for actor_id in actor_ids {
            if self.store.actor_by_id(actor_id).is_some() {
                self.store.link(&movie_id, actor_id);
            } else {
                log_debug!("Skipping unknown actor id {}", actor_id);
            }
        }

        for entry in new_actors {
            if entry.first_name.trim().is_empty() || entry.last_name.trim().is_empty() {
                continue;
            }
            let actor = Actor::new(entry.first_name.clone(), entry.last_name.clone());
            let actor_id = actor.id;
            self.store.add_actor(actor);
            self.store.link(&movie_id, &actor_id);
        }

        self.store.commit()?;
        Ok(movie)
    }

    /// Update title and date only; relations are untouched.
    pub fn update(&mut self, id: &Uuid, title: String, date: NaiveDate) -> AppResult<Movie> {
        Validator::validate_movie_title(&title)?;

        let mut movie = self
            .store
            .movie_by_id(id)
            .ok_or_else(|| AppError::NotFound(format!("Movie {} not found", id)))?;
        movie.title = title;
        movie.date = date;

        self.store.update_movie(movie.clone())?;
        self.store.commit()?;
        Ok(movie)
    }

    /// Remove the movie and its association pairs; linked actors stay.
    pub fn delete(&mut self, id: &Uuid) -> AppResult<()> {
        self.store.remove_movie(id)?;
        self.store.commit()
    }

    fn title_exists(&self, title: &str) -> bool {
        self.store
            .movies_by_title()
            .iter()
            .any(|m| m.title.eq_ignore_ascii_case(title))
    }
}
