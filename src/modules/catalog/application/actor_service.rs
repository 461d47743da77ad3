use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::catalog::domain::entities::{Actor, Movie};
use crate::modules::catalog::domain::repositories::CatalogStore;
use crate::shared::application::{paginate, PaginatedResult, PaginationParams};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

/// An actor together with the movies they appear in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorDetails {
    pub actor: Actor,
    pub movies: Vec<Movie>,
}

/// One entry of the actor selection list shown on movie forms.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActorChoice {
    pub id: Uuid,
    pub display_name: String,
    pub selected: bool,
}

/// Actor CRUD over a catalog store.
pub struct ActorService<'a, S: CatalogStore> {
    store: &'a mut S,
}

impl<'a, S: CatalogStore> ActorService<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Actors ordered by last name then first name, one page at a time.
    pub fn list(&self, params: &PaginationParams) -> AppResult<PaginatedResult<Actor>> {
        paginate(&self.store.actors_by_name(), params)
    }

    pub fn get(&self, id: &Uuid) -> AppResult<ActorDetails> {
        let actor = self
            .store
            .actor_by_id(id)
            .ok_or_else(|| AppError::NotFound(format!("Actor {} not found", id)))?;
        let movies = self.store.movies_of_actor(id);
        Ok(ActorDetails { actor, movies })
    }

    /// Create an actor; duplicate full names are rejected case-insensitively.
    pub fn create(&mut self, first_name: String, last_name: String) -> AppResult<Actor> {
        Validator::validate_actor_name(&first_name, &last_name)?;

        if self.name_exists(&first_name, &last_name) {
            return Err(AppError::ValidationError(
                "An actor with this name already exists".to_string(),
            ));
        }

        let actor = Actor::new(first_name, last_name);
        self.store.add_actor(actor.clone());
        self.store.commit()?;
        Ok(actor)
    }

    pub fn update(&mut self, id: &Uuid, first_name: String, last_name: String) -> AppResult<Actor> {
        Validator::validate_actor_name(&first_name, &last_name)?;

        let mut actor = self
            .store
            .actor_by_id(id)
            .ok_or_else(|| AppError::NotFound(format!("Actor {} not found", id)))?;
        actor.first_name = first_name;
        actor.last_name = last_name;

        self.store.update_actor(actor.clone())?;
        self.store.commit()?;
        Ok(actor)
    }

    /// Remove the actor and its association pairs; linked movies stay.
    pub fn delete(&mut self, id: &Uuid) -> AppResult<()> {
        self.store.remove_actor(id)?;
        self.store.commit()
    }

    /// Selection list for movie forms, with already-picked ids flagged.
    pub fn choices(&self, selected: &[Uuid]) -> Vec<ActorChoice> {
        self.store
            .actors_by_name()
            .into_iter()
            .map(|actor| ActorChoice {
                id: actor.id,
                display_name: actor.full_name(),
                selected: selected.contains(&actor.id),
            })
            .collect()
    }

    fn name_exists(&self, first_name: &str, last_name: &str) -> bool {
        self.store.actors_by_name().iter().any(|a| {
            a.first_name.eq_ignore_ascii_case(first_name)
                && a.last_name.eq_ignore_ascii_case(last_name)
        })
    }
}
