pub mod actor_service;
pub mod movie_service;

pub use actor_service::{ActorChoice, ActorDetails, ActorService};
pub use movie_service::{MovieDetails, MovieService, NewActorName, NewMovie};
