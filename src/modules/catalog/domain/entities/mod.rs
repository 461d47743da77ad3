pub mod actor;
pub mod movie;

pub use actor::Actor;
pub use movie::Movie;
