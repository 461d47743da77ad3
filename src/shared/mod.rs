// Shared kernel used by every bounded context

pub mod application; // Pagination and page-bar building blocks
pub mod errors; // Shared error types
pub mod utils; // Logging and validation helpers
