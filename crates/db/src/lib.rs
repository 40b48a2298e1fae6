//! `db` crate — data-access layer for the art marketplace.
//!
//! Reads and writes the `users` and `artworks` tables and reshapes joined rows
//! into the view models handed to the application layer. Users double as
//! artists and charities, so most reads join `users` twice under two aliases.

pub mod error;
pub mod format;
pub mod models;
pub mod pool;
pub mod repository;

pub use error::DbError;
pub use pool::DbPool;
pub use repository::Repository;
