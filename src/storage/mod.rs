pub mod checks;
pub mod posts;
pub mod sqlite;

pub use checks::{Health, Metrics};
pub use posts::{Post, PostRepository};
pub use sqlite::{Database, StorageError};
