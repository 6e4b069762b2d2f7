//! worklog-gist: where the log document lives.
//!
//! [`DocumentStore`] is the fetch/save seam. [`GistStore`] talks to the GitHub Gist API;
//! [`MemoryStore`] keeps files in process for tests and dry runs.

mod error;
mod gist;
mod memory;

pub use error::StoreError;
pub use gist::GistStore;
pub use memory::MemoryStore;

use async_trait::async_trait;

/// Named text files inside one remote collection.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Current content of `name`, or an empty string when the file does not exist yet.
    async fn fetch(&self, name: &str) -> Result<String, StoreError>;

    /// Overwrite (or create) `name` with `content`.
    async fn save(&self, name: &str, content: &str) -> Result<(), StoreError>;
}
