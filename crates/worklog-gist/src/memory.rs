use crate::error::StoreResult;
use crate::DocumentStore;
use async_trait::async_trait;
use dashmap::DashMap;

/// In-process store for tests and local runs without a gist.
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: DashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, name: &str, content: &str) -> Self {
        self.files.insert(name.to_string(), content.to_string());
        self
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.files.get(name).map(|v| v.value().clone())
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn fetch(&self, name: &str) -> StoreResult<String> {
        Ok(self.get(name).unwrap_or_default())
    }

    async fn save(&self, name: &str, content: &str) -> StoreResult<()> {
        self.files.insert(name.to_string(), content.to_string());
        Ok(())
    }
}
