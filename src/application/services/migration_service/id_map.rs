use std::collections::HashMap;

/// Per-run table translating a local entity id to the id it ended up under
/// remotely. Keys are write-once: the first mapping recorded for an id wins
/// and is never remapped within a run.
#[derive(Debug, Default)]
pub struct IdMap {
    entries: HashMap<String, String>,
}

impl IdMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, local_id: String, remote_id: String) {
        self.entries.entry(local_id).or_insert(remote_id);
    }

    pub fn resolve(&self, local_id: &str) -> Option<&str> {
        self.entries.get(local_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
