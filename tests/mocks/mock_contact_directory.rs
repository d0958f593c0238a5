use async_trait::async_trait;
use case_intake::error::{DirectoryError, DirectoryResult};
use case_intake::{
    ContactDirectory, ContactId, ContactQuery, ContactRecord, InMemoryDirectory, MatchResult,
    StoredContact,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact directory for testing.
///
/// Delegates storage to an `InMemoryDirectory`, tracks method calls for
/// verification, and can be told to fail the next save.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactDirectory {
    inner: Arc<InMemoryDirectory>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_next_save: Arc<Mutex<Option<DirectoryError>>>,
}

#[allow(dead_code)]
impl MockContactDirectory {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(InMemoryDirectory::default()),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            fail_next_save: Arc::new(Mutex::new(None)),
        }
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Make the next `save` return `err` without storing anything.
    pub fn fail_next_save(&self, err: DirectoryError) {
        *self.fail_next_save.lock().unwrap() = Some(err);
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockContactDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactDirectory for MockContactDirectory {
    async fn find_by_id(&self, id: &ContactId) -> DirectoryResult<StoredContact> {
        self.track_call("find_by_id");
        self.inner.find_by_id(id).await
    }

    async fn search(&self, query: &ContactQuery, limit: usize) -> DirectoryResult<Vec<MatchResult>> {
        self.track_call("search");
        self.inner.search(query, limit).await
    }

    async fn save(&self, record: ContactRecord) -> DirectoryResult<StoredContact> {
        self.track_call("save");
        let injected = self.fail_next_save.lock().unwrap().take();
        if let Some(err) = injected {
            return Err(err);
        }
        self.inner.save(record).await
    }

    async fn update(&self, id: &ContactId, record: ContactRecord) -> DirectoryResult<StoredContact> {
        self.track_call("update");
        self.inner.update(id, record).await
    }

    async fn list(&self, limit: usize, offset: usize) -> DirectoryResult<Vec<StoredContact>> {
        self.track_call("list");
        self.inner.list(limit, offset).await
    }

    async fn remove(&self, id: &ContactId) -> DirectoryResult<StoredContact> {
        self.track_call("remove");
        self.inner.remove(id).await
    }
}
