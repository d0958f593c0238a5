use crate::domain::ContactId;
use crate::error::DirectoryResult;
use crate::matching::{ContactQuery, MatchResult};
use crate::models::{ContactRecord, StoredContact};
use async_trait::async_trait;

/// Queryable store of accepted contacts.
///
/// Intake forms and the primary party wizards depend on this trait rather
/// than on a concrete store, so the in-memory implementation can be swapped
/// for a real one without touching validation.
#[async_trait]
pub trait ContactDirectory: Send + Sync {
    /// Retrieve a single contact by ID.
    async fn find_by_id(&self, id: &ContactId) -> DirectoryResult<StoredContact>;

    /// Find contacts matching the query, best match first.
    async fn search(&self, query: &ContactQuery, limit: usize) -> DirectoryResult<Vec<MatchResult>>;

    /// Store a new, already normalised record and assign it an ID.
    async fn save(&self, record: ContactRecord) -> DirectoryResult<StoredContact>;

    /// Replace the record stored under `id`.
    async fn update(&self, id: &ContactId, record: ContactRecord) -> DirectoryResult<StoredContact>;

    /// Retrieve contacts in ID order with pagination.
    async fn list(&self, limit: usize, offset: usize) -> DirectoryResult<Vec<StoredContact>>;

    /// Remove a contact, returning what was stored.
    async fn remove(&self, id: &ContactId) -> DirectoryResult<StoredContact>;
}
