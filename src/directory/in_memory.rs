//! In-memory contact directory.

use super::traits::ContactDirectory;
use crate::domain::ContactId;
use crate::error::{DirectoryError, DirectoryResult};
use crate::matching::{ContactMatcher, ContactQuery, MatchResult};
use crate::models::{ContactRecord, StoredContact};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Default)]
struct Inner {
    contacts: BTreeMap<ContactId, StoredContact>,
    last_seq: u64,
}

impl Inner {
    /// ID of a stored contact (other than `except`) with the same email.
    fn email_owner(&self, record: &ContactRecord, except: Option<&ContactId>) -> Option<ContactId> {
        let email = record.email.as_ref()?.normalized();
        self.contacts
            .values()
            .filter(|stored| Some(&stored.id) != except)
            .find(|stored| {
                stored
                    .record
                    .email
                    .as_ref()
                    .is_some_and(|e| e.normalized() == email)
            })
            .map(|stored| stored.id.clone())
    }
}

/// Directory backed by a `BTreeMap` behind a tokio `RwLock`.
///
/// IDs are assigned sequentially (`CT-000001`, ...) and never reused.
/// Two contacts may not share an email address.
#[derive(Debug)]
pub struct InMemoryDirectory {
    inner: RwLock<Inner>,
    min_confidence: u8,
    max_results: usize,
}

impl InMemoryDirectory {
    /// Create an empty directory whose searches drop matches below
    /// `min_confidence` and never return more than `max_results`,
    /// whatever limit the caller asks for.
    pub fn new(min_confidence: u8, max_results: usize) -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
            min_confidence,
            max_results,
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.contacts.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryDirectory {
    fn default() -> Self {
        Self::new(0, usize::MAX)
    }
}

#[async_trait]
impl ContactDirectory for InMemoryDirectory {
    async fn find_by_id(&self, id: &ContactId) -> DirectoryResult<StoredContact> {
        self.inner
            .read()
            .await
            .contacts
            .get(id)
            .cloned()
            .ok_or_else(|| DirectoryError::NotFound(id.clone()))
    }

    async fn search(&self, query: &ContactQuery, limit: usize) -> DirectoryResult<Vec<MatchResult>> {
        let snapshot: Vec<StoredContact> =
            self.inner.read().await.contacts.values().cloned().collect();

        let mut matcher = ContactMatcher::new();
        let limit = limit.min(self.max_results);
        let matches = matcher.find_matches(query, &snapshot, limit, self.min_confidence)?;
        debug!(
            "Directory search over {} contacts returned {} matches",
            snapshot.len(),
            matches.len()
        );
        Ok(matches)
    }

    async fn save(&self, record: ContactRecord) -> DirectoryResult<StoredContact> {
        let mut inner = self.inner.write().await;

        if let Some(existing) = inner.email_owner(&record, None) {
            return Err(DirectoryError::Duplicate(existing));
        }

        inner.last_seq += 1;
        let id = ContactId::sequential(inner.last_seq);
        let stored = StoredContact::new(id.clone(), record, Utc::now());
        inner.contacts.insert(id.clone(), stored.clone());

        debug!("Saved contact {}", id);
        Ok(stored)
    }

    async fn update(&self, id: &ContactId, record: ContactRecord) -> DirectoryResult<StoredContact> {
        let mut inner = self.inner.write().await;

        if !inner.contacts.contains_key(id) {
            return Err(DirectoryError::NotFound(id.clone()));
        }
        if let Some(existing) = inner.email_owner(&record, Some(id)) {
            return Err(DirectoryError::Duplicate(existing));
        }

        let stored = inner
            .contacts
            .get_mut(id)
            .ok_or_else(|| DirectoryError::NotFound(id.clone()))?;
        stored.record = record;
        stored.updated_at = Utc::now();

        debug!("Updated contact {}", id);
        Ok(stored.clone())
    }

    async fn list(&self, limit: usize, offset: usize) -> DirectoryResult<Vec<StoredContact>> {
        Ok(self
            .inner
            .read()
            .await
            .contacts
            .values()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn remove(&self, id: &ContactId) -> DirectoryResult<StoredContact> {
        self.inner
            .write()
            .await
            .contacts
            .remove(id)
            .ok_or_else(|| DirectoryError::NotFound(id.clone()))
    }
}
