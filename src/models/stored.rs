//! A contact as held by a directory.

use super::contact::ContactRecord;
use crate::domain::ContactId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A normalised record together with the identity and timestamps a
/// directory assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredContact {
    pub id: ContactId,
    pub record: ContactRecord,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoredContact {
    pub fn new(id: ContactId, record: ContactRecord, now: DateTime<Utc>) -> Self {
        Self {
            id,
            record,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn display_name(&self) -> String {
        self.record.display_name()
    }
}
