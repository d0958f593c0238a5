//! Contact intake service layer.
//!
//! Validates form submissions and hands accepted records to the directory.

use crate::directory::ContactDirectory;
use crate::domain::ContactId;
use crate::error::IntakeResult;
use crate::matching::{ContactQuery, MatchResult};
use crate::models::{ContactInput, StoredContact};
use crate::validation::{ContactValidator, ValidationResult};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Intake operations used by the contact forms.
#[async_trait]
pub trait IntakeService: Send + Sync {
    /// Validate without storing, for inline form feedback.
    fn preview(&self, input: &ContactInput) -> ValidationResult;

    /// Validate and store a new contact.
    ///
    /// On rejection every validation error is returned at once.
    async fn submit(&self, input: &ContactInput) -> IntakeResult<StoredContact>;

    /// Validate and replace an existing contact.
    async fn revise(&self, id: &ContactId, input: &ContactInput) -> IntakeResult<StoredContact>;

    /// Look up existing contacts before creating a new one.
    async fn find_similar(&self, query: &ContactQuery, limit: usize)
        -> IntakeResult<Vec<MatchResult>>;

    /// Get a stored contact.
    async fn get(&self, id: &ContactId) -> IntakeResult<StoredContact>;
}

/// Default implementation of IntakeService.
pub struct IntakeServiceImpl {
    validator: ContactValidator,
    directory: Arc<dyn ContactDirectory>,
}

impl IntakeServiceImpl {
    pub fn new(validator: ContactValidator, directory: Arc<dyn ContactDirectory>) -> Self {
        Self {
            validator,
            directory,
        }
    }

    pub fn directory(&self) -> &Arc<dyn ContactDirectory> {
        &self.directory
    }
}

#[async_trait]
impl IntakeService for IntakeServiceImpl {
    fn preview(&self, input: &ContactInput) -> ValidationResult {
        self.validator.validate(input)
    }

    async fn submit(&self, input: &ContactInput) -> IntakeResult<StoredContact> {
        let record = self.validator.validate(input).into_result().map_err(|report| {
            warn!("Contact submission rejected: {}", report);
            report
        })?;

        debug!("Contact '{}' passed validation", record.display_name());
        let stored = self.directory.save(record).await?;
        info!("Contact {} created ({})", stored.id, stored.display_name());
        Ok(stored)
    }

    async fn revise(&self, id: &ContactId, input: &ContactInput) -> IntakeResult<StoredContact> {
        let record = self.validator.validate(input).into_result().map_err(|report| {
            warn!("Revision of contact {} rejected: {}", id, report);
            report
        })?;

        let stored = self.directory.update(id, record).await?;
        info!("Contact {} revised", stored.id);
        Ok(stored)
    }

    async fn find_similar(
        &self,
        query: &ContactQuery,
        limit: usize,
    ) -> IntakeResult<Vec<MatchResult>> {
        Ok(self.directory.search(query, limit).await?)
    }

    async fn get(&self, id: &ContactId) -> IntakeResult<StoredContact> {
        Ok(self.directory.find_by_id(id).await?)
    }
}
