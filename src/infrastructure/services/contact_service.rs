//! Contact service - uncached inbox of contact form submissions

use std::sync::Arc;

use tracing::info;

use crate::domain::DomainError;
use crate::domain::contact::{
    ClientInfo, Contact, ContactRepository, ContactStatusUpdate, ContactSubmission, NewContact,
};
use crate::domain::validation::validate_entity;

#[derive(Debug)]
pub struct ContactService<R: ContactRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: ContactRepository + ?Sized> ContactService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Stores a submission with status `new` and the caller's address
    pub async fn submit(
        &self,
        submission: ContactSubmission,
        client: ClientInfo,
    ) -> Result<Contact, DomainError> {
        validate_entity(&submission)?;

        let contact = self
            .repository
            .create(NewContact::from_submission(submission, client))
            .await?;
        info!(contact_id = contact.id, "Contact submission received");

        Ok(contact)
    }

    pub async fn list(&self) -> Result<Vec<Contact>, DomainError> {
        self.repository.list().await
    }

    pub async fn get(&self, id: i64) -> Result<Contact, DomainError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn update_status(
        &self,
        id: i64,
        update: ContactStatusUpdate,
    ) -> Result<Contact, DomainError> {
        validate_entity(&update)?;
        self.repository.update_status(id, &update.status).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        if !self.repository.delete(id).await? {
            return Err(not_found(id));
        }
        Ok(())
    }
}

fn not_found(id: i64) -> DomainError {
    DomainError::not_found(format!("Contact {} not found", id))
}
