//! In-memory contact repository implementation

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::DomainError;
use crate::domain::contact::{Contact, ContactRepository, NewContact};
use crate::infrastructure::storage::InMemoryTable;

#[derive(Debug, Default)]
pub struct InMemoryContactRepository {
    table: InMemoryTable<Contact>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn list(&self) -> Result<Vec<Contact>, DomainError> {
        let mut contacts = self.table.all().await;
        contacts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(contacts)
    }

    async fn get(&self, id: i64) -> Result<Option<Contact>, DomainError> {
        Ok(self.table.get(id).await)
    }

    async fn create(&self, contact: NewContact) -> Result<Contact, DomainError> {
        let now = Utc::now();

        Ok(self
            .table
            .insert_with(|id| Contact {
                id,
                name: contact.name,
                email: contact.email,
                subject: contact.subject,
                message: contact.message,
                status: contact.status,
                ip_address: contact.ip_address,
                user_agent: contact.user_agent,
                created_at: now,
                updated_at: now,
            })
            .await)
    }

    async fn update_status(&self, id: i64, status: &str) -> Result<Contact, DomainError> {
        self.table
            .update_with(id, |contact| {
                contact.status = status.to_string();
                contact.updated_at = Utc::now();
            })
            .await
            .ok_or_else(|| DomainError::not_found(format!("Contact {} not found", id)))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        Ok(self.table.remove(id).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact::{ClientInfo, ContactSubmission};

    fn submission(name: &str) -> NewContact {
        NewContact::from_submission(
            ContactSubmission {
                name: name.to_string(),
                email: format!("{}@example.com", name),
                subject: None,
                message: "Hello".to_string(),
            },
            ClientInfo {
                ip_address: Some("10.0.0.1".to_string()),
                user_agent: None,
            },
        )
    }

    #[tokio::test]
    async fn test_create_starts_as_new() {
        let repo = InMemoryContactRepository::new();

        let contact = repo.create(submission("ada")).await.unwrap();

        assert_eq!(contact.id, 1);
        assert_eq!(contact.status, "new");
        assert_eq!(contact.ip_address.as_deref(), Some("10.0.0.1"));
        assert_eq!(repo.get(1).await.unwrap(), Some(contact));
    }

    #[tokio::test]
    async fn test_update_status() {
        let repo = InMemoryContactRepository::new();
        let contact = repo.create(submission("ada")).await.unwrap();

        let updated = repo.update_status(contact.id, "read").await.unwrap();
        assert_eq!(updated.status, "read");
        assert!(updated.updated_at >= contact.updated_at);

        let missing = repo.update_status(99, "read").await;
        assert!(missing.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_list_newest_first_and_delete() {
        let repo = InMemoryContactRepository::new();
        repo.create(submission("ada")).await.unwrap();
        repo.create(submission("grace")).await.unwrap();

        let names: Vec<String> = repo.list().await.unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["grace", "ada"]);

        assert!(repo.delete(1).await.unwrap());
        assert!(!repo.delete(1).await.unwrap());
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }
}
