//! In-memory experience repository implementation

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::DomainError;
use crate::domain::experience::{Experience, ExperienceDetails, ExperienceRepository};
use crate::infrastructure::storage::InMemoryTable;

#[derive(Debug, Default)]
pub struct InMemoryExperienceRepository {
    table: InMemoryTable<Experience>,
}

impl InMemoryExperienceRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ExperienceRepository for InMemoryExperienceRepository {
    async fn list(&self) -> Result<Vec<Experience>, DomainError> {
        let mut experiences = self.table.all().await;
        experiences.sort_by(|a, b| {
            b.details
                .start_date
                .cmp(&a.details.start_date)
                .then(b.id.cmp(&a.id))
        });
        Ok(experiences)
    }

    async fn get(&self, id: i64) -> Result<Option<Experience>, DomainError> {
        Ok(self.table.get(id).await)
    }

    async fn create(&self, details: ExperienceDetails) -> Result<Experience, DomainError> {
        let now = Utc::now();

        Ok(self
            .table
            .insert_with(|id| Experience {
                id,
                details,
                created_at: now,
                updated_at: now,
            })
            .await)
    }

    async fn update(&self, id: i64, details: ExperienceDetails) -> Result<Experience, DomainError> {
        self.table
            .update_with(id, |experience| {
                experience.details = details;
                experience.updated_at = Utc::now();
            })
            .await
            .ok_or_else(|| DomainError::not_found(format!("Experience {} not found", id)))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        Ok(self.table.remove(id).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn details(company: &str, year: i32) -> ExperienceDetails {
        ExperienceDetails {
            company: company.to_string(),
            position: "Engineer".to_string(),
            location: None,
            start_date: Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap(),
            end_date: None,
            current: false,
            description: None,
            achievements: vec![],
            technologies: vec![],
        }
    }

    #[tokio::test]
    async fn test_list_orders_by_start_date_desc() {
        let repo = InMemoryExperienceRepository::new();

        repo.create(details("Old", 2015)).await.unwrap();
        repo.create(details("New", 2023)).await.unwrap();
        repo.create(details("Mid", 2019)).await.unwrap();

        let companies: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.details.company)
            .collect();

        assert_eq!(companies, vec!["New", "Mid", "Old"]);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = InMemoryExperienceRepository::new();

        let result = repo.update(42, details("Acme", 2020)).await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_create_get_delete() {
        let repo = InMemoryExperienceRepository::new();
        let created = repo.create(details("Acme", 2020)).await.unwrap();

        assert_eq!(repo.get(created.id).await.unwrap(), Some(created.clone()));
        assert!(repo.delete(created.id).await.unwrap());
        assert!(repo.get(created.id).await.unwrap().is_none());
    }
}
