//! In-memory skill repository implementation

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::DomainError;
use crate::domain::skill::{Skill, SkillDetails, SkillRepository};
use crate::infrastructure::storage::InMemoryTable;

/// In-memory implementation of SkillRepository; enforces unique names like the
/// database constraint does
#[derive(Debug, Default)]
pub struct InMemorySkillRepository {
    table: InMemoryTable<Skill>,
}

impl InMemorySkillRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn name_conflict(name: &str) -> DomainError {
    DomainError::conflict(format!("Skill '{}' already exists", name))
}

#[async_trait]
impl SkillRepository for InMemorySkillRepository {
    async fn list(&self) -> Result<Vec<Skill>, DomainError> {
        let mut skills = self.table.all().await;
        skills.sort_by(|a, b| {
            a.details
                .category
                .cmp(&b.details.category)
                .then_with(|| a.details.name.cmp(&b.details.name))
        });
        Ok(skills)
    }

    async fn get(&self, id: i64) -> Result<Option<Skill>, DomainError> {
        Ok(self.table.get(id).await)
    }

    async fn create(&self, details: SkillDetails) -> Result<Skill, DomainError> {
        let mut rows = self.table.write().await;

        if rows.values().any(|s| s.details.name == details.name) {
            return Err(name_conflict(&details.name));
        }

        let now = Utc::now();
        let id = self.table.next_id();
        let skill = Skill {
            id,
            details,
            created_at: now,
            updated_at: now,
        };
        rows.insert(id, skill.clone());

        Ok(skill)
    }

    async fn update(&self, id: i64, details: SkillDetails) -> Result<Skill, DomainError> {
        let mut rows = self.table.write().await;

        if rows
            .values()
            .any(|s| s.id != id && s.details.name == details.name)
        {
            return Err(name_conflict(&details.name));
        }

        let skill = rows
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found(format!("Skill {} not found", id)))?;
        skill.details = details;
        skill.updated_at = Utc::now();

        Ok(skill.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        Ok(self.table.remove(id).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(name: &str, category: &str) -> SkillDetails {
        SkillDetails {
            name: name.to_string(),
            category: category.to_string(),
            level: 5,
            description: None,
            icon: None,
        }
    }

    #[tokio::test]
    async fn test_list_orders_by_category_then_name() {
        let repo = InMemorySkillRepository::new();

        repo.create(details("Rust", "Languages")).await.unwrap();
        repo.create(details("Docker", "Tools")).await.unwrap();
        repo.create(details("Go", "Languages")).await.unwrap();

        let names: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.details.name)
            .collect();

        assert_eq!(names, vec!["Go", "Rust", "Docker"]);
    }

    #[tokio::test]
    async fn test_duplicate_name_conflicts() {
        let repo = InMemorySkillRepository::new();
        repo.create(details("Rust", "Languages")).await.unwrap();
        let go = repo.create(details("Go", "Languages")).await.unwrap();

        let duplicate = repo.create(details("Rust", "Other")).await;
        assert!(matches!(duplicate, Err(DomainError::Conflict { .. })));

        let rename = repo.update(go.id, details("Rust", "Languages")).await;
        assert!(matches!(rename, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_update_keeps_own_name() {
        let repo = InMemorySkillRepository::new();
        let rust = repo.create(details("Rust", "Languages")).await.unwrap();

        let mut changed = details("Rust", "Languages");
        changed.level = 9;
        let updated = repo.update(rust.id, changed).await.unwrap();

        assert_eq!(updated.details.level, 9);
        assert_eq!(updated.created_at, rust.created_at);
    }
}
