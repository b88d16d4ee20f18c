//! Project service - cached listings per featured filter

use std::sync::Arc;

use tracing::debug;

use crate::domain::DomainError;
use crate::domain::cache::{CacheKey, CachedEntity};
use crate::domain::project::{Project, ProjectDetails, ProjectRepository, ProjectUpdate};
use crate::domain::validation::validate_entity;

use super::portfolio_cache_service::PortfolioCacheService;

#[derive(Debug)]
pub struct ProjectService<R: ProjectRepository + ?Sized> {
    repository: Arc<R>,
    cache: Arc<PortfolioCacheService>,
}

impl<R: ProjectRepository + ?Sized> ProjectService<R> {
    pub fn new(repository: Arc<R>, cache: Arc<PortfolioCacheService>) -> Self {
        Self { repository, cache }
    }

    /// Projects newest first; each filter value has its own cache entry
    pub async fn list(&self, featured: Option<bool>) -> Result<Vec<Project>, DomainError> {
        self.cache
            .read_through(CacheKey::for_projects(featured), || {
                self.repository.list(featured)
            })
            .await
    }

    pub async fn get(&self, id: i64) -> Result<Project, DomainError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, details: ProjectDetails) -> Result<Project, DomainError> {
        validate_entity(&details)?;

        let project = self.repository.create(details).await?;
        debug!(project_id = project.id, featured = project.details.featured, "Created project");
        self.cache.invalidate(CachedEntity::Project).await;

        Ok(project)
    }

    pub async fn update(&self, id: i64, update: ProjectUpdate) -> Result<Project, DomainError> {
        validate_entity(&update)?;

        let mut details = self.get(id).await?.details;
        update.apply_to(&mut details);
        validate_entity(&details)?;

        let project = self.repository.update(id, details).await?;
        self.cache.invalidate(CachedEntity::Project).await;

        Ok(project)
    }

    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        if !self.repository.delete(id).await? {
            return Err(not_found(id));
        }

        self.cache.invalidate(CachedEntity::Project).await;
        Ok(())
    }
}

fn not_found(id: i64) -> DomainError {
    DomainError::not_found(format!("Project {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cache::MockCache;
    use crate::infrastructure::project::InMemoryProjectRepository;

    const PROJECT_KEYS: [&str; 3] = ["projects", "projects:featured", "projects:non-featured"];

    fn create_service(cache: Arc<MockCache>) -> ProjectService<InMemoryProjectRepository> {
        let repository = Arc::new(InMemoryProjectRepository::new());
        ProjectService::new(repository, Arc::new(PortfolioCacheService::new(cache)))
    }

    fn details(name: &str, featured: bool) -> ProjectDetails {
        ProjectDetails {
            name: name.to_string(),
            description: "A side project".to_string(),
            long_description: None,
            technologies: vec!["Rust".to_string(), "PostgreSQL".to_string()],
            github_url: Some(format!("https://github.com/example/{}", name)),
            live_url: None,
            image_url: None,
            featured,
            category: Some("backend".to_string()),
            status: "completed".to_string(),
        }
    }

    async fn warm_all_keys(service: &ProjectService<InMemoryProjectRepository>) {
        for filter in [None, Some(true), Some(false)] {
            service.list(filter).await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_each_filter_uses_its_own_key() {
        let cache = Arc::new(MockCache::new());
        let service = create_service(cache.clone());
        service.create(details("tracker", true)).await.unwrap();
        service.create(details("notes", false)).await.unwrap();

        warm_all_keys(&service).await;

        for key in PROJECT_KEYS {
            assert!(cache.contains(key), "missing {}", key);
        }
        assert_eq!(service.list(None).await.unwrap().len(), 2);
        assert_eq!(service.list(Some(true)).await.unwrap()[0].details.name, "tracker");
        assert_eq!(service.list(Some(false)).await.unwrap()[0].details.name, "notes");
    }

    #[tokio::test]
    async fn test_repeated_featured_reads_are_identical() {
        let cache = Arc::new(MockCache::new());
        let service = create_service(cache.clone());
        service.create(details("tracker", true)).await.unwrap();

        let first = service.list(Some(true)).await.unwrap();
        let second = service.list(Some(true)).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(cache.set_calls(), 1);
    }

    #[tokio::test]
    async fn test_every_write_clears_all_project_keys() {
        let cache = Arc::new(MockCache::new());
        let service = create_service(cache.clone());

        warm_all_keys(&service).await;
        let created = service.create(details("tracker", true)).await.unwrap();
        for key in PROJECT_KEYS {
            assert!(!cache.contains(key), "stale {}", key);
        }

        warm_all_keys(&service).await;
        let update = ProjectUpdate {
            featured: Some(false),
            ..Default::default()
        };
        service.update(created.id, update).await.unwrap();
        for key in PROJECT_KEYS {
            assert!(!cache.contains(key), "stale {}", key);
        }
        assert!(service.list(Some(true)).await.unwrap().is_empty());

        warm_all_keys(&service).await;
        service.delete(created.id).await.unwrap();
        for key in PROJECT_KEYS {
            assert!(!cache.contains(key), "stale {}", key);
        }
    }

    #[tokio::test]
    async fn test_invalid_url_rejected_before_store() {
        let cache = Arc::new(MockCache::new());
        let service = create_service(cache.clone());

        let mut invalid = details("tracker", false);
        invalid.live_url = Some("not a url".to_string());

        let result = service.create(invalid).await;

        assert!(matches!(result, Err(DomainError::Validation { .. })));
        assert!(service.list(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let cache = Arc::new(MockCache::new());
        let service = create_service(cache);

        let created = service.create(details("tracker", true)).await.unwrap();

        assert_eq!(service.get(created.id).await.unwrap(), created);
        assert!(service.get(created.id + 1).await.unwrap_err().is_not_found());
    }
}
