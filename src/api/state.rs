//! Application state for shared services

use std::sync::Arc;

use crate::domain::contact::ContactRepository;
use crate::domain::experience::ExperienceRepository;
use crate::domain::profile::ProfileRepository;
use crate::domain::project::ProjectRepository;
use crate::domain::skill::SkillRepository;
use crate::domain::user::UserRepository;
use crate::domain::{
    ClientInfo, Contact, ContactStatusUpdate, ContactSubmission, DomainError, Experience,
    ExperienceDetails, ExperienceUpdate, Profile, ProfileDetails, Project, ProjectDetails,
    ProjectUpdate, Skill, SkillDetails, SkillUpdate, User,
};
use crate::infrastructure::auth::JwtGenerator;
use crate::infrastructure::rate_limit::RateLimiter;
use crate::infrastructure::services::{
    ContactService, ExperienceService, PortfolioCacheService, ProfileService, ProjectService,
    SkillService,
};
use crate::infrastructure::storage::Repositories;
use crate::infrastructure::user::{PasswordHasher, UserService};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub profile_service: Arc<dyn ProfileServiceTrait>,
    pub experience_service: Arc<dyn ExperienceServiceTrait>,
    pub skill_service: Arc<dyn SkillServiceTrait>,
    pub project_service: Arc<dyn ProjectServiceTrait>,
    pub contact_service: Arc<dyn ContactServiceTrait>,
    pub user_service: Arc<dyn UserServiceTrait>,
    pub jwt_service: Arc<dyn JwtGenerator>,
    pub rate_limiter: Arc<RateLimiter>,
    /// Backing store handles, used by readiness checks
    pub repositories: Repositories,
    pub cache: Arc<PortfolioCacheService>,
}

#[async_trait::async_trait]
pub trait ProfileServiceTrait: Send + Sync {
    async fn get(&self) -> Result<Profile, DomainError>;
    async fn update(&self, details: ProfileDetails) -> Result<Profile, DomainError>;
}

#[async_trait::async_trait]
pub trait ExperienceServiceTrait: Send + Sync {
    async fn list(&self) -> Result<Vec<Experience>, DomainError>;
    async fn get(&self, id: i64) -> Result<Experience, DomainError>;
    async fn create(&self, details: ExperienceDetails) -> Result<Experience, DomainError>;
    async fn update(&self, id: i64, update: ExperienceUpdate) -> Result<Experience, DomainError>;
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}

#[async_trait::async_trait]
pub trait SkillServiceTrait: Send + Sync {
    async fn list(&self) -> Result<Vec<Skill>, DomainError>;
    async fn get(&self, id: i64) -> Result<Skill, DomainError>;
    async fn create(&self, details: SkillDetails) -> Result<Skill, DomainError>;
    async fn update(&self, id: i64, update: SkillUpdate) -> Result<Skill, DomainError>;
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}

#[async_trait::async_trait]
pub trait ProjectServiceTrait: Send + Sync {
    async fn list(&self, featured: Option<bool>) -> Result<Vec<Project>, DomainError>;
    async fn get(&self, id: i64) -> Result<Project, DomainError>;
    async fn create(&self, details: ProjectDetails) -> Result<Project, DomainError>;
    async fn update(&self, id: i64, update: ProjectUpdate) -> Result<Project, DomainError>;
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}

/// Trait for the contact inbox
#[async_trait::async_trait]
pub trait ContactServiceTrait: Send + Sync {
    async fn submit(
        &self,
        submission: ContactSubmission,
        client: ClientInfo,
    ) -> Result<Contact, DomainError>;
    async fn list(&self) -> Result<Vec<Contact>, DomainError>;
    async fn get(&self, id: i64) -> Result<Contact, DomainError>;
    async fn update_status(
        &self,
        id: i64,
        update: ContactStatusUpdate,
    ) -> Result<Contact, DomainError>;
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}

/// Trait for user operations needed by the auth layer
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn authenticate(&self, username: &str, password: &str)
    -> Result<Option<User>, DomainError>;
    async fn get(&self, id: i64) -> Result<Option<User>, DomainError>;
}

// Implement traits for the actual services

#[async_trait::async_trait]
impl<R: ProfileRepository + ?Sized + 'static> ProfileServiceTrait for ProfileService<R> {
    async fn get(&self) -> Result<Profile, DomainError> {
        ProfileService::get(self).await
    }

    async fn update(&self, details: ProfileDetails) -> Result<Profile, DomainError> {
        ProfileService::update(self, details).await
    }
}

#[async_trait::async_trait]
impl<R: ExperienceRepository + ?Sized + 'static> ExperienceServiceTrait for ExperienceService<R> {
    async fn list(&self) -> Result<Vec<Experience>, DomainError> {
        ExperienceService::list(self).await
    }

    async fn get(&self, id: i64) -> Result<Experience, DomainError> {
        ExperienceService::get(self, id).await
    }

    async fn create(&self, details: ExperienceDetails) -> Result<Experience, DomainError> {
        ExperienceService::create(self, details).await
    }

    async fn update(&self, id: i64, update: ExperienceUpdate) -> Result<Experience, DomainError> {
        ExperienceService::update(self, id, update).await
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        ExperienceService::delete(self, id).await
    }
}

#[async_trait::async_trait]
impl<R: SkillRepository + ?Sized + 'static> SkillServiceTrait for SkillService<R> {
    async fn list(&self) -> Result<Vec<Skill>, DomainError> {
        SkillService::list(self).await
    }

    async fn get(&self, id: i64) -> Result<Skill, DomainError> {
        SkillService::get(self, id).await
    }

    async fn create(&self, details: SkillDetails) -> Result<Skill, DomainError> {
        SkillService::create(self, details).await
    }

    async fn update(&self, id: i64, update: SkillUpdate) -> Result<Skill, DomainError> {
        SkillService::update(self, id, update).await
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        SkillService::delete(self, id).await
    }
}

#[async_trait::async_trait]
impl<R: ProjectRepository + ?Sized + 'static> ProjectServiceTrait for ProjectService<R> {
    async fn list(&self, featured: Option<bool>) -> Result<Vec<Project>, DomainError> {
        ProjectService::list(self, featured).await
    }

    async fn get(&self, id: i64) -> Result<Project, DomainError> {
        ProjectService::get(self, id).await
    }

    async fn create(&self, details: ProjectDetails) -> Result<Project, DomainError> {
        ProjectService::create(self, details).await
    }

    async fn update(&self, id: i64, update: ProjectUpdate) -> Result<Project, DomainError> {
        ProjectService::update(self, id, update).await
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        ProjectService::delete(self, id).await
    }
}

#[async_trait::async_trait]
impl<R: ContactRepository + ?Sized + 'static> ContactServiceTrait for ContactService<R> {
    async fn submit(
        &self,
        submission: ContactSubmission,
        client: ClientInfo,
    ) -> Result<Contact, DomainError> {
        ContactService::submit(self, submission, client).await
    }

    async fn list(&self) -> Result<Vec<Contact>, DomainError> {
        ContactService::list(self).await
    }

    async fn get(&self, id: i64) -> Result<Contact, DomainError> {
        ContactService::get(self, id).await
    }

    async fn update_status(
        &self,
        id: i64,
        update: ContactStatusUpdate,
    ) -> Result<Contact, DomainError> {
        ContactService::update_status(self, id, update).await
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        ContactService::delete(self, id).await
    }
}

#[async_trait::async_trait]
impl<R, H> UserServiceTrait for UserService<R, H>
where
    R: UserRepository + ?Sized + 'static,
    H: PasswordHasher + ?Sized + 'static,
{
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, DomainError> {
        UserService::authenticate(self, username, password).await
    }

    async fn get(&self, id: i64) -> Result<Option<User>, DomainError> {
        UserService::get(self, id).await
    }
}
