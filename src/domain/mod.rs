//! Domain layer - entities, repository traits and the cache key space

pub mod cache;
pub mod contact;
pub mod error;
pub mod experience;
pub mod profile;
pub mod project;
pub mod skill;
pub mod user;
pub mod validation;

pub use cache::{Cache, CacheExt, CacheKey, CachedEntity};
pub use contact::{
    ClientInfo, Contact, ContactRepository, ContactStatusUpdate, ContactSubmission, NewContact,
};
pub use error::DomainError;
pub use experience::{Experience, ExperienceDetails, ExperienceRepository, ExperienceUpdate};
pub use profile::{Profile, ProfileDetails, ProfileRepository};
pub use project::{Project, ProjectDetails, ProjectRepository, ProjectUpdate};
pub use skill::{Skill, SkillDetails, SkillRepository, SkillUpdate};
pub use user::{User, UserRepository, UserRole};
