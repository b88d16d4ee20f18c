//! Cache key space
//!
//! One key per query shape, never per row. Every key a write must evict is
//! listed in [`CachedEntity::keys`], so adding a filtered view means adding it
//! there as well.

use std::fmt;

/// Keys for cached query results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Profile,
    Experiences,
    Skills,
    Projects,
    ProjectsFeatured,
    ProjectsNonFeatured,
}

impl CacheKey {
    pub const ALL: [CacheKey; 6] = [
        CacheKey::Profile,
        CacheKey::Experiences,
        CacheKey::Skills,
        CacheKey::Projects,
        CacheKey::ProjectsFeatured,
        CacheKey::ProjectsNonFeatured,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Experiences => "experiences",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::ProjectsFeatured => "projects:featured",
            Self::ProjectsNonFeatured => "projects:non-featured",
        }
    }

    /// Key for the project listing, optionally filtered by the featured flag
    pub fn for_projects(featured: Option<bool>) -> Self {
        match featured {
            None => Self::Projects,
            Some(true) => Self::ProjectsFeatured,
            Some(false) => Self::ProjectsNonFeatured,
        }
    }

    /// Entity whose writes evict this key
    pub fn entity(&self) -> CachedEntity {
        match self {
            Self::Profile => CachedEntity::Profile,
            Self::Experiences => CachedEntity::Experience,
            Self::Skills => CachedEntity::Skill,
            Self::Projects | Self::ProjectsFeatured | Self::ProjectsNonFeatured => {
                CachedEntity::Project
            }
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entity types whose listings are cached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CachedEntity {
    Profile,
    Experience,
    Skill,
    Project,
}

impl CachedEntity {
    /// Every cache key derived from this entity type
    pub fn keys(&self) -> &'static [CacheKey] {
        match self {
            Self::Profile => &[CacheKey::Profile],
            Self::Experience => &[CacheKey::Experiences],
            Self::Skill => &[CacheKey::Skills],
            Self::Project => &[
                CacheKey::Projects,
                CacheKey::ProjectsFeatured,
                CacheKey::ProjectsNonFeatured,
            ],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Experience => "experience",
            Self::Skill => "skill",
            Self::Project => "project",
        }
    }
}
