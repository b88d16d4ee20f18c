//! Skill domain

mod entity;
mod repository;

pub use entity::{DEFAULT_SKILL_LEVEL, Skill, SkillDetails, SkillUpdate};
pub use repository::SkillRepository;
