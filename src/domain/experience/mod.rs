//! Experience domain - work history entries

mod entity;
mod repository;

pub use entity::{Experience, ExperienceDetails, ExperienceUpdate};
pub use repository::ExperienceRepository;
