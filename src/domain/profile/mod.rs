//! Profile domain - the singleton owner profile

mod entity;
mod repository;

pub use entity::{Profile, ProfileDetails};
pub use repository::ProfileRepository;
