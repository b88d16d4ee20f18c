//! Infrastructure layer - storage, cache, auth and service implementations

pub mod auth;
pub mod cache;
pub mod contact;
pub mod experience;
pub mod logging;
pub mod profile;
pub mod project;
pub mod rate_limit;
pub mod services;
pub mod skill;
pub mod storage;
pub mod user;
