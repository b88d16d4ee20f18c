//! Cache domain - key space and cache abstraction

mod key;
mod repository;

pub use key::{CacheKey, CachedEntity};
pub use repository::{Cache, CacheExt};

#[cfg(test)]
pub use repository::mock::MockCache;
