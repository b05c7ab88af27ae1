//! 数据访问层（内存仓库）

mod memory_repo;
mod photo_cache;
pub mod seed;

pub use memory_repo::MemoryRepository;
pub use photo_cache::{album_in_range, generate_album_photos, PhotoCache};
