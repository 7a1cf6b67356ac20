//! Keyed in-process persistence for entities.

pub mod memory;
pub mod repository;

pub use memory::MemoryRepository;
pub use repository::Repository;
