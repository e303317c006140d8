//! File-backed repository implementations

pub mod file_corridor_repo;

pub use file_corridor_repo::FileCorridorRepository;
