#![forbid(unsafe_code)]

pub mod json_file;
pub mod repository;

pub use json_file::{JsonFileStore, STORAGE_KEY};
pub use repository::{HallOfFameRepository, InMemoryStore, StorageError};
