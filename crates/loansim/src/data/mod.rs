pub mod storage;

pub use storage::{DataDirectory, Preferences, StorageError};
