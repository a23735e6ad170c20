//! History storage adapters

mod json_file;
mod memory;

pub use json_file::{JsonFileHistoryStorage, HISTORY_FILE_NAME};
pub use memory::MemoryHistoryStorage;
