pub mod error;
pub mod storage;
pub mod record;
pub mod store;

pub use error::HistoryError;
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use record::TeamRecord;
pub use store::History;
