pub mod files;
pub mod repository;
pub mod store;

pub use files::{atomic_write, ensure_data_dir, entry_file, get_data_dir, init_local_dir};
pub use repository::{DirtyState, Repository, ACTIVE_KEY, COMPLETED_KEY, SCORE_KEY};
pub use store::{FsStore, MemoryStore, Store, StoreError};
