pub mod error;
pub mod models;
pub mod store;
pub mod walk;

pub use error::StoreError;
pub use models::{Message, Thread};
pub use store::{MemoryStore, ThreadStore};
pub use walk::{ThreadEntry, ThreadWalker};
