pub mod feed;
pub mod json_store;
pub mod memory;
pub mod retry;
pub mod traits;

pub use feed::ChatFeed;
pub use json_store::JsonFileBackend;
pub use memory::MemoryBackend;
pub use retry::RetryPolicy;
pub use traits::ProjectBackend;
