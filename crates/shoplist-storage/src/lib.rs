//! shoplist-storage
//!
//! Whole-list persistence. The list is always read and written as a single
//! JSON document; there is no partial update path.

pub mod error;
pub mod file;
pub mod memory;
pub mod store;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use store::ListStore;
