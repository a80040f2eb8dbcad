//! In-process record store for Stockroom.
//!
//! Product and warehouse rows live in owned `Vec`s behind a single async
//! `RwLock`. Nothing is persisted: the store starts from seed data and its
//! state lasts as long as the process.

mod seed;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use seed::Seed;
pub use store::MemoryStore;
