//! # bb-storage
//!
//! `KvStore` implementations: an in-memory map for tests and ephemeral
//! sessions, and a file-per-key JSON directory mirroring the durable
//! client storage the panel was designed against.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
