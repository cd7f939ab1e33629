//! In-memory storage backend implementation.
//!
//! Keeps all data in process memory. Nothing survives a restart, so this
//! backend exists for tests and local demos rather than production use.

mod repository;

pub use repository::InMemoryRepository;
