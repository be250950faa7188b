//! In-memory storage backend.
//!
//! Stores expenses per user in a `BTreeMap` keyed by expense ID, behind an
//! `Arc<RwLock<_>>`. Data is lost when the repository is dropped.
//!
//! # Example
//!
//! ```rust,ignore
//! use expenses::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! ```

mod repository;

pub use repository::InMemoryRepository;
