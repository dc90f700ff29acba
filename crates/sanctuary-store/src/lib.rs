//! Sanctuary Store - In-Memory Mock Backend
//!
//! This crate stands in for a real backend. It provides:
//!
//! - [`Snapshot`]: every entity collection, cloned from static seed data
//! - [`MockStore`]: an explicit store object (constructed on app start,
//!   dropped on sign-out) that implements every repository trait from
//!   `sanctuary-core`
//! - [`IdGenerator`]: `<prefix>_<millis>` ids, monotonic per store
//!
//! # Semantics
//!
//! - `create` prepends; `list` returns newest-created first
//! - `delete` and `update_status` on unknown ids change nothing and succeed
//! - Nothing is validated: references between records are not checked
//! - Mutations are visible to every holder of the same `MockStore` and are
//!   lost when it is dropped
//!
//! # Example
//!
//! ```ignore
//! use sanctuary_store::MockStore;
//! use sanctuary_core::repository::WriteRepository;
//!
//! let store = MockStore::seeded(clock);
//! let created = WriteRepository::<Announcement>::create(&store, draft).await?;
//! ```

pub mod ids;
pub mod seed;
pub mod snapshot;
pub mod store;

pub use ids::IdGenerator;
pub use seed::{seed_snapshot, DEMO_CLASS_ID, DEMO_CLASS_NAME, DEMO_USER_ID};
pub use snapshot::{Snapshot, StoredEntity};
pub use store::MockStore;
