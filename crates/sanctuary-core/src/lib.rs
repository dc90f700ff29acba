//! Sanctuary Core - Interfaces Layer
//!
//! This crate holds everything the other Sanctuary crates agree on:
//!
//! - Entity records shared by every frontend (`types`)
//! - The closed `Role` set used for portal gating (`role`)
//! - The unified error type (`errors`)
//! - Effect traits for device-local storage and wall-clock time (`effects`)
//! - The repository/gateway traits the app core talks to (`repository`)
//!
//! # Architecture
//!
//! This is a **Layer 1 (Interface)** crate. It defines **what** the app can do
//! with data; `sanctuary-store` decides **how** (today: an in-memory mock
//! backend) and `sanctuary-effects` provides the production effect handlers.
//!
//! ```ignore
//! use sanctuary_core::repository::{ReadRepository, WriteRepository};
//! use sanctuary_core::types::{Announcement, AnnouncementDraft};
//!
//! let created = WriteRepository::<Announcement>::create(gateway, draft).await?;
//! let all = ReadRepository::<Announcement>::list(gateway).await?;
//! ```

pub mod effects;
pub mod entity;
pub mod errors;
pub mod repository;
pub mod role;
pub mod time;
pub mod types;

pub use entity::{Creatable, Entity, EntityKind, Tracked};
pub use errors::{FellowshipError, Result};
pub use repository::{Gateway, ReadRepository, StatusRepository, UserDirectory, WriteRepository};
pub use role::Role;
pub use time::PhysicalTime;
