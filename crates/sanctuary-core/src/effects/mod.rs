//! Layer 1: Core Effect Trait Definitions
//!
//! Pure trait definitions for the side effects the app core performs.
//! This module defines **what** effects can be performed; handlers in
//! `sanctuary-effects` (production) and `sanctuary-testkit` (tests) define **how**.
//!
//! - **Storage**: device-local key/value persistence for preferences
//!   (theme, church logo). Entity data never goes through this effect.
//! - **Time**: wall-clock time for id generation and date stamps.

pub mod storage;
pub mod time;

pub use storage::{StorageCoreEffects, StorageError};
pub use time::PhysicalTimeEffects;
