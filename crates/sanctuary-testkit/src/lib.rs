//! Sanctuary Testing Infrastructure
//!
//! Deterministic stand-ins for the effect handlers and a few record
//! fixtures, so tests in every crate start from the same known state.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! sanctuary-testkit = { workspace = true }
//! ```
//!
//! ```rust,ignore
//! use sanctuary_testkit::{FixedClock, TestStorage};
//!
//! let clock = Arc::new(FixedClock::at_date(2026, 10, 19));
//! let storage = Arc::new(TestStorage::new());
//! ```

pub mod fixtures;
pub mod storage;
pub mod time;

pub use fixtures::*;
pub use storage::TestStorage;
pub use time::FixedClock;
