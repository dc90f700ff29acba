//! Layer 3: Production Effect Handlers
//!
//! Stateless implementations of the effect traits from `sanctuary-core`:
//!
//! - [`FilesystemStorageHandler`]: device-local preferences as files
//! - [`RealTimeHandler`]: the operating system clock
//!
//! In-memory handlers for tests live in `sanctuary-testkit`.

pub mod storage;
pub mod time;

pub use storage::FilesystemStorageHandler;
pub use time::RealTimeHandler;
