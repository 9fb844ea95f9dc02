//! Ping-pong grid accumulator for Gray-Scott simulations.
//!
//! The accumulator holds exactly one committed ("current") grid at a
//! time. It is backed by two preallocated grids of identical extent and
//! an index selecting which one is current:
//!
//! ```text
//! PingPongBuffer
//! ├── Grid × 2 (alternating current/staging)
//! ├── current: usize (0 or 1)
//! └── Generation (incremented on every publish)
//! ```
//!
//! A sub-step reads the current grid and writes the staging grid through
//! a [`StepGuard`]; [`PingPongBuffer::publish`] then flips the index. No
//! grid is allocated per step, and readers only ever see fully written
//! grids because the borrow checker forbids a [`Snapshot`] while a
//! guard is live.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod format;
pub mod pingpong;
pub mod read;

pub use config::ArenaConfig;
pub use error::ArenaError;
pub use format::StorageFormat;
pub use pingpong::{PingPongBuffer, StepGuard};
pub use read::{OwnedSnapshot, Snapshot};
