//! Agency OS - browser-local operating system core for a small service agency
//!
//! Core modules:
//! - `model`: Entity types (clients, fulfillment tasks, content posts, protocols)
//! - `store`: In-memory collections with write-through persistence
//! - `persistence`: Storage adapter over browser LocalStorage
//! - `session`: Role gate backed by SessionStorage
//! - `platform`: Browser/native platform abstraction
//! - `seed`: First-launch example data
//!
//! The presentation shell constructs one [`DataStore`] and one [`SessionGate`]
//! per page load, calls `initialize` on both, and drives every mutation
//! through the store's operations. Collections are only ever handed out as
//! read-only snapshots.

pub mod model;
pub mod persistence;
pub mod platform;
pub mod seed;
pub mod session;
pub mod store;

pub use model::{Client, Post, Protocol, Task};
pub use session::{Role, SessionGate};
pub use store::DataStore;
