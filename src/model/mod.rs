//! Entity types for the four collections.
//!
//! Serialized field names stay camelCase and enum variants keep their
//! display strings, so a blob written by an earlier build hydrates without
//! migration.

mod client;
mod post;
mod protocol;
mod task;

pub use client::{Client, ClientDraft, ClientPatch, ClientStatus, RelationshipHealth};
pub use post::{Platform, Post, PostDraft, PostPatch, PostStatus};
pub use protocol::{Protocol, ProtocolCategory, ProtocolDraft, ProtocolPatch};
pub use task::{Priority, Task, TaskDraft, TaskPatch, TaskStatus};

use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of generated entity ids
const ID_LEN: usize = 9;

/// Generate a fresh opaque entity id.
///
/// Uniqueness is probabilistic, not guaranteed - nine alphanumeric characters
/// are plenty for session-scale collections.
pub fn new_entity_id() -> String {
    let mut rng = rand::rng();
    (0..ID_LEN)
        .map(|_| (rng.sample(Alphanumeric) as char).to_ascii_lowercase())
        .collect()
}
