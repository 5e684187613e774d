//! Domain model for the workspace core.
//!
//! # Responsibility
//! - Define the plain data structures owned by the use-case services.
//! - Keep view concerns (layout, icons, animation) out of the data shapes.
//!
//! # Invariants
//! - Every record is identified by a session-stable integer id.
//! - Creation snapshots are immutable once a record exists.

pub mod document;
pub mod notebook;
pub mod page;
