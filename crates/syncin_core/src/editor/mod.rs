//! Selection-scoped formatting for the editable surface.
//!
//! # Responsibility
//! - Own the formatting command state machine bound to one document.
//! - Describe the toolbar surface the shell renders.
//!
//! # Invariants
//! - At most one toolbar popup is open at a time.
//! - Commands never fail outward; missing targets degrade to no-ops.

pub mod engine;
pub mod selection;
pub mod toolbar;
