//! Core use-case services.
//!
//! # Responsibility
//! - Own the session state and orchestrate it into use-case level APIs.
//! - Keep the presentation shell decoupled from state-transition details.

pub mod page_service;
pub mod workspace_service;
